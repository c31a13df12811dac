pub mod config;
pub mod content;
pub mod content_filter;
pub mod logger;
pub mod paginator;
pub mod site;
pub mod sorted_content;
pub mod tags;
pub mod text_utils;
pub mod util;
pub mod view;
mod test_data;
