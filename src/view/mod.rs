pub mod card;
pub mod feed;
pub mod robots;
pub mod social_image;
