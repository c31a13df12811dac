use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SiteInfo;
use crate::content::{Post, Publishable};
use crate::content_filter::ContentFilter;
use crate::sorted_content::get_sorted_content;

/// What a syndication writer needs to produce the site feed.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub site: String,
    pub items: Vec<FeedItem>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub link: String,
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
}

impl FeedItem {
    fn from_post(post: &Post) -> FeedItem {
        FeedItem {
            link: post.link(),
            title: post.data.title.clone(),
            description: post.data.description.clone(),
            pub_date: post.effective_date(),
        }
    }
}

/// Blog posts first, then notes, each newest first.
pub fn build_feed(site: &SiteInfo, posts: &[Post], notes: &[Post], filter: &ContentFilter) -> Feed {
    let items = get_sorted_content(posts, filter)
        .into_iter()
        .chain(get_sorted_content(notes, filter))
        .map(FeedItem::from_post)
        .collect();

    Feed {
        title: site.title.clone(),
        description: site.desc.clone(),
        site: site.website.clone(),
        items,
    }
}
