use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::toml_date;

pub mod collection_loader;
pub mod content_file;
pub mod parsing_utils;

/// The named content categories of the site. Each one lives in its own
/// directory under the content root and has its own front matter schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Note,
    Snippet,
    Project,
}

impl Collection {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Note => "note",
            Collection::Snippet => "snippets",
            Collection::Project => "projects",
        }
    }

    /// First path segment of the pages rendered for this collection.
    pub fn route(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Note => "notes",
            Collection::Snippet => "snippets",
            Collection::Project => "projects",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// What the aggregation pipeline needs to know about an entry.
pub trait Publishable {
    fn pub_datetime(&self) -> DateTime<Utc>;
    fn mod_datetime(&self) -> Option<DateTime<Utc>>;
    fn tags(&self) -> &[String];
    fn is_draft(&self) -> bool;

    /// `mod_datetime` when present, `pub_datetime` otherwise.
    fn effective_date(&self) -> DateTime<Utc> {
        self.mod_datetime().unwrap_or_else(|| self.pub_datetime())
    }
}

impl<T: Publishable + ?Sized> Publishable for &T {
    fn pub_datetime(&self) -> DateTime<Utc> {
        (**self).pub_datetime()
    }

    fn mod_datetime(&self) -> Option<DateTime<Utc>> {
        (**self).mod_datetime()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn is_draft(&self) -> bool {
        (**self).is_draft()
    }
}

fn default_tags() -> Vec<String> {
    vec!["others".to_string()]
}

/// Front matter shared by blog posts, notes and snippets.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "toml_date::deserialize")]
    pub pub_datetime: DateTime<Utc>,
    #[serde(default, deserialize_with = "toml_date::deserialize_option")]
    pub mod_datetime: Option<DateTime<Utc>>,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default, rename = "canonicalURL")]
    pub canonical_url: Option<String>,
}

impl Publishable for PostData {
    fn pub_datetime(&self) -> DateTime<Utc> {
        self.pub_datetime
    }

    fn mod_datetime(&self) -> Option<DateTime<Utc>> {
        self.mod_datetime
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_draft(&self) -> bool {
        self.draft.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectData {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub draft: Option<bool>,
}

/// One markdown file of a collection, with its validated front matter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry<D> {
    pub id: String,
    pub collection: Collection,
    pub data: D,
    #[serde(skip)]
    pub body: String,
}

impl<D> ContentEntry<D> {
    /// Site-relative link, e.g. `blog/my-first-post/`.
    pub fn link(&self) -> String {
        format!("{}/{}/", self.collection.route(), self.id)
    }
}

impl<D: Publishable> Publishable for ContentEntry<D> {
    fn pub_datetime(&self) -> DateTime<Utc> {
        self.data.pub_datetime()
    }

    fn mod_datetime(&self) -> Option<DateTime<Utc>> {
        self.data.mod_datetime()
    }

    fn tags(&self) -> &[String] {
        self.data.tags()
    }

    fn is_draft(&self) -> bool {
        self.data.is_draft()
    }
}

pub type Post = ContentEntry<PostData>;
pub type Project = ContentEntry<ProjectData>;

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::test_data::post_at;

    use super::*;

    #[test]
    fn test_effective_date() {
        let mut post = post_at("a", Collection::Blog, "2024-01-02T10:00:00Z", &["rust"]);
        assert_eq!(post.effective_date(), Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());

        post.data.mod_datetime = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(post.effective_date(), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!((&post).effective_date(), post.effective_date());
    }

    #[test]
    fn test_link() {
        let post = post_at("hello-world", Collection::Note, "2024-01-02T10:00:00Z", &[]);
        assert_eq!(post.link(), "notes/hello-world/");
        let post = post_at("hello-world", Collection::Blog, "2024-01-02T10:00:00Z", &[]);
        assert_eq!(post.link(), "blog/hello-world/");
    }

    #[test]
    fn test_post_data_defaults() {
        let toml_str = r#"
title = "Hello"
description = "First post"
pubDatetime = 2024-01-02T10:00:00Z
"#;
        let data: PostData = toml::from_str(toml_str).unwrap();
        assert_eq!(data.tags, ["others"]);
        assert_eq!(data.draft, None);
        assert!(!data.is_draft());
        assert_eq!(data.mod_datetime, None);
        assert_eq!(data.canonical_url, None);
    }

    #[test]
    fn test_post_data_full() {
        let toml_str = r#"
title = "Hello"
description = "First post"
pubDatetime = 2024-01-02T10:00:00Z
modDatetime = 2024-02-02T10:00:00Z
tags = ["Rust", "CLI"]
draft = true
featured = true
author = "Someone"
ogImage = "hello.png"
canonicalURL = "https://example.com/hello"
"#;
        let data: PostData = toml::from_str(toml_str).unwrap();
        assert_eq!(data.tags, ["Rust", "CLI"]);
        assert!(data.is_draft());
        assert_eq!(data.featured, Some(true));
        assert_eq!(data.author.as_deref(), Some("Someone"));
        assert_eq!(data.canonical_url.as_deref(), Some("https://example.com/hello"));
        assert_eq!(data.mod_datetime, Some(Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap()));
    }

    #[test]
    fn test_post_data_requires_description() {
        let toml_str = r#"
title = "Hello"
pubDatetime = 2024-01-02T10:00:00Z
"#;
        assert!(toml::from_str::<PostData>(toml_str).is_err());
    }
}
