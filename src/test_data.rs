#![cfg(test)]

use chrono::{DateTime, Utc};

use crate::content::{Collection, Post, PostData};
use crate::util::toml_date::parse_date_time;

pub const POST_DATA: &str = r##"+++
title = "What I learned after 20+ years of software development"
description = "How to be a great software engineer?"
pubDatetime = 2022-04-02T12:05:00Z
tags = ["Career", "Software Engineering"]
+++

How to be a great software engineer?

Someone asked me this question today and I didn't have an answer. After thinking for a while, I came up with a list of what I try to do myself.
"##;

pub const NOTE_DATA: &str = r##"+++
title = "Rust iterators cheat sheet"
description = "The adaptors I keep looking up"
pubDatetime = "2024-02-12 22:54:00"
modDatetime = 2024-03-01T08:00:00Z
tags = ["Rust"]
featured = true
+++
`filter_map`, `flat_map`, `scan`, `take_while`.
"##;

pub const PROJECT_DATA: &str = r##"+++
title = "folio"
subtitle = "Content pipeline for my site"
address = "https://github.com/example/folio"
technologies = ["Rust", "TOML"]
featured = true
+++
Loads collections and paginates them.
"##;

pub fn date(buf: &str) -> DateTime<Utc> {
    parse_date_time(buf).unwrap()
}

pub fn post_at(id: &str, collection: Collection, pub_datetime: &str, tags: &[&str]) -> Post {
    Post {
        id: id.to_string(),
        collection,
        data: PostData {
            title: format!("title-of-{}", id),
            description: format!("description-of-{}", id),
            pub_datetime: date(pub_datetime),
            mod_datetime: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            draft: None,
            featured: None,
            author: None,
            og_image: None,
            canonical_url: None,
        },
        body: String::new(),
    }
}
