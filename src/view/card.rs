use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::content::{Collection, Post, Project, Publishable};
use crate::text_utils::{format_date_time, slugify_str};

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub href: String,
    pub title: String,
    /// Shared name for the title's view transition between list and post.
    pub transition_name: String,
    pub datetime: DateTime<Utc>,
    pub date: String,
    pub time: String,
    /// The date shown is a modification date.
    pub modified: bool,
    pub description: String,
    pub badge: Option<&'static str>,
}

impl Card {
    pub fn from_post(post: &Post, with_badge: bool) -> Card {
        let datetime = post.effective_date();
        let (date, time) = format_date_time(&datetime);
        let badge = if with_badge { badge_for(post.collection) } else { None };

        Card {
            href: format!("/{}", post.link()),
            title: post.data.title.clone(),
            transition_name: slugify_str(&post.data.title),
            datetime,
            date,
            time,
            modified: post.data.mod_datetime.is_some(),
            description: post.data.description.clone(),
            badge,
        }
    }
}

/// Blog posts get their own badge; every other collection reads as a note.
fn badge_for(collection: Collection) -> Option<&'static str> {
    match collection {
        Collection::Blog => Some("Blog Post"),
        Collection::Note | Collection::Snippet | Collection::Project => Some("Note"),
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub title: String,
    pub subtitle: Option<String>,
    pub address: Option<String>,
    pub address_label: Option<String>,
    pub technologies: Vec<String>,
    /// Markdown, rendered by the page.
    pub body: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> ProjectCard {
        lazy_static! {
            static ref SCHEME_REGEX: Regex = Regex::new(r"^https?://").unwrap();
        }

        let address = project.data.address.clone();
        let address_label = address.as_deref().map(|a| SCHEME_REGEX.replace(a, "").to_string());

        ProjectCard {
            title: project.data.title.clone(),
            subtitle: project.data.subtitle.clone(),
            address,
            address_label,
            technologies: project.data.technologies.clone(),
            body: project.body.clone(),
        }
    }
}
