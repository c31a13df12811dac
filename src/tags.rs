use std::collections::HashSet;

use serde::Serialize;

use crate::content::Publishable;
use crate::content_filter::ContentFilter;
use crate::text_utils::slugify_str;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag: String,
    pub tag_name: String,
}

/// Unique tags of the published entries, ordered by slug.
///
/// Two spellings with the same slug are one tag; the first one seen names it.
/// Slugs only hold `[a-z0-9-]`, where code point order is the collation order.
pub fn get_unique_tags<'a, T, I>(entries: I, filter: &ContentFilter) -> Vec<Tag>
where
    T: Publishable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut tags: Vec<Tag> = entries
        .into_iter()
        .filter(|entry| filter.is_published(*entry))
        .flat_map(|entry| entry.tags().iter())
        .map(|tag_name| Tag {
            tag: slugify_str(tag_name),
            tag_name: tag_name.clone(),
        })
        .filter(|tag| seen.insert(tag.tag.clone()))
        .collect();

    tags.sort_by(|a, b| a.tag.cmp(&b.tag));
    tags
}
