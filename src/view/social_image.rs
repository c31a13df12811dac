use serde::Serialize;

use crate::content::{Post, Publishable};
use crate::text_utils::slugify_str;

/// Route of one preview image (`/<route>/<slug>/index.png`) and the entry
/// the image is drawn from.
#[derive(Debug, Serialize)]
pub struct SocialImagePath<'a> {
    pub slug: String,
    pub entry: &'a Post,
}

impl SocialImagePath<'_> {
    pub fn route(&self) -> String {
        format!("/{}/{}/index.png", self.entry.collection.route(), self.slug)
    }
}

/// Drafts get no preview image. Scheduled entries do, so the image exists
/// by the time the entry goes live.
pub fn social_image_paths(entries: &[Post]) -> Vec<SocialImagePath<'_>> {
    entries
        .iter()
        .filter(|entry| !entry.is_draft())
        .map(|entry| SocialImagePath {
            slug: slugify_str(&entry.data.title),
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::content::Collection;
    use crate::test_data::post_at;

    use super::*;

    #[test]
    fn test_social_image_paths() {
        let mut draft = post_at("draft", Collection::Note, "2024-01-01T00:00:00Z", &[]);
        draft.data.draft = Some(true);
        let mut note = post_at("note", Collection::Note, "2099-01-01T00:00:00Z", &[]);
        note.data.title = "Async Rust, explained".to_string();
        let notes = vec![draft, note];

        let paths = social_image_paths(&notes);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].slug, "async-rust-explained");
        assert_eq!(paths[0].entry.id, "note");
        assert_eq!(paths[0].route(), "/notes/async-rust-explained/index.png");
    }
}
