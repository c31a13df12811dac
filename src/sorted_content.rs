use crate::content::Publishable;
use crate::content_filter::ContentFilter;
use crate::text_utils::slugify_all;

/// Published entries of one collection, newest effective date first.
///
/// Dates are compared at whole-second precision and the sort is stable, so
/// entries dated within the same second keep their input order.
pub fn get_sorted_content<'a, T: Publishable>(content: &'a [T], filter: &ContentFilter) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = content.iter().filter(|entry| filter.is_published(*entry)).collect();
    sorted.sort_by_key(|entry| std::cmp::Reverse(entry.effective_date().timestamp()));
    sorted
}

/// Published entries carrying `tag`, which must already be a slug.
pub fn get_by_tag<'a, T: Publishable>(content: &'a [T], tag: &str, filter: &ContentFilter) -> Vec<&'a T> {
    let tagged: Vec<&T> = content
        .iter()
        .filter(|entry| slugify_all(entry.tags()).iter().any(|t| t == tag))
        .collect();

    let sorted: Vec<&'a T> = get_sorted_content(&tagged, filter).into_iter().copied().collect();
    sorted
}
