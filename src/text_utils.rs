use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

/// Turns free text into a URL slug: `"Hello, World!"` becomes `"hello-world"`.
///
/// Non-ASCII letters are transliterated first, so `"Ábaco"` becomes `"abaco"`.
/// Applying it twice gives the same result as applying it once.
pub fn slugify_str(text: &str) -> String {
    lazy_static! {
        static ref NON_ALNUM_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let ascii = unidecode::unidecode(text).to_ascii_lowercase();
    let slug = NON_ALNUM_REGEX.replace_all(&ascii, "-");
    slug.trim_matches('-').to_string()
}

pub fn slugify_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| slugify_str(t.as_ref())).collect()
}

pub fn format_date_time(date_time: &DateTime<Utc>) -> (String, String) {
    let date = date_time.format("%d %b, %Y").to_string();
    let time = date_time.format("%I:%M %p").to_string();
    (date, time)
}
