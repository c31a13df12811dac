use std::io;
use std::io::ErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;

/// Splits a content file into its TOML front matter and its markdown body.
///
/// ```text
/// +++
/// title = "Hello"
/// +++
/// Body starts here
/// ```
pub fn split_front_matter<'a>(file_name: &Path, raw: &'a str) -> io::Result<(&'a str, &'a str)> {
    lazy_static! {
        static ref FRONT_MATTER_REGEX: Regex = Regex::new(
            r"(?s)\A\s*\+\+\+[ \t]*\r?\n(?:(?P<front>.*?)\r?\n)?\+\+\+[ \t]*(?:\r?\n|\z)(?P<body>.*)\z"
        ).unwrap();
    }

    let Some(caps) = FRONT_MATTER_REGEX.captures(raw) else {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("Front matter is missing or not closed - file={}", file_name.display()),
        ));
    };

    let front = caps.name("front").map(|m| m.as_str()).unwrap_or("");
    let body = caps.name("body").map(|m| m.as_str()).unwrap_or("");
    Ok((front, body))
}

/// Validates the front matter against the schema `D`.
pub fn parse_front_matter<D: DeserializeOwned>(file_name: &Path, front: &str) -> io::Result<D> {
    toml::from_str::<D>(front).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Invalid front matter: {} - file={}", e.message(), file_name.display()),
        )
    })
}
