use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use chrono::Duration;
use serde::Deserialize;

/// One year.
pub const MAX_SCHEDULED_POST_MARGIN_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Deserialize, Debug, Clone)]
pub struct SiteInfo {
    pub website: String,
    pub author: String,
    #[serde(default)]
    pub profile: Option<String>,
    pub desc: String,
    pub title: String,
    #[serde(default)]
    pub title_postfix: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default = "default_true")]
    pub light_and_dark_mode: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Defaults {
    #[serde(default = "default_post_per_index")]
    pub post_per_index: usize,
    #[serde(default = "default_page_size")]
    pub post_per_page: usize,
    #[serde(default = "default_page_size")]
    pub note_per_page: usize,
    #[serde(default = "default_scheduled_post_margin_secs")]
    pub scheduled_post_margin_secs: i64,
    /// Publishes scheduled entries right away. Drafts stay hidden.
    #[serde(default)]
    pub show_scheduled: bool,
}

impl Defaults {
    /// The margin, clamped to `0..=MAX_SCHEDULED_POST_MARGIN_SECS`.
    pub fn scheduled_post_margin(&self) -> Duration {
        let secs = self.scheduled_post_margin_secs.clamp(0, MAX_SCHEDULED_POST_MARGIN_SECS);
        Duration::seconds(secs)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            post_per_index: default_post_per_index(),
            post_per_page: default_page_size(),
            note_per_page: default_page_size(),
            scheduled_post_margin_secs: default_scheduled_post_margin_secs(),
            show_scheduled: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Site-wide settings. Built once and passed explicitly to whatever needs it.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub site: SiteInfo,
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

fn default_true() -> bool {
    true
}

fn default_post_per_index() -> usize {
    4
}

fn default_page_size() -> usize {
    6
}

fn default_scheduled_post_margin_secs() -> i64 {
    15 * 60
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(exe_dir) => {
            let rest = path.strip_prefix("${exe_dir}").unwrap_or(&path);
            exe_dir.join(rest)
        }
        None => path,
    }
}

fn validate(cfg: &Config) -> io::Result<()> {
    let sizes = [
        ("post_per_index", cfg.defaults.post_per_index),
        ("post_per_page", cfg.defaults.post_per_page),
        ("note_per_page", cfg.defaults.note_per_page),
    ];
    for (name, size) in sizes {
        if size == 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Error in configuration: defaults.{} has to be greater than 0", name),
            ));
        }
    }

    let margin = cfg.defaults.scheduled_post_margin_secs;
    if margin < 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "Error in configuration: defaults.scheduled_post_margin_secs cannot be negative",
        ));
    }
    if margin > MAX_SCHEDULED_POST_MARGIN_SECS {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("Error in configuration: defaults.scheduled_post_margin_secs cannot exceed {}", MAX_SCHEDULED_POST_MARGIN_SECS),
        ));
    }

    Ok(())
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    validate(&cfg)?;
    cfg.paths.content_dir = parse_path(cfg.paths.content_dir);

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site]
website = "https://example.com/"
author = "Jane Doe"
desc = "Notes about software"
title = "Jane Doe"

[paths]
content_dir = "content"
"##;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = parse_config(MINIMAL).unwrap();
        assert_eq!(cfg.site.author, "Jane Doe");
        assert!(cfg.site.light_and_dark_mode);
        assert_eq!(cfg.paths.content_dir, PathBuf::from("content"));
        assert_eq!(cfg.defaults.post_per_index, 4);
        assert_eq!(cfg.defaults.post_per_page, 6);
        assert_eq!(cfg.defaults.note_per_page, 6);
        assert_eq!(cfg.defaults.scheduled_post_margin(), Duration::minutes(15));
        assert!(!cfg.defaults.show_scheduled);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_str = format!("{}{}", MINIMAL, r##"
[defaults]
post_per_index = 3
post_per_page = 10
note_per_page = 5
scheduled_post_margin_secs = 60
show_scheduled = true

[log]
level = "Debug"
log_to_console = true
location = "/tmp/folio/server.log"
"##);
        let cfg = parse_config(&toml_str).unwrap();
        assert_eq!(cfg.defaults.post_per_index, 3);
        assert_eq!(cfg.defaults.post_per_page, 10);
        assert_eq!(cfg.defaults.note_per_page, 5);
        assert_eq!(cfg.defaults.scheduled_post_margin(), Duration::seconds(60));
        assert!(cfg.defaults.show_scheduled);

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let toml_str = format!("{}{}", MINIMAL, "\n[defaults]\npost_per_page = 0\n");
        let err = parse_config(&toml_str).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("post_per_page"));
    }

    #[test]
    fn test_oversized_margin_is_rejected() {
        for margin in ["10000000000000", "9223372036854775807"] {
            let toml_str = format!("{}\n[defaults]\nscheduled_post_margin_secs = {}\n", MINIMAL, margin);
            let err = parse_config(&toml_str).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData);
            assert!(err.to_string().contains("scheduled_post_margin_secs"));
        }

        let toml_str = format!("{}\n[defaults]\nscheduled_post_margin_secs = {}\n", MINIMAL, MAX_SCHEDULED_POST_MARGIN_SECS);
        assert!(parse_config(&toml_str).is_ok());
    }

    #[test]
    fn test_margin_is_clamped() {
        let defaults = Defaults {
            scheduled_post_margin_secs: i64::MAX,
            ..Defaults::default()
        };
        assert_eq!(defaults.scheduled_post_margin(), Duration::seconds(MAX_SCHEDULED_POST_MARGIN_SECS));

        let defaults = Defaults {
            scheduled_post_margin_secs: -5,
            ..Defaults::default()
        };
        assert_eq!(defaults.scheduled_post_margin(), Duration::zero());
    }

    #[test]
    fn test_missing_site_is_rejected() {
        let err = parse_config("[paths]\ncontent_dir = \"content\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_exe_dir_expansion() {
        let expanded = parse_path(PathBuf::from("${exe_dir}/content"));
        assert!(!expanded.starts_with("${exe_dir}"));
        assert!(expanded.ends_with("content"));

        let untouched = parse_path(PathBuf::from("content"));
        assert_eq!(untouched, PathBuf::from("content"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("does/not/exist/folio.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Error opening configuration file"));
    }
}
