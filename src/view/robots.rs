const SITEMAP_FILE: &str = "sitemap-index.xml";

const CRAWLER_RULES: &str = "User-agent: Googlebot
Disallow: /nogooglebot/
Disallow: /cdn-cgi/
Disallow: /~lalebahc/
Disallow: /stream/
User-agent: *
Allow: /";

/// Resolves `file` against `base_url` the way a relative link would be:
/// the last path segment of the base is replaced unless it ends with `/`.
fn resolve_url(base_url: &str, file: &str) -> String {
    let path_start = match base_url.find("://") {
        Some(scheme_end) => base_url[scheme_end + 3..]
            .find('/')
            .map(|i| i + scheme_end + 3),
        None => base_url.find('/'),
    };

    match path_start {
        None => format!("{}/{}", base_url, file),
        Some(start) => {
            let last_slash = base_url[start..].rfind('/').map(|i| i + start).unwrap_or(start);
            format!("{}{}", &base_url[..=last_slash], file)
        }
    }
}

pub fn render_robots(website: &str) -> String {
    format!("{}\n\nSitemap: {}", CRAWLER_RULES, resolve_url(website, SITEMAP_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        assert_eq!(resolve_url("https://example.com", "sitemap-index.xml"), "https://example.com/sitemap-index.xml");
        assert_eq!(resolve_url("https://example.com/", "sitemap-index.xml"), "https://example.com/sitemap-index.xml");
        assert_eq!(resolve_url("https://example.com/blog/", "sitemap-index.xml"), "https://example.com/blog/sitemap-index.xml");
        assert_eq!(resolve_url("https://example.com/blog", "sitemap-index.xml"), "https://example.com/sitemap-index.xml");
    }

    #[test]
    fn test_render_robots() {
        let robots = render_robots("https://example.com");
        assert!(robots.starts_with("User-agent: Googlebot\n"));
        assert!(robots.contains("Disallow: /cdn-cgi/\nDisallow: /~lalebahc/\nDisallow: /stream/\n"));
        assert!(robots.contains("User-agent: *\nAllow: /\n"));
        assert!(robots.ends_with("\n\nSitemap: https://example.com/sitemap-index.xml"));
    }
}
