//! URL shape checks for citation strings, image sources and JSON-LD identifiers.

use url::{Host, Url};

/// Checks an absolute `http(s)` URL. Returns a short reason on failure.
///
/// Parsing is delegated to [`Url::parse`]. Domain hosts need a suffix (`example.com`, not
/// `example`) unless they are `localhost`.
pub fn check_absolute_url(raw: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        return Err("empty URL".to_string());
    }
    // `Url::parse` silently percent-encodes inner spaces.
    if raw.chars().any(char::is_whitespace) {
        return Err("URL contains whitespace".to_string());
    }
    let parsed = Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }
    match parsed.host() {
        None => Err("URL has no host".to_string()),
        Some(Host::Domain(domain)) => {
            if domain != "localhost" && !domain.trim_end_matches('.').contains('.') {
                return Err(format!("host '{}' has no domain suffix", domain));
            }
            Ok(())
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
    }
}

/// Image `src` values may be site-relative (`/images/...`) or absolute.
pub fn check_image_src(raw: &str) -> Result<(), String> {
    if raw.starts_with('/') && !raw.starts_with("//") {
        if raw.chars().any(char::is_whitespace) {
            return Err("path contains whitespace".to_string());
        }
        return Ok(());
    }
    check_absolute_url(raw)
}

/// Citation strings are free text that may embed URLs. Every URL-looking token is checked;
/// plain citations ("Isuzu Service Manual, section 2") produce no problems.
pub fn check_citation(raw: &str) -> Vec<String> {
    let mut problems = Vec::new();
    for token in raw.split_whitespace() {
        let token = token
            .trim_start_matches(|c: char| matches!(c, '(' | '[' | '<' | '"' | '\''))
            .trim_end_matches(|c: char| matches!(c, ')' | ']' | '>' | '"' | '\'' | ',' | ';' | '.'));
        if token.contains("://") {
            if let Err(reason) = check_absolute_url(token) {
                problems.push(format!("'{}': {}", token, reason));
            }
        } else if token.to_ascii_lowercase().starts_with("www.") {
            problems.push(format!("'{}': URL has no scheme", token));
        }
    }
    problems
}

/// Drops a trailing `#fragment`.
pub fn strip_fragment(raw: &str) -> &str {
    match raw.find('#') {
        Some(i) => &raw[..i],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_urls() {
        assert!(check_absolute_url("https://www.example.com/isuzu/4ee1").is_ok());
        assert!(check_absolute_url("http://localhost:3000/x").is_ok());
        assert!(check_absolute_url("https://example.com?q=1#frag").is_ok());
        assert!(check_absolute_url("https://bücher.de/katalog").is_ok());
        assert!(check_absolute_url("http://[2001:db8::1]:8080/manual").is_ok());
        assert!(check_absolute_url("http://192.168.1.20/manual").is_ok());
        assert!(check_absolute_url("https://user@www.isuzu.co.jp/manual").is_ok());
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(check_absolute_url("example.com/x").is_err());
        assert!(check_absolute_url("ftp://example.com").is_err());
        assert!(check_absolute_url("https://").is_err());
        assert!(check_absolute_url("https://exa mple.com").is_err());
        assert!(check_absolute_url("https://example").is_err());
        assert!(check_absolute_url("https://example.com:abc/").is_err());
        assert!(check_absolute_url("https://www.example.com:99999/x").is_err());
    }

    #[test]
    fn citation_text_without_urls_is_clean() {
        assert!(check_citation("Isuzu Workshop Manual (4EE1), Section 1A").is_empty());
    }

    #[test]
    fn citation_flags_broken_embedded_urls() {
        let problems = check_citation("See https//isuzu.com and (www.isuzu.co.jp).");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("www.isuzu.co.jp"));

        let problems = check_citation("Source: https://isuzu/manual.pdf");
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn image_src_allows_site_relative_paths() {
        assert!(check_image_src("/images/engines/4ee1.webp").is_ok());
        assert!(check_image_src("images/4ee1.webp").is_err());
    }

    #[test]
    fn strips_fragments() {
        assert_eq!(strip_fragment("https://a.com/p#webpage"), "https://a.com/p");
        assert_eq!(strip_fragment("https://a.com/p"), "https://a.com/p");
    }
}
