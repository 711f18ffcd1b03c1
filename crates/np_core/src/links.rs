use regex::Regex;
use std::sync::OnceLock;

fn scheme_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^https?://").expect("static regex"))
}

/// Prefixes `https://` onto links the provider returned without a scheme.
///
/// Nothing checks that the result is reachable or even well formed.
pub fn safe_url(input: Option<&str>) -> Option<String> {
    let clean = input?.trim();
    if clean.is_empty() {
        return None;
    }
    if scheme_pattern().is_match(clean) {
        Some(clean.to_string())
    } else {
        Some(format!("https://{}", clean))
    }
}

/// Percent-encodes a single query value, spaces become `%20`.
pub fn encode_query_component(value: &str) -> String {
    // form encoding turns a literal '+' into %2B, so every '+' left is a space
    ::url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Results route for a submitted search.
pub fn search_path(query: &str) -> String {
    format!("/search?q={}", encode_query_component(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_url_prefixes_missing_scheme() {
        assert_eq!(safe_url(Some("punchng.com/news")).as_deref(), Some("https://punchng.com/news"));
        assert_eq!(safe_url(Some("  www.vanguardngr.com ")).as_deref(), Some("https://www.vanguardngr.com"));
        assert_eq!(safe_url(Some("ftp://example.com")).as_deref(), Some("https://ftp://example.com"));
    }

    #[test]
    fn test_safe_url_keeps_existing_scheme() {
        assert_eq!(safe_url(Some("https://thecable.ng/a")).as_deref(), Some("https://thecable.ng/a"));
        assert_eq!(safe_url(Some("http://dailytrust.com")).as_deref(), Some("http://dailytrust.com"));
        assert_eq!(safe_url(Some("HTTPS://Pulse.ng")).as_deref(), Some("HTTPS://Pulse.ng"));
    }

    #[test]
    fn test_safe_url_empty() {
        assert_eq!(safe_url(None), None);
        assert_eq!(safe_url(Some("")), None);
        assert_eq!(safe_url(Some("   ")), None);
    }

    #[test]
    fn test_search_path_encoding() {
        assert_eq!(search_path("Lagos Tech"), "/search?q=Lagos%20Tech");
        assert_eq!(encode_query_component("1+1 & more"), "1%2B1%20%26%20more");
        assert_eq!(encode_query_component("Naira"), "Naira");
    }
}
