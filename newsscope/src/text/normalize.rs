use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    url: Regex,
    tag: Regex,
    truncation_square: Regex,
    truncation_paren: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        url: Regex::new(r"http\S+").unwrap(),
        tag: Regex::new(r"<[^>]+>").unwrap(),
        // NewsAPI truncation markers like "[+1234 chars]" / "(+1234 chars)"
        truncation_square: Regex::new(r"\[\+\s?\d+\s?chars\]").unwrap(),
        truncation_paren: Regex::new(r"\(\+\s?\d+\s?chars\)").unwrap(),
        whitespace: Regex::new(r"\s+").unwrap(),
    })
}

/// Strip URLs, HTML-like tags and provider truncation markers from raw
/// article text, collapsing whitespace. Pure and idempotent; empty input
/// yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let p = patterns();
    let text = p.url.replace_all(text, "");
    let text = p.tag.replace_all(&text, " ");
    let text = p.truncation_square.replace_all(&text, "");
    let text = p.truncation_paren.replace_all(&text, "");
    p.whitespace.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls() {
        let out = normalize("Read more at https://example.com/story today");
        assert_eq!(out, "Read more at today");
    }

    #[test]
    fn test_strips_tags_and_markers() {
        let out = normalize("Launch <b>confirmed</b> by agency [+1234 chars]");
        assert_eq!(out, "Launch confirmed by agency");

        let out = normalize("Launch confirmed (+ 99 chars)");
        assert_eq!(out, "Launch confirmed");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Plain text with no markup at all",
            "Mixed <i>markup</i> and https://x.y [+10 chars]",
            "   padded   whitespace   ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {input:?}");
        }
    }
}
