//! Denylist scrubbing for free-text asset fields.
//!
//! This removes a fixed set of markup characters, URL schemes and path
//! traversal sequences. It is not an HTML sanitizer and does not make input
//! safe to interpolate; rendering escapes separately.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Applied in order; a later rule may match text exposed by an earlier one.
    static ref DENYLIST: Vec<Regex> = [
        r"[<>]",
        r"(?i)javascript:",
        r"(?i)on\w+=",
        r"(?i)data:",
        r"(?i)vbscript:",
        r"(?i)file:",
        r"(?i)ftp:",
        r"(?i)http:",
        r"(?i)https:",
        r"\\",
        r"\.\.",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

pub fn sanitize(input: &str) -> String {
    let mut out = input.to_string();
    for rule in DENYLIST.iter() {
        if rule.is_match(&out) {
            out = rule.replace_all(&out, "").into_owned();
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets_and_trims() {
        assert_eq!(sanitize("  <b>Guitar</b>  "), "bGuitar/b");
    }

    #[test]
    fn strips_schemes_case_insensitively() {
        assert_eq!(sanitize("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(sanitize("see HTTPS://example.com"), "see //example.com");
        assert_eq!(sanitize("vbscript:x data:y file:z ftp:w"), "x y z w");
    }

    #[test]
    fn strips_event_handlers() {
        assert_eq!(sanitize("img onerror=boom"), "img boom");
        assert_eq!(sanitize("ONLOAD=go"), "go");
    }

    #[test]
    fn strips_backslashes_and_traversal() {
        assert_eq!(sanitize(r"..\..\etc/passwd"), "etc/passwd");
        assert_eq!(sanitize("a/../b"), "a//b");
    }

    #[test]
    fn earlier_rules_can_expose_later_matches() {
        // Removing the bracket joins the scheme back together.
        assert_eq!(sanitize("java<script:x"), "x");
    }

    #[test]
    fn leaves_ordinary_text_alone() {
        assert_eq!(sanitize("Vintage Fender, 1974 (mint)"), "Vintage Fender, 1974 (mint)");
        assert_eq!(sanitize(""), "");
    }
}
