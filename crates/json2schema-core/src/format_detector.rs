//! [`FormatDetector`] — a pluggable table mapping a declared semantic type
//! to an ordered list of (pattern, format-name) entries.
//!
//! The registry is a value owned by `FormatComparator`, not a process-global
//! — callers needing a custom catalog construct their own `FormatDetector`
//! and pass it through `ConverterConfig` rather than mutating a shared table.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

/// One entry in a semantic type's pattern list: a compiled regex and the
/// format name it maps to. Evaluated in registration order; the first
/// full match wins.
#[derive(Clone)]
struct PatternEntry {
    pattern: Regex,
    format: &'static str,
}

#[derive(Clone)]
pub struct FormatDetector {
    registry: HashMap<&'static str, Vec<PatternEntry>>,
}

impl FormatDetector {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Register a pattern for `type_hint`, appended after any existing
    /// patterns for that type — earlier entries still win ties.
    pub fn register(&mut self, type_hint: &'static str, pattern: Regex, format: &'static str) {
        self.registry
            .entry(type_hint)
            .or_default()
            .push(PatternEntry { pattern, format });
    }

    /// Returns the name of the first pattern registered for `type_hint`
    /// that fully matches `value`'s string form, or `None`.
    pub fn detect(&self, value: &str, type_hint: &str) -> Option<String> {
        let entries = self.registry.get(type_hint)?;
        entries
            .iter()
            .find(|entry| is_full_match(&entry.pattern, value))
            .map(|entry| entry.format.to_string())
    }
}

impl Default for FormatDetector {
    /// The built-in string formats from the canonical catalog: `email`,
    /// `uuid`, `date`, `date-time`, `uri`, `ipv4`.
    fn default() -> Self {
        let mut detector = Self::new();

        detector.register(
            "string",
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap(),
            "email",
        );
        detector.register(
            "string",
            RegexBuilder::new(
                r"^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
            )
            .case_insensitive(true)
            .build()
            .unwrap(),
            "uuid",
        );
        detector.register("string", Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), "date");
        detector.register(
            "string",
            Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?$")
                .unwrap(),
            "date-time",
        );
        detector.register(
            "string",
            RegexBuilder::new(r"^https?://[^\s/$.?#].[^\s]*$")
                .case_insensitive(true)
                .build()
                .unwrap(),
            "uri",
        );
        detector.register("string", ipv4_pattern(), "ipv4");

        detector
    }
}

fn ipv4_pattern() -> Regex {
    let octet = r"(?:25[0-5]|2[0-4]\d|[01]?\d\d?)";
    Regex::new(&format!(r"^(?:{octet}\.){{3}}{octet}$")).unwrap()
}

/// Full-match semantics: the regex crate's `^`/`$` anchors already bind to
/// string start/end (no multi-line flag is ever set here), so a successful
/// `is_match` on one of these patterns is already a full match. Kept as a
/// named helper so intent reads clearly at call sites.
fn is_full_match(pattern: &Regex, value: &str) -> bool {
    pattern.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> FormatDetector {
        FormatDetector::default()
    }

    #[test]
    fn detects_email() {
        assert_eq!(
            detector().detect("alice@example.com", "string"),
            Some("email".to_string())
        );
    }

    #[test]
    fn detects_uuid_case_insensitive() {
        let d = detector();
        assert_eq!(
            d.detect("3F2504E0-4F89-11D3-9A0C-0305E82C3301", "string"),
            Some("uuid".to_string())
        );
    }

    #[test]
    fn detects_date() {
        assert_eq!(
            detector().detect("2024-01-31", "string"),
            Some("date".to_string())
        );
    }

    #[test]
    fn detects_date_time_with_offset() {
        assert_eq!(
            detector().detect("2024-01-31T10:20:30+02:00", "string"),
            Some("date-time".to_string())
        );
    }

    #[test]
    fn detects_date_time_with_fraction_and_z() {
        assert_eq!(
            detector().detect("2024-01-31T10:20:30.123Z", "string"),
            Some("date-time".to_string())
        );
    }

    #[test]
    fn date_wins_over_date_time_when_no_time_part() {
        // "date" is registered before "date-time" and the value has no time
        // component, so only "date" can match.
        assert_eq!(
            detector().detect("2024-01-31", "string"),
            Some("date".to_string())
        );
    }

    #[test]
    fn detects_uri() {
        assert_eq!(
            detector().detect("https://example.com/path", "string"),
            Some("uri".to_string())
        );
    }

    #[test]
    fn detects_ipv4() {
        assert_eq!(
            detector().detect("192.168.1.1", "string"),
            Some("ipv4".to_string())
        );
    }

    #[test]
    fn rejects_ipv4_octet_over_255() {
        assert_eq!(detector().detect("999.1.1.1", "string"), None);
    }

    #[test]
    fn plain_string_has_no_format() {
        assert_eq!(detector().detect("hello world", "string"), None);
    }

    #[test]
    fn unknown_type_hint_yields_none() {
        assert_eq!(detector().detect("alice@example.com", "number"), None);
    }
}
