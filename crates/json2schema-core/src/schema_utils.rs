//! Path construction for walker diagnostics and error messages.
//!
//! Positions are identified by a slash-delimited, JSON-pointer-flavoured
//! path rooted at `"/"` (not `"#"` — there's no document being pointed
//! into, just a position being described for logs and
//! `ConvertError::InternalInvariantViolation`).

use std::borrow::Cow;

/// Escape a single path segment per RFC 6901: `~` → `~0`, `/` → `~1`.
/// Returns `Cow::Borrowed` when no escaping is needed (the common case).
pub fn escape_pointer_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') || segment.contains('/') {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Append one escaped segment to a path. The root is `"/"`, so
/// `child_path("/", "properties")` yields `"/properties"`, not `"//properties"`.
pub fn child_path(parent: &str, segment: &str) -> String {
    let escaped = escape_pointer_segment(segment);
    if parent == "/" {
        format!("/{escaped}")
    } else {
        format!("{parent}/{escaped}")
    }
}
