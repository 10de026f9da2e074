//! [`Resource`] — a tagged carrier pairing an input fragment with a stable
//! source id and kind.

use serde_json::Value;

/// Distinguishes a resource's input channel.
///
/// Kept as an enum (rather than a string tag) so comparators match on it
/// exhaustively instead of string-comparing a `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A concrete JSON value the schema must describe.
    Example,
    /// A partial JSON Schema fragment contributing declared attributes.
    SchemaFragment,
}

/// An input fragment plus the id of the source that produced it.
///
/// Ids are assigned once, in registration order, by [`crate::Converter`] and
/// never change. They're threaded through every recursive descent so that
/// any schema attribute or union variant can be traced back to the sources
/// that justified it (`j2sElementTrigger` in the output's internal
/// representation, stripped before the final schema is returned).
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: u64,
    pub kind: ResourceKind,
    pub content: Value,
}

impl Resource {
    pub fn new(id: u64, kind: ResourceKind, content: Value) -> Self {
        Self { id, kind, content }
    }

    /// A resource derived from this one (e.g. a nested property value),
    /// carrying the *parent's* id forward — nested evidence is still
    /// attributed to the original top-level source.
    pub fn derive(&self, content: Value) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            content,
        }
    }

    pub fn is_example(&self) -> bool {
        matches!(self.kind, ResourceKind::Example)
    }

    pub fn is_schema(&self) -> bool {
        matches!(self.kind, ResourceKind::SchemaFragment)
    }
}
