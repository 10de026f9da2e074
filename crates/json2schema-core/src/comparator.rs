//! The [`Comparator`] contract: one rule in the ordered chain the walker
//! runs at every tree position.
//!
//! A comparator is *discriminating, not validating* — if the evidence in
//! front of it doesn't look like something it knows how to handle, it
//! declines via `can_process` rather than raising an error. Only broken
//! internal invariants (caught by the walker itself) are fatal.

use serde_json::Map;
use serde_json::Value;

use crate::context::ProcessingContext;
use crate::node::SchemaNode;

/// What a comparator contributes at one position: keys merged directly into
/// the node (`patch`), and/or whole sibling variants to open a union over
/// (`alternatives`).
///
/// At most one of the two is meaningful at a time in practice (a comparator
/// either narrows the node in place or explodes it into variants), but
/// nothing stops both being `None` — most comparators decline most of the
/// time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ComparatorOutput {
    pub patch: Option<Map<String, Value>>,
    pub alternatives: Option<Vec<Map<String, Value>>>,
}

impl ComparatorOutput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn patch(patch: Map<String, Value>) -> Self {
        Self {
            patch: Some(patch),
            alternatives: None,
        }
    }

    pub fn alternatives(alternatives: Vec<Map<String, Value>>) -> Self {
        Self {
            patch: None,
            alternatives: Some(alternatives),
        }
    }
}

/// A single rule in the comparator chain.
///
/// `can_process` is consulted before `process` at every position on every
/// call — it must be cheap and side-effect-free.
pub trait Comparator: Send + Sync {
    fn name(&self) -> &'static str;

    fn can_process(&self, ctx: &ProcessingContext, path: &str, node: &SchemaNode) -> bool;

    fn process(&self, ctx: &ProcessingContext, path: &str, node: &SchemaNode) -> ComparatorOutput;
}
