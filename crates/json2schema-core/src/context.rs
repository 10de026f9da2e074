//! [`ProcessingContext`] — the evidence bundle visible to one recursion
//! frame of the walker.

use crate::resource::Resource;
use serde_json::Value;

/// The schemas and examples visible at one tree position, plus whether new
/// union branches may be opened here.
///
/// Immutable: every recursive descent builds a fresh `ProcessingContext` for
/// its children rather than mutating this one.
#[derive(Debug, Clone, Default)]
pub struct ProcessingContext {
    pub schemas: Vec<Resource>,
    pub examples: Vec<Resource>,
    /// `true` inside a context where introducing new union branches is
    /// forbidden — set when descending into an already-opened union
    /// variant's subtree (see [`crate::walker`]).
    pub sealed: bool,
}

impl ProcessingContext {
    pub fn new(schemas: Vec<Resource>, examples: Vec<Resource>, sealed: bool) -> Self {
        Self {
            schemas,
            examples,
            sealed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.examples.is_empty()
    }

    /// Every example whose content is a JSON object.
    pub fn example_objects(&self) -> impl Iterator<Item = (&Resource, &serde_json::Map<String, Value>)> {
        self.examples
            .iter()
            .filter_map(|r| r.content.as_object().map(|obj| (r, obj)))
    }

    /// A context narrowed to only the resources whose id appears in
    /// `allowed_ids` — used when descending into a union variant so that
    /// sibling-variant evidence doesn't pollute this variant's subtree.
    pub fn narrowed_to(&self, allowed_ids: &std::collections::BTreeSet<u64>, sealed: bool) -> Self {
        Self {
            schemas: self
                .schemas
                .iter()
                .filter(|r| allowed_ids.contains(&r.id))
                .cloned()
                .collect(),
            examples: self
                .examples
                .iter()
                .filter(|r| allowed_ids.contains(&r.id))
                .cloned()
                .collect(),
            sealed,
        }
    }
}
