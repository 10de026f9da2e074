//! [`TraceCleanupComparator`] — marks an internal trace attribute as
//! scheduled for removal.
//!
//! Because trigger sets survive union folding (a parent needs a variant's
//! triggers to partition evidence for descent), the attribute can't simply
//! be deleted the moment a comparator decides it's done with it — deletion
//! is deferred to a single untyped removal pass the walker runs once over
//! the whole finished tree (`SchemaNode::strip_trace_attrs`), after every
//! position has been visited. This comparator exists so the chain still
//! names the concern explicitly and multiple instances can be registered,
//! one per attribute, composing the same way the other comparators do;
//! `can_process` reports whether the attribute is present (useful for
//! tracing output) but `process` never patches anything itself.

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::node::SchemaNode;

pub struct TraceCleanupComparator {
    attribute: &'static str,
}

impl TraceCleanupComparator {
    pub fn new(attribute: &'static str) -> Self {
        Self { attribute }
    }
}

impl Comparator for TraceCleanupComparator {
    fn name(&self) -> &'static str {
        "trace-cleanup"
    }

    fn can_process(&self, _ctx: &ProcessingContext, _path: &str, node: &SchemaNode) -> bool {
        node.contains_key(self.attribute)
    }

    fn process(&self, _ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> ComparatorOutput {
        ComparatorOutput::none()
    }
}
