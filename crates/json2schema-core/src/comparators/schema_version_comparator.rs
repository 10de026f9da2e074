//! [`SchemaVersionComparator`] — stamps the root position with `$schema`.
//!
//! A union variant re-enters [`crate::walker::Walker::run_level`] at the
//! same path as the true root (`"/"`) — only `ctx.sealed` tells the two
//! apart, since a variant re-entry is always narrowed with `sealed = true`
//! while the genuine root context is never sealed. Without that check this
//! comparator would fire again inside every top-level union variant and
//! leak `$schema` into each of them.

use serde_json::{Map, Value};

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::node::SchemaNode;

pub struct SchemaVersionComparator {
    schema_version: String,
}

impl SchemaVersionComparator {
    pub fn new(schema_version: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
        }
    }
}

impl Comparator for SchemaVersionComparator {
    fn name(&self) -> &'static str {
        "schema-version"
    }

    fn can_process(&self, ctx: &ProcessingContext, path: &str, node: &SchemaNode) -> bool {
        path == "/" && !ctx.sealed && !node.contains_key("$schema")
    }

    fn process(&self, _ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> ComparatorOutput {
        let mut patch = Map::new();
        patch.insert(
            "$schema".to_string(),
            Value::String(self.schema_version.clone()),
        );
        ComparatorOutput::patch(patch)
    }
}
