//! [`EmptyComparator`] — flags an all-empty container as such: every example
//! seen is the same kind of container (object or array) and has zero
//! members, so the bound is asserted as `min = max = 0` instead of being
//! left unconstrained.

use serde_json::{Map, Value};

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::node::SchemaNode;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyComparator;

impl Comparator for EmptyComparator {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn can_process(&self, ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> bool {
        empty_container_kind(ctx).is_some()
    }

    fn process(&self, ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> ComparatorOutput {
        let mut patch = Map::new();
        match empty_container_kind(ctx) {
            Some(Kind::Object) => {
                patch.insert("minProperties".to_string(), Value::from(0));
                patch.insert("maxProperties".to_string(), Value::from(0));
            }
            Some(Kind::Array) => {
                patch.insert("minItems".to_string(), Value::from(0));
                patch.insert("maxItems".to_string(), Value::from(0));
            }
            None => return ComparatorOutput::none(),
        }
        ComparatorOutput::patch(patch)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Kind {
    Object,
    Array,
}

fn empty_container_kind(ctx: &ProcessingContext) -> Option<Kind> {
    if ctx.examples.is_empty() {
        return None;
    }
    let first_kind = match ctx.examples[0].content {
        Value::Object(_) => Kind::Object,
        Value::Array(_) => Kind::Array,
        _ => return None,
    };
    for example in &ctx.examples {
        match (&first_kind, &example.content) {
            (Kind::Object, Value::Object(obj)) if obj.is_empty() => {}
            (Kind::Array, Value::Array(arr)) if arr.is_empty() => {}
            _ => return None,
        }
    }
    Some(first_kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Resource, ResourceKind};
    use serde_json::json;

    fn example(id: u64, value: Value) -> Resource {
        Resource::new(id, ResourceKind::Example, value)
    }

    #[test]
    fn all_empty_objects_yield_zero_bounds() {
        let ctx = ProcessingContext::new(
            vec![],
            vec![example(0, json!({})), example(1, json!({}))],
            false,
        );
        let node = SchemaNode::new();
        let out = EmptyComparator.process(&ctx, "/", &node);
        let patch = out.patch.expect("patch");
        assert_eq!(patch.get("minProperties"), Some(&json!(0)));
        assert_eq!(patch.get("maxProperties"), Some(&json!(0)));
    }

    #[test]
    fn all_empty_arrays_yield_zero_bounds() {
        let ctx = ProcessingContext::new(
            vec![],
            vec![example(0, json!([])), example(1, json!([]))],
            false,
        );
        let node = SchemaNode::new();
        let out = EmptyComparator.process(&ctx, "/", &node);
        let patch = out.patch.expect("patch");
        assert_eq!(patch.get("minItems"), Some(&json!(0)));
        assert_eq!(patch.get("maxItems"), Some(&json!(0)));
    }

    #[test]
    fn declines_when_one_example_is_non_empty() {
        let ctx = ProcessingContext::new(
            vec![],
            vec![example(0, json!({})), example(1, json!({"a": 1}))],
            false,
        );
        assert!(!EmptyComparator.can_process(&ctx, "/", &SchemaNode::new()));
    }

    #[test]
    fn declines_when_container_kinds_differ() {
        let ctx = ProcessingContext::new(
            vec![],
            vec![example(0, json!({})), example(1, json!([]))],
            false,
        );
        assert!(!EmptyComparator.can_process(&ctx, "/", &SchemaNode::new()));
    }

    #[test]
    fn declines_on_non_container_examples() {
        let ctx = ProcessingContext::new(vec![], vec![example(0, json!("hi"))], false);
        assert!(!EmptyComparator.can_process(&ctx, "/", &SchemaNode::new()));
    }
}
