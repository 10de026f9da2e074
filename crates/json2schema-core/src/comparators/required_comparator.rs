//! [`RequiredComparator`] — computes `required` for object-typed positions
//! as the intersection of (keys present in every example object) and (every
//! schema fragment's own declared `required` list).

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::node::SchemaNode;

#[derive(Debug, Default, Clone, Copy)]
pub struct RequiredComparator;

impl Comparator for RequiredComparator {
    fn name(&self) -> &'static str {
        "required"
    }

    fn can_process(&self, _ctx: &ProcessingContext, _path: &str, node: &SchemaNode) -> bool {
        matches!(node.type_name(), Some("object") | None)
    }

    fn process(&self, ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> ComparatorOutput {
        if ctx.examples.iter().any(|r| !r.content.is_object()) {
            return ComparatorOutput::none();
        }

        let example_objects: Vec<&Map<String, Value>> =
            ctx.examples.iter().filter_map(|r| r.content.as_object()).collect();

        let mut required_sets: Vec<BTreeSet<String>> = Vec::new();

        if !example_objects.is_empty() {
            let mut all_keys: BTreeSet<String> = BTreeSet::new();
            for obj in &example_objects {
                all_keys.extend(obj.keys().cloned());
            }
            let present_everywhere: BTreeSet<String> = all_keys
                .into_iter()
                .filter(|k| example_objects.iter().all(|obj| obj.contains_key(k)))
                .collect();
            required_sets.push(present_everywhere);
        }

        for schema in &ctx.schemas {
            let Some(obj) = schema.content.as_object() else {
                continue;
            };
            if let Some(Value::Array(required)) = obj.get("required") {
                let set: BTreeSet<String> = required
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect();
                required_sets.push(set);
            }
        }

        if required_sets.is_empty() {
            return ComparatorOutput::none();
        }

        let mut intersection = required_sets[0].clone();
        for set in &required_sets[1..] {
            intersection = intersection.intersection(set).cloned().collect();
        }

        if intersection.is_empty() {
            return ComparatorOutput::none();
        }

        let mut patch = Map::new();
        patch.insert(
            "required".to_string(),
            Value::Array(intersection.into_iter().map(Value::String).collect()),
        );
        ComparatorOutput::patch(patch)
    }
}
