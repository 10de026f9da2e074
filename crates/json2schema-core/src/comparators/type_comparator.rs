//! [`TypeComparator`] — the first comparator to fire at a fresh position:
//! decides the node's `type`, opening a union when the evidence disagrees.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::node::{SchemaNode, TRIGGER_ATTR};

/// The JSON type of a concrete value: `null`, `boolean`, `integer`, `number`,
/// `string`, `array`, or `object`. Whole numbers are `integer`; anything with
/// a fractional or exponent form is `number`.
pub fn infer_json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The type(s) a schema fragment declares, in first-seen order with
/// duplicates removed: the `type` keyword directly if present (string or
/// array form); otherwise the concatenation of `anyOf`/`oneOf` branch types,
/// plus the intersection of `allOf` branch types if non-empty; otherwise a
/// structural guess from `properties`/`items`.
pub fn infer_schema_types(schema: &Value) -> Vec<String> {
    let Some(obj) = schema.as_object() else {
        return Vec::new();
    };

    match obj.get("type") {
        Some(Value::String(t)) => return vec![t.clone()],
        Some(Value::Array(arr)) => {
            return dedup_preserve_order(arr.iter().filter_map(Value::as_str).map(String::from));
        }
        _ => {}
    }

    let mut result = Vec::new();
    for keyword in ["anyOf", "oneOf"] {
        if let Some(Value::Array(branches)) = obj.get(keyword) {
            for branch in branches {
                result.extend(infer_schema_types(branch));
            }
        }
    }

    if let Some(Value::Array(branches)) = obj.get("allOf") {
        let mut intersection: Option<BTreeSet<String>> = None;
        for branch in branches {
            let types: BTreeSet<String> = infer_schema_types(branch).into_iter().collect();
            if types.is_empty() {
                continue;
            }
            intersection = Some(match intersection {
                None => types,
                Some(acc) => acc.intersection(&types).cloned().collect(),
            });
        }
        if let Some(inter) = intersection {
            result.extend(inter);
        }
    }

    if !result.is_empty() {
        return dedup_preserve_order(result);
    }

    if obj.contains_key("properties") {
        return vec!["object".to_string()];
    }
    if obj.contains_key("items") {
        return vec!["array".to_string()];
    }
    Vec::new()
}

fn dedup_preserve_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TypeComparator;

impl Comparator for TypeComparator {
    fn name(&self) -> &'static str {
        "type"
    }

    fn can_process(&self, ctx: &ProcessingContext, _path: &str, node: &SchemaNode) -> bool {
        node.type_name().is_none() && !ctx.is_empty()
    }

    fn process(&self, ctx: &ProcessingContext, _path: &str, _node: &SchemaNode) -> ComparatorOutput {
        // First-seen order over schemas, then examples, matches the
        // registration order each source was added in.
        let mut order: Vec<String> = Vec::new();
        let mut ids_by_type: std::collections::HashMap<String, BTreeSet<u64>> =
            std::collections::HashMap::new();

        for schema in &ctx.schemas {
            for t in infer_schema_types(&schema.content) {
                if !ids_by_type.contains_key(&t) {
                    order.push(t.clone());
                }
                ids_by_type.entry(t).or_default().insert(schema.id);
            }
        }
        for example in &ctx.examples {
            let t = infer_json_type(&example.content).to_string();
            if !ids_by_type.contains_key(&t) {
                order.push(t.clone());
            }
            ids_by_type.entry(t).or_default().insert(example.id);
        }

        // integer ⊂ number: a position that sees both collapses to number.
        if ids_by_type.contains_key("integer") && ids_by_type.contains_key("number") {
            let integer_ids = ids_by_type.remove("integer").unwrap_or_default();
            ids_by_type
                .get_mut("number")
                .expect("checked above")
                .extend(integer_ids);
            order.retain(|t| t != "integer");
        }

        let mut variants: Vec<Map<String, Value>> = order
            .into_iter()
            .filter_map(|t| {
                let ids = ids_by_type.get(&t)?;
                let mut v = Map::new();
                v.insert("type".to_string(), Value::String(t));
                v.insert(
                    TRIGGER_ATTR.to_string(),
                    Value::Array(ids.iter().map(|id| Value::from(*id)).collect()),
                );
                Some(v)
            })
            .collect();

        if variants.is_empty() {
            return ComparatorOutput::none();
        }

        if ctx.sealed || variants.len() == 1 {
            let mut chosen = variants.remove(0);
            chosen.remove(TRIGGER_ATTR);
            return ComparatorOutput::patch(chosen);
        }

        ComparatorOutput::alternatives(variants)
    }
}
