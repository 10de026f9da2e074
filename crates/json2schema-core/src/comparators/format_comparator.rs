//! [`FormatComparator`] — refines `string`-typed positions by detected
//! semantic format, recursing through any union already opened by
//! [`crate::comparators::TypeComparator`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::comparator::{Comparator, ComparatorOutput};
use crate::context::ProcessingContext;
use crate::format_detector::FormatDetector;
use crate::node::{SchemaNode, TRIGGER_ATTR, UNION_KEYWORDS};

pub struct FormatComparator {
    detector: FormatDetector,
}

impl FormatComparator {
    pub fn new(detector: FormatDetector) -> Self {
        Self { detector }
    }
}

impl Default for FormatComparator {
    fn default() -> Self {
        Self::new(FormatDetector::default())
    }
}

impl Comparator for FormatComparator {
    fn name(&self) -> &'static str {
        "format"
    }

    fn can_process(&self, _ctx: &ProcessingContext, _path: &str, node: &SchemaNode) -> bool {
        has_string_type(node)
    }

    fn process(&self, ctx: &ProcessingContext, _path: &str, node: &SchemaNode) -> ComparatorOutput {
        let rewritten = apply_format(node.clone().into_map(), ctx, &self.detector);
        if rewritten.len() == 1 {
            ComparatorOutput::patch(rewritten.into_iter().next().expect("len checked"))
        } else {
            ComparatorOutput::alternatives(rewritten)
        }
    }
}

/// Whether `node` is, or wraps via a union keyword, a `string`-typed
/// position anywhere in its immediate alternative set.
fn has_string_type(node: &SchemaNode) -> bool {
    if node.get("type").and_then(Value::as_str) == Some("string") {
        return true;
    }
    for kw in UNION_KEYWORDS {
        if let Some(Value::Array(variants)) = node.get(kw) {
            if variants.iter().any(|v| {
                v.as_object()
                    .map(|o| o.get("type").and_then(Value::as_str) == Some("string"))
                    .unwrap_or(false)
            }) {
                return true;
            }
        }
    }
    false
}

/// Recursively rewrites a node: a bare `string`-typed node explodes into one
/// variant per detected format (plus one `None`-format bucket for whatever
/// doesn't match any pattern); a node carrying a union keyword has each of
/// its children rewritten in place and the results flattened back in.
///
/// Always returns a non-empty list; the caller treats a singleton as "no
/// split occurred" (patch) and anything longer as freshly opened
/// alternatives.
fn apply_format(
    node: Map<String, Value>,
    ctx: &ProcessingContext,
    detector: &FormatDetector,
) -> Vec<Map<String, Value>> {
    if node.get("type").and_then(Value::as_str) == Some("string") {
        let base_triggers: std::collections::BTreeSet<u64> = node
            .get(TRIGGER_ATTR)
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default();

        let mut buckets: BTreeMap<Option<String>, std::collections::BTreeSet<u64>> =
            BTreeMap::new();
        buckets.insert(None, base_triggers);

        for schema in &ctx.schemas {
            let Some(obj) = schema.content.as_object() else {
                continue;
            };
            if obj.get("type").and_then(Value::as_str) != Some("string") {
                continue;
            }
            let format = obj.get("format").and_then(Value::as_str).map(String::from);
            buckets.entry(format.clone()).or_default().insert(schema.id);
            if format.is_some() {
                if let Some(none_bucket) = buckets.get_mut(&None) {
                    none_bucket.remove(&schema.id);
                }
            }
        }
        for example in &ctx.examples {
            let Some(s) = example.content.as_str() else {
                continue;
            };
            let format = detector.detect(s, "string");
            buckets
                .entry(format.clone())
                .or_default()
                .insert(example.id);
            if format.is_some() {
                if let Some(none_bucket) = buckets.get_mut(&None) {
                    none_bucket.remove(&example.id);
                }
            }
        }

        return buckets
            .into_iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(format, ids)| {
                let mut variant = Map::new();
                variant.insert("type".to_string(), Value::String("string".to_string()));
                variant.insert(
                    TRIGGER_ATTR.to_string(),
                    Value::Array(ids.into_iter().map(Value::from).collect()),
                );
                if let Some(f) = format {
                    variant.insert("format".to_string(), Value::String(f));
                }
                variant
            })
            .collect();
    }

    let mut node = node;
    for kw in UNION_KEYWORDS {
        if let Some(Value::Array(children)) = node.remove(kw) {
            let mut rewritten = Vec::with_capacity(children.len());
            for child in children {
                match child {
                    Value::Object(child_map) => {
                        rewritten.extend(
                            apply_format(child_map, ctx, detector)
                                .into_iter()
                                .map(Value::Object),
                        );
                    }
                    other => rewritten.push(other),
                }
            }
            node.insert(kw.to_string(), Value::Array(rewritten));
        }
    }
    vec![node]
}
