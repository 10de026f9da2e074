//! [`SchemaNode`] — the partial schema being built at one tree position.
//!
//! Modelled as a thin wrapper around `serde_json::Map<String, Value>`
//! rather than a parallel typed AST: every comparator already thinks in
//! terms of JSON Schema keywords, so the node *is* the (still-growing)
//! output document. The two trace attributes (`j2sElementTrigger`,
//! `isPseudoArray`) get typed accessors so the rest of the codebase never
//! has to stringly-type them.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};

/// Internal attribute holding the sorted set of source ids that justify a
/// node or union variant. Stripped from the final output by the trace
/// cleanup pass.
pub const TRIGGER_ATTR: &str = "j2sElementTrigger";

/// Internal flag set by the pseudo-array detector. Stripped before output.
pub const PSEUDO_ARRAY_ATTR: &str = "isPseudoArray";

/// The union keywords a node may carry alternatives under.
pub const UNION_KEYWORDS: [&str; 3] = ["anyOf", "oneOf", "allOf"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode(Map<String, Value>);

impl SchemaNode {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// The union keyword present on this node, if any (`anyOf`/`oneOf`/`allOf`).
    pub fn union_keyword(&self) -> Option<&'static str> {
        UNION_KEYWORDS
            .iter()
            .find(|kw| self.0.contains_key(**kw))
            .copied()
    }

    pub fn union_variants(&self, keyword: &str) -> Vec<SchemaNode> {
        self.0
            .get(keyword)
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_object().cloned())
                    .map(SchemaNode::from_map)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_union_variants(&mut self, keyword: &str, variants: Vec<SchemaNode>) {
        let values: Vec<Value> = variants.into_iter().map(SchemaNode::into_value).collect();
        self.0.insert(keyword.to_string(), Value::Array(values));
    }

    /// Append `alternatives` under `keyword`, creating the array if absent.
    pub fn push_alternatives(&mut self, keyword: &str, alternatives: Vec<Map<String, Value>>) {
        let entry = self
            .0
            .entry(keyword.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(arr) = entry {
            arr.extend(alternatives.into_iter().map(Value::Object));
        }
    }

    pub fn triggers(&self) -> Option<BTreeSet<u64>> {
        self.0.get(TRIGGER_ATTR).and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(Value::as_u64)
                .collect::<BTreeSet<_>>()
        })
    }

    pub fn set_triggers(&mut self, ids: &BTreeSet<u64>) {
        let arr = ids.iter().map(|id| Value::from(*id)).collect();
        self.0.insert(TRIGGER_ATTR.to_string(), Value::Array(arr));
    }

    pub fn is_pseudo_array(&self) -> bool {
        self.0
            .get(PSEUDO_ARRAY_ATTR)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn set_pseudo_array(&mut self, flag: bool) {
        self.0.insert(PSEUDO_ARRAY_ATTR.to_string(), Value::Bool(flag));
    }

    /// Recursively remove trace attributes from this node and every nested
    /// schema reachable via `properties`, `items`, `patternProperties`, and
    /// the union keywords.
    pub fn strip_trace_attrs(value: &mut Value) {
        match value {
            Value::Object(map) => {
                map.remove(TRIGGER_ATTR);
                map.remove(PSEUDO_ARRAY_ATTR);
                if let Some(props) = map.get_mut("properties").and_then(Value::as_object_mut) {
                    for v in props.values_mut() {
                        Self::strip_trace_attrs(v);
                    }
                }
                if let Some(props) = map
                    .get_mut("patternProperties")
                    .and_then(Value::as_object_mut)
                {
                    for v in props.values_mut() {
                        Self::strip_trace_attrs(v);
                    }
                }
                if let Some(items) = map.get_mut("items") {
                    Self::strip_trace_attrs(items);
                }
                for kw in UNION_KEYWORDS {
                    if let Some(Value::Array(variants)) = map.get_mut(kw) {
                        for v in variants {
                            Self::strip_trace_attrs(v);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

impl Deref for SchemaNode {
    type Target = Map<String, Value>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SchemaNode {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<SchemaNode> for Value {
    fn from(node: SchemaNode) -> Self {
        node.into_value()
    }
}
