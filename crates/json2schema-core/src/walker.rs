//! The walker: one recursive operation, `run_level`, that runs the
//! comparator chain at a position, resolves any union it opens, and then
//! structurally descends into `properties`/`items` (or `patternProperties`,
//! for a pseudo-array) as the node's settled type demands.

use serde_json::{Map, Value};

use crate::comparator::Comparator;
use crate::context::ProcessingContext;
use crate::error::ConvertError;
use crate::node::SchemaNode;
use crate::pseudo_array::PseudoArrayHandler;
use crate::schema_utils::child_path;

pub struct Walker<'a> {
    comparators: &'a [&'a dyn Comparator],
    pseudo_handler: &'a dyn PseudoArrayHandler,
    union_keyword: &'static str,
}

impl<'a> Walker<'a> {
    pub fn new(
        comparators: &'a [&'a dyn Comparator],
        pseudo_handler: &'a dyn PseudoArrayHandler,
        union_keyword: &'static str,
    ) -> Self {
        Self {
            comparators,
            pseudo_handler,
            union_keyword,
        }
    }

    /// Run the comparator chain at `path` against `ctx`, seeded with
    /// `prev` (the node built so far at this position — empty on first
    /// entry, an already-typed variant when re-entering from union
    /// resolution), then resolve any union and descend structurally.
    pub fn run_level(
        &self,
        ctx: &ProcessingContext,
        path: &str,
        prev: SchemaNode,
    ) -> Result<SchemaNode, ConvertError> {
        let mut node = prev;

        tracing::debug!(
            path,
            schemas = ctx.schemas.len(),
            examples = ctx.examples.len(),
            sealed = ctx.sealed,
            "entering position"
        );

        for comparator in self.comparators {
            if comparator.can_process(ctx, path, &node) {
                let output = comparator.process(ctx, path, &node);
                tracing::trace!(path, comparator = comparator.name(), "fired");
                if let Some(patch) = output.patch {
                    for (key, value) in patch {
                        node.insert(key, value);
                    }
                }
                if let Some(alternatives) = output.alternatives {
                    node.push_alternatives(self.union_keyword, alternatives);
                }
            }
        }

        if let Some(keyword) = node.union_keyword() {
            let variants = node.union_variants(keyword);
            let mut resolved = Vec::with_capacity(variants.len());
            for variant in variants {
                let ids = variant.triggers().ok_or_else(|| ConvertError::InternalInvariantViolation {
                    path: path.to_string(),
                    message: "union variant missing trigger set".to_string(),
                })?;
                if ids.is_empty() {
                    return Err(ConvertError::InternalInvariantViolation {
                        path: path.to_string(),
                        message: "union variant has an empty trigger set".to_string(),
                    });
                }
                let narrowed = ctx.narrowed_to(&ids, true);
                resolved.push(self.run_level(&narrowed, path, variant)?);
            }
            node.set_union_variants(keyword, resolved);
            return Ok(node);
        }

        self.descend(ctx, path, node)
    }

    fn descend(
        &self,
        ctx: &ProcessingContext,
        path: &str,
        node: SchemaNode,
    ) -> Result<SchemaNode, ConvertError> {
        match node.type_name() {
            Some("object") => self.run_object(ctx, path, node),
            Some("array") => self.run_array(ctx, path, node),
            _ => Ok(node),
        }
    }

    fn run_object(
        &self,
        ctx: &ProcessingContext,
        path: &str,
        mut node: SchemaNode,
    ) -> Result<SchemaNode, ConvertError> {
        let prop_names = collect_property_names(ctx);
        if prop_names.is_empty() {
            return Ok(node);
        }

        let (is_pseudo_array, pattern) = self.pseudo_handler.is_pseudo_array(&prop_names);
        if is_pseudo_array {
            let pattern = pattern.expect("pseudo-array handler must supply a pattern when true");

            let mut child_schemas = Vec::new();
            let mut child_examples = Vec::new();
            for name in &prop_names {
                let (schemas, examples) = gather_property_candidates(ctx, name);
                child_schemas.extend(schemas);
                child_examples.extend(examples);
            }
            let child_ctx = ProcessingContext::new(child_schemas, child_examples, false);
            let value_path = child_path(path, "patternProperties");
            let value_node = self.run_level(&child_ctx, &value_path, SchemaNode::new())?;

            node.remove("properties");
            node.remove("required");
            node.insert("type".to_string(), Value::String("array".to_string()));
            let mut pattern_properties = Map::new();
            pattern_properties.insert(pattern, value_node.into_value());
            node.insert(
                "patternProperties".to_string(),
                Value::Object(pattern_properties),
            );
            node.set_pseudo_array(true);
            return Ok(node);
        }

        let mut properties = Map::new();
        for name in &prop_names {
            let (schemas, examples) = gather_property_candidates(ctx, name);
            if schemas.is_empty() && examples.is_empty() {
                continue;
            }
            let child_ctx = ProcessingContext::new(schemas, examples, false);
            let prop_path = child_path(path, &format!("properties/{name}"));
            let child_node = self.run_level(&child_ctx, &prop_path, SchemaNode::new())?;
            properties.insert(name.clone(), child_node.into_value());
        }
        if !properties.is_empty() {
            node.insert("properties".to_string(), Value::Object(properties));
        }
        Ok(node)
    }

    fn run_array(
        &self,
        ctx: &ProcessingContext,
        path: &str,
        mut node: SchemaNode,
    ) -> Result<SchemaNode, ConvertError> {
        let mut item_schemas = Vec::new();
        let mut item_examples = Vec::new();

        for schema in &ctx.schemas {
            let Some(obj) = schema.content.as_object() else {
                continue;
            };
            if obj.get("type").and_then(Value::as_str) != Some("array") {
                continue;
            }
            if let Some(items) = obj.get("items") {
                item_schemas.push(schema.derive(items.clone()));
            }
        }
        for example in &ctx.examples {
            if let Some(arr) = example.content.as_array() {
                for element in arr {
                    item_examples.push(example.derive(element.clone()));
                }
            }
        }

        if item_schemas.is_empty() && item_examples.is_empty() {
            return Ok(node);
        }

        let item_ctx = ProcessingContext::new(item_schemas, item_examples, false);
        let items_path = child_path(path, "items");
        let items_node = self.run_level(&item_ctx, &items_path, SchemaNode::new())?;
        node.insert("items".to_string(), items_node.into_value());
        Ok(node)
    }
}

/// The union of every schema fragment's `properties` keys and every example
/// object's own keys, sorted ascending for determinism.
fn collect_property_names(ctx: &ProcessingContext) -> Vec<String> {
    let mut names = std::collections::BTreeSet::new();
    for schema in &ctx.schemas {
        if let Some(Value::Object(props)) = schema.content.as_object().and_then(|o| o.get("properties")) {
            names.extend(props.keys().cloned());
        }
    }
    for (_, obj) in ctx.example_objects() {
        names.extend(obj.keys().cloned());
    }
    names.into_iter().collect()
}

/// Every schema fragment's declared schema for `name` (from `properties`)
/// and every example object's own value for `name`, each still carrying its
/// parent's source id.
fn gather_property_candidates(
    ctx: &ProcessingContext,
    name: &str,
) -> (Vec<crate::resource::Resource>, Vec<crate::resource::Resource>) {
    let mut schemas = Vec::new();
    let mut examples = Vec::new();

    for schema in &ctx.schemas {
        if let Some(Value::Object(props)) = schema.content.as_object().and_then(|o| o.get("properties")) {
            if let Some(value) = props.get(name) {
                schemas.push(schema.derive(value.clone()));
            }
        }
    }
    for (resource, obj) in ctx.example_objects() {
        if let Some(value) = obj.get(name) {
            examples.push(resource.derive(value.clone()));
        }
    }

    (schemas, examples)
}
