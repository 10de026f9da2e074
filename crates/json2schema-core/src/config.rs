//! Configuration for schema inference.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// The keyword used to group sibling variants when evidence conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnionKeyword {
    AnyOf,
    OneOf,
    AllOf,
}

impl UnionKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnionKeyword::AnyOf => "anyOf",
            UnionKeyword::OneOf => "oneOf",
            UnionKeyword::AllOf => "allOf",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConvertError> {
        match s {
            "anyOf" | "any-of" | "anyof" => Ok(UnionKeyword::AnyOf),
            "oneOf" | "one-of" | "oneof" => Ok(UnionKeyword::OneOf),
            "allOf" | "all-of" | "allof" => Ok(UnionKeyword::AllOf),
            other => Err(ConvertError::ConfigurationError {
                message: format!("unknown union keyword: {other}"),
            }),
        }
    }
}

impl Default for UnionKeyword {
    fn default() -> Self {
        UnionKeyword::AnyOf
    }
}

/// Options controlling how [`crate::Converter::run`] folds evidence into a
/// schema.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case`, matching a config-file-friendly
/// naming convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConverterConfig {
    /// Keyword alternatives are grouped under. Default: `anyOf`.
    pub union_keyword: UnionKeyword,
    /// URI emitted as `$schema` at the root by `SchemaVersionComparator`.
    pub schema_version: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            union_keyword: UnionKeyword::AnyOf,
            schema_version: "https://json-schema.org/draft/2020-12/schema".to_string(),
        }
    }
}
