//! Infers a JSON Schema (draft 2020-12) from a collection of example JSON
//! documents and/or partial JSON Schema fragments.
//!
//! The entry point is [`Converter`]: register resources with
//! [`Converter::add_example`] / [`Converter::add_schema`], then call
//! [`Converter::run`] to fold everything into one schema. Differences
//! between sources become union variants (grouped under the configured
//! [`UnionKeyword`]); shared structure is merged directly.

pub mod comparator;
pub mod comparators;
pub mod config;
pub mod context;
pub mod converter;
pub mod error;
pub mod format_detector;
pub mod io;
pub mod node;
pub mod pseudo_array;
pub mod resource;
pub mod schema_utils;
pub mod walker;

pub use comparator::{Comparator, ComparatorOutput};
pub use config::{ConverterConfig, UnionKeyword};
pub use context::ProcessingContext;
pub use converter::Converter;
pub use error::ConvertError;
pub use format_detector::FormatDetector;
pub use node::SchemaNode;
pub use pseudo_array::{DefaultPseudoArrayHandler, NeverPseudoArray, PseudoArrayHandler};
pub use resource::{Resource, ResourceKind};
