//! [`Converter`] — the public facade: register example documents and/or
//! schema fragments, then run inference once over everything registered.

use serde_json::Value;

use crate::comparator::Comparator;
use crate::comparators::{
    EmptyComparator, FormatComparator, RequiredComparator, SchemaVersionComparator,
    TraceCleanupComparator, TypeComparator,
};
use crate::config::ConverterConfig;
use crate::context::ProcessingContext;
use crate::error::ConvertError;
use crate::format_detector::FormatDetector;
use crate::node::{SchemaNode, PSEUDO_ARRAY_ATTR, TRIGGER_ATTR};
use crate::pseudo_array::{DefaultPseudoArrayHandler, PseudoArrayHandler};
use crate::resource::{Resource, ResourceKind};
use crate::walker::Walker;

/// Accumulates example documents and schema fragments, assigns each a
/// stable source id, and infers a single schema describing all of them.
pub struct Converter {
    config: ConverterConfig,
    pseudo_handler: Box<dyn PseudoArrayHandler>,
    format_detector: FormatDetector,
    extra_comparators: Vec<Box<dyn Comparator>>,
    next_id: u64,
    schemas: Vec<Resource>,
    examples: Vec<Resource>,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            pseudo_handler: Box::new(DefaultPseudoArrayHandler),
            format_detector: FormatDetector::default(),
            extra_comparators: Vec::new(),
            next_id: 0,
            schemas: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Swap the pseudo-array detection strategy (default: all-numeric keys).
    pub fn with_pseudo_array_handler(mut self, handler: impl PseudoArrayHandler + 'static) -> Self {
        self.pseudo_handler = Box::new(handler);
        self
    }

    /// Swap the string-format regex catalog.
    pub fn with_format_detector(mut self, detector: FormatDetector) -> Self {
        self.format_detector = detector;
        self
    }

    /// Register an additional comparator, run after the default chain (and
    /// before the final trace-cleanup pair) at every position.
    pub fn register(mut self, comparator: impl Comparator + 'static) -> Self {
        self.extra_comparators.push(Box::new(comparator));
        self
    }

    /// Add an example document; returns its assigned source id.
    pub fn add_example(&mut self, value: Value) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.examples.push(Resource::new(id, ResourceKind::Example, value));
        id
    }

    /// Add a partial JSON Schema fragment; returns its assigned source id.
    pub fn add_schema(&mut self, value: Value) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.schemas
            .push(Resource::new(id, ResourceKind::SchemaFragment, value));
        id
    }

    /// Run inference over every resource registered so far.
    pub fn run(&self) -> Result<Value, ConvertError> {
        tracing::debug!(
            schemas = self.schemas.len(),
            examples = self.examples.len(),
            "starting inference run"
        );

        let head: Vec<Box<dyn Comparator>> = vec![
            Box::new(TypeComparator),
            Box::new(FormatComparator::new(self.format_detector.clone())),
            Box::new(RequiredComparator),
            Box::new(EmptyComparator),
            Box::new(SchemaVersionComparator::new(self.config.schema_version.clone())),
        ];
        let tail: Vec<Box<dyn Comparator>> = vec![
            Box::new(TraceCleanupComparator::new(TRIGGER_ATTR)),
            Box::new(TraceCleanupComparator::new(PSEUDO_ARRAY_ATTR)),
        ];
        let comparators: Vec<&dyn Comparator> = head
            .iter()
            .map(|c| c.as_ref())
            .chain(self.extra_comparators.iter().map(|c| c.as_ref()))
            .chain(tail.iter().map(|c| c.as_ref()))
            .collect();

        let ctx = ProcessingContext::new(self.schemas.clone(), self.examples.clone(), false);
        let walker = Walker::new(
            &comparators,
            self.pseudo_handler.as_ref(),
            self.config.union_keyword.as_str(),
        );

        let node = walker.run_level(&ctx, "/", SchemaNode::new())?;
        let mut value = node.into_value();
        SchemaNode::strip_trace_attrs(&mut value);

        tracing::debug!("inference run complete");
        Ok(value)
    }
}
