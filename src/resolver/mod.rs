//! Ordinal and partition resolution for one concrete result shape.
//!
//! This is where a query's descriptors meet the columns the driver actually
//! returned: the partition plan slices the flat row into per-entity
//! segments, every property gets an absolute column index inside its own
//! segment, and the validator cross-checks the outcome before any row is
//! materialized.

pub mod errors;
pub mod ordinal;
pub mod partition;
pub mod validator;

// Re-export commonly used types
pub use errors::{ResolveError, UnmappedColumns};
pub use ordinal::{set_ordinals, OrdinalMap};
pub use partition::{resolve_partition, PartitionPlan, Segment};
pub use validator::validate;

use log::debug;

use crate::entity_map::{EntityRegistry, TypeDescriptor};
use crate::result_set::ResultSchema;

/// A mapping resolved against one concrete result shape.
///
/// The descriptors inside are reusable; the ordinal maps and the partition
/// plan are only valid for the schema they were computed against and must
/// be recomputed whenever the result shape could differ.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMapping {
    descriptors: Vec<TypeDescriptor>,
    ordinals: Vec<OrdinalMap>,
    plan: PartitionPlan,
    query: String,
}

impl ResolvedMapping {
    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, index: usize) -> &TypeDescriptor {
        &self.descriptors[index]
    }

    /// Ordinal map of the `index`-th target, keyed by resolved column name.
    pub fn ordinals(&self, index: usize) -> &OrdinalMap {
        &self.ordinals[index]
    }

    pub fn plan(&self) -> &PartitionPlan {
        &self.plan
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn targets(&self) -> usize {
        self.descriptors.len()
    }
}

/// Resolve `registry` against `schema`: partition, assign ordinals,
/// validate.
///
/// `markers` name the first column of each entity after the first (empty
/// for single-entity queries); `strict` additionally requires every
/// declared property to have resolved. Calling this twice with identical
/// arguments over the same schema yields equal mappings.
pub fn build_mapping(
    schema: &ResultSchema,
    registry: EntityRegistry,
    markers: &[String],
    strict: bool,
    query: &str,
) -> Result<ResolvedMapping, ResolveError> {
    let descriptors = registry.into_descriptors();
    if descriptors.is_empty() {
        return Err(ResolveError::SchemaValidation {
            message: format!("no target types declared for `{query}`"),
            unmapped: Vec::new(),
        });
    }

    let plan = resolve_partition(schema, descriptors.len(), markers, query)?;
    let ordinals = set_ordinals(schema, &descriptors, &plan);
    validate(&descriptors, &ordinals, &plan, strict, query)?;

    debug!(
        "resolved {} target(s) over {} result columns for `{query}`",
        descriptors.len(),
        schema.len()
    );

    Ok(ResolvedMapping {
        descriptors,
        ordinals,
        plan,
        query: query.to_string(),
    })
}
