//! Ordinal resolution: assigning each descriptor property a concrete
//! column index inside its own partition segment.

use std::collections::HashMap;

use crate::entity_map::TypeDescriptor;
use crate::result_set::ResultSchema;

use super::partition::PartitionPlan;

/// Resolved column name → absolute ordinal, for one descriptor against one
/// result shape.
pub type OrdinalMap = HashMap<String, usize>;

/// Match every descriptor property against its segment's columns.
///
/// The search key is the property's resolved (aliased) name, compared
/// case-insensitively, and the search never leaves the entity's segment,
/// which is what keeps `Id` in one entity from capturing `Id` in another.
/// Properties with no match are simply left out of the map; whether that
/// is an error belongs to the validator.
pub fn set_ordinals(
    schema: &ResultSchema,
    descriptors: &[TypeDescriptor],
    plan: &PartitionPlan,
) -> Vec<OrdinalMap> {
    descriptors
        .iter()
        .zip(plan.segments())
        .map(|(descriptor, segment)| {
            let mut ordinals = OrdinalMap::new();
            for column in descriptor.columns() {
                let resolved = descriptor.resolved_name(column);
                if let Some(ordinal) = schema.position_within(segment.start, segment.end, resolved)
                {
                    ordinals.insert(resolved.to_string(), ordinal);
                }
            }
            ordinals
        })
        .collect()
}
