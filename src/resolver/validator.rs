//! Select-column and result-shape validation.
//!
//! Runs once per distinct query shape, never per row. Two checks live
//! here:
//!
//! - A structural check that always applies: every declared entity must own
//!   at least one column of the result. A query that maps an entity onto an
//!   empty segment is a wiring mistake, not a style choice.
//! - Strict column validation, opt-in per query: every non-ignored property
//!   of every descriptor must have resolved to a column inside its segment.
//!   The failure diagnostic enumerates, per target type, the expected
//!   select-column names that went unmapped, referencing the query text.

use crate::entity_map::TypeDescriptor;

use super::errors::{ResolveError, UnmappedColumns};
use super::ordinal::OrdinalMap;
use super::partition::PartitionPlan;


pub fn validate(
    descriptors: &[TypeDescriptor],
    ordinals: &[OrdinalMap],
    plan: &PartitionPlan,
    strict: bool,
    query: &str,
) -> Result<(), ResolveError> {
    if descriptors.len() != plan.len() {
        return Err(ResolveError::SchemaValidation {
            message: format!(
                "result shape mismatch for `{query}`: {} target types declared but {} partition \
                 segments resolved",
                descriptors.len(),
                plan.len()
            ),
            unmapped: Vec::new(),
        });
    }

    for (descriptor, segment) in descriptors.iter().zip(plan.segments()) {
        if segment.is_empty() {
            return Err(ResolveError::SchemaValidation {
                message: format!(
                    "result shape mismatch for `{query}`: no result columns in the segment \
                     mapped to target `{}`",
                    descriptor.target()
                ),
                unmapped: Vec::new(),
            });
        }
    }

    if !strict {
        return Ok(());
    }

    let mut unmapped = Vec::new();
    for (descriptor, ordinal_map) in descriptors.iter().zip(ordinals) {
        let missing: Vec<String> = descriptor
            .columns()
            .filter_map(|column| {
                let resolved = descriptor.resolved_name(column);
                if ordinal_map.contains_key(resolved) {
                    None
                } else {
                    Some(resolved.to_string())
                }
            })
            .collect();

        if !missing.is_empty() {
            unmapped.push(UnmappedColumns {
                target: descriptor.target().to_string(),
                columns: missing,
            });
        }
    }

    if unmapped.is_empty() {
        return Ok(());
    }

    Err(ResolveError::SchemaValidation {
        message: render_unmapped(&unmapped, query),
        unmapped,
    })
}

fn render_unmapped(unmapped: &[UnmappedColumns], query: &str) -> String {
    let mut message = format!(
        "strict column validation is enabled and the select statement in `{query}` left \
         expected columns unmapped."
    );
    for entry in unmapped {
        for column in &entry.columns {
            message.push_str(&format!(
                "\nSelect column: '{column}'\nTarget type: '{}'",
                entry.target
            ));
        }
    }
    message
}
