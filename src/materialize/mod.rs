//! Row materialization: turning resolved ordinals plus one row into
//! populated instances.
//!
//! Everything here is per-row and pure; all schema work (partitioning,
//! ordinals, validation) has already happened in the resolver. Null cells
//! fall back to the descriptor's registered default, or to the field's
//! `Default` value when none is registered, the documented non-strict
//! behavior.

pub mod dynamic;
pub mod errors;

// Re-export commonly used types
pub use dynamic::{dynamic_columns, materialize_dynamic, DynamicRow};
pub use errors::MaterializeError;

use crate::entity_map::{RowEntity, TypeDescriptor};
use crate::resolver::{OrdinalMap, ResolvedMapping};
use crate::result_set::{RowSource, Value};

/// Populate one `T` from one row, reading only the ordinals resolved for
/// this descriptor's segment.
pub fn materialize_entity<T: RowEntity>(
    descriptor: &TypeDescriptor,
    ordinals: &OrdinalMap,
    row: &[Value],
) -> Result<T, MaterializeError> {
    let mut entity = T::default();
    let null = Value::Null;

    for column in descriptor.columns() {
        let resolved = descriptor.resolved_name(column);

        let cell = match ordinals.get(resolved) {
            Some(&ordinal) => {
                row.get(ordinal)
                    .ok_or_else(|| MaterializeError::OrdinalOutOfRange {
                        column: resolved.to_string(),
                        ordinal,
                        width: row.len(),
                    })?
            }
            // Unresolved column: non-strict fallback to defaults.
            None => &null,
        };

        let effective = if cell.is_null() {
            match descriptor.default_for(column) {
                Some(default) => default,
                None => continue,
            }
        } else {
            cell
        };

        entity
            .assign(column, effective)
            .map_err(|source| MaterializeError::TypeMismatch {
                target: descriptor.target().to_string(),
                column: resolved.to_string(),
                source,
            })?;
    }

    Ok(entity)
}

/// Joined-row target: one entity per partition segment, materialized left
/// to right.
pub trait EntityTuple: Sized + Send + Sync + 'static {
    const ARITY: usize;

    fn materialize(mapping: &ResolvedMapping, row: &[Value]) -> Result<Self, MaterializeError>;
}

macro_rules! impl_entity_tuple {
    ($arity:literal => $($name:ident : $index:tt),+) => {
        impl<$($name: RowEntity),+> EntityTuple for ($($name,)+) {
            const ARITY: usize = $arity;

            fn materialize(
                mapping: &ResolvedMapping,
                row: &[Value],
            ) -> Result<Self, MaterializeError> {
                Ok(($(
                    materialize_entity::<$name>(
                        mapping.descriptor($index),
                        mapping.ordinals($index),
                        row,
                    )?,
                )+))
            }
        }
    };
}

impl_entity_tuple!(1 => A:0);
impl_entity_tuple!(2 => A:0, B:1);
impl_entity_tuple!(3 => A:0, B:1, C:2);
impl_entity_tuple!(4 => A:0, B:1, C:2, D:3);
impl_entity_tuple!(5 => A:0, B:1, C:2, D:3, E:4);
impl_entity_tuple!(6 => A:0, B:1, C:2, D:3, E:4, F:5);
impl_entity_tuple!(7 => A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_entity_tuple!(8 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);

/// Drain a single-entity cursor into materialized instances.
pub fn materialize_all<T, S>(
    mapping: &ResolvedMapping,
    source: &mut S,
) -> Result<Vec<T>, MaterializeError>
where
    T: RowEntity,
    S: RowSource + ?Sized,
{
    debug_assert_eq!(mapping.targets(), 1);

    let mut out = Vec::new();
    while let Some(row) = source.next_row() {
        out.push(materialize_entity::<T>(
            mapping.descriptor(0),
            mapping.ordinals(0),
            &row,
        )?);
    }
    Ok(out)
}

/// Drain a multi-entity cursor into tuples, one entity per segment.
pub fn materialize_joined<T, S>(
    mapping: &ResolvedMapping,
    source: &mut S,
) -> Result<Vec<T>, MaterializeError>
where
    T: EntityTuple,
    S: RowSource + ?Sized,
{
    debug_assert_eq!(mapping.targets(), T::ARITY);

    let mut out = Vec::new();
    while let Some(row) = source.next_row() {
        out.push(T::materialize(mapping, &row)?);
    }
    Ok(out)
}
