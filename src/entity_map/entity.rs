//! The per-type adapter between result columns and struct fields.

use crate::result_set::{CellError, Value};

/// A type that can be populated from result-set columns.
///
/// Implementations are plain field tables generated at configuration time
/// (usually via [`impl_row_entity!`](crate::impl_row_entity)); nothing is
/// reflected per row. `columns()` is the declared, settable inventory the
/// descriptor layer starts from; `assign` writes one cell into the field
/// backing `column`.
pub trait RowEntity: Default + Send + Sync + 'static {
    /// Entity name used in diagnostics.
    fn target() -> &'static str;

    /// Declared, settable column names in declaration order.
    fn columns() -> &'static [&'static str];

    /// Assign the cell read for `column` (logical, unaliased name, matched
    /// case-insensitively). Columns the type does not declare are ignored.
    fn assign(&mut self, column: &str, value: &Value) -> Result<(), CellError>;
}

/// Generate a [`RowEntity`] impl from a column ↔ field table.
///
/// ```
/// use rowmap::impl_row_entity;
///
/// #[derive(Debug, Default)]
/// struct President {
///     id: i64,
///     first_name: String,
/// }
///
/// impl_row_entity!(President {
///     "Id" => id,
///     "FirstName" => first_name,
/// });
/// ```
///
/// Field types convert through
/// [`FromCell`](crate::result_set::FromCell), so a mismatched cell fails
/// the row instead of being coerced.
#[macro_export]
macro_rules! impl_row_entity {
    ($target:ty { $($column:literal => $field:ident),+ $(,)? }) => {
        impl $crate::entity_map::RowEntity for $target {
            fn target() -> &'static str {
                stringify!($target)
            }

            fn columns() -> &'static [&'static str] {
                &[$($column),+]
            }

            fn assign(
                &mut self,
                column: &str,
                value: &$crate::result_set::Value,
            ) -> Result<(), $crate::result_set::CellError> {
                $(
                    if column.eq_ignore_ascii_case($column) {
                        self.$field = $crate::result_set::FromCell::from_cell(value)?;
                        return Ok(());
                    }
                )+
                Ok(())
            }
        }
    };
}
