//! Result-set model shared by every mapping stage.
//!
//! A driver collaborator produces an ordered column-name list (the result
//! schema) and a forward-only row cursor; nothing in this crate opens a
//! connection or issues SQL. Cell values arrive as `serde_json::Value`, the
//! one representation both the typed and the schema-less paths understand.

pub mod schema;
pub mod source;
pub mod value;

// Re-export commonly used types
pub use schema::ResultSchema;
pub use source::{MemoryRows, RowSource};
pub use value::{value_kind, CellError, FromCell, Value};
