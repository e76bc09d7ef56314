//! Entity descriptors: which result columns a target type consumes.
//!
//! A [`TypeDescriptor`] is built once per `(type, aliases, ignored,
//! defaults)` combination and is immutable afterwards, so it can be reused
//! across any number of query executions. Per-query state (ordinals,
//! partition segments) lives in the resolver instead.

pub mod descriptor;
pub mod entity;
pub mod errors;
pub mod registry;

// Re-export commonly used types
pub use descriptor::{DescriptorBuilder, TypeDescriptor};
pub use entity::RowEntity;
pub use errors::EntityMapError;
pub use registry::EntityRegistry;
