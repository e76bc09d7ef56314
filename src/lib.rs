//! Rowmap - Result-set mapping layer for SQL drivers
//!
//! This crate turns the flat, columnar rows a database driver produces into
//! strongly typed Rust values through:
//! - Entity descriptors with custom column aliases, ignored properties and
//!   per-property default values
//! - Ordinal/partition resolution for multi-entity joined rows
//! - Strict select-column validation with precise diagnostics
//! - Schema-less (dynamic) row materialization for ad-hoc queries
//! - A policy-driven result cache over a pluggable store
//!
//! The driver itself stays outside: anything that can hand over an ordered
//! column-name list and a forward-only row cursor can feed the mapper.

pub mod utils;

pub mod access;
pub mod cache;
pub mod entity_map;
pub mod materialize;
pub mod resolver;
pub mod result_set;
