//! Integration tests - full fetch pipeline against in-memory row sources.
//!
//! These exercise the facade end to end (descriptor building, partition
//! resolution, materialization, caching) the way a driver-backed caller
//! would, without requiring a live database.

mod fixtures;

mod select_pipeline_tests;
