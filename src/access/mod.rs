//! Data-access facade tying mapping, materialization and caching together.
//!
//! [`DataAccess`] is the long-lived handle a caller owns; it carries the
//! cache engine explicitly instead of relying on an ambient singleton.
//! [`Select`] is the per-query builder: register descriptors, declare
//! partition markers, opt into strict validation, optionally name a cache
//! key, then fetch against any [`RowSource`].
//!
//! The cache-key contract is strict everywhere: supplying a key on a
//! handle built without a store fails with
//! [`CacheError::NoProvider`](crate::cache::CacheError::NoProvider) rather
//! than silently skipping the cache.

pub mod errors;

// Re-export commonly used types
pub use errors::AccessError;

use std::sync::Arc;

use log::debug;

use crate::cache::{CacheEngine, CacheStore};
use crate::entity_map::{EntityRegistry, RowEntity, TypeDescriptor};
use crate::materialize::{
    dynamic_columns, materialize_all, materialize_dynamic, materialize_joined, DynamicRow,
    EntityTuple,
};
use crate::resolver::{build_mapping, ResolvedMapping};
use crate::result_set::{ResultSchema, RowSource};

/// Long-lived entry point; one per logical data source.
pub struct DataAccess {
    cache: CacheEngine,
}

impl DataAccess {
    /// Handle without a cache provider. Queries that supply a cache key
    /// will fail until a handle with a store is used instead.
    pub fn new() -> Self {
        DataAccess {
            cache: CacheEngine::unconfigured(),
        }
    }

    /// Handle whose cached queries go through `store`.
    pub fn with_cache(store: Arc<dyn CacheStore>) -> Self {
        DataAccess {
            cache: CacheEngine::new(store),
        }
    }

    /// The policy registry and cache-management operations.
    pub fn cache(&self) -> &CacheEngine {
        &self.cache
    }

    /// Start a query mapping. `query_text` feeds diagnostics only; it is
    /// never executed here.
    pub fn select(&self, query_text: &str) -> Select<'_> {
        Select {
            access: self,
            query: query_text.trim().to_string(),
            registry: EntityRegistry::new(),
            partition_on: Vec::new(),
            strict: false,
            cache_key: None,
        }
    }
}

impl Default for DataAccess {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent per-query builder.
pub struct Select<'a> {
    access: &'a DataAccess,
    query: String,
    registry: EntityRegistry,
    partition_on: Vec<String>,
    strict: bool,
    cache_key: Option<String>,
}

impl Select<'_> {
    /// Register a target type descriptor; one per joined entity, in the
    /// order their columns appear in the flat row.
    pub fn map(mut self, descriptor: TypeDescriptor) -> Result<Self, AccessError> {
        self.registry.add(descriptor)?;
        Ok(self)
    }

    /// Name the first column of each entity after the first (N-1 markers
    /// for N targets).
    pub fn partition_on<S: AsRef<str>>(mut self, markers: &[S]) -> Self {
        self.partition_on = markers
            .iter()
            .map(|marker| marker.as_ref().to_string())
            .collect();
        self
    }

    /// Require every declared property to resolve to a select column.
    pub fn validate_columns(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Cache the materialized collection under `key`. Requires the handle
    /// to have been built with a cache store.
    pub fn cache_key(mut self, key: &str) -> Self {
        self.cache_key = Some(key.to_string());
        self
    }

    /// Map and materialize a single-entity result set. With no descriptor
    /// registered, `T` is described with no customization.
    pub fn fetch<T, S>(mut self, source: &mut S) -> Result<Arc<Vec<T>>, AccessError>
    where
        T: RowEntity,
        S: RowSource + ?Sized,
    {
        if self.registry.is_empty() {
            self.registry.add(TypeDescriptor::of::<T>().build()?)?;
        }
        self.ensure_targets(1)?;

        if let Some(cached) = self.try_cached::<T>()? {
            return Ok(cached);
        }

        let mapping = self.resolve(source)?;
        let rows = Arc::new(materialize_all::<T, S>(&mapping, source)?);
        self.store(rows.clone())?;
        Ok(rows)
    }

    /// Map and materialize a multi-entity result set into tuples, one
    /// entity per partition segment.
    pub fn fetch_joined<T, S>(mut self, source: &mut S) -> Result<Arc<Vec<T>>, AccessError>
    where
        T: EntityTuple,
        S: RowSource + ?Sized,
    {
        self.ensure_targets(T::ARITY)?;

        if let Some(cached) = self.try_cached::<T>()? {
            return Ok(cached);
        }

        let mapping = self.resolve(source)?;
        let rows = Arc::new(materialize_joined::<T, S>(&mapping, source)?);
        self.store(rows.clone())?;
        Ok(rows)
    }

    /// Materialize a schema-less result set: one order-preserving
    /// name → value association per row, no descriptor involved.
    pub fn fetch_dynamic<S>(self, source: &mut S) -> Result<Arc<Vec<DynamicRow>>, AccessError>
    where
        S: RowSource + ?Sized,
    {
        if let Some(cached) = self.try_cached::<DynamicRow>()? {
            return Ok(cached);
        }

        let schema = ResultSchema::new(source.columns());
        let columns = dynamic_columns(&schema);
        debug!(
            "dynamic fetch of {} column(s) for `{}`",
            columns.len(),
            self.query
        );

        let mut rows = Vec::new();
        while let Some(row) = source.next_row() {
            rows.push(materialize_dynamic(&columns, &row));
        }

        let rows = Arc::new(rows);
        self.store(rows.clone())?;
        Ok(rows)
    }

    fn resolve<S>(&mut self, source: &S) -> Result<ResolvedMapping, AccessError>
    where
        S: RowSource + ?Sized,
    {
        let schema = ResultSchema::new(source.columns());
        let mapping = build_mapping(
            &schema,
            std::mem::take(&mut self.registry),
            &self.partition_on,
            self.strict,
            &self.query,
        )?;
        Ok(mapping)
    }

    fn ensure_targets(&self, expected: usize) -> Result<(), AccessError> {
        if self.registry.len() != expected {
            return Err(AccessError::TargetCount {
                expected,
                actual: self.registry.len(),
            });
        }
        Ok(())
    }

    fn try_cached<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<Vec<T>>>, AccessError> {
        match &self.cache_key {
            Some(key) => Ok(self.access.cache.get::<T>(key)?),
            None => Ok(None),
        }
    }

    fn store<T: Send + Sync + 'static>(&self, rows: Arc<Vec<T>>) -> Result<(), AccessError> {
        if let Some(key) = &self.cache_key {
            self.access.cache.put(key, rows)?;
        }
        Ok(())
    }
}
