//! Immutable description of how one entity type consumes result columns.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::entity::RowEntity;
use super::errors::EntityMapError;

/// Which columns a target type expects, how they are renamed in the select
/// list, and which defaults stand in for nulls.
///
/// Descriptors carry no per-query state: ordinals are resolved against a
/// concrete result schema by the resolver, so one descriptor can serve any
/// number of structurally different executions.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    target: &'static str,
    columns: Vec<&'static str>,
    alias_map: HashMap<&'static str, String>,
    ignored: HashSet<&'static str>,
    defaults: HashMap<&'static str, Value>,
}

impl TypeDescriptor {
    /// Start a descriptor for `T` with no customization.
    pub fn of<T: RowEntity>() -> DescriptorBuilder {
        DescriptorBuilder {
            target: T::target(),
            declared: T::columns(),
            aliases: Vec::new(),
            ignored: Vec::new(),
            defaults: Vec::new(),
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Logical column names this type consumes (declared minus ignored), in
    /// declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().copied()
    }

    /// The name `column` carries in the select list: its custom alias if
    /// one was registered, else the logical name itself.
    pub fn resolved_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.alias_map
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }

    /// `(logical, resolved)` pairs for every consumed column.
    pub fn resolved_columns(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.columns
            .iter()
            .map(|&column| (column, self.resolved_name(column)))
    }

    /// Custom aliases only, as `(logical, alias)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.alias_map
            .iter()
            .map(|(&column, alias)| (column, alias.as_str()))
    }

    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignored.contains(column)
    }

    /// Default substituted when `column` reads null (or never resolved).
    pub fn default_for(&self, column: &str) -> Option<&Value> {
        self.defaults.get(column)
    }
}

/// Builder for [`TypeDescriptor`]; collects customization and validates it
/// all at once in [`build`](DescriptorBuilder::build).
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    target: &'static str,
    declared: &'static [&'static str],
    aliases: Vec<(&'static str, String)>,
    ignored: Vec<&'static str>,
    defaults: Vec<(&'static str, Value)>,
}

impl DescriptorBuilder {
    /// Map `column` to a custom result-column name.
    pub fn alias(
        mut self,
        column: &str,
        result_column: impl Into<String>,
    ) -> Result<Self, EntityMapError> {
        let declared = self.declared_column(column)?;
        self.aliases.push((declared, result_column.into()));
        Ok(self)
    }

    /// Exclude `column` from mapping entirely.
    pub fn ignore(mut self, column: &str) -> Result<Self, EntityMapError> {
        let declared = self.declared_column(column)?;
        self.ignored.push(declared);
        Ok(self)
    }

    /// Substitute `value` when `column` reads null or is absent from the
    /// result.
    pub fn default_value(
        mut self,
        column: &str,
        value: Value,
    ) -> Result<Self, EntityMapError> {
        let declared = self.declared_column(column)?;
        self.defaults.push((declared, value));
        Ok(self)
    }

    pub fn build(self) -> Result<TypeDescriptor, EntityMapError> {
        let ignored: HashSet<&'static str> = self.ignored.into_iter().collect();

        let mut alias_map: HashMap<&'static str, String> = HashMap::new();
        for (column, alias) in self.aliases {
            if alias_map.insert(column, alias).is_some() {
                return Err(EntityMapError::DuplicateAlias {
                    target: self.target.to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut defaults: HashMap<&'static str, Value> = HashMap::new();
        for (column, value) in self.defaults {
            defaults.insert(column, value);
        }

        let columns: Vec<&'static str> = self
            .declared
            .iter()
            .copied()
            .filter(|column| !ignored.contains(column))
            .collect();

        // Two properties may not resolve to the same select-column name,
        // whether through aliasing or because an alias shadows another
        // property's unaliased name.
        let mut resolved_seen: HashSet<String> = HashSet::new();
        for &column in &columns {
            let resolved = alias_map.get(column).map(String::as_str).unwrap_or(column);
            if !resolved_seen.insert(resolved.to_ascii_lowercase()) {
                return Err(EntityMapError::DuplicateAlias {
                    target: self.target.to_string(),
                    column: resolved.to_string(),
                });
            }
        }

        Ok(TypeDescriptor {
            target: self.target,
            columns,
            alias_map,
            ignored,
            defaults,
        })
    }

    fn declared_column(&self, column: &str) -> Result<&'static str, EntityMapError> {
        self.declared
            .iter()
            .copied()
            .find(|declared| declared.eq_ignore_ascii_case(column))
            .ok_or_else(|| EntityMapError::UnknownColumn {
                target: self.target.to_string(),
                column: column.to_string(),
            })
    }
}
