//! Ordered descriptor list for one query, one entry per joined entity.

use super::descriptor::TypeDescriptor;
use super::errors::EntityMapError;

/// The target types a query maps to, in the order their columns appear in
/// the flat result row.
///
/// Registration checks alias uniqueness between types: unaliased names may
/// repeat freely (every table has an `Id`), but a custom alias exists to
/// disambiguate, so one colliding with any column another type resolves to
/// is rejected.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    descriptors: Vec<TypeDescriptor>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        EntityRegistry::default()
    }

    pub fn add(&mut self, descriptor: TypeDescriptor) -> Result<(), EntityMapError> {
        for existing in &self.descriptors {
            // Newcomer's custom aliases vs columns the existing type resolves to.
            for (_, alias) in descriptor.aliases() {
                if existing
                    .resolved_columns()
                    .any(|(_, resolved)| resolved.eq_ignore_ascii_case(alias))
                {
                    return Err(EntityMapError::AliasTaken {
                        target: descriptor.target().to_string(),
                        column: alias.to_string(),
                        other: existing.target().to_string(),
                    });
                }
            }
            // Existing custom aliases vs columns the newcomer resolves to.
            for (_, alias) in existing.aliases() {
                if descriptor
                    .resolved_columns()
                    .any(|(_, resolved)| resolved.eq_ignore_ascii_case(alias))
                {
                    return Err(EntityMapError::AliasTaken {
                        target: existing.target().to_string(),
                        column: alias.to_string(),
                        other: descriptor.target().to_string(),
                    });
                }
            }
        }

        self.descriptors.push(descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn into_descriptors(self) -> Vec<TypeDescriptor> {
        self.descriptors
    }
}
