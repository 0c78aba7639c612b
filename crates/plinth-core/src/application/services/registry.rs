//! Generator registry.
//!
//! Holds every generator known to the process, keyed by name, preserving
//! registration order for listings. Populated once at startup (builtin set
//! plus any future plugin mechanism) and read-only afterwards.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::{DomainError, GeneratorSpec};
use crate::error::PlinthResult;

/// Summary of a registered generator, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: String,
    pub description: String,
    /// Number of prompts the generator asks.
    pub prompt_count: usize,
    /// Number of actions in the pipeline.
    pub action_count: usize,
}

/// Ordered collection of validated generator specs.
///
/// Registration order is observable: [`GeneratorRegistry::list`] and iteration
/// yield generators in the order they were registered.
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    entries: Vec<GeneratorSpec>,
    index: HashMap<String, usize>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator. Validates the spec and rejects duplicate names.
    #[instrument(skip(self, spec), fields(generator = %spec.name))]
    pub fn register(&mut self, spec: GeneratorSpec) -> PlinthResult<()> {
        spec.validate()?;

        if self.index.contains_key(&spec.name) {
            return Err(DomainError::DuplicateGenerator {
                name: spec.name.clone(),
            }
            .into());
        }

        debug!(prompts = spec.prompts.len(), actions = spec.actions.len(), "Registered generator");
        self.index.insert(spec.name.clone(), self.entries.len());
        self.entries.push(spec);
        Ok(())
    }

    /// Look up a generator by name.
    pub fn get(&self, name: &str) -> Option<&GeneratorSpec> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Summaries of all generators, in registration order.
    pub fn list(&self) -> Vec<GeneratorInfo> {
        self.entries
            .iter()
            .map(|spec| GeneratorInfo {
                name: spec.name.clone(),
                description: spec.description.clone(),
                prompt_count: spec.prompts.len(),
                action_count: spec.actions.len(),
            })
            .collect()
    }

    /// Iterate over all specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratorSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
