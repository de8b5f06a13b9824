use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A named semantic meaning shared by dimensions and attributes.
///
/// The same concept may appear as a dimension in one structure and as an
/// attribute in another; components reference concepts by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Identifier, unique within a scheme (e.g. "REGION").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
}

impl Concept {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Registry of concepts, keyed case-insensitively by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptScheme {
    /// Concepts by uppercase id.
    concepts: BTreeMap<String, Concept>,
}

impl ConceptScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent upsert: re-adding an identical concept is a no-op.
    /// Redefining an id with different content is an error, never a silent
    /// overwrite.
    pub fn add(&mut self, concept: Concept) -> Result<(), SchemaError> {
        let key = concept.id.to_uppercase();
        match self.concepts.get(&key) {
            Some(existing) if *existing == concept => Ok(()),
            Some(_) => Err(SchemaError::ConceptConflict { id: concept.id }),
            None => {
                self.concepts.insert(key, concept);
                Ok(())
            }
        }
    }

    /// Look up a concept by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(&id.to_uppercase())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.concepts.contains_key(&id.to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.values()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
