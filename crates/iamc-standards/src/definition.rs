//! Typed form of the structure definition document.
//!
//! The document enumerates concepts, dimension and attribute bindings, the
//! measure dimension, and the categorical code list as delimited path
//! strings, one string per code with its full ancestor chain implied.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionDoc {
    pub structure: StructureSection,
    #[serde(default)]
    pub concepts: Vec<ConceptEntry>,
    #[serde(default)]
    pub dimensions: Vec<ComponentEntry>,
    #[serde(default)]
    pub attributes: Vec<ComponentEntry>,
    pub enumeration: EnumerationSection,
    pub measure: MeasureSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructureSection {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConceptEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A dimension or attribute binding: component id -> concept id.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub id: String,
    pub concept: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumerationSection {
    /// Concept represented by the code list.
    pub concept: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Delimited code paths, e.g. `"Energy|Supply|Electricity"`.
    pub codes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasureSection {
    /// Dimension whose values vary within a row (column titles in the wide
    /// format).
    pub dimension: String,
}

fn default_delimiter() -> char {
    iamc_model::PATH_DELIMITER
}
