//! Data structure definition: the typed schema a dataset is bound to.
//!
//! A structure is assembled once through [`DataStructureBuilder`] and is
//! immutable from then on; row processing only ever sees the finished
//! [`DataStructure`].

use serde::{Deserialize, Serialize};

use crate::codelist::Codelist;
use crate::concept::{Concept, ConceptScheme};
use crate::error::SchemaError;

/// A schema component that varies at series or observation granularity and
/// forms part of a series' identity. Dimensions are ordered; lookup is by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,
    pub concept_id: String,
}

/// A schema component that annotates a series without being part of its
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAttribute {
    pub id: String,
    pub concept_id: String,
}

/// Assembles a [`DataStructure`].
///
/// Concepts must be registered before the dimensions and attributes that
/// reference them; exactly one concept carries the code hierarchy and
/// exactly one dimension is designated as the measure (intra-row-varying)
/// dimension. `finish` checks the cross-component constraints and consumes
/// the builder, so a completed structure cannot be mutated.
#[derive(Debug, Default)]
pub struct DataStructureBuilder {
    id: String,
    name: String,
    concepts: ConceptScheme,
    codelist: Option<Codelist>,
    enumerated_concept: Option<String>,
    dimensions: Vec<Dimension>,
    attributes: Vec<DataAttribute>,
    measure: Option<String>,
}

impl DataStructureBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Register a concept. Identical re-registration is a no-op.
    pub fn add_concept(&mut self, concept: Concept) -> Result<&mut Self, SchemaError> {
        self.concepts.add(concept)?;
        Ok(self)
    }

    /// Attach a code hierarchy as the representation of a concept.
    ///
    /// Only one concept per structure may be enumerated this way.
    pub fn bind_enumeration(
        &mut self,
        concept_id: &str,
        codelist: Codelist,
    ) -> Result<&mut Self, SchemaError> {
        if !self.concepts.contains(concept_id) {
            return Err(SchemaError::UnknownConcept {
                component: "enumeration",
                id: concept_id.to_string(),
                concept: concept_id.to_string(),
            });
        }
        if let Some(bound) = &self.enumerated_concept {
            return Err(SchemaError::EnumerationAlreadyBound {
                concept: bound.clone(),
            });
        }
        self.enumerated_concept = Some(concept_id.to_uppercase());
        self.codelist = Some(codelist);
        Ok(self)
    }

    /// Append a dimension bound to a previously registered concept.
    pub fn add_dimension(&mut self, id: &str, concept_id: &str) -> Result<&mut Self, SchemaError> {
        if !self.concepts.contains(concept_id) {
            return Err(SchemaError::UnknownConcept {
                component: "dimension",
                id: id.to_string(),
                concept: concept_id.to_string(),
            });
        }
        if self
            .dimensions
            .iter()
            .any(|dim| dim.id.eq_ignore_ascii_case(id))
        {
            return Err(SchemaError::DuplicateDimension { id: id.to_string() });
        }
        self.dimensions.push(Dimension {
            id: id.to_string(),
            concept_id: concept_id.to_uppercase(),
        });
        Ok(self)
    }

    /// Add an attribute bound to a previously registered concept.
    pub fn add_attribute(&mut self, id: &str, concept_id: &str) -> Result<&mut Self, SchemaError> {
        if !self.concepts.contains(concept_id) {
            return Err(SchemaError::UnknownConcept {
                component: "attribute",
                id: id.to_string(),
                concept: concept_id.to_string(),
            });
        }
        if self
            .attributes
            .iter()
            .any(|attr| attr.id.eq_ignore_ascii_case(id))
        {
            return Err(SchemaError::DuplicateAttribute { id: id.to_string() });
        }
        self.attributes.push(DataAttribute {
            id: id.to_string(),
            concept_id: concept_id.to_uppercase(),
        });
        Ok(self)
    }

    /// Designate the dimension whose values vary within a row (e.g. YEAR).
    ///
    /// The measure dimension is configured, never inferred: in the wide
    /// source format its values are "the columns not otherwise named".
    pub fn measure_dimension(&mut self, id: &str) -> &mut Self {
        self.measure = Some(id.to_string());
        self
    }

    /// Validate the cross-component constraints and produce the immutable
    /// structure.
    pub fn finish(self) -> Result<DataStructure, SchemaError> {
        let enumerated_concept = self
            .enumerated_concept
            .ok_or(SchemaError::MissingEnumeration)?;
        let codelist = self.codelist.ok_or(SchemaError::MissingEnumeration)?;

        let mut enumerated: Option<&Dimension> = None;
        for dim in &self.dimensions {
            if dim.concept_id.eq_ignore_ascii_case(&enumerated_concept) {
                if let Some(first) = enumerated {
                    return Err(SchemaError::MultipleEnumeratedDimensions {
                        first: first.id.clone(),
                        second: dim.id.clone(),
                    });
                }
                enumerated = Some(dim);
            }
        }
        let enumerated = enumerated
            .ok_or_else(|| SchemaError::MissingEnumeratedDimension {
                concept: enumerated_concept.clone(),
            })?
            .id
            .clone();

        let measure = self.measure.ok_or(SchemaError::MissingMeasureDimension)?;
        let Some(measure_dim) = self
            .dimensions
            .iter()
            .find(|dim| dim.id.eq_ignore_ascii_case(&measure))
        else {
            return Err(SchemaError::UnknownMeasureDimension { id: measure });
        };
        if measure_dim.id.eq_ignore_ascii_case(&enumerated) {
            return Err(SchemaError::MeasureDimensionEnumerated {
                id: measure_dim.id.clone(),
            });
        }
        let measure = measure_dim.id.clone();

        Ok(DataStructure {
            id: self.id,
            name: self.name,
            concepts: self.concepts,
            codelist,
            enumerated_concept,
            enumerated_dimension: enumerated,
            dimensions: self.dimensions,
            attributes: self.attributes,
            measure,
        })
    }
}

/// A complete, immutable schema: ordered dimensions, attributes, and the
/// code hierarchy enumerating the categorical dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStructure {
    id: String,
    name: String,
    concepts: ConceptScheme,
    codelist: Codelist,
    enumerated_concept: String,
    enumerated_dimension: String,
    dimensions: Vec<Dimension>,
    attributes: Vec<DataAttribute>,
    measure: String,
}

impl DataStructure {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn concepts(&self) -> &ConceptScheme {
        &self.concepts
    }

    /// The code hierarchy enumerating the categorical dimension. Read-only
    /// once the structure is built, so it can be consulted freely from
    /// concurrent row-processing workers.
    pub fn codelist(&self) -> &Codelist {
        &self.codelist
    }

    /// All dimensions, in declared order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn attributes(&self) -> &[DataAttribute] {
        &self.attributes
    }

    /// Look up a dimension by id (case-insensitive).
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions
            .iter()
            .find(|dim| dim.id.eq_ignore_ascii_case(id))
    }

    /// Look up an attribute by id (case-insensitive).
    pub fn attribute(&self, id: &str) -> Option<&DataAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.id.eq_ignore_ascii_case(id))
    }

    /// The dimension enumerated by the code hierarchy.
    pub fn enumerated_dimension(&self) -> &Dimension {
        self.dimension(&self.enumerated_dimension)
            .expect("enumerated dimension validated at build time")
    }

    /// The dimension whose values vary within a row.
    pub fn measure_dimension(&self) -> &Dimension {
        self.dimension(&self.measure)
            .expect("measure dimension validated at build time")
    }

    /// Dimensions that define a series key: all except the measure
    /// dimension, in declared order.
    pub fn key_dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions
            .iter()
            .filter(|dim| !dim.id.eq_ignore_ascii_case(&self.measure))
    }

    pub fn key_dimension_count(&self) -> usize {
        self.key_dimensions().count()
    }

    /// True if the dimension is the one enumerated by the code hierarchy.
    pub fn is_enumerated(&self, dimension: &Dimension) -> bool {
        dimension.id.eq_ignore_ascii_case(&self.enumerated_dimension)
    }
}
