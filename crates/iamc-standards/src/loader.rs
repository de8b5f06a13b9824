//! Structure definition loading.
//!
//! Parses a TOML definition document and assembles the immutable
//! [`DataStructure`] it describes. Definition problems abort the load; a
//! malformed structure cannot safely process any row.

use std::path::{Path, PathBuf};

use tracing::info;

use iamc_model::{Codelist, Concept, DataStructure, DataStructureBuilder};

use crate::definition::DefinitionDoc;
use crate::error::{DefinitionError, Result};

/// Load a structure definition from a TOML file.
pub fn load_file(path: &Path) -> Result<DataStructure> {
    let contents = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let structure = parse(&contents, path)?;
    info!(path = %path.display(), structure = structure.id(), "loaded structure definition");
    Ok(structure)
}

/// Parse a structure definition from TOML source. `origin` is used in error
/// messages only.
pub fn parse(source: &str, origin: impl Into<PathBuf>) -> Result<DataStructure> {
    let doc: DefinitionDoc = toml::from_str(source).map_err(|source| DefinitionError::Toml {
        path: origin.into(),
        source: Box::new(source),
    })?;
    build(doc)
}

/// Assemble a [`DataStructure`] from a parsed definition document.
pub fn build(doc: DefinitionDoc) -> Result<DataStructure> {
    let mut builder = DataStructureBuilder::new(doc.structure.id, doc.structure.name);

    for entry in doc.concepts {
        let mut concept = Concept::new(entry.id, entry.name);
        concept.description = entry.description;
        builder.add_concept(concept)?;
    }

    // Codes are supplied as delimited paths, each carrying its ancestor
    // chain, so parents are registered before children regardless of the
    // order paths appear in the document.
    let mut codes = Codelist::with_delimiter(doc.enumeration.delimiter);
    for path in &doc.enumeration.codes {
        codes.register_path(path)?;
    }
    builder.bind_enumeration(&doc.enumeration.concept, codes)?;

    for dimension in &doc.dimensions {
        builder.add_dimension(&dimension.id, &dimension.concept)?;
    }
    for attribute in &doc.attributes {
        builder.add_attribute(&attribute.id, &attribute.concept)?;
    }
    builder.measure_dimension(&doc.measure.dimension);

    Ok(builder.finish()?)
}
