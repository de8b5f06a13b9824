pub mod codelist;
pub mod concept;
pub mod dataset;
pub mod error;
pub mod structure;

pub use codelist::{Code, Codelist, PATH_DELIMITER};
pub use concept::{Concept, ConceptScheme};
pub use dataset::{DataSet, KeyValue, Observation, Series, SeriesGroup, SeriesKey};
pub use error::{HierarchyError, SchemaError};
pub use structure::{DataAttribute, DataStructure, DataStructureBuilder, Dimension};
