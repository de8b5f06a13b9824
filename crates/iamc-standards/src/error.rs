#![deny(unsafe_code)]

use std::path::PathBuf;

use iamc_model::error::{HierarchyError, SchemaError};

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("failed to read definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML definition {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid structure definition: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid code list: {0}")]
    Hierarchy(#[from] HierarchyError),
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
