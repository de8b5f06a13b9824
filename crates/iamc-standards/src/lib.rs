#![deny(unsafe_code)]

pub mod definition;
pub mod embedded;
pub mod error;
pub mod loader;

pub use definition::DefinitionDoc;
pub use embedded::{IAMC_DEFINITION, builtin};
pub use error::{DefinitionError, Result};
pub use loader::{build, load_file, parse};
