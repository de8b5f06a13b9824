//! Built-in IAMC structure definition.

use iamc_model::DataStructure;

use crate::error::Result;
use crate::loader;

/// The IAMC data template shipped with the crate.
pub const IAMC_DEFINITION: &str = include_str!("../defs/iamc.toml");

/// Build the built-in IAMC structure.
pub fn builtin() -> Result<DataStructure> {
    loader::parse(IAMC_DEFINITION, "<builtin iamc.toml>")
}
