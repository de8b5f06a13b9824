//! Table-level processing: normalize every row and fold the results into a
//! dataset, with caller-chosen duplicate-key and error-collection policy.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use iamc_model::{DataSet, DataStructure};

use crate::accumulate::{DatasetBuilder, MergePolicy};
use crate::error::RowError;
use crate::normalize::ColumnPlan;

/// How row failures affect the rest of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Stop at the first failing row.
    #[default]
    FailFast,
    /// Keep processing and return all row failures together.
    Collect,
}

/// Processing options for [`build_dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub merge: MergePolicy,
    pub errors: ErrorMode,
}

/// Result of a collect-errors run: the dataset built from the rows that
/// normalized cleanly, plus every row failure encountered.
#[derive(Debug)]
pub struct BuildOutcome {
    pub dataset: DataSet,
    pub errors: Vec<RowError>,
}

/// Build a dataset from a wide table (header plus string rows).
///
/// The header is classified once; a missing declared column aborts
/// regardless of error mode, since no row can be processed against a
/// malformed header. In fail-fast mode the first row failure is returned as
/// `Err`; in collect mode failing rows are skipped and reported in the
/// outcome.
pub fn build_dataset(
    structure: &DataStructure,
    headers: &[String],
    rows: &[Vec<String>],
    options: BuildOptions,
) -> Result<BuildOutcome, RowError> {
    let plan = ColumnPlan::new(structure, headers)?;
    let mut builder = DatasetBuilder::new(structure).merge_policy(options.merge);
    let mut errors = Vec::new();

    for (index, record) in rows.iter().enumerate() {
        let folded = plan
            .normalize(index, record)
            .and_then(|group| builder.add_group(group));
        if let Err(error) = folded {
            match options.errors {
                ErrorMode::FailFast => return Err(error),
                ErrorMode::Collect => {
                    warn!(row = index, %error, "skipping row");
                    errors.push(error);
                }
            }
        }
    }

    info!(
        rows = rows.len(),
        groups = builder.group_count(),
        failed = errors.len(),
        "built dataset"
    );
    Ok(BuildOutcome {
        dataset: builder.finalize(),
        errors,
    })
}
