pub mod accumulate;
pub mod error;
pub mod normalize;
pub mod pipeline;

pub use accumulate::{DatasetBuilder, MergePolicy};
pub use error::RowError;
pub use normalize::{ColumnPlan, NormalizedRow};
pub use pipeline::{BuildOptions, BuildOutcome, ErrorMode, build_dataset};
