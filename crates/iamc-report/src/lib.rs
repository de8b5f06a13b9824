pub mod pivot;
pub mod records;

pub use pivot::{DimensionFilter, PivotOptions, PivotRow, PivotTable, ReportError, parse_value, pivot};
pub use records::{ObservationRecord, long_records};
