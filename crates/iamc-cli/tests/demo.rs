#![allow(missing_docs)]

//! End-to-end flow over the demo data: ingest, normalize, accumulate,
//! pivot.

use std::path::PathBuf;

use iamc_ingest::read_csv_table;
use iamc_report::{DimensionFilter, PivotOptions, long_records, pivot};
use iamc_transform::{BuildOptions, build_dataset};

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/scenario_data.csv")
}

#[test]
fn demo_data_round_trips() {
    let structure = iamc_standards::builtin().expect("builtin structure");
    let table = read_csv_table(&demo_path()).expect("read demo csv");
    assert_eq!(table.headers.len(), 8);
    assert_eq!(table.rows.len(), 5);

    let outcome = build_dataset(&structure, &table.headers, &table.rows, BuildOptions::default())
        .expect("build dataset");
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.dataset.len(), 5);
    assert_eq!(outcome.dataset.observation_count(), 15);

    let records = long_records(&structure, &outcome.dataset);
    assert_eq!(records.len(), 15);

    let view = pivot(&structure, &outcome.dataset, PivotOptions::default()).expect("pivot");
    assert_eq!(view.key_headers, vec!["MODEL", "SCENARIO", "REGION", "VARIABLE"]);
    assert_eq!(view.attribute_headers, vec!["UNIT"]);
    assert_eq!(view.measure_headers, vec!["2005", "2010", "2015"]);
    assert_eq!(view.rows.len(), 5);

    let filter = DimensionFilter::parse("MODEL=test_model1").expect("filter");
    let filtered = pivot(
        &structure,
        &outcome.dataset,
        PivotOptions {
            filter: Some(&filter),
        },
    )
    .expect("pivot filtered");
    assert_eq!(filtered.rows.len(), 3);
}
