//! Subcommand implementations.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use iamc_ingest::read_csv_table;
use iamc_model::DataStructure;
use iamc_report::{DimensionFilter, PivotOptions, long_records, pivot};
use iamc_transform::{BuildOptions, ErrorMode, MergePolicy, build_dataset};

use crate::cli::{DataArgs, StructureArgs};
use crate::render::{print_pivot, print_structure};

fn load_structure(definition: Option<&Path>) -> Result<DataStructure> {
    match definition {
        Some(path) => iamc_standards::load_file(path)
            .with_context(|| format!("load definition: {}", path.display())),
        None => iamc_standards::builtin().context("load built-in IAMC definition"),
    }
}

/// Run the `data` subcommand. Returns true when row errors were collected.
pub fn run_data(args: &DataArgs) -> Result<bool> {
    let structure = load_structure(args.definition.as_deref())?;
    let table = read_csv_table(&args.data)?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        structure = structure.id(),
        "processing table"
    );

    let options = BuildOptions {
        merge: if args.merge {
            MergePolicy::Merge
        } else {
            MergePolicy::Reject
        },
        errors: if args.keep_going {
            ErrorMode::Collect
        } else {
            ErrorMode::FailFast
        },
    };
    let outcome = build_dataset(&structure, &table.headers, &table.rows, options)
        .with_context(|| format!("normalize: {}", args.data.display()))?;

    if args.records {
        let records = long_records(&structure, &outcome.dataset);
        serde_json::to_writer_pretty(io::stdout().lock(), &records)
            .context("write records as JSON")?;
        println!();
    } else {
        let filter = args
            .filter
            .as_deref()
            .map(DimensionFilter::parse)
            .transpose()?;
        let view = pivot(
            &structure,
            &outcome.dataset,
            PivotOptions {
                filter: filter.as_ref(),
            },
        )?;
        print_pivot(&view);
        println!(
            "{} series, {} observations",
            outcome.dataset.len(),
            outcome.dataset.observation_count()
        );
    }

    for error in &outcome.errors {
        eprintln!("error: {error}");
    }
    Ok(!outcome.errors.is_empty())
}

/// Run the `structure` subcommand.
pub fn run_structure(args: &StructureArgs) -> Result<()> {
    let structure = load_structure(args.definition.as_deref())?;
    print_structure(&structure);
    Ok(())
}
