//! Wide-row normalization.
//!
//! Every input column is classified into exactly one role before any row is
//! processed: key dimension, categorical path, attribute, or measure label.
//! Row processing then reads cells by position against that plan instead of
//! re-deciding what each column means per row.

use std::collections::BTreeMap;

use tracing::debug;

use iamc_model::{DataStructure, KeyValue, Observation, Series, SeriesKey};

use crate::error::RowError;

/// Find the column for a declared component id (case-insensitive) and mark
/// it as claimed, so it cannot also become a measure label.
fn claim_column(headers: &[String], claimed: &mut [bool], id: &str) -> Result<usize, RowError> {
    let Some(index) = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(id))
    else {
        return Err(RowError::MissingField {
            field: id.to_string(),
        });
    };
    claimed[index] = true;
    Ok(index)
}

/// Where a key dimension's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeySource {
    /// Raw cell in the named column.
    Column(usize),
    /// Id of the code resolved from the categorical path column.
    Resolved,
}

/// One wide row normalized into a key, its attribute values, and its
/// observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    /// Zero-based index of the source data row, for diagnostics.
    pub row: usize,
    pub key: SeriesKey,
    pub series: Series,
}

/// Role assignment for one input header, fixed per table.
#[derive(Debug)]
pub struct ColumnPlan<'a> {
    structure: &'a DataStructure,
    /// Column holding the delimited categorical path.
    categorical: usize,
    /// Source per key dimension, in the structure's declared order.
    key_sources: Vec<(String, KeySource)>,
    /// (attribute id, column) pairs.
    attributes: Vec<(String, usize)>,
    /// (measure label, column) pairs for every column not otherwise named.
    measures: Vec<(String, usize)>,
}

impl<'a> ColumnPlan<'a> {
    /// Classify the input header against the structure.
    ///
    /// Fails with [`RowError::MissingField`] when a declared key dimension
    /// or attribute has no matching column. Header matching is
    /// case-insensitive; the caller's case convention is preserved in
    /// measure labels.
    pub fn new(structure: &'a DataStructure, headers: &[String]) -> Result<Self, RowError> {
        let mut claimed = vec![false; headers.len()];

        let mut categorical = None;
        let mut key_sources = Vec::new();
        for dim in structure.key_dimensions() {
            let column = claim_column(headers, &mut claimed, &dim.id)?;
            if structure.is_enumerated(dim) {
                categorical = Some(column);
                key_sources.push((dim.id.clone(), KeySource::Resolved));
            } else {
                key_sources.push((dim.id.clone(), KeySource::Column(column)));
            }
        }
        let categorical = categorical.ok_or_else(|| RowError::MissingField {
            field: structure.enumerated_dimension().id.clone(),
        })?;

        let mut attributes = Vec::new();
        for attr in structure.attributes() {
            let column = claim_column(headers, &mut claimed, &attr.id)?;
            attributes.push((attr.id.clone(), column));
        }

        // Everything left is a value of the measure dimension, one column
        // per label (e.g. one per year).
        let measures: Vec<(String, usize)> = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !claimed[*index])
            .map(|(index, header)| (header.clone(), index))
            .collect();

        debug!(
            key_columns = key_sources.len(),
            attribute_columns = attributes.len(),
            measure_columns = measures.len(),
            "classified input header"
        );

        Ok(Self {
            structure,
            categorical,
            key_sources,
            attributes,
            measures,
        })
    }

    /// Labels of the measure columns, in input order.
    pub fn measure_labels(&self) -> impl Iterator<Item = &str> {
        self.measures.iter().map(|(label, _)| label.as_str())
    }

    /// Normalize one data row into a key, attributes, and observations.
    ///
    /// The categorical path is resolved through the structure's code
    /// hierarchy; a path failure is reported against this row. Empty
    /// measure cells emit no observation, so a row with only key and
    /// attribute values normalizes to an empty observation list.
    pub fn normalize(&self, row: usize, record: &[String]) -> Result<NormalizedRow, RowError> {
        let cell = |column: usize| record.get(column).map(String::as_str).unwrap_or("");

        let code = self
            .structure
            .codelist()
            .resolve(cell(self.categorical))
            .map_err(|source| RowError::InvalidPath { row, source })?;

        let values = self
            .key_sources
            .iter()
            .map(|(dimension, source)| KeyValue {
                dimension: dimension.clone(),
                value: match source {
                    KeySource::Column(column) => cell(*column).to_string(),
                    KeySource::Resolved => code.id.clone(),
                },
            })
            .collect();
        let key = SeriesKey::new(values);

        let mut attributes = BTreeMap::new();
        for (id, column) in &self.attributes {
            attributes.insert(id.clone(), cell(*column).to_string());
        }

        let observations: Vec<Observation> = self
            .measures
            .iter()
            .filter(|(_, column)| !cell(*column).is_empty())
            .map(|(label, column)| Observation {
                dimension_value: label.clone(),
                value: cell(*column).to_string(),
            })
            .collect();

        Ok(NormalizedRow {
            row,
            key,
            series: Series {
                attributes,
                observations,
            },
        })
    }
}
