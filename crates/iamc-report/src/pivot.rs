//! Pivoted view: one row per series, measure labels as columns.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use iamc_model::{DataSet, DataStructure, SeriesGroup};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("filter `{raw}` is not of the form DIMENSION=value")]
    InvalidFilter { raw: String },

    #[error("filter names unknown key dimension `{dimension}`")]
    UnknownDimension { dimension: String },
}

/// Restrict a view to series with a fixed value for one key dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionFilter {
    pub dimension: String,
    pub value: String,
}

impl DimensionFilter {
    /// Parse a `DIMENSION=value` pair.
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        let Some((dimension, value)) = raw.split_once('=') else {
            return Err(ReportError::InvalidFilter {
                raw: raw.to_string(),
            });
        };
        let dimension = dimension.trim();
        let value = value.trim();
        if dimension.is_empty() || value.is_empty() {
            return Err(ReportError::InvalidFilter {
                raw: raw.to_string(),
            });
        }
        Ok(Self {
            dimension: dimension.to_string(),
            value: value.to_string(),
        })
    }

    fn matches(&self, group: &SeriesGroup) -> bool {
        group.key.get(&self.dimension) == Some(self.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PivotOptions<'a> {
    pub filter: Option<&'a DimensionFilter>,
}

/// One series in the pivoted view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotRow {
    /// Key dimension values, in declared order.
    pub key: Vec<String>,
    /// Attribute values, aligned with the table's attribute headers.
    pub attributes: Vec<String>,
    /// One cell per measure header; `None` where the series has no
    /// observation for that label.
    pub values: Vec<Option<String>>,
}

/// A dataset pivoted back to wide orientation for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotTable {
    pub key_headers: Vec<String>,
    pub attribute_headers: Vec<String>,
    /// Union of measure labels across all series, sorted.
    pub measure_headers: Vec<String>,
    pub rows: Vec<PivotRow>,
}

/// Pivot a finalized dataset: series per row, measure labels as columns.
///
/// A filter narrows the view to series matching one key dimension value; an
/// unknown dimension in the filter is an error rather than an empty result.
pub fn pivot(
    structure: &DataStructure,
    dataset: &DataSet,
    options: PivotOptions<'_>,
) -> Result<PivotTable, ReportError> {
    if let Some(filter) = options.filter
        && structure
            .dimension(&filter.dimension)
            .is_none_or(|dim| dim.id == structure.measure_dimension().id)
    {
        return Err(ReportError::UnknownDimension {
            dimension: filter.dimension.clone(),
        });
    }

    let key_headers: Vec<String> = structure
        .key_dimensions()
        .map(|dim| dim.id.clone())
        .collect();
    let attribute_headers: Vec<String> = structure
        .attributes()
        .iter()
        .map(|attr| attr.id.clone())
        .collect();

    let groups: Vec<&SeriesGroup> = dataset
        .groups()
        .iter()
        .filter(|group| options.filter.is_none_or(|filter| filter.matches(group)))
        .collect();

    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for group in &groups {
        for observation in &group.series.observations {
            labels.insert(observation.dimension_value.as_str());
        }
    }
    let measure_headers: Vec<String> = labels.iter().map(|label| (*label).to_string()).collect();

    let rows = groups
        .iter()
        .map(|group| {
            let key = key_headers
                .iter()
                .map(|dimension| group.key.get(dimension).unwrap_or("").to_string())
                .collect();
            let attributes = attribute_headers
                .iter()
                .map(|attribute| {
                    group
                        .series
                        .attributes
                        .get(attribute)
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            let values = measure_headers
                .iter()
                .map(|label| {
                    group
                        .series
                        .observations
                        .iter()
                        .rev()
                        .find(|obs| obs.dimension_value == *label)
                        .map(|obs| obs.value.clone())
                })
                .collect();
            PivotRow {
                key,
                attributes,
                values,
            }
        })
        .collect();

    Ok(PivotTable {
        key_headers,
        attribute_headers,
        measure_headers,
        rows,
    })
}

/// Lenient numeric reading of a raw cell value.
///
/// The core stores values exactly as written; presentation decides how
/// strict to be.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use iamc_model::{
        Codelist, Concept, DataSet, DataStructure, DataStructureBuilder, KeyValue, Observation,
        Series, SeriesKey,
    };

    use super::{DimensionFilter, PivotOptions, ReportError, parse_value, pivot};

    fn structure() -> DataStructure {
        let mut builder = DataStructureBuilder::new("TEST", "Test");
        for id in ["MODEL", "VARIABLE", "YEAR", "UNIT"] {
            builder.add_concept(Concept::new(id, id)).expect("concept");
        }
        let mut codes = Codelist::new();
        codes.register_path("Energy|Supply").expect("code");
        builder.bind_enumeration("VARIABLE", codes).expect("bind");
        for id in ["MODEL", "VARIABLE", "YEAR"] {
            builder.add_dimension(id, id).expect("dimension");
        }
        builder.add_attribute("UNIT", "UNIT").expect("attribute");
        builder.measure_dimension("YEAR");
        builder.finish().expect("structure")
    }

    fn dataset() -> DataSet {
        let mut groups = BTreeMap::new();
        for (model, variable, year, value) in [
            ("m1", "Energy", "2010", "5"),
            ("m2", "Supply", "2020", "7"),
        ] {
            groups.insert(
                SeriesKey::new(vec![
                    KeyValue {
                        dimension: "MODEL".to_string(),
                        value: model.to_string(),
                    },
                    KeyValue {
                        dimension: "VARIABLE".to_string(),
                        value: variable.to_string(),
                    },
                ]),
                Series {
                    attributes: BTreeMap::from([("UNIT".to_string(), "EJ/yr".to_string())]),
                    observations: vec![Observation {
                        dimension_value: year.to_string(),
                        value: value.to_string(),
                    }],
                },
            );
        }
        DataSet::new("TEST", groups)
    }

    #[test]
    fn pivots_series_against_the_label_union() {
        let table = pivot(&structure(), &dataset(), PivotOptions::default()).expect("pivot");
        assert_eq!(table.key_headers, vec!["MODEL", "VARIABLE"]);
        assert_eq!(table.attribute_headers, vec!["UNIT"]);
        assert_eq!(table.measure_headers, vec!["2010", "2020"]);
        assert_eq!(table.rows.len(), 2);

        // m1 has no 2020 observation; the cell is empty, not dropped.
        assert_eq!(table.rows[0].key, vec!["m1", "Energy"]);
        assert_eq!(
            table.rows[0].values,
            vec![Some("5".to_string()), None]
        );
        assert_eq!(table.rows[1].values, vec![None, Some("7".to_string())]);
    }

    #[test]
    fn filters_by_key_dimension_value() {
        let filter = DimensionFilter::parse("MODEL=m1").expect("filter");
        let table = pivot(
            &structure(),
            &dataset(),
            PivotOptions {
                filter: Some(&filter),
            },
        )
        .expect("pivot");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].key, vec!["m1", "Energy"]);
        // Labels come from the filtered series only.
        assert_eq!(table.measure_headers, vec!["2010"]);
    }

    #[test]
    fn filter_must_name_a_key_dimension() {
        let filter = DimensionFilter::parse("YEAR=2010").expect("filter");
        let err = pivot(
            &structure(),
            &dataset(),
            PivotOptions {
                filter: Some(&filter),
            },
        )
        .expect_err("measure filter");
        assert_eq!(
            err,
            ReportError::UnknownDimension {
                dimension: "YEAR".to_string()
            }
        );
    }

    #[test]
    fn filter_parse_rejects_malformed_input() {
        assert_eq!(
            DimensionFilter::parse("MODEL").expect_err("no equals"),
            ReportError::InvalidFilter {
                raw: "MODEL".to_string()
            }
        );
        assert_eq!(
            DimensionFilter::parse("=m1").expect_err("no dimension"),
            ReportError::InvalidFilter {
                raw: "=m1".to_string()
            }
        );
    }

    #[test]
    fn parse_value_is_lenient() {
        assert_eq!(parse_value(" 5.5 "), Some(5.5));
        assert_eq!(parse_value("n/a"), None);
        assert_eq!(parse_value(""), None);
    }
}
