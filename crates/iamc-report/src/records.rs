//! Long-form view: one record per observation.

use std::collections::BTreeMap;

use serde::Serialize;

use iamc_model::{DataSet, DataStructure};

/// One observation flattened with its full dimension and attribute context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationRecord {
    /// Dimension id -> value, key dimensions plus the measure dimension.
    pub dimensions: BTreeMap<String, String>,
    /// Attribute id -> value for the observation's series.
    pub attributes: BTreeMap<String, String>,
    pub value: String,
}

/// Flatten a dataset into long-form records, one per observation, in group
/// order.
pub fn long_records(structure: &DataStructure, dataset: &DataSet) -> Vec<ObservationRecord> {
    let measure = structure.measure_dimension().id.clone();
    let mut records = Vec::with_capacity(dataset.observation_count());
    for group in dataset.groups() {
        for observation in &group.series.observations {
            let mut dimensions: BTreeMap<String, String> = group
                .key
                .values()
                .iter()
                .map(|entry| (entry.dimension.clone(), entry.value.clone()))
                .collect();
            dimensions.insert(measure.clone(), observation.dimension_value.clone());
            records.push(ObservationRecord {
                dimensions,
                attributes: group.series.attributes.clone(),
                value: observation.value.clone(),
            });
        }
    }
    records
}
