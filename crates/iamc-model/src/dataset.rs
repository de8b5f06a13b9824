//! Normalized observation model: series keys, observations, datasets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One dimension value inside a series key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    pub dimension: String,
    pub value: String,
}

/// The ordered tuple of key-defining dimension values identifying one
/// series. Two rows that produce equal keys describe the same series.
///
/// Attribute values are not part of the key; they ride on the series the
/// key identifies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    values: Vec<KeyValue>,
}

impl SeriesKey {
    pub fn new(values: Vec<KeyValue>) -> Self {
        Self { values }
    }

    /// Key values in the structure's declared dimension order.
    pub fn values(&self) -> &[KeyValue] {
        &self.values
    }

    /// Value for a dimension (case-insensitive id match).
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|entry| entry.dimension.eq_ignore_ascii_case(dimension))
            .map(|entry| entry.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", entry.dimension, entry.value)?;
        }
        Ok(())
    }
}

/// One (measure-dimension value, data value) pair belonging to a series.
///
/// Values are kept as raw strings; numeric interpretation is left to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Value of the measure dimension (e.g. a year label such as "2010").
    pub dimension_value: String,
    /// Raw cell value as written in the source.
    pub value: String,
}

/// The observations and attribute values collected for one series key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Attribute id -> value; consistent across the whole series.
    pub attributes: BTreeMap<String, String>,
    pub observations: Vec<Observation>,
}

/// One series key with its collected series data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub key: SeriesKey,
    pub series: Series,
}

/// The finalized collection of series groups, bound to a structure by id.
///
/// Groups are sorted by key; the set is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    structure_id: String,
    groups: Vec<SeriesGroup>,
}

impl DataSet {
    pub fn new(structure_id: impl Into<String>, groups: BTreeMap<SeriesKey, Series>) -> Self {
        Self {
            structure_id: structure_id.into(),
            groups: groups
                .into_iter()
                .map(|(key, series)| SeriesGroup { key, series })
                .collect(),
        }
    }

    pub fn structure_id(&self) -> &str {
        &self.structure_id
    }

    /// Series groups, sorted by key.
    pub fn groups(&self) -> &[SeriesGroup] {
        &self.groups
    }

    pub fn get(&self, key: &SeriesKey) -> Option<&Series> {
        self.groups
            .binary_search_by(|group| group.key.cmp(key))
            .ok()
            .map(|index| &self.groups[index].series)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn observation_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.series.observations.len())
            .sum()
    }
}
