//! Dataset accumulation.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::debug;

use iamc_model::{DataSet, DataStructure, Series, SeriesKey};

use crate::error::RowError;
use crate::normalize::NormalizedRow;

/// What to do when two rows produce the same series key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Reject the second row. Nothing is ever silently dropped.
    #[default]
    Reject,
    /// Fold the rows into one series: attribute values must agree,
    /// observation lists are concatenated.
    Merge,
}

/// Collects normalized rows into series groups and produces the final
/// [`DataSet`].
#[derive(Debug)]
pub struct DatasetBuilder<'a> {
    structure: &'a DataStructure,
    merge: MergePolicy,
    groups: BTreeMap<SeriesKey, Series>,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(structure: &'a DataStructure) -> Self {
        Self {
            structure,
            merge: MergePolicy::default(),
            groups: BTreeMap::new(),
        }
    }

    pub fn merge_policy(mut self, merge: MergePolicy) -> Self {
        self.merge = merge;
        self
    }

    /// Fold one normalized row into the dataset under construction.
    ///
    /// An equal key is rejected with [`RowError::DuplicateKey`] unless merge
    /// semantics were requested; a merge checks attribute consistency and
    /// appends the observations. The key's shape is revalidated against the
    /// structure, since the builder is a public seam.
    pub fn add_group(&mut self, group: NormalizedRow) -> Result<(), RowError> {
        let NormalizedRow { row, key, series } = group;

        let expected = self.structure.key_dimension_count();
        if key.len() != expected {
            return Err(RowError::KeyShape {
                row,
                expected,
                actual: key.len(),
            });
        }

        match self.groups.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(series);
                Ok(())
            }
            Entry::Occupied(mut entry) => match self.merge {
                MergePolicy::Reject => Err(RowError::DuplicateKey {
                    row,
                    key: entry.key().to_string(),
                }),
                MergePolicy::Merge => {
                    let current = entry.get();
                    for (attribute, incoming) in &series.attributes {
                        if let Some(existing) = current.attributes.get(attribute)
                            && existing != incoming
                        {
                            return Err(RowError::AttributeConflict {
                                row,
                                key: entry.key().to_string(),
                                attribute: attribute.clone(),
                                existing: existing.clone(),
                                incoming: incoming.clone(),
                            });
                        }
                    }
                    let existing = entry.get_mut();
                    for (attribute, incoming) in series.attributes {
                        existing.attributes.entry(attribute).or_insert(incoming);
                    }
                    existing.observations.extend(series.observations);
                    Ok(())
                }
            },
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Produce the immutable dataset. Consumes the builder, so nothing can
    /// be added afterwards.
    pub fn finalize(self) -> DataSet {
        debug!(groups = self.groups.len(), "finalizing dataset");
        DataSet::new(self.structure.id(), self.groups)
    }
}
