//! Hierarchical code list.
//!
//! Codes arrive as pipe-delimited paths (e.g. `Energy|Supply|Electricity`),
//! each path naming its full ancestor chain. The list is a flat registry:
//! one record per code id, with the parent held as a plain id field and
//! children discovered through a side index. Lookups and parent checks are
//! O(log n) map hits; no owning parent/child object graph exists.
//!
//! Code ids are unique across the whole hierarchy, not just among siblings,
//! so a bare id always identifies one code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HierarchyError;

/// Default path delimiter used by the wide scenario format.
pub const PATH_DELIMITER: char = '|';

/// One categorical value in a [`Codelist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Identifier, unique across the whole hierarchy.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Id of the parent code; `None` for roots.
    pub parent: Option<String>,
}

/// A forest of codes with id-based parent links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Codelist {
    codes: BTreeMap<String, Code>,
    /// Child ids per parent id, in registration order.
    children: BTreeMap<String, Vec<String>>,
    delimiter: char,
}

impl Default for Codelist {
    fn default() -> Self {
        Self {
            codes: BTreeMap::new(),
            children: BTreeMap::new(),
            delimiter: PATH_DELIMITER,
        }
    }
}

impl Codelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Register a single code.
    ///
    /// Fails if the id is already taken or the named parent has not been
    /// registered yet; parents must precede their children.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        parent: Option<&str>,
    ) -> Result<(), HierarchyError> {
        let id = id.into();
        if self.codes.contains_key(&id) {
            return Err(HierarchyError::DuplicateCode { id });
        }
        if let Some(parent_id) = parent
            && !self.codes.contains_key(parent_id)
        {
            return Err(HierarchyError::UnknownParent {
                id,
                parent: parent_id.to_string(),
            });
        }
        if let Some(parent_id) = parent {
            self.children
                .entry(parent_id.to_string())
                .or_default()
                .push(id.clone());
        }
        self.codes.insert(
            id.clone(),
            Code {
                id,
                name: name.into(),
                parent: parent.map(String::from),
            },
        );
        Ok(())
    }

    /// Register every code along a delimited path.
    ///
    /// Each segment is registered with the previous segment as its parent;
    /// segments already present are left untouched, so shared prefixes across
    /// paths and repeated input are fine. A segment that is already
    /// registered under a *different* parent is rejected, since that would
    /// silently fork the code's ancestry.
    pub fn register_path(&mut self, path: &str) -> Result<(), HierarchyError> {
        let mut parent: Option<String> = None;
        for segment in path.split(self.delimiter) {
            match self.codes.get(segment) {
                Some(existing) => {
                    if existing.parent != parent {
                        return Err(HierarchyError::DuplicateCode {
                            id: segment.to_string(),
                        });
                    }
                }
                None => {
                    self.register(segment, segment, parent.as_deref())?;
                }
            }
            parent = Some(segment.to_string());
        }
        Ok(())
    }

    /// Look up a code by id.
    pub fn get(&self, id: &str) -> Option<&Code> {
        self.codes.get(id)
    }

    /// Parent of a code, if it has one.
    pub fn parent(&self, id: &str) -> Option<&Code> {
        self.codes
            .get(id)
            .and_then(|code| code.parent.as_deref())
            .and_then(|parent| self.codes.get(parent))
    }

    /// Direct children of a code, in registration order.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &Code> {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.codes.get(child))
    }

    /// Codes with no parent.
    pub fn roots(&self) -> impl Iterator<Item = &Code> {
        self.codes.values().filter(|code| code.parent.is_none())
    }

    /// Resolve a delimited path string to its most specific code.
    pub fn resolve(&self, path: &str) -> Result<&Code, HierarchyError> {
        let segments: Vec<&str> = path.split(self.delimiter).collect();
        self.resolve_path(&segments)
    }

    /// Walk a path segment by segment and return the final code.
    ///
    /// The first segment may be any registered code. Every later segment
    /// must be registered with the previous segment as its literal parent:
    /// a code that exists elsewhere in the hierarchy does not satisfy the
    /// path. The error names the first segment that breaks the walk.
    pub fn resolve_path(&self, segments: &[&str]) -> Result<&Code, HierarchyError> {
        let mut resolved: Option<&Code> = None;
        for segment in segments.iter().copied() {
            let code =
                self.codes
                    .get(segment)
                    .ok_or_else(|| HierarchyError::UnknownPathSegment {
                        segment: segment.to_string(),
                    })?;
            if let Some(previous) = resolved
                && code.parent.as_deref() != Some(previous.id.as_str())
            {
                return Err(HierarchyError::MisplacedPathSegment {
                    segment: segment.to_string(),
                    expected: previous.id.clone(),
                    actual_parent: code.parent.clone(),
                });
            }
            resolved = Some(code);
        }
        resolved.ok_or(HierarchyError::UnknownPathSegment {
            segment: String::new(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.values()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
