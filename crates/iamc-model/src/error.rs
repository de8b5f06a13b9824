use thiserror::Error;

/// Errors raised while building or walking a code hierarchy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("code `{id}` is already registered")]
    DuplicateCode { id: String },

    #[error("parent `{parent}` of code `{id}` is not registered")]
    UnknownParent { id: String, parent: String },

    #[error("unknown code `{segment}` in path")]
    UnknownPathSegment { segment: String },

    #[error(
        "code `{segment}` is registered under `{}`, not `{expected}`",
        .actual_parent.as_deref().unwrap_or("<root>")
    )]
    MisplacedPathSegment {
        segment: String,
        /// Parent implied by the path being resolved.
        expected: String,
        /// Parent the code was actually registered under.
        actual_parent: Option<String>,
    },
}

/// Errors raised while assembling a data structure definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("concept `{id}` is already defined with different content")]
    ConceptConflict { id: String },

    #[error("{component} `{id}` references unknown concept `{concept}`")]
    UnknownConcept {
        component: &'static str,
        id: String,
        concept: String,
    },

    #[error("dimension `{id}` is already declared")]
    DuplicateDimension { id: String },

    #[error("attribute `{id}` is already declared")]
    DuplicateAttribute { id: String },

    #[error("a code hierarchy is already bound to concept `{concept}`")]
    EnumerationAlreadyBound { concept: String },

    #[error("no concept is bound to a code hierarchy")]
    MissingEnumeration,

    #[error("no dimension references the enumerated concept `{concept}`")]
    MissingEnumeratedDimension { concept: String },

    #[error("dimensions `{first}` and `{second}` both reference the enumerated concept")]
    MultipleEnumeratedDimensions { first: String, second: String },

    #[error("no measure dimension was configured")]
    MissingMeasureDimension,

    #[error("measure dimension `{id}` is not declared")]
    UnknownMeasureDimension { id: String },

    #[error("measure dimension `{id}` cannot reference the enumerated concept")]
    MeasureDimensionEnumerated { id: String },
}
