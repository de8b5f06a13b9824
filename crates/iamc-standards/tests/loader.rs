#![allow(missing_docs)]

use iamc_model::error::{HierarchyError, SchemaError};
use iamc_standards::{DefinitionError, builtin, parse};

#[test]
fn builtin_definition_loads() {
    let structure = builtin().expect("builtin structure");
    assert_eq!(structure.id(), "IAMC");

    let order: Vec<&str> = structure
        .dimensions()
        .iter()
        .map(|dim| dim.id.as_str())
        .collect();
    assert_eq!(order, vec!["MODEL", "SCENARIO", "REGION", "VARIABLE", "YEAR"]);
    assert_eq!(structure.measure_dimension().id, "YEAR");
    assert_eq!(structure.enumerated_dimension().id, "VARIABLE");
    assert!(structure.attribute("UNIT").is_some());

    let leaf = structure
        .codelist()
        .resolve("Energy|Supply|Electricity")
        .expect("resolve");
    assert_eq!(leaf.id, "Electricity");
}

#[test]
fn parses_a_minimal_definition() {
    let source = r#"
        [structure]
        id = "TEST"
        name = "Test structure"

        [[concepts]]
        id = "REGION"
        name = "Region"

        [[concepts]]
        id = "VARIABLE"
        name = "Variable"

        [[concepts]]
        id = "YEAR"
        name = "Year"

        [[dimensions]]
        id = "REGION"
        concept = "REGION"

        [[dimensions]]
        id = "VARIABLE"
        concept = "VARIABLE"

        [[dimensions]]
        id = "YEAR"
        concept = "YEAR"

        [enumeration]
        concept = "VARIABLE"
        codes = ["Energy", "Energy|Supply"]

        [measure]
        dimension = "YEAR"
    "#;

    let structure = parse(source, "<test>").expect("parse");
    assert_eq!(structure.key_dimension_count(), 2);
    // The delimiter defaults to the pipe used by the wide format.
    assert_eq!(structure.codelist().delimiter(), '|');
    assert_eq!(structure.codelist().len(), 2);
    assert!(structure.attributes().is_empty());
}

#[test]
fn rejects_a_dimension_with_an_unknown_concept() {
    let source = r#"
        [structure]
        id = "TEST"
        name = "Test structure"

        [[concepts]]
        id = "VARIABLE"
        name = "Variable"

        [[concepts]]
        id = "YEAR"
        name = "Year"

        [[dimensions]]
        id = "REGION"
        concept = "REGION"

        [[dimensions]]
        id = "VARIABLE"
        concept = "VARIABLE"

        [[dimensions]]
        id = "YEAR"
        concept = "YEAR"

        [enumeration]
        concept = "VARIABLE"
        codes = ["Energy"]

        [measure]
        dimension = "YEAR"
    "#;

    let err = parse(source, "<test>").expect_err("unknown concept");
    match err {
        DefinitionError::Schema(SchemaError::UnknownConcept { id, concept, .. }) => {
            assert_eq!(id, "REGION");
            assert_eq!(concept, "REGION");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn rejects_conflicting_code_paths() {
    let source = r#"
        [structure]
        id = "TEST"
        name = "Test structure"

        [[concepts]]
        id = "VARIABLE"
        name = "Variable"

        [[concepts]]
        id = "YEAR"
        name = "Year"

        [[dimensions]]
        id = "VARIABLE"
        concept = "VARIABLE"

        [[dimensions]]
        id = "YEAR"
        concept = "YEAR"

        [enumeration]
        concept = "VARIABLE"
        codes = ["Energy|Supply", "Transport|Supply"]

        [measure]
        dimension = "YEAR"
    "#;

    let err = parse(source, "<test>").expect_err("conflicting parent");
    match err {
        DefinitionError::Hierarchy(HierarchyError::DuplicateCode { id }) => {
            assert_eq!(id, "Supply");
        }
        other => panic!("expected hierarchy error, got {other:?}"),
    }
}

#[test]
fn rejects_a_missing_measure_section() {
    let source = r#"
        [structure]
        id = "TEST"
        name = "Test structure"

        [enumeration]
        concept = "VARIABLE"
        codes = []
    "#;

    let err = parse(source, "<test>").expect_err("missing measure");
    assert!(matches!(err, DefinitionError::Toml { .. }));
}
