#![allow(missing_docs)]

use iamc_model::error::SchemaError;
use iamc_model::{Codelist, Concept, DataStructureBuilder};

fn iamc_builder() -> DataStructureBuilder {
    let mut builder = DataStructureBuilder::new("IAMC", "IAMC data structure");
    for (id, name) in [
        ("MODEL", "Model name"),
        ("SCENARIO", "Scenario name"),
        ("REGION", "Region"),
        ("VARIABLE", "Reported variable"),
        ("YEAR", "Year of observation"),
        ("UNIT", "Unit of measure"),
    ] {
        builder.add_concept(Concept::new(id, name)).expect("concept");
    }
    let mut codes = Codelist::new();
    codes.register_path("Energy|Supply").expect("codes");
    builder
        .bind_enumeration("VARIABLE", codes)
        .expect("enumeration");
    builder
}

#[test]
fn builds_the_iamc_structure() {
    let mut builder = iamc_builder();
    for (id, concept) in [
        ("MODEL", "MODEL"),
        ("SCENARIO", "SCENARIO"),
        ("REGION", "REGION"),
        ("VARIABLE", "VARIABLE"),
        ("YEAR", "YEAR"),
    ] {
        builder.add_dimension(id, concept).expect("dimension");
    }
    builder.add_attribute("UNIT", "UNIT").expect("attribute");
    builder.measure_dimension("YEAR");

    let structure = builder.finish().expect("finish");

    let order: Vec<&str> = structure
        .dimensions()
        .iter()
        .map(|dim| dim.id.as_str())
        .collect();
    assert_eq!(order, vec!["MODEL", "SCENARIO", "REGION", "VARIABLE", "YEAR"]);

    let key_order: Vec<&str> = structure
        .key_dimensions()
        .map(|dim| dim.id.as_str())
        .collect();
    assert_eq!(key_order, vec!["MODEL", "SCENARIO", "REGION", "VARIABLE"]);
    assert_eq!(structure.key_dimension_count(), 4);

    assert_eq!(structure.enumerated_dimension().id, "VARIABLE");
    assert_eq!(structure.measure_dimension().id, "YEAR");
    assert!(structure.dimension("variable").is_some());
    assert!(structure.attribute("unit").is_some());
    assert_eq!(structure.codelist().len(), 2);
}

#[test]
fn dimension_requires_known_concept() {
    let mut builder = iamc_builder();
    let err = builder
        .add_dimension("MODE", "MODE")
        .expect_err("unknown concept");
    assert_eq!(
        err,
        SchemaError::UnknownConcept {
            component: "dimension",
            id: "MODE".to_string(),
            concept: "MODE".to_string(),
        }
    );
}

#[test]
fn duplicate_dimension_is_rejected() {
    let mut builder = iamc_builder();
    builder.add_dimension("MODEL", "MODEL").expect("dimension");
    let err = builder
        .add_dimension("model", "MODEL")
        .expect_err("duplicate");
    assert_eq!(
        err,
        SchemaError::DuplicateDimension {
            id: "model".to_string()
        }
    );
}

#[test]
fn only_one_enumeration_binding() {
    let mut builder = iamc_builder();
    let err = builder
        .bind_enumeration("REGION", Codelist::new())
        .expect_err("second binding");
    assert_eq!(
        err,
        SchemaError::EnumerationAlreadyBound {
            concept: "VARIABLE".to_string()
        }
    );
}

#[test]
fn finish_requires_an_enumerated_dimension() {
    let mut builder = iamc_builder();
    builder.add_dimension("MODEL", "MODEL").expect("dimension");
    builder.add_dimension("YEAR", "YEAR").expect("dimension");
    builder.measure_dimension("YEAR");
    let err = builder.finish().expect_err("no enumerated dimension");
    assert_eq!(
        err,
        SchemaError::MissingEnumeratedDimension {
            concept: "VARIABLE".to_string()
        }
    );
}

#[test]
fn finish_requires_a_measure_dimension() {
    let mut builder = iamc_builder();
    builder
        .add_dimension("VARIABLE", "VARIABLE")
        .expect("dimension");
    let err = builder.finish().expect_err("no measure");
    assert_eq!(err, SchemaError::MissingMeasureDimension);
}

#[test]
fn measure_must_be_a_declared_dimension() {
    let mut builder = iamc_builder();
    builder
        .add_dimension("VARIABLE", "VARIABLE")
        .expect("dimension");
    builder.measure_dimension("YEAR");
    let err = builder.finish().expect_err("undeclared measure");
    assert_eq!(
        err,
        SchemaError::UnknownMeasureDimension {
            id: "YEAR".to_string()
        }
    );
}

#[test]
fn measure_cannot_be_the_enumerated_dimension() {
    let mut builder = iamc_builder();
    builder
        .add_dimension("VARIABLE", "VARIABLE")
        .expect("dimension");
    builder.measure_dimension("VARIABLE");
    let err = builder.finish().expect_err("enumerated measure");
    assert_eq!(
        err,
        SchemaError::MeasureDimensionEnumerated {
            id: "VARIABLE".to_string()
        }
    );
}
