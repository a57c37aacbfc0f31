use pretty_assertions::assert_eq;
use sqldao::domain::{DomainObject, DomainObjectProperty, DomainObjectReference, PropertyTy, Variant};
use sqldao::{Compiler, FunctionInputContext, Limits, Provider, Result};
use std_util::prelude::*;

fn railway() -> Vec<DomainObject> {
    let geocode = DomainObjectReference::new("Geocode", Variant::Literal);

    vec![
        DomainObject::entity("Train")
            .property(DomainObjectProperty::string("tin"))
            .property(DomainObjectProperty::reference("homeStationGeocode", geocode))
            .property(DomainObjectProperty::string("leadEngineerUuid").nullable())
            .property(DomainObjectProperty::array("locomotiveUuids", PropertyTy::String))
            .unique(["tin"])
            .updatable(["leadEngineerUuid", "locomotiveUuids"]),
        DomainObject::entity("TrainEngineer")
            .property(DomainObjectProperty::string("name"))
            .unique(["name"])
            .updatable(["name"]),
        DomainObject::entity("Locomotive")
            .property(DomainObjectProperty::string("ein"))
            .unique(["ein"])
            .updatable(Vec::<String>::new()),
        DomainObject::literal("Geocode")
            .property(DomainObjectProperty::number("latitude"))
            .property(DomainObjectProperty::number("longitude")),
    ]
}

/// Supplies metadata lazily, the way an extractor would.
struct Extracted(fn() -> Vec<DomainObject>);

impl Provider for Extracted {
    fn domain_objects(&self) -> Result<Vec<DomainObject>> {
        Ok((self.0)())
    }
}

#[test]
fn compile_railway() {
    let compilation = assert_ok!(Compiler::new().compile(&railway()));

    assert_eq!(
        compilation.provisioning_order,
        ["Geocode", "Locomotive", "TrainEngineer", "Train"]
    );

    let names = compilation
        .relationships
        .iter()
        .map(|relationship| relationship.name.sql_schema.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["train", "train_engineer", "locomotive", "geocode"]);

    let provisioned = compilation
        .provisioned()
        .map(|relationship| {
            let relationship = assert_ok!(relationship);
            relationship.name.domain_object.clone()
        })
        .collect::<Vec<_>>();
    assert_eq!(provisioned, compilation.provisioning_order);
}

#[test]
fn compile_through_provider() {
    let compiler = Compiler::new();

    let from_vec = assert_ok!(compiler.compile(&railway()));
    let from_slice = assert_ok!(compiler.compile(railway().as_slice()));
    let extracted = assert_ok!(compiler.compile(&Extracted(railway)));

    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, extracted);
}

#[test]
fn serializer_from_compilation() {
    let compilation = assert_ok!(Compiler::new().compile(&railway()));
    let train = assert_ok!(compilation.relationship("Train"));
    let serializer = compilation.serializer();

    let engineer = train.property("leadEngineerUuid").unwrap();
    assert_eq!(
        assert_ok!(serializer.select_expression("train", engineer)),
        "(
  SELECT train_engineer.uuid
  FROM train_engineer WHERE train_engineer.id = train.lead_engineer_id
) AS lead_engineer_uuid"
    );
    assert_eq!(
        assert_ok!(serializer.input_expression(engineer)),
        "(SELECT id FROM train_engineer WHERE train_engineer.uuid = :leadEngineerUuid)"
    );

    let geocode = train.property("homeStationGeocode").unwrap();
    assert_eq!(serializer.parameter_name(geocode), "homeStationGeocodeId");
    assert_eq!(
        assert_ok!(serializer.function_input_expression(
            "Train",
            geocode,
            FunctionInputContext::ForUpsert
        )),
        "match train.home_station_geocode.id {
    Some(id) => id,
    None => upsert_geocode(db, &train.home_station_geocode).await?,
}"
    );
}

#[test]
fn configuration_errors_surface() {
    let mut objects = railway();
    objects.push(DomainObject::entity("Locomotive"));

    let err = assert_err_contains!(Compiler::new().compile(&objects), "declared more than once");
    assert!(err.is_configuration());
    assert_eq!(err.domain_object(), Some("Locomotive"));
}

#[test]
fn limits_are_forwarded() {
    let mut compiler = Compiler::new();
    compiler.max_provisioning_passes(1);

    let err = assert_err_contains!(compiler.compile(&railway()), "unplaced: [Train]");
    assert!(err.is_cyclic_reference());
    assert!(err
        .to_string()
        .starts_with("failed to order relationships for provisioning: "));

    compiler.limits(Limits::default());
    assert_ok!(compiler.compile(&railway()));

    // `leadEngineer` only names `TrainEngineer` once a qualifier is dropped.
    compiler.max_qualifier_drops(0);
    let compilation = assert_ok!(compiler.compile(&railway()));
    let train = assert_ok!(compilation.relationship("Train"));
    assert!(train.column("lead_engineer_uuid").is_some());
    assert_eq!(
        compilation.provisioning_order,
        ["Geocode", "Locomotive", "Train", "TrainEngineer"]
    );
}

#[test]
fn derivation_errors_carry_context() {
    let mut objects = railway();
    objects.push(
        DomainObject::entity("Station")
            .property(DomainObjectProperty::string("name"))
            .updatable(Vec::<String>::new()),
    );

    let err = assert_err!(Compiler::new().compile(&objects));
    assert_eq!(
        err.to_string(),
        "failed to derive relationships: invalid domain object `Station`: \
         an entity must declare `unique`, the properties forming its natural key"
    );
    assert!(err.is_configuration());
    assert_eq!(err.domain_object(), Some("Station"));
}
