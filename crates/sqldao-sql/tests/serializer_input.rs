mod fixtures;
use fixtures::*;

use pretty_assertions::assert_eq;
use sqldao_core::schema::ReferenceMethod;
use sqldao_sql::Serializer;
use std_util::prelude::*;

fn input(property: &str) -> (String, String) {
    let relationships = build(railway());
    let train = assert_ok!(relationships.get("Train"));
    let pair = train.property(property).unwrap();
    let serializer = Serializer::new(&relationships);

    (
        serializer.parameter_name(pair),
        assert_ok!(serializer.input_expression(pair)),
    )
}

#[test]
fn plain_column() {
    assert_eq!(input("tin"), ("tin".to_string(), ":tin".to_string()));
}

#[test]
fn implicit_reference() {
    assert_eq!(
        input("leadEngineerUuid"),
        (
            "leadEngineerUuid".to_string(),
            "(SELECT id FROM train_engineer WHERE train_engineer.uuid = :leadEngineerUuid)"
                .to_string()
        )
    );
}

#[test]
fn implicit_reference_array() {
    let (parameter, expr) = input("locomotiveUuids");
    assert_eq!(parameter, "locomotiveUuids");
    assert_eq!(
        expr,
        "(
  SELECT COALESCE(array_agg(locomotive.id ORDER BY locomotive_ref.array_order_index), array[]::bigint[]) AS array_agg
  FROM locomotive
  JOIN unnest(:locomotiveUuids::uuid[]) WITH ORDINALITY
    AS locomotive_ref (uuid, array_order_index)
    ON locomotive.uuid = locomotive_ref.uuid
)"
    );
}

#[test]
fn direct_references_bind_ids() {
    assert_eq!(
        input("homeStationGeocode"),
        (
            "homeStationGeocodeId".to_string(),
            ":homeStationGeocodeId".to_string()
        )
    );
    assert_eq!(
        input("seats"),
        ("seatIds".to_string(), ":seatIds".to_string())
    );
    assert_eq!(
        input("departurePlatform"),
        (
            "departurePlatformId".to_string(),
            ":departurePlatformId".to_string()
        )
    );
}

#[test]
fn declared_direct_reference_binds_like_nesting() {
    let relationships = build(railway());
    let train = assert_ok!(relationships.get("Train"));
    let serializer = Serializer::new(&relationships);

    let nested = train.property("seats").unwrap();
    let mut declared = nested.clone();
    declared.sql_schema.reference.as_mut().unwrap().method = ReferenceMethod::DirectByDeclaration;

    assert_eq!(serializer.parameter_name(&declared), "seatIds");
    assert_eq!(
        assert_ok!(serializer.input_expression(&declared)),
        assert_ok!(serializer.input_expression(nested)),
    );
}

#[test]
fn input_expressions_cover_every_column() {
    let relationships = build(railway());
    let train = assert_ok!(relationships.get("Train"));

    let exprs = assert_ok!(Serializer::new(&relationships).input_expressions(train));
    assert_eq!(exprs.len(), train.properties.len());
    assert_eq!(exprs[0], ":id");
    assert_eq!(exprs[4], ":tin");
    assert_eq!(exprs[5], ":homeStationGeocodeId");
}

#[test]
fn reserved_columns_bind_camel_cased_parameters() {
    let relationships = build(railway());
    let train = assert_ok!(relationships.get("Train"));
    let serializer = Serializer::new(&relationships);

    for (column, parameter) in [
        ("id", "id"),
        ("uuid", "uuid"),
        ("created_at", "createdAt"),
        ("updated_at", "updatedAt"),
    ] {
        let pair = train.column(column).unwrap();
        assert_eq!(serializer.parameter_name(pair), parameter);
        assert_eq!(
            assert_ok!(serializer.input_expression(pair)),
            format!(":{parameter}")
        );
    }
}
