#![allow(dead_code)]

use sqldao_core::schema::domain::{
    DomainObject, DomainObjectProperty, DomainObjectReference, PropertyTy, Universe, Variant,
};
use sqldao_core::{Builder, Relationships};

pub fn geocode() -> DomainObject {
    DomainObject::literal("Geocode")
        .property(DomainObjectProperty::number("latitude"))
        .property(DomainObjectProperty::number("longitude"))
}

pub fn seat() -> DomainObject {
    DomainObject::literal("Seat")
        .property(DomainObjectProperty::string("row"))
        .property(DomainObjectProperty::number("number"))
}

pub fn train_station() -> DomainObject {
    DomainObject::entity("TrainStation")
        .property(DomainObjectProperty::string("name"))
        .property(DomainObjectProperty::reference("geocode", reference("Geocode", Variant::Literal)))
        .unique(["name"])
        .updatable(Vec::<String>::new())
}

pub fn train_engineer() -> DomainObject {
    DomainObject::entity("TrainEngineer")
        .property(DomainObjectProperty::string("name"))
        .property(DomainObjectProperty::string("certification"))
        .unique(["certification"])
        .updatable(["name"])
}

pub fn locomotive() -> DomainObject {
    DomainObject::entity("Locomotive")
        .property(DomainObjectProperty::string("ein"))
        .unique(["ein"])
        .updatable(Vec::<String>::new())
}

pub fn train() -> DomainObject {
    DomainObject::entity("Train")
        .property(DomainObjectProperty::string("tin"))
        .property(DomainObjectProperty::reference(
            "homeStationGeocode",
            reference("Geocode", Variant::Literal),
        ))
        .property(DomainObjectProperty::string("leadEngineerUuid").nullable())
        .property(DomainObjectProperty::array("locomotiveUuids", PropertyTy::String))
        .property(DomainObjectProperty::array(
            "seats",
            PropertyTy::Reference(reference("Seat", Variant::Literal)),
        ))
        .unique(["tin"])
        .updatable(["homeStationGeocode", "leadEngineerUuid", "locomotiveUuids"])
}

pub fn train_departure() -> DomainObject {
    DomainObject::event("TrainDeparture")
        .property(DomainObjectProperty::date("createdAt"))
        .property(DomainObjectProperty::string("trainUuid"))
        .unique(["trainUuid", "createdAt"])
}

/// Every domain object of the railway scenario, in declaration order.
pub fn railway() -> Vec<DomainObject> {
    vec![
        geocode(),
        seat(),
        train_station(),
        train_engineer(),
        locomotive(),
        train(),
        train_departure(),
    ]
}

pub fn reference(name: &str, variant: Variant) -> DomainObjectReference {
    DomainObjectReference::new(name, variant)
}

pub fn universe(objects: impl IntoIterator<Item = DomainObject>) -> Universe {
    match Universe::new(objects) {
        Ok(universe) => universe,
        Err(err) => panic!("invalid universe: {err}"),
    }
}

pub fn build(objects: impl IntoIterator<Item = DomainObject>) -> sqldao_core::Result<Relationships> {
    Builder::new().build(&universe(objects))
}

/// Column names of a relationship, in order.
pub fn columns(relationships: &Relationships, domain_object: &str) -> Vec<String> {
    match relationships.get(domain_object) {
        Ok(relationship) => relationship
            .properties
            .iter()
            .map(|pair| pair.sql_schema.name.clone())
            .collect(),
        Err(err) => panic!("{err}"),
    }
}
