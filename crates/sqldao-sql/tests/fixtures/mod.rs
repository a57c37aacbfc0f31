#![allow(dead_code)]

use sqldao_core::schema::domain::{
    DomainObject, DomainObjectProperty, DomainObjectReference, PropertyTy, Universe, Variant,
};
use sqldao_core::{Builder, Relationships};

pub fn geocode() -> DomainObject {
    DomainObject::literal("Geocode")
        .property(DomainObjectProperty::number("id").nullable())
        .property(DomainObjectProperty::number("latitude"))
        .property(DomainObjectProperty::number("longitude"))
}

pub fn seat() -> DomainObject {
    DomainObject::literal("Seat")
        .property(DomainObjectProperty::number("id").nullable())
        .property(DomainObjectProperty::string("row"))
        .property(DomainObjectProperty::number("number"))
}

pub fn platform() -> DomainObject {
    DomainObject::literal("Platform")
        .property(DomainObjectProperty::number("id").nullable())
        .property(DomainObjectProperty::number("number"))
        .property(DomainObjectProperty::reference("geocode", literal("Geocode")))
}

pub fn train_engineer() -> DomainObject {
    DomainObject::entity("TrainEngineer")
        .property(DomainObjectProperty::string("name"))
        .unique(["name"])
        .updatable(Vec::<String>::new())
}

pub fn locomotive() -> DomainObject {
    DomainObject::entity("Locomotive")
        .property(DomainObjectProperty::string("ein"))
        .unique(["ein"])
        .updatable(Vec::<String>::new())
}

/// `Train` with its properties in the given order.
pub fn train_with(properties: Vec<DomainObjectProperty>) -> DomainObject {
    properties
        .into_iter()
        .fold(DomainObject::entity("Train"), DomainObject::property)
        .unique(["tin"])
        .updatable(Vec::<String>::new())
}

pub fn train_properties() -> Vec<DomainObjectProperty> {
    vec![
        DomainObjectProperty::string("tin"),
        DomainObjectProperty::reference("homeStationGeocode", literal("Geocode")),
        DomainObjectProperty::reference("previousStationGeocode", literal("Geocode")).nullable(),
        DomainObjectProperty::string("leadEngineerUuid"),
        DomainObjectProperty::array("locomotiveUuids", PropertyTy::String),
        DomainObjectProperty::array("seats", PropertyTy::Reference(literal("Seat"))),
        DomainObjectProperty::reference("departurePlatform", literal("Platform")),
    ]
}

pub fn train() -> DomainObject {
    train_with(train_properties())
}

pub fn railway_with(train: DomainObject) -> Vec<DomainObject> {
    vec![
        geocode(),
        seat(),
        platform(),
        train_engineer(),
        locomotive(),
        train,
    ]
}

pub fn railway() -> Vec<DomainObject> {
    railway_with(train())
}

pub fn literal(name: &str) -> DomainObjectReference {
    DomainObjectReference::new(name, Variant::Literal)
}

pub fn build(objects: Vec<DomainObject>) -> Relationships {
    let universe = match Universe::new(objects) {
        Ok(universe) => universe,
        Err(err) => panic!("invalid universe: {err}"),
    };

    match Builder::new().build(&universe) {
        Ok(relationships) => relationships,
        Err(err) => panic!("invalid domain objects: {err}"),
    }
}
