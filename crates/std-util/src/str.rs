//! Naming helpers shared by the compiler crates.
//!
//! Domain objects and their properties are declared in camel case
//! (`TrainEngineer`, `homeStationGeocode`) while the relational side uses
//! snake case (`train_engineer`, `home_station_geocode_id`).

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn singularize(src: &str) -> String {
    pluralizer::pluralize(src, 1, false)
}

/// Splits a camel or snake cased identifier into its lowercase words.
pub fn words(src: &str) -> Vec<String> {
    snake_case(src)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}
