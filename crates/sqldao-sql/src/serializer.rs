#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod function_input;
pub use function_input::FunctionInputContext;

mod ident;
use ident::Column;

mod indent;
pub use indent::indent;

mod placeholder;
use placeholder::{Cast, Placeholder};

mod unnest;
use unnest::{OrderIndex, UnnestJoin};

// Fragment serializers
mod input;
mod select;

use sqldao_core::{
    schema::{PropertyPair, Relationship, Relationships},
    Result,
};
use std_util::str;

/// Renders the expressions generated data access code uses to read and
/// write columns.
///
/// Reference columns are expanded into subqueries against the referenced
/// relationship, so every relationship a column refers to, directly or
/// through nested literals, must be present in `relationships`. A missing
/// one is reported as an internal consistency error.
///
/// All SQL is PostgreSQL. Fragments use two-space indentation; Rust
/// fragments use four.
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Relationships referenced columns are resolved against
    relationships: &'a Relationships,
}

struct Formatter<'a> {
    /// Where to write the serialized fragment
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(relationships: &'a Relationships) -> Self {
        Self { relationships }
    }

    pub fn relationships(&self) -> &'a Relationships {
        self.relationships
    }

    /// Expression reading the column of `pair` from the table aliased
    /// `table`, shaped the way the domain object sees it.
    ///
    /// Non-reference columns are read as is. Uuid references are turned
    /// back into uuids, and nested literals into JSON objects. Arrays keep
    /// the order they were written in.
    pub fn select_expression(&self, table: &str, pair: &PropertyPair) -> Result<String> {
        self.select(table, pair, 0)
    }

    /// Every column of `relationship`, in column order.
    pub fn select_expressions(&self, relationship: &Relationship) -> Result<Vec<String>> {
        relationship
            .properties
            .iter()
            .map(|pair| self.select_expression(&relationship.name.sql_schema, pair))
            .collect()
    }

    /// Expression producing the value stored in the column of `pair`, from
    /// the named parameter returned by [`Serializer::parameter_name`].
    pub fn input_expression(&self, pair: &PropertyPair) -> Result<String> {
        self.input(pair)
    }

    /// Every column of `relationship`, in column order.
    pub fn input_expressions(&self, relationship: &Relationship) -> Result<Vec<String>> {
        relationship
            .properties
            .iter()
            .map(|pair| self.input_expression(pair))
            .collect()
    }

    /// Rust expression computing the parameter bound for the column of
    /// `pair`, which belongs to the domain object named `owner`.
    pub fn function_input_expression(
        &self,
        owner: &str,
        pair: &PropertyPair,
        cx: FunctionInputContext,
    ) -> Result<String> {
        self.function_input(owner, pair, cx)
    }

    /// Name of the query parameter for the column of `pair`.
    ///
    /// Nested references are bound by the id of the referenced row, so their
    /// parameter is named after the column. Everything else is named after
    /// the domain property, camel cased for reserved columns nobody
    /// redeclared.
    pub fn parameter_name(&self, pair: &PropertyPair) -> String {
        match &pair.sql_schema.reference {
            Some(reference) if reference.method.is_direct() => {
                str::camel_case(&pair.sql_schema.name)
            }
            _ => str::camel_case(pair.domain_name()),
        }
    }
}

impl Formatter<'_> {
    fn render(build: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut dst = String::new();
        build(&mut Formatter { dst: &mut dst });
        dst
    }
}
