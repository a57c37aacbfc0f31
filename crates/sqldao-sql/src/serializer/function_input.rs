use super::{indent, Serializer};

use sqldao_core::{schema::PropertyPair, Result};
use std_util::str;

/// Where a function-input expression is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionInputContext {
    /// Inside an upsert function: values are fields of the domain object
    /// being written, bound to the snake-cased name of its type.
    ForUpsert,

    /// Inside a find function: values are the function's own arguments.
    ForFind,
}

impl Serializer<'_> {
    pub(super) fn function_input(
        &self,
        owner: &str,
        pair: &PropertyPair,
        cx: FunctionInputContext,
    ) -> Result<String> {
        let column = &pair.sql_schema;
        let field = str::snake_case(pair.domain_name());

        let value = match cx {
            FunctionInputContext::ForUpsert => format!("{}.{field}", str::snake_case(owner)),
            FunctionInputContext::ForFind => field.clone(),
        };

        let Some(reference) = column
            .reference
            .as_ref()
            .filter(|reference| reference.method.is_direct())
        else {
            return Ok(value);
        };

        let target = self.relationships.get(&reference.of.name)?;
        let upsert = format!("upsert_{}", target.name.sql_schema);
        let element = str::snake_case(&target.name.domain_object);

        let get_or_create = |value: &str, borrowed: bool| {
            if column.is_array {
                get_or_create_all(value, borrowed, &element, &upsert)
            } else {
                get_or_create_one(value, borrowed, &upsert)
            }
        };

        if !column.is_nullable {
            return Ok(get_or_create(&value, false));
        }

        Ok(format!(
            "match &{value} {{\n    None => None,\n    Some({field}) => Some({}),\n}}",
            indent(&get_or_create(&field, true), 4)
        ))
    }
}

/// Id of an already persisted object, or of the row upserting it creates.
/// `borrowed` is set when `value` is already a reference.
fn get_or_create_one(value: &str, borrowed: bool, upsert: &str) -> String {
    let arg = if borrowed {
        value.to_string()
    } else {
        format!("&{value}")
    };

    format!("match {value}.id {{\n    Some(id) => id,\n    None => {upsert}(db, {arg}).await?,\n}}")
}

/// Ids of every element of `value`, in order.
fn get_or_create_all(value: &str, borrowed: bool, element: &str, upsert: &str) -> String {
    let iter = if borrowed {
        value.to_string()
    } else {
        format!("&{value}")
    };

    format!(
        "{{\n    let mut ids = Vec::with_capacity({value}.len());\n    for {element} in {iter} {{\n        ids.push({});\n    }}\n    ids\n}}",
        indent(&get_or_create_one(element, true, upsert), 8)
    )
}
