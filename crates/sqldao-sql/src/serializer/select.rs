use super::{indent, Column, Delimited, Formatter, OrderIndex, Serializer, ToSql, UnnestJoin};

use sqldao_core::{
    schema::{PropertyPair, Relationship},
    Result,
};
use std_util::str;
use tracing::trace;

impl Serializer<'_> {
    /// `depth` counts how many json objects the expression is nested in.
    /// Only top-level reference expressions are aliased.
    pub(super) fn select(&self, table: &str, pair: &PropertyPair, depth: usize) -> Result<String> {
        let column = &pair.sql_schema;
        let local = Column(table, &column.name);

        let Some(reference) = &column.reference else {
            return Ok(Formatter::render(|f| fmt!(f, local)));
        };

        trace!(table, column = %column.name, method = ?reference.method, depth, "select expression");

        let target = self.relationships.get(&reference.of.name)?;
        let t = target.name.sql_schema.as_str();

        let expr = match (reference.method.is_direct(), column.is_array) {
            (false, false) => Formatter::render(|f| {
                fmt!(
                    f,
                    "(\n  SELECT ",
                    Column(t, "uuid"),
                    "\n  FROM ",
                    t,
                    " WHERE ",
                    Column(t, "id"),
                    " = ",
                    local,
                    "\n)",
                )
            }),
            (false, true) => Formatter::render(|f| {
                fmt!(
                    f,
                    "(\n  SELECT COALESCE(array_agg(",
                    Column(t, "uuid"),
                    " ORDER BY ",
                    OrderIndex(t),
                    "), array[]::uuid[]) AS array_agg\n  ",
                    UnnestJoin {
                        table: t,
                        source: local,
                        key: "id",
                    },
                    "\n)",
                )
            }),
            (true, false) => {
                let object = self.json_build_object(target, depth)?;

                Formatter::render(|f| {
                    fmt!(
                        f,
                        "(\n  SELECT ",
                        indent(&object, 2),
                        " AS json_build_object\n  FROM ",
                        t,
                        " WHERE ",
                        Column(t, "id"),
                        " = ",
                        local,
                        "\n)",
                    )
                })
            }
            (true, true) => {
                let object = self.json_build_object(target, depth)?;

                Formatter::render(|f| {
                    fmt!(
                        f,
                        "(\n  SELECT COALESCE(\n    json_agg(\n      ",
                        indent(&object, 6),
                        "\n      ORDER BY ",
                        OrderIndex(t),
                        "\n    ),\n    '[]'::json\n  ) AS json_agg\n  ",
                        UnnestJoin {
                            table: t,
                            source: local,
                            key: "id",
                        },
                        "\n)",
                    )
                })
            }
        };

        if depth > 0 {
            return Ok(expr);
        }

        Ok(format!("{expr} AS {}", str::snake_case(pair.domain_name())))
    }

    /// The referenced row as a JSON object keyed by domain property names.
    fn json_build_object(&self, target: &Relationship, depth: usize) -> Result<String> {
        let mut entries = vec![];

        for pair in &target.properties {
            let Some(property) = &pair.domain_object else {
                continue;
            };

            let value = self.select(&target.name.sql_schema, pair, depth + 1)?;
            entries.push(format!("'{}', {}", property.name, indent(&value, 2)));
        }

        if entries.is_empty() {
            return Ok("json_build_object()".to_string());
        }

        Ok(Formatter::render(|f| {
            fmt!(
                f,
                "json_build_object(\n  ",
                Delimited(&entries, ",\n  "),
                "\n)",
            )
        }))
    }
}
