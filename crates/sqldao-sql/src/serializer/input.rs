use super::{Cast, Column, Formatter, OrderIndex, Placeholder, Serializer, ToSql, UnnestJoin};

use sqldao_core::{schema::PropertyPair, Result};

impl Serializer<'_> {
    pub(super) fn input(&self, pair: &PropertyPair) -> Result<String> {
        let column = &pair.sql_schema;
        let placeholder = Placeholder(self.parameter_name(pair));

        let Some(reference) = &column.reference else {
            return Ok(Formatter::render(|f| fmt!(f, placeholder)));
        };

        // The caller resolves nested objects to ids before binding them.
        if reference.method.is_direct() {
            return Ok(Formatter::render(|f| fmt!(f, placeholder)));
        }

        let target = self.relationships.get(&reference.of.name)?;
        let t = target.name.sql_schema.as_str();

        if !column.is_array {
            return Ok(Formatter::render(|f| {
                fmt!(
                    f,
                    "(SELECT id FROM ",
                    t,
                    " WHERE ",
                    Column(t, "uuid"),
                    " = ",
                    placeholder,
                    ")",
                )
            }));
        }

        Ok(Formatter::render(|f| {
            fmt!(
                f,
                "(\n  SELECT COALESCE(array_agg(",
                Column(t, "id"),
                " ORDER BY ",
                OrderIndex(t),
                "), array[]::bigint[]) AS array_agg\n  ",
                UnnestJoin {
                    table: t,
                    source: Cast(placeholder, "uuid[]"),
                    key: "uuid",
                },
                "\n)",
            )
        }))
    }
}
