use super::{Column, Comma, Formatter, ToSql};

/// Joins `table` against the elements of an array, keeping each element's
/// position in `array_order_index`.
///
/// Starts at the `FROM` clause and assumes that clause sits one level deep
/// in its subquery.
pub(super) struct UnnestJoin<'a, S> {
    /// Table the array elements refer to
    pub(super) table: &'a str,

    /// The array being unnested
    pub(super) source: S,

    /// Column of `table` the array elements are matched against
    pub(super) key: &'static str,
}

/// The ordinality column of an [`UnnestJoin`] on `table`.
#[derive(Debug, Clone, Copy)]
pub(super) struct OrderIndex<'a>(pub(super) &'a str);

const ORDER_INDEX: &str = "array_order_index";

fn alias(table: &str) -> String {
    format!("{table}_ref")
}

impl<S: ToSql> ToSql for UnnestJoin<'_, S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = alias(self.table);

        fmt!(
            f,
            "FROM ",
            self.table,
            "\n  JOIN unnest(",
            self.source,
            ") WITH ORDINALITY\n    AS ",
            &alias,
            " (",
            Comma([self.key, ORDER_INDEX]),
            ")\n    ON ",
            Column(self.table, self.key),
            " = ",
            Column(&alias, self.key),
        );
    }
}

impl ToSql for OrderIndex<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = alias(self.0);
        fmt!(f, Column(&alias, ORDER_INDEX));
    }
}
