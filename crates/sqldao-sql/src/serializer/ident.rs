use super::{Formatter, Period, ToSql};

/// A column qualified by its table alias: `train.lead_engineer_id`
#[derive(Debug, Clone, Copy)]
pub(super) struct Column<'a>(pub(super) &'a str, pub(super) &'a str);

impl ToSql for Column<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Period([self.0, self.1]));
    }
}
