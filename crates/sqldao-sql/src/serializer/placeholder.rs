use super::{Formatter, ToSql};

/// Named query parameter: `:leadEngineerUuid`
#[derive(Debug, Clone, Copy)]
pub(super) struct Placeholder<S>(pub(super) S);

/// PostgreSQL cast: `expr::ty`
#[derive(Debug, Clone, Copy)]
pub(super) struct Cast<E>(pub(super) E, pub(super) &'static str);

impl<S: AsRef<str>> ToSql for Placeholder<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push(':');
        f.dst.push_str(self.0.as_ref());
    }
}

impl<E: ToSql> ToSql for Cast<E> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0, "::", self.1);
    }
}
