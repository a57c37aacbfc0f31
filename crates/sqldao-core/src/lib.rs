mod error;
pub use error::{Error, IntoError};

mod provider;
pub use provider::Provider;

pub mod schema;
pub use schema::{Builder, Limits, Relationship, Relationships};

/// A Result type alias that uses sqldao's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
