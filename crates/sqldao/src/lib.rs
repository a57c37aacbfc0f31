//! Compiles domain-object metadata into a relational schema description.
//!
//! A [`Compiler`] takes every domain object a [`Provider`] supplies, derives
//! one [`Relationship`] per object, and orders them so that referenced
//! objects are provisioned first. The resulting [`Compilation`] hands out a
//! [`Serializer`] rendering the SQL and Rust fragments generated data access
//! code is assembled from.

mod compiler;
pub use compiler::{Compilation, Compiler};

pub use sqldao_core::{
    err,
    schema::{self, domain},
    Error, Limits, Provider, Relationship, Relationships, Result,
};
pub use sqldao_sql::{indent, FunctionInputContext, Serializer};
