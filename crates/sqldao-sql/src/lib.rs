pub mod serializer;
pub use serializer::{indent, FunctionInputContext, Serializer};
