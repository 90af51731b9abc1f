//! CLI command implementations

pub mod convert;

pub use convert::ConvertArgs;
