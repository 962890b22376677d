//! Common utilities shared across commands.

pub mod error;

pub use error::CliResult;
