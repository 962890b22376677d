//! Command implementations.

pub mod demo;
