//! Growable demo CLI library.
//!
//! This crate provides the demonstration driver for `GrowableArray`.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
