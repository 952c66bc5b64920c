//! Mediatitle - media folder name parsing
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod scanner;
