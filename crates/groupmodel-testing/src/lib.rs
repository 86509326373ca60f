//! Testing infrastructure for groupmodel tests.
//!
//! This crate provides utilities for writing readable tests:
//! - `fixtures`: builders for form items, stores, records and sample forms
//! - `assertions`: tree assertions returning `anyhow::Result`

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
