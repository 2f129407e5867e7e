//! Internal support utilities for the derive.
//!
//! Attribute parsing and diagnostics live here so the derive itself only
//! deals with code generation.

pub mod attrs;
pub mod diag;
