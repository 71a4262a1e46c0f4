//! Test helpers shared across crates.
//!
//! This crate provides a `figment::Jail` wrapper and helpers for inspecting
//! rendered YAML and markdown text.

pub mod figment;
pub mod text;
