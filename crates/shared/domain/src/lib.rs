//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or environment access, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod flags;
pub mod types;
