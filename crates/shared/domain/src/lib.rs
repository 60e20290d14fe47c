//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, no locking, no heavy logic. Just data and simple helpers
//! shared by the feature slices and the shell.

pub mod config;
pub mod vehicle;

pub use crate::vehicle::VehicleKind;
