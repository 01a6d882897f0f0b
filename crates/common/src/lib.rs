//! Shared types and math helpers used by every scene script crate.
//!
//! # Invariants
//! - Helpers here are pure and allocation-free.

pub mod math;
pub mod types;

pub use math::{planar, smooth_step};
pub use types::Transform;
