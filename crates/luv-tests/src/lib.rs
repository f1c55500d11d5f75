//! # luv-tests
//!
//! Property and parity testing for oxluv.
//!
//! This crate provides:
//! - Deterministic sample sets (grids, ramps, seeded random colors)
//! - Reference conversions computed with `palette`
//! - Error statistics for comparing sample sets
//!
//! ## Reference Implementation
//!
//! `palette` derives its sRGB matrix from the primaries and a four-digit
//! D65 white point, so it agrees with oxluv to roughly 1e-4 in XYZ and
//! 0.02 in LUV rather than bit-for-bit. Parity tests use tolerances sized
//! for that gap; exactness is covered by the round-trip tests.

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, max_abs_diff};
pub use patterns::{cube_corners, gray_ramp, random_linear, random_srgb, srgb_grid};
