//! Mathematical operations for color conversion
//!
//! - 3x3 matrix transforms for RGB↔XYZ
//! - sRGB companding

pub mod gamma;
pub mod matrix;

pub use gamma::{compand, inverse_compand};
pub use matrix::{SRGB_TO_XYZ, Transform, XYZ_TO_SRGB, multiply_vec3};
