//! Color space types and conversions
//!
//! This module provides:
//! - gamma-encoded sRGB
//! - CIE XYZ
//! - CIE LUV
//!
//! Conversions form a triangle through XYZ: sRGB ↔ XYZ ↔ LUV. There is no
//! direct sRGB ↔ LUV path.

pub mod luv;
pub mod srgb;
pub mod xyz;

pub use luv::CieLuv;
pub use srgb::Srgb;
pub use xyz::CieXyz;
