//! Reference constants shared by the XYZ ↔ LUV conversions
//!
//! Literals keep 17 significant digits so that they survive a decimal
//! round-trip through IEEE 754 double precision unchanged.

/// u′ chromaticity of the reference white (D65)
pub const U_REF: f64 = 0.19783000664283681;

/// v′ chromaticity of the reference white (D65)
pub const V_REF: f64 = 0.46831999493879100;

/// CIE lightness breakpoint, (6/29)³
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE lightness slope of the linear segment, (29/3)³
pub const KAPPA: f64 = 24389.0 / 27.0;

/// L at which the cube-root and linear lightness segments meet
pub const L_BREAKPOINT: f64 = KAPPA * EPSILON;
