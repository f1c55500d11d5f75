//! sRGB companding
//!
//! The IEC 61966-2-1 piecewise transfer function between linear light and
//! gamma-encoded sRGB channel values. Neither direction clamps: values
//! below the breakpoint take the linear segment (negative values included)
//! and values above 1 stay on the power segment.

/// Linear segment threshold on the linear-light side
pub const COMPAND_THRESHOLD: f64 = 0.0031308;

/// Linear segment threshold on the encoded side
pub const INVERSE_COMPAND_THRESHOLD: f64 = 0.04045;

const LINEAR_SCALE: f64 = 12.92;
const POWER_SCALE: f64 = 1.055;
const POWER_OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// sRGB gamma encode (linear → encoded)
#[inline]
pub fn compand(linear: f64) -> f64 {
    if linear <= COMPAND_THRESHOLD {
        LINEAR_SCALE * linear
    } else {
        POWER_SCALE * linear.powf(1.0 / GAMMA) - POWER_OFFSET
    }
}

/// sRGB gamma decode (encoded → linear)
#[inline]
pub fn inverse_compand(encoded: f64) -> f64 {
    if encoded > INVERSE_COMPAND_THRESHOLD {
        ((encoded + POWER_OFFSET) / POWER_SCALE).powf(GAMMA)
    } else {
        encoded / LINEAR_SCALE
    }
}
