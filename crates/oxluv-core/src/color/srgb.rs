//! Gamma-encoded sRGB
//!
//! Components are nominally in [0, 1]. Conversions may produce values
//! outside that range; such colors exist but report `is_valid() == false`
//! and have no hex representation.

use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::color::{CieLuv, CieXyz};
use crate::math::{SRGB_TO_XYZ, inverse_compand};
use crate::{Error, Result};

/// sRGB color in floating-point (nominally 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Srgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Srgb {
    /// Create a new sRGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create sRGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// View as an array without copying
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// Check if all components are in [0, 1]
    ///
    /// NaN components are never valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.as_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to CIE XYZ
    ///
    /// Each channel is linearized independently, then mapped through the
    /// sRGB primaries.
    pub fn to_xyz(&self) -> CieXyz {
        let linear = self.to_array().map(inverse_compand);
        CieXyz::from_array(SRGB_TO_XYZ.apply(linear))
    }

    /// Convert to CIE LUV by way of XYZ
    #[inline]
    pub fn to_luv(&self) -> CieLuv {
        self.to_xyz().to_luv()
    }

    /// Quantize to 8-bit channels
    ///
    /// Each component is scaled by 255 and rounded half-to-even, so
    /// 0.5/255 becomes 0 and 1.5/255 becomes 2.
    pub fn to_u8(&self) -> Result<[u8; 3]> {
        if !self.is_valid() {
            tracing::debug!(
                r = self.r,
                g = self.g,
                b = self.b,
                "refusing to quantize out-of-gamut color"
            );
            return Err(Error::OutOfGamut {
                r: self.r,
                g: self.g,
                b: self.b,
            });
        }
        // In range after the validity check, so the cast cannot saturate
        Ok(self.to_array().map(|c| (c * 255.0).round_ties_even() as u8))
    }

    /// Render as `#RRGGBB` with uppercase hex digits
    ///
    /// Fails with [`Error::OutOfGamut`] if any component lies outside
    /// [0, 1].
    pub fn hex(&self) -> Result<String> {
        let [r, g, b] = self.to_u8()?;
        Ok(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }

    /// Parse a `#RRGGBB` string
    ///
    /// Hex digits may be upper or lower case. The leading `#` is required.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || {
            tracing::debug!(input = s, "rejecting malformed hex color");
            Error::InvalidHex(s.to_string())
        };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Check if approximately equal to another sRGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

impl FromStr for Srgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[f64; 3]> for Srgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Srgb> for [f64; 3] {
    fn from(rgb: Srgb) -> Self {
        rgb.to_array()
    }
}

impl From<CieXyz> for Srgb {
    fn from(xyz: CieXyz) -> Self {
        xyz.to_srgb()
    }
}

impl From<CieLuv> for Srgb {
    fn from(luv: CieLuv) -> Self {
        luv.to_srgb()
    }
}
