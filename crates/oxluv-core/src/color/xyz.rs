//! CIE XYZ Color Space
//!
//! XYZ sits in the middle of the conversion graph: sRGB reaches LUV only
//! by way of XYZ, and vice versa.

use bytemuck::{Pod, Zeroable};

use crate::color::{CieLuv, Srgb};
use crate::consts::{EPSILON, KAPPA, U_REF, V_REF};
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, compand};

/// CIE 1931 XYZ tristimulus values
///
/// Y is relative luminance, 1.0 for sRGB white. No range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct CieXyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl CieXyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// View as an array without copying
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// XYZ of sRGB white (1, 1, 1)
    pub fn white() -> Self {
        Self::from_array(SRGB_TO_XYZ.apply([1.0; 3]))
    }

    /// Convert to gamma-encoded sRGB
    ///
    /// The result is not clamped; out-of-gamut colors come back with
    /// components outside [0, 1].
    pub fn to_srgb(&self) -> Srgb {
        let linear = XYZ_TO_SRGB.apply(self.to_array());
        Srgb::from_array(linear.map(compand))
    }

    /// Convert to CIE LUV
    ///
    /// Black (L == 0) maps to the origin exactly. A triplet with nonzero
    /// lightness but `x + 15y + 3z == 0` has no chromaticity and yields
    /// non-finite u and v.
    pub fn to_luv(&self) -> CieLuv {
        let l = if self.y <= EPSILON {
            KAPPA * self.y
        } else {
            116.0 * self.y.powf(1.0 / 3.0) - 16.0
        };

        if l == 0.0 {
            tracing::trace!("zero lightness, collapsing to LUV origin");
            return CieLuv::BLACK;
        }

        let divider = self.x + 15.0 * self.y + 3.0 * self.z;
        let u = 13.0 * l * (4.0 * self.x / divider - U_REF);
        let v = 13.0 * l * (9.0 * self.y / divider - V_REF);
        CieLuv::new(l, u, v)
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
}

impl From<[f64; 3]> for CieXyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<CieXyz> for [f64; 3] {
    fn from(xyz: CieXyz) -> Self {
        xyz.to_array()
    }
}

impl From<Srgb> for CieXyz {
    fn from(rgb: Srgb) -> Self {
        rgb.to_xyz()
    }
}

impl From<CieLuv> for CieXyz {
    fn from(luv: CieLuv) -> Self {
        luv.to_xyz()
    }
}
