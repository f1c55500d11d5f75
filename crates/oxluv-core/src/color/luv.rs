//! CIE LUV (L*u*v*) Color Space
//!
//! - L: Lightness (0 = black, 100 = reference white)
//! - u: Green-red chromaticity axis
//! - v: Blue-yellow chromaticity axis
//!
//! The reference white is fixed to the D65 chromaticity in [`crate::consts`].

use bytemuck::{Pod, Zeroable};

use crate::color::{CieXyz, Srgb};
use crate::consts::{KAPPA, L_BREAKPOINT, U_REF, V_REF};

/// CIE LUV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct CieLuv {
    /// Lightness (0 to 100)
    pub l: f64,
    /// u chromaticity
    pub u: f64,
    /// v chromaticity
    pub v: f64,
}

impl CieLuv {
    /// Create a new LUV color
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Create LUV from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.u, self.v]
    }

    /// View as an array without copying
    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        bytemuck::cast_ref(self)
    }

    /// Convert to CIE XYZ
    ///
    /// L == 0 maps to XYZ black exactly, whatever u and v are. When
    /// `v + 13·L·V_REF` cancels to zero the result is non-finite.
    pub fn to_xyz(&self) -> CieXyz {
        if self.l == 0.0 {
            tracing::trace!("zero lightness, collapsing to XYZ black");
            return CieXyz::BLACK;
        }

        let y = if self.l > L_BREAKPOINT {
            ((self.l + 16.0) / 116.0).powf(3.0)
        } else {
            self.l / KAPPA
        };

        let u_ = self.u + 13.0 * self.l * U_REF;
        let v_ = self.v + 13.0 * self.l * V_REF;

        let x = 2.25 * y * u_ / v_;
        let z = 39.0 * y * self.l / v_ - x / 3.0 - 5.0 * y;
        CieXyz::new(x, y, z)
    }

    /// Convert to gamma-encoded sRGB by way of XYZ
    #[inline]
    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }

    /// Check if approximately equal to another LUV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }

    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
}

impl From<[f64; 3]> for CieLuv {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<CieLuv> for [f64; 3] {
    fn from(luv: CieLuv) -> Self {
        luv.to_array()
    }
}

impl From<CieXyz> for CieLuv {
    fn from(xyz: CieXyz) -> Self {
        xyz.to_luv()
    }
}

impl From<Srgb> for CieLuv {
    fn from(rgb: Srgb) -> Self {
        rgb.to_luv()
    }
}
