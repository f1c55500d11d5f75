//! Reference implementation wrappers
//!
//! The same conversions computed by `palette`, expressed in oxluv types so
//! tests can compare them directly. Unclamped conversions are used
//! throughout so that out-of-gamut values are compared as-is.

use oxluv_core::{CieLuv, CieXyz, Srgb};
use palette::convert::IntoColorUnclamped;
use palette::white_point::D65;
use palette::{LinSrgb, Luv, Xyz};

type PaletteSrgb = palette::Srgb<f64>;
type PaletteXyz = Xyz<D65, f64>;
type PaletteLuv = Luv<D65, f64>;

fn to_palette_xyz(xyz: CieXyz) -> PaletteXyz {
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

fn from_palette_xyz(xyz: PaletteXyz) -> CieXyz {
    CieXyz::new(xyz.x, xyz.y, xyz.z)
}

/// sRGB → XYZ using palette
pub fn srgb_to_xyz(rgb: Srgb) -> CieXyz {
    let linear: LinSrgb<f64> = PaletteSrgb::new(rgb.r, rgb.g, rgb.b).into_linear();
    from_palette_xyz(linear.into_color_unclamped())
}

/// XYZ → sRGB using palette
pub fn xyz_to_srgb(xyz: CieXyz) -> Srgb {
    let linear: LinSrgb<f64> = to_palette_xyz(xyz).into_color_unclamped();
    let rgb = PaletteSrgb::from_linear(linear);
    Srgb::new(rgb.red, rgb.green, rgb.blue)
}

/// XYZ → LUV using palette
pub fn xyz_to_luv(xyz: CieXyz) -> CieLuv {
    let luv: PaletteLuv = to_palette_xyz(xyz).into_color_unclamped();
    CieLuv::new(luv.l, luv.u, luv.v)
}

/// LUV → XYZ using palette
pub fn luv_to_xyz(luv: CieLuv) -> CieXyz {
    let xyz: PaletteXyz = PaletteLuv::new(luv.l, luv.u, luv.v).into_color_unclamped();
    from_palette_xyz(xyz)
}

/// sRGB → LUV using palette
pub fn srgb_to_luv(rgb: Srgb) -> CieLuv {
    xyz_to_luv(srgb_to_xyz(rgb))
}
