//! # oxluv - exact sRGB / CIE XYZ / CIE LUV conversions
//!
//! Three immutable color types and the conversions between them:
//!
//! ```text
//! Srgb <-> CieXyz <-> CieLuv
//! ```
//!
//! All matrices and reference white values are literal constants with 17
//! significant digits, so results agree bit-for-bit with any other
//! implementation using the same constants.
//!
//! ## Quick Start
//!
//! ```
//! use oxluv_core::{CieLuv, Srgb};
//!
//! let red = Srgb::new(1.0, 0.0, 0.0);
//! let luv = red.to_luv();
//! assert!((luv.l - 53.237).abs() < 1e-3);
//!
//! let back = CieLuv::new(luv.l, luv.u, luv.v).to_srgb();
//! assert!(back.approx_eq(&red, 1e-10));
//! assert_eq!(red.hex().unwrap(), "#FF0000");
//! ```
//!
//! ## Failure signals
//!
//! Conversions are total and never return errors. The two singular inputs
//! (an XYZ triplet with nonzero Y and `x + 15y + 3z == 0`, and a LUV triplet
//! whose shifted v cancels to zero) produce NaN or infinite components.
//! Only [`Srgb::hex`], [`Srgb::to_u8`] and [`Srgb::from_hex`] can fail.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the three color types.

pub mod color;
pub mod consts;
pub mod error;
pub mod math;

pub use color::{CieLuv, CieXyz, Srgb};
pub use error::{Error, Result};
pub use math::{Transform, compand, inverse_compand};

/// Version of oxluv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
