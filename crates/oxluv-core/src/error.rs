//! Error types for oxluv

use thiserror::Error;

/// Result type for oxluv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxluv operations
///
/// Conversions themselves never fail. Degenerate inputs produce NaN or
/// infinite components instead, so only the hex representation has error
/// paths.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A color outside [0, 1] cannot be rendered as `#RRGGBB`
    #[error("Color out of gamut: ({r}, {g}, {b})")]
    OutOfGamut { r: f64, g: f64, b: f64 },

    /// String is not of the form `#RRGGBB`
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}
