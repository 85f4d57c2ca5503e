//! Error types for polyset's text interfaces.
//!
//! The geometric operations themselves never fail; degenerate input simply
//! produces less (or no) output.

use crate::io::SvgParseError;
use thiserror::Error;

/// Errors raised when parsing user-facing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolysetError {
    /// The name does not match any [`Operation`](crate::boolean::Operation).
    #[error("unknown boolean operation '{0}' (expected union, intersection or difference)")]
    UnknownOperation(String),

    /// Contour data could not be read from SVG path syntax.
    #[error("invalid SVG path: {0}")]
    Svg(#[from] SvgParseError),
}
