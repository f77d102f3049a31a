//! Error types for the selene-glyph crate.

use crate::phase::Direction;

/// Error type for all fallible operations in the selene-glyph crate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GlyphError {
    /// Returned when the illumination fraction is outside 0.0..=1.0.
    #[error("illumination fraction {fraction} is outside 0.0..=1.0")]
    FractionOutOfRange {
        /// The out-of-range value that was provided.
        fraction: f64,
    },

    /// Returned when the direction does not apply at the given fraction:
    /// new and full moon need no direction, and quarter directions only
    /// describe a half-lit disk.
    #[error("direction {direction:?} does not apply at illumination {fraction}")]
    DirectionInapplicable {
        /// The fraction the caller supplied.
        fraction: f64,
        /// The direction that does not fit it.
        direction: Direction,
    },
}
