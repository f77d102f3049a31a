//! # selene-glyph
//!
//! Moon-phase glyph rendering. A fixed decision table maps an
//! illumination fraction and trend direction to pure draw instructions
//! (disk base, lit half-disk overlay, terminator ellipse), and a raster
//! backend paints those instructions into an RGBA image.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `phase` | Decision table from (fraction, direction) to draw instructions |
//! | `raster` | Per-pixel rendering into an `RgbaImage` |
//! | `error` | Error types |

mod error;
mod phase;
mod raster;

pub use error::GlyphError;
pub use phase::{render_phase, Direction, PhaseGlyph, Shade, Side, Terminator};
pub use raster::rasterize;
