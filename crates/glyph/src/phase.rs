//! Decision table from illumination and trend to draw instructions.

use crate::error::GlyphError;

/// Paint used for a glyph region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Dark,
    Lit,
}

/// Side of the disk a half overlay covers, as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Trend direction selecting which limb of the disk is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Waxing,
    Waning,
    FirstQuarter,
    ThirdQuarter,
}

/// Terminator ellipse overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminator {
    /// Paint inside the ellipse.
    pub shade: Shade,
    /// Horizontal semi-axis as a fraction of the disk radius; the
    /// vertical semi-axis is always the full radius.
    pub half_width: f64,
}

/// Draw instructions for a moon-phase icon.
///
/// Paint order: fill the disk with `base`, overlay the lit half disk if
/// present, then the terminator ellipse if present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseGlyph {
    pub base: Shade,
    pub lit_half: Option<Side>,
    pub terminator: Option<Terminator>,
}

impl PhaseGlyph {
    /// Fully dark disk.
    pub fn new_moon() -> Self {
        Self {
            base: Shade::Dark,
            lit_half: None,
            terminator: None,
        }
    }

    /// Fully lit disk.
    pub fn full_moon() -> Self {
        Self {
            base: Shade::Lit,
            lit_half: None,
            terminator: None,
        }
    }
}

/// Maps an illumination fraction and trend direction to draw
/// instructions.
///
/// A lit fraction `f` puts the terminator at an ellipse of half-width
/// `|2f - 1|` relative to the disk radius: painted dark over the lit
/// half for a crescent (`f < 0.5`), lit over the dark half for a gibbous
/// (`f > 0.5`). At exactly `f == 0.5` the ellipse degenerates to width
/// zero and is omitted. Quarter directions draw that bare half disk and
/// therefore only accept `f == 0.5`. New and full moon carry no
/// direction at all; use [`PhaseGlyph::new_moon`] and
/// [`PhaseGlyph::full_moon`] directly.
///
/// # Errors
///
/// [`GlyphError::FractionOutOfRange`] outside 0.0..=1.0;
/// [`GlyphError::DirectionInapplicable`] at the extremes or for a
/// quarter direction away from 0.5.
pub fn render_phase(fraction: f64, direction: Direction) -> Result<PhaseGlyph, GlyphError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(GlyphError::FractionOutOfRange { fraction });
    }
    if fraction == 0.0 || fraction == 1.0 {
        return Err(GlyphError::DirectionInapplicable {
            fraction,
            direction,
        });
    }

    let side = match direction {
        Direction::Waxing | Direction::FirstQuarter => Side::Right,
        Direction::Waning | Direction::ThirdQuarter => Side::Left,
    };
    match direction {
        Direction::FirstQuarter | Direction::ThirdQuarter if fraction != 0.5 => {
            Err(GlyphError::DirectionInapplicable {
                fraction,
                direction,
            })
        }
        _ if fraction == 0.5 => Ok(PhaseGlyph {
            base: Shade::Dark,
            lit_half: Some(side),
            terminator: None,
        }),
        _ => Ok(PhaseGlyph {
            base: Shade::Dark,
            lit_half: Some(side),
            terminator: Some(Terminator {
                shade: if fraction < 0.5 { Shade::Dark } else { Shade::Lit },
                half_width: (2.0 * fraction - 1.0).abs(),
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waxing_crescent() {
        let glyph = render_phase(0.29, Direction::Waxing).unwrap();
        assert_eq!(glyph.base, Shade::Dark);
        assert_eq!(glyph.lit_half, Some(Side::Right));
        let t = glyph.terminator.unwrap();
        assert_eq!(t.shade, Shade::Dark);
        assert!((t.half_width - 0.42).abs() < 1e-9);
    }

    #[test]
    fn waning_crescent_mirrors_left() {
        let glyph = render_phase(0.29, Direction::Waning).unwrap();
        assert_eq!(glyph.lit_half, Some(Side::Left));
        assert_eq!(glyph.terminator.unwrap().shade, Shade::Dark);
    }

    #[test]
    fn waxing_gibbous_lit_terminator() {
        let glyph = render_phase(0.75, Direction::Waxing).unwrap();
        assert_eq!(glyph.lit_half, Some(Side::Right));
        let t = glyph.terminator.unwrap();
        assert_eq!(t.shade, Shade::Lit);
        assert!((t.half_width - 0.5).abs() < 1e-9);
    }

    #[test]
    fn half_lit_has_no_terminator() {
        for direction in [Direction::Waxing, Direction::FirstQuarter] {
            let glyph = render_phase(0.5, direction).unwrap();
            assert_eq!(glyph.lit_half, Some(Side::Right));
            assert_eq!(glyph.terminator, None);
        }
        for direction in [Direction::Waning, Direction::ThirdQuarter] {
            let glyph = render_phase(0.5, direction).unwrap();
            assert_eq!(glyph.lit_half, Some(Side::Left));
            assert_eq!(glyph.terminator, None);
        }
    }

    #[test]
    fn quarter_directions_reject_other_fractions() {
        for direction in [Direction::FirstQuarter, Direction::ThirdQuarter] {
            let err = render_phase(0.3, direction).unwrap_err();
            assert!(matches!(err, GlyphError::DirectionInapplicable { .. }));
        }
    }

    #[test]
    fn extremes_need_no_direction() {
        for fraction in [0.0, 1.0] {
            let err = render_phase(fraction, Direction::Waxing).unwrap_err();
            assert!(matches!(err, GlyphError::DirectionInapplicable { .. }));
        }
    }

    #[test]
    fn out_of_range_fractions_rejected() {
        for fraction in [-0.1, 1.1, f64::NAN] {
            let err = render_phase(fraction, Direction::Waxing).unwrap_err();
            assert!(matches!(err, GlyphError::FractionOutOfRange { .. }));
        }
    }

    #[test]
    fn direct_constructors() {
        assert_eq!(PhaseGlyph::new_moon().base, Shade::Dark);
        assert_eq!(PhaseGlyph::full_moon().base, Shade::Lit);
        assert_eq!(PhaseGlyph::new_moon().lit_half, None);
        assert_eq!(PhaseGlyph::full_moon().terminator, None);
    }
}
