//! Glyph measurement.
//!
//! The engine is renderer-agnostic: it never measures text itself, it asks a
//! [`GlyphMetrics`] implementation. Widths and line height share one unit, chosen by the
//! implementation (terminal cells, pixels, points). Column widths, offsets, and frame
//! geometry all come out in that unit.

use unicode_width::UnicodeWidthChar;

use crate::roll::EMPTY_GLYPH;

/// Measurement source for glyph widths and line height.
///
/// Implementations must report a width of `0.0` for [`EMPTY_GLYPH`] so that columns
/// scheduled for removal can collapse to nothing, and must keep both methods pure for the
/// lifetime of a transition: the engine caches measurements at retarget time.
pub trait GlyphMetrics {
    /// Advance width of a single glyph.
    fn glyph_width(&self, glyph: char) -> f32;

    /// Height of one glyph row. Vertical scroll offsets are multiples and fractions of this.
    fn line_height(&self) -> f32;
}

/// Terminal-cell metrics backed by Unicode width rules.
///
/// ASCII takes one cell and East Asian wide characters take two, which is how every
/// mainstream terminal lays out a grid. Control characters have no meaningful terminal
/// rendering and fall back to one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Height of one row, in rows. A renderer that draws each column as a vertical strip can
    /// raise this to leave room for the neighboring glyphs above and below the settled one.
    pub line_height: f32,
}

impl CellMetrics {
    /// Create metrics with a line height of one row.
    pub fn new() -> Self {
        Self { line_height: 1.0 }
    }

    /// Create metrics with an explicit line height, in rows.
    pub fn with_line_height(line_height: f32) -> Self {
        Self { line_height }
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphMetrics for CellMetrics {
    fn glyph_width(&self, glyph: char) -> f32 {
        if glyph == EMPTY_GLYPH {
            return 0.0;
        }
        glyph.width().unwrap_or(1) as f32
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_glyph_has_zero_width() {
        let metrics = CellMetrics::new();
        assert_eq!(metrics.glyph_width(EMPTY_GLYPH), 0.0);
    }

    #[test]
    fn test_ascii_is_one_cell() {
        let metrics = CellMetrics::new();
        assert_eq!(metrics.glyph_width('a'), 1.0);
        assert_eq!(metrics.glyph_width('0'), 1.0);
        assert_eq!(metrics.glyph_width(' '), 1.0);
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        let metrics = CellMetrics::new();
        assert_eq!(metrics.glyph_width('中'), 2.0);
        assert_eq!(metrics.glyph_width('안'), 2.0);
    }

    #[test]
    fn test_control_characters_fall_back_to_one_cell() {
        let metrics = CellMetrics::new();
        assert_eq!(metrics.glyph_width('\t'), 1.0);
    }

    #[test]
    fn test_line_height_is_configurable() {
        assert_eq!(CellMetrics::new().line_height(), 1.0);
        assert_eq!(CellMetrics::with_line_height(3.0).line_height(), 3.0);
    }
}
