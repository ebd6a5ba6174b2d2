//! Rendered frame snapshot.
//!
//! Plain data a renderer consumes to draw one animation frame. The engine computes which
//! glyphs are visible and where; turning that into pixels or terminal cells is the
//! renderer's job.
//!
//! All geometry is in the unit of the engine's [`GlyphMetrics`](crate::GlyphMetrics).
//! Vertical offsets are relative to a column's settled row: `y == 0.0` is settled,
//! positive is shifted down, negative shifted up.

/// One visible glyph within a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCell {
    /// Glyph to draw. Never the empty sentinel.
    pub glyph: char,
    /// Vertical offset from the settled row.
    pub y: f32,
}

impl GlyphCell {
    /// Create a cell.
    pub fn new(glyph: char, y: f32) -> Self {
        Self { glyph, y }
    }
}

/// One column of the ticker and the glyphs currently visible in it.
///
/// A column scrolling between two glyphs shows at most three: the anchored glyph and its
/// neighbors peeking in from above and below. A fully collapsed column has no cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFrame {
    /// Left edge of the column, relative to the frame's left edge.
    pub x: f32,
    /// Current column width.
    pub width: f32,
    /// Visible glyphs, ordered top to bottom.
    pub cells: Vec<GlyphCell>,
}

impl ColumnFrame {
    /// Create a column frame.
    pub fn new(x: f32, width: f32, cells: Vec<GlyphCell>) -> Self {
        Self { x, width, cells }
    }

    /// Whether the column currently shows nothing.
    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Full snapshot of the ticker at one progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerFrame {
    /// Total width, the sum of all column widths.
    pub width: f32,
    /// Row height the vertical offsets are measured against.
    pub line_height: f32,
    /// Columns, left to right. Collapsing columns are included until they are dropped.
    pub columns: Vec<ColumnFrame>,
}

impl TickerFrame {
    /// Number of columns in the frame.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_column() {
        let column = ColumnFrame::new(0.0, 0.0, Vec::new());
        assert!(column.is_blank());

        let column = ColumnFrame::new(0.0, 1.0, vec![GlyphCell::new('7', 0.0)]);
        assert!(!column.is_blank());
    }

    #[test]
    fn test_frame_holds_column_geometry() {
        let frame = TickerFrame {
            width: 2.0,
            line_height: 1.0,
            columns: vec![
                ColumnFrame::new(0.0, 1.0, vec![GlyphCell::new('4', 0.0)]),
                ColumnFrame::new(1.0, 1.0, vec![GlyphCell::new('2', -0.25)]),
            ],
        };
        assert_eq!(frame.column_count(), 2);
        assert_eq!(frame.columns[1].cells[0].y, -0.25);
    }
}
