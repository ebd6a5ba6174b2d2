//! Per-column animation state.
//!
//! A [`TickerColumn`] is the state machine for one character position: it holds the scroll
//! range currently being traversed and turns a progress fraction into the anchored glyph,
//! its vertical offset, and the interpolated column width. Interruption handling lives here
//! too: retargeting mid-animation carries the in-flight offset over as a residual that
//! decays to zero across the new transition, so the glyph never jumps.

use std::sync::Arc;

use crate::frame::GlyphCell;
use crate::metrics::GlyphMetrics;
use crate::roll::{EMPTY_GLYPH, GlyphRoll, ScrollDirection, ScrollRange};

/// Glyph sequence a column scrolls through.
///
/// Normally a shared [`GlyphRoll`]; when no configured roll covers both endpoints of a
/// transition the column improvises a direct sequence of just the two glyphs involved.
#[derive(Debug, Clone)]
enum ScrollSource {
    Roll(Arc<GlyphRoll>),
    Direct(Vec<char>),
}

impl ScrollSource {
    fn glyph_at(&self, index: isize) -> Option<char> {
        match self {
            ScrollSource::Roll(roll) => roll.glyph_at(index),
            ScrollSource::Direct(glyphs) => usize::try_from(index)
                .ok()
                .and_then(|i| glyphs.get(i).copied()),
        }
    }

    fn slot_count(&self) -> usize {
        match self {
            ScrollSource::Roll(roll) => roll.backing_len(),
            ScrollSource::Direct(glyphs) => glyphs.len(),
        }
    }
}

/// One animated character position.
///
/// Columns are created and driven by the engine; renderers read them through accessors or
/// through [`cells`](TickerColumn::cells). Widths and offsets are in the unit of the
/// engine's [`GlyphMetrics`].
#[derive(Debug, Clone)]
pub struct TickerColumn {
    source: ScrollSource,
    range: ScrollRange,
    direction_sign: i32,

    current_glyph: char,
    target_glyph: char,

    // Outputs of the last set_progress call.
    anchor_index: isize,
    offset: f32,
    line_height: f32,

    source_width: f32,
    current_width: f32,
    target_width: f32,
    minimum_required_width: f32,

    // Offset state carried across an interrupting retarget.
    current_residual: f32,
    previous_residual: f32,
}

impl TickerColumn {
    pub(crate) fn new() -> Self {
        Self {
            source: ScrollSource::Direct(vec![EMPTY_GLYPH]),
            range: ScrollRange { start: 0, end: 0 },
            direction_sign: 1,
            current_glyph: EMPTY_GLYPH,
            target_glyph: EMPTY_GLYPH,
            anchor_index: 0,
            offset: 0.0,
            line_height: 0.0,
            source_width: 0.0,
            current_width: 0.0,
            target_width: 0.0,
            minimum_required_width: 0.0,
            current_residual: 0.0,
            previous_residual: 0.0,
        }
    }

    /// Point the column at a new target glyph, resolving a scroll range from the first roll
    /// that knows both the currently displayed glyph and the target.
    pub(crate) fn retarget(
        &mut self,
        target: char,
        rolls: &[Arc<GlyphRoll>],
        direction: ScrollDirection,
        metrics: &dyn GlyphMetrics,
    ) {
        self.target_glyph = target;
        self.source_width = self.current_width;
        self.target_width = metrics.glyph_width(target);
        self.minimum_required_width = self.source_width.max(self.target_width);

        self.select_scroll_source(rolls, direction);
        self.direction_sign = self.range.direction_sign();

        // If this retarget interrupts a running animation, the offset it was displaying
        // becomes the residual the next one starts from.
        self.previous_residual = self.current_residual;
        self.current_residual = 0.0;
    }

    fn select_scroll_source(&mut self, rolls: &[Arc<GlyphRoll>], direction: ScrollDirection) {
        for roll in rolls {
            if let Some(range) =
                roll.scroll_range(self.current_glyph, self.target_glyph, direction)
            {
                self.source = ScrollSource::Roll(Arc::clone(roll));
                self.range = range;
                return;
            }
        }

        // No roll covers both endpoints; scroll directly between the two glyphs so some
        // animation still happens instead of failing the update.
        if self.current_glyph == self.target_glyph {
            self.source = ScrollSource::Direct(vec![self.current_glyph]);
            self.range = ScrollRange { start: 0, end: 0 };
        } else {
            self.source = ScrollSource::Direct(vec![self.current_glyph, self.target_glyph]);
            self.range = ScrollRange { start: 0, end: 1 };
        }
    }

    /// Advance the column to a progress fraction of its current transition.
    ///
    /// Progress normally runs 0 to 1 but any value produces a valid state; anchor positions
    /// that fall outside the sequence simply leave the displayed glyph untouched.
    pub(crate) fn set_progress(&mut self, progress: f32, metrics: &dyn GlyphMetrics) {
        if progress == 1.0 {
            // Settled (or never animated): snap to the target.
            self.current_glyph = self.target_glyph;
            self.current_residual = 0.0;
            self.previous_residual = 0.0;
        }

        let line_height = metrics.line_height();

        // Fractional position along the scroll, in glyph steps.
        let position = progress * self.range.len() as f32;
        let whole_steps = position.trunc();
        let step_fraction = position - whole_steps;

        // The residual from an interrupted prior transition decays linearly to zero, which
        // keeps the offset continuous through the interruption.
        let residual = self.previous_residual * (1.0 - progress);

        self.offset = step_fraction * line_height * self.direction_sign as f32 + residual;

        // One step past the last slot already anchors outside the sequence, so step counts
        // cap there; progress values of arbitrary magnitude must not overflow the anchor
        // arithmetic.
        let step_limit = (self.source.slot_count() + 1) as f32;
        let steps = whole_steps.clamp(-step_limit, step_limit) as isize;
        self.anchor_index = self.range.start as isize + steps * self.direction_sign as isize;
        self.line_height = line_height;
        self.current_width = self.source_width + (self.target_width - self.source_width) * progress;

        // The displayed glyph tracks the anchor only while it points at a real slot; past
        // either end of the sequence the last shown state stays put.
        if let Some(glyph) = self.source.glyph_at(self.anchor_index) {
            self.current_glyph = glyph;
            self.current_residual = self.offset;
        }
    }

    /// Mark the overall animation as stopped, collapsing width bookkeeping onto the current
    /// width so the column stops reserving room for a transition that is over.
    pub(crate) fn on_animation_end(&mut self, metrics: &dyn GlyphMetrics) {
        self.refresh_metrics(metrics);
        self.minimum_required_width = self.current_width;
    }

    /// Pick up changed glyph measurements.
    ///
    /// Adopts a remeasured target width only while no animation is in flight, so a running
    /// transition keeps the interpolation endpoints it started with.
    pub(crate) fn refresh_metrics(&mut self, metrics: &dyn GlyphMetrics) {
        let target_width = metrics.glyph_width(self.target_glyph);
        if self.current_width == self.target_width && self.target_width != target_width {
            self.target_width = target_width;
            self.current_width = target_width;
            self.minimum_required_width = target_width;
        }
    }

    /// The glyph currently displayed at this position.
    ///
    /// While a deletion is collapsing the column this is the glyph still visible; once fully
    /// collapsed it is [`EMPTY_GLYPH`].
    pub fn current_glyph(&self) -> char {
        self.current_glyph
    }

    /// The glyph this column is animating toward.
    pub fn target_glyph(&self) -> char {
        self.target_glyph
    }

    /// Current column width, linearly interpolated between the source and target widths.
    pub fn current_width(&self) -> f32 {
        self.current_width
    }

    /// Width the column needs reserved: the wider of its transition endpoints, collapsed to
    /// the current width once the animation has ended.
    pub fn minimum_required_width(&self) -> f32 {
        self.minimum_required_width
    }

    /// Vertical offset of the anchored glyph from its settled row, as of the last progress
    /// update. Positive is shifted down.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The glyphs currently visible in this column, top to bottom.
    ///
    /// At most three: the glyph ahead of the anchor, the anchored glyph, and the one behind
    /// it. Slots outside the sequence and the empty sentinel produce no cell. Offsets are
    /// not clipped; a cell a full row away from the settled position is the renderer's to
    /// discard.
    pub fn cells(&self) -> Vec<GlyphCell> {
        let candidates = [
            (self.anchor_index + 1, self.offset - self.line_height),
            (self.anchor_index, self.offset),
            (self.anchor_index - 1, self.offset + self.line_height),
        ];

        let mut cells = Vec::with_capacity(3);
        for (index, y) in candidates {
            if let Some(glyph) = self.source.glyph_at(index) {
                if glyph != EMPTY_GLYPH {
                    cells.push(GlyphCell::new(glyph, y));
                }
            }
        }
        cells
    }
}
