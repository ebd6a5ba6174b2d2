//! The ticker engine: owns the column set and drives transitions.
//!
//! [`TickerEngine`] is the orchestrator. Each new target text is diffed against what the
//! columns currently display; the resulting action script mutates the column list in place,
//! and progress updates are broadcast to every column. The engine is single threaded and
//! purely reactive: an external animation clock decides what a progress value means in wall
//! time, and interrupting a transition by setting a new text mid-flight is the normal case,
//! not an error.

use std::collections::HashSet;
use std::sync::Arc;

use crate::column::TickerColumn;
use crate::error::TickerError;
use crate::frame::{ColumnFrame, TickerFrame};
use crate::metrics::GlyphMetrics;
use crate::plan::{ColumnAction, column_actions};
use crate::roll::{EMPTY_GLYPH, GlyphRoll, ScrollDirection};

/// Headless odometer-text animation engine.
///
/// Generic over the [`GlyphMetrics`] source so the same engine runs against terminal cells,
/// pixel measurements, or test doubles.
///
/// ```
/// use ticker_core::{CellMetrics, DIGITS, TickerEngine};
///
/// let mut ticker = TickerEngine::new(CellMetrics::new());
/// ticker.set_character_sets(&[DIGITS]).unwrap();
///
/// ticker.set_text("123").unwrap();
/// ticker.set_progress(1.0);
/// assert_eq!(ticker.visible_text(), "123");
///
/// // Retargeting mid-animation is the interruption path and always allowed.
/// ticker.set_text("129").unwrap();
/// ticker.set_progress(0.5);
/// ticker.set_progress(1.0);
/// ticker.on_animation_end();
/// assert_eq!(ticker.visible_text(), "129");
/// ```
#[derive(Debug)]
pub struct TickerEngine<M> {
    metrics: M,
    preferred_direction: ScrollDirection,
    /// `None` until `set_character_sets` has been called.
    rolls: Option<Vec<Arc<GlyphRoll>>>,
    supported: HashSet<char>,
    columns: Vec<TickerColumn>,
}

impl<M: GlyphMetrics> TickerEngine<M> {
    /// Create an engine with no character sets configured and no columns.
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            preferred_direction: ScrollDirection::default(),
            rolls: None,
            supported: HashSet::new(),
            columns: Vec::new(),
        }
    }

    /// Configure the character sets available for scrolling.
    ///
    /// Each string becomes one glyph roll; a transition resolves against the first roll
    /// that contains both of its endpoint characters. Columns animating at the time of the
    /// call keep the roll they started on and finish undisturbed; the new rolls apply from
    /// the next retarget on.
    ///
    /// Fails without replacing anything if a set contains [`EMPTY_GLYPH`].
    pub fn set_character_sets(&mut self, sets: &[impl AsRef<str>]) -> Result<(), TickerError> {
        let mut rolls = Vec::with_capacity(sets.len());
        let mut supported = HashSet::new();
        for set in sets {
            let roll = GlyphRoll::new(set.as_ref())?;
            supported.extend(roll.supported_glyphs());
            rolls.push(Arc::new(roll));
        }

        self.rolls = Some(rolls);
        self.supported = supported;
        Ok(())
    }

    /// Set the preferred scroll direction for ranges resolved from here on.
    pub fn set_preferred_direction(&mut self, direction: ScrollDirection) {
        self.preferred_direction = direction;
    }

    /// The configured scroll direction preference.
    pub fn preferred_direction(&self) -> ScrollDirection {
        self.preferred_direction
    }

    /// Start a transition toward `text`.
    ///
    /// Columns fully collapsed by an earlier deletion are dropped first, then the text is
    /// diffed against [`current_text`](Self::current_text) and each column is retargeted
    /// according to the edit script: kept and inserted columns aim at their new character,
    /// deleted ones at [`EMPTY_GLYPH`] so they shrink away on screen before being dropped by
    /// a later call. Calling this while a previous transition is still in flight interrupts
    /// it smoothly.
    ///
    /// Fails with [`TickerError::NotConfigured`] until `set_character_sets` has been called.
    pub fn set_text(&mut self, text: &str) -> Result<(), TickerError> {
        let Some(rolls) = self.rolls.as_deref() else {
            return Err(TickerError::NotConfigured);
        };
        let metrics: &dyn GlyphMetrics = &self.metrics;
        let direction = self.preferred_direction;

        // Columns that finished collapsing leave bookkeeping before the diff runs, so the
        // old text already reads as if they were gone.
        self.columns.retain_mut(|column| {
            column.refresh_metrics(metrics);
            column.current_width() > 0.0
        });

        let old_text: Vec<char> = self.columns.iter().map(|c| c.current_glyph()).collect();
        let new_text: Vec<char> = text.chars().collect();

        let mut column_index = 0;
        let mut char_index = 0;
        for action in column_actions(&old_text, &new_text) {
            match action {
                ColumnAction::Insert => {
                    self.columns.insert(column_index, TickerColumn::new());
                    self.columns[column_index].retarget(
                        new_text[char_index],
                        rolls,
                        direction,
                        metrics,
                    );
                    column_index += 1;
                    char_index += 1;
                }
                ColumnAction::Keep => {
                    self.columns[column_index].retarget(
                        new_text[char_index],
                        rolls,
                        direction,
                        metrics,
                    );
                    column_index += 1;
                    char_index += 1;
                }
                ColumnAction::Delete => {
                    self.columns[column_index].retarget(EMPTY_GLYPH, rolls, direction, metrics);
                    column_index += 1;
                }
            }
        }

        Ok(())
    }

    /// Broadcast an animation progress fraction to every column.
    ///
    /// Progress normally runs 0 to 1; `1.0` settles every column on its target. Values
    /// outside the range, or moving backward, still produce a valid state.
    pub fn set_progress(&mut self, progress: f32) {
        let metrics: &dyn GlyphMetrics = &self.metrics;
        for column in &mut self.columns {
            column.set_progress(progress, metrics);
        }
    }

    /// Tell every column the animation has fully stopped, releasing width reserved for the
    /// finished transition.
    pub fn on_animation_end(&mut self) {
        let metrics: &dyn GlyphMetrics = &self.metrics;
        for column in &mut self.columns {
            column.on_animation_end(metrics);
        }
    }

    /// Re-read glyph measurements from the metrics source.
    ///
    /// Settled columns adopt changed widths immediately; columns mid-animation keep their
    /// current interpolation endpoints and pick the change up when they settle. Call this
    /// after mutating the metrics through [`metrics_mut`](Self::metrics_mut).
    pub fn refresh_metrics(&mut self) {
        let metrics: &dyn GlyphMetrics = &self.metrics;
        for column in &mut self.columns {
            column.refresh_metrics(metrics);
        }
    }

    /// The glyph each column currently displays, in order.
    ///
    /// This is the baseline the next [`set_text`](Self::set_text) diffs against. Columns
    /// still collapsing after a deletion contribute [`EMPTY_GLYPH`]; use
    /// [`visible_text`](Self::visible_text) for the string a viewer actually reads.
    pub fn current_text(&self) -> String {
        self.columns.iter().map(|c| c.current_glyph()).collect()
    }

    /// The currently displayed text as a viewer reads it: collapsed and collapsing-empty
    /// columns are omitted, and columns mid-scroll contribute the intermediate glyph they
    /// are showing right now.
    pub fn visible_text(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.current_glyph())
            .filter(|&glyph| glyph != EMPTY_GLYPH)
            .collect()
    }

    /// Sum of the columns' current widths.
    pub fn current_width(&self) -> f32 {
        self.columns.iter().map(|c| c.current_width()).sum()
    }

    /// Width the ticker needs reserved to play out every in-flight transition without
    /// clipping: the sum of each column's reserved width.
    pub fn minimum_required_width(&self) -> f32 {
        self.columns.iter().map(|c| c.minimum_required_width()).sum()
    }

    /// Snapshot of the current animation state for rendering.
    ///
    /// Columns are laid out left to right, each starting where the previous one's current
    /// width ended.
    pub fn frame(&self) -> TickerFrame {
        let mut columns = Vec::with_capacity(self.columns.len());
        let mut x = 0.0;
        for column in &self.columns {
            let width = column.current_width();
            columns.push(ColumnFrame::new(x, width, column.cells()));
            x += width;
        }

        TickerFrame {
            width: x,
            line_height: self.metrics.line_height(),
            columns,
        }
    }

    /// The columns, in display order. Includes columns still collapsing after a deletion.
    pub fn columns(&self) -> &[TickerColumn] {
        &self.columns
    }

    /// Number of columns currently in bookkeeping.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether `set_character_sets` has been called.
    pub fn is_configured(&self) -> bool {
        self.rolls.is_some()
    }

    /// Whether some configured character set contains `glyph`.
    ///
    /// Transitions involving unsupported glyphs still animate, through an improvised
    /// two-glyph sequence instead of a roll.
    pub fn is_supported(&self, glyph: char) -> bool {
        self.supported.contains(&glyph)
    }

    /// Iterate over every glyph the configured character sets can animate between.
    pub fn supported_glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.supported.iter().copied()
    }

    /// The glyph measurement source.
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Mutable access to the glyph measurement source. After changing measurements, call
    /// [`refresh_metrics`](Self::refresh_metrics) so settled columns adopt them.
    pub fn metrics_mut(&mut self) -> &mut M {
        &mut self.metrics
    }
}

impl<M: GlyphMetrics + Default> Default for TickerEngine<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
