//! End-to-end transition lifecycle tests
//!
//! Drives the engine the way a rendering layer would: set a text, sweep progress,
//! settle, repeat.

use pretty_assertions::assert_eq;
use ticker_core::{ASCII_LETTERS, CellMetrics, DIGITS, GlyphMetrics, TickerEngine};

fn digit_engine() -> TickerEngine<CellMetrics> {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS]).unwrap();
    engine
}

#[test]
fn test_minute_rollover_walkthrough() {
    let mut engine = digit_engine();
    engine.set_text("12:59").unwrap();
    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.visible_text(), "12:59");

    // Only '1' and ':' survive the alignment: two keeps, three deletes, three inserts.
    engine.set_text("13:00").unwrap();
    assert_eq!(engine.column_count(), 8);

    engine.set_progress(0.5);
    let frame = engine.frame();
    assert_eq!(frame.column_count(), 8);
    assert!(frame.width > 0.0);

    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.visible_text(), "13:00");
    // The three collapsed columns are still in bookkeeping as empty ghosts.
    assert_eq!(engine.current_text().matches('\0').count(), 3);

    // The next update drops them before diffing.
    engine.set_text("13:01").unwrap();
    assert_eq!(engine.column_count(), 6);
    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.visible_text(), "13:01");
}

#[test]
fn test_counter_increments_settle_cleanly() {
    let mut engine = digit_engine();
    for value in 1..=5 {
        engine.set_text(&value.to_string()).unwrap();
        // Ghosts from the previous increment were culled on entry, so at most one doomed
        // column and one appearing column exist at a time.
        assert!(engine.column_count() <= 2);

        for progress in [0.25, 0.5, 0.75, 1.0] {
            engine.set_progress(progress);
        }
        engine.on_animation_end();
        assert_eq!(engine.visible_text(), value.to_string());
        assert_eq!(engine.current_width(), 1.0);
    }
}

#[test]
fn test_interruption_keeps_offset_continuous() {
    let mut engine = digit_engine();

    // Scroll empty -> '4' and stop halfway: anchored on '1', half a row off.
    engine.set_text("4").unwrap();
    engine.set_progress(0.5);
    assert_eq!(engine.current_text(), "1");
    let before = engine.columns()[0].offset();
    assert_eq!(before, 0.5);

    // Interrupt. The old column is retargeted to empty, but at the instant of
    // interruption its offset must be exactly what was on screen.
    engine.set_text("9").unwrap();
    engine.set_progress(0.0);
    assert_eq!(engine.columns()[0].offset(), before);

    // By the time the new transition settles, the residual has decayed away.
    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.columns()[0].offset(), 0.0);
    assert_eq!(engine.visible_text(), "9");
}

#[test]
fn test_wide_glyphs_interpolate_and_sum() {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS, ASCII_LETTERS]).unwrap();

    engine.set_text("中").unwrap();
    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.current_width(), 2.0);

    // The wide column collapses while two narrow ones appear.
    engine.set_text("ab").unwrap();
    assert_eq!(engine.column_count(), 3);
    assert_eq!(engine.minimum_required_width(), 4.0);

    engine.set_progress(0.5);
    assert_eq!(engine.current_width(), 2.0);

    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.visible_text(), "ab");
    assert_eq!(engine.current_width(), 2.0);
    assert_eq!(engine.minimum_required_width(), 2.0);
}

#[test]
fn test_line_height_scales_cell_offsets() {
    let mut engine = TickerEngine::new(CellMetrics::with_line_height(3.0));
    engine.set_character_sets(&[DIGITS]).unwrap();

    // Appearing empty -> '5': a quarter in, the anchor is '0' half a step down.
    engine.set_text("5").unwrap();
    engine.set_progress(0.25);

    let frame = engine.frame();
    assert_eq!(frame.line_height, 3.0);
    let cells = &frame.columns[0].cells;
    assert_eq!(cells.len(), 2);
    assert_eq!((cells[0].glyph, cells[0].y), ('1', -1.5));
    assert_eq!((cells[1].glyph, cells[1].y), ('0', 1.5));

    // Offsets are recomputed against the metrics on every progress update.
    engine.metrics_mut().line_height = 1.0;
    engine.refresh_metrics();
    engine.set_progress(0.25);
    assert_eq!(engine.columns()[0].offset(), 0.5);
}

#[test]
fn test_settled_width_matches_measured_text() {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS, ASCII_LETTERS]).unwrap();

    let text = "价格100";
    engine.set_text(text).unwrap();
    engine.set_progress(1.0);
    engine.on_animation_end();

    let metrics = CellMetrics::new();
    let expected: f32 = text.chars().map(|ch| metrics.glyph_width(ch)).sum();
    assert_eq!(engine.current_width(), expected);
    assert_eq!(engine.visible_text(), text);
}
