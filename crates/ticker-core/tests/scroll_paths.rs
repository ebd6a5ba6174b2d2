//! Scroll path and alignment properties exercised through the public API.

use pretty_assertions::assert_eq;
use ticker_core::{ASCII_LETTERS, CellMetrics, DIGITS, ScrollDirection, TickerEngine};

fn engine_with(direction: ScrollDirection) -> TickerEngine<CellMetrics> {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS]).unwrap();
    engine.set_preferred_direction(direction);
    engine
}

#[test]
fn test_every_transition_settles_on_its_target() {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS, ASCII_LETTERS]).unwrap();

    // A torture list: rollovers, appends, shrinks, unsupported glyphs, repeats, resets.
    let script = [
        "", "0", "9", "10", "99", "100", "12:59", "13:00", "cat", "cats", "cast", "", "价格100",
        "abcABC", "aaaa", "aa", "aa",
    ];
    for text in script {
        engine.set_text(text).unwrap();
        // Wiggle progress non-monotonically before settling; the state must stay valid.
        for progress in [0.2, 0.8, 0.5, 1.0] {
            engine.set_progress(progress);
        }
        engine.on_animation_end();
        assert_eq!(engine.visible_text(), text, "settling on {text:?}");
    }
}

#[test]
fn test_direction_preference_changes_the_path_taken() {
    // Appearing empty -> '3'. Down runs forward through 0, 1, 2; Up enters from the far
    // end of the roll and scrolls backward through 9, 8, ...
    let mut down = engine_with(ScrollDirection::Down);
    down.set_text("3").unwrap();
    down.set_progress(0.5);
    assert_eq!(down.current_text(), "1");

    let mut up = engine_with(ScrollDirection::Up);
    up.set_text("3").unwrap();
    up.set_progress(0.5);
    assert_eq!(up.current_text(), "6");

    // Both settle on the same glyph regardless of the route.
    down.set_progress(1.0);
    up.set_progress(1.0);
    assert_eq!(down.current_text(), "3");
    assert_eq!(up.current_text(), "3");
}

#[test]
fn test_interruption_storm_settles_on_final_target() {
    let mut engine = TickerEngine::new(CellMetrics::new());
    engine.set_character_sets(&[DIGITS]).unwrap();

    // Fire new targets before the previous transition ever finishes.
    for (text, abandoned_at) in [("111", 0.3), ("222", 0.7), ("123", 0.1), ("321", 0.9)] {
        engine.set_text(text).unwrap();
        engine.set_progress(abandoned_at);
    }

    engine.set_text("777").unwrap();
    engine.set_progress(1.0);
    engine.on_animation_end();
    assert_eq!(engine.visible_text(), "777");

    // One more settled update flushes every leftover ghost column.
    engine.set_text("777").unwrap();
    engine.set_progress(1.0);
    assert_eq!(engine.current_text(), "777");
    assert_eq!(engine.column_count(), 3);
}

#[test]
fn test_appearing_column_rolls_from_the_sentinel() {
    let mut engine = engine_with(ScrollDirection::Any);
    engine.set_text("2").unwrap();

    // empty -> '2' walks the roll start: nothing, then '0', then '1', then '2'.
    let mut seen = Vec::new();
    for step in 0..=6 {
        engine.set_progress(step as f32 / 6.0);
        let glyph = engine.current_text().chars().next().unwrap();
        if seen.last() != Some(&glyph) {
            seen.push(glyph);
        }
    }
    assert_eq!(seen, vec!['\0', '0', '1', '2']);
}

#[test]
fn test_vanishing_column_rolls_back_to_the_sentinel() {
    let mut engine = engine_with(ScrollDirection::Any);
    engine.set_text("2").unwrap();
    engine.set_progress(1.0);

    engine.set_text("").unwrap();
    let mut seen = Vec::new();
    for step in 0..=6 {
        engine.set_progress(step as f32 / 6.0);
        let glyph = engine.current_text().chars().next().unwrap();
        if seen.last() != Some(&glyph) {
            seen.push(glyph);
        }
    }
    assert_eq!(seen, vec!['2', '1', '0', '\0']);
}
