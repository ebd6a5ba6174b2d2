//! Minute-rollover walkthrough: drives `19:59 -> 20:00` and prints a three-row
//! strip of the frame at each progress step.

use ticker_core::{CellMetrics, DIGITS, TickerEngine, TickerFrame};

fn main() {
    let mut ticker = TickerEngine::new(CellMetrics::new());
    ticker.set_character_sets(&[DIGITS]).unwrap();

    ticker.set_text("19:59").unwrap();
    ticker.set_progress(1.0);
    ticker.on_animation_end();
    assert_eq!(ticker.visible_text(), "19:59");

    // "19:59" and "20:00" share only the colon, so four columns scroll out while
    // four fresh ones scroll in around it.
    ticker.set_text("20:00").unwrap();
    assert_eq!(ticker.column_count(), 9);
    assert_eq!(ticker.minimum_required_width(), 9.0);

    for step in 0..=4 {
        let progress = step as f32 / 4.0;
        ticker.set_progress(progress);

        let rows = render(&ticker.frame());
        println!("progress {progress:.2}");
        for row in rows {
            println!("  |{row}|");
        }
        println!();
    }

    ticker.on_animation_end();
    assert_eq!(ticker.visible_text(), "20:00");
    assert_eq!(ticker.minimum_required_width(), 5.0);
    println!("settled on {:?}", ticker.visible_text());
}

/// Rasterize a frame onto three character rows; the middle row is the resting line.
fn render(frame: &TickerFrame) -> [String; 3] {
    let width = frame.width.ceil() as usize;
    let mut rows = [vec![' '; width], vec![' '; width], vec![' '; width]];

    for column in &frame.columns {
        let x = column.x.round() as usize;
        if x >= width {
            continue;
        }
        for cell in &column.cells {
            let row = (cell.y / frame.line_height + 1.5).floor();
            if (0.0..3.0).contains(&row) {
                rows[row as usize][x] = cell.glyph;
            }
        }
    }

    rows.map(|row| row.into_iter().collect())
}
