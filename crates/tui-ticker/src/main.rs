//! TUI odometer demo
//!
//! Terminal ticker built with crossterm and ratatui: type a new text and watch the
//! columns scroll into it.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-ticker -- [initial_text]
//! ```
//!
//! # Keys
//!
//! - Type text, then Enter: animate to it
//! - Up/Down: step the displayed number by one
//! - Tab: toggle a live UTC clock (HH:MM:SS)
//! - Ctrl+D: cycle the scroll direction preference
//! - Esc or Ctrl+X: quit

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{self, stdout},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use ticker_core::{
    ASCII_LETTERS, CellMetrics, DIGITS, EMPTY_GLYPH, GlyphMetrics, ScrollDirection, TickerEngine,
    TickerError, TickerFrame,
};

/// How long one text transition plays.
const TRANSITION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Input,
    Clock,
}

/// Cubic ease-out over animation progress.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

fn clock_text() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

fn direction_label(direction: ScrollDirection) -> &'static str {
    match direction {
        ScrollDirection::Up => "up",
        ScrollDirection::Down => "down",
        ScrollDirection::Any => "shortest",
    }
}

struct App {
    engine: TickerEngine<CellMetrics>,
    /// Set while a transition is playing; cleared once it settles.
    transition_started: Option<Instant>,
    mode: Mode,
    input_buffer: String,
    /// Last submitted target text.
    target_text: String,
    /// Last clock string pushed to the ticker, to detect second boundaries.
    last_clock: String,
    status_message: String,
    should_quit: bool,
}

impl App {
    fn new(initial_text: &str) -> Result<Self, TickerError> {
        let mut engine = TickerEngine::new(CellMetrics::new());
        engine.set_character_sets(&[DIGITS, ASCII_LETTERS])?;

        let mut app = Self {
            engine,
            transition_started: None,
            mode: Mode::Input,
            input_buffer: initial_text.to_string(),
            target_text: String::new(),
            last_clock: String::new(),
            status_message: String::new(),
            should_quit: false,
        };
        app.submit(initial_text);
        Ok(app)
    }

    /// Animate toward `text` from whatever the ticker currently shows.
    ///
    /// Submitting while a previous transition is still playing restarts the clock;
    /// the engine retargets from the mid-flight state, so nothing jumps.
    fn submit(&mut self, text: &str) {
        match self.engine.set_text(text) {
            Ok(()) => {
                self.target_text = text.to_string();
                self.transition_started = Some(Instant::now());
                self.status_message.clear();
            }
            Err(err) => self.status_message = format!("update failed: {err}"),
        }
    }

    fn is_animating(&self) -> bool {
        self.transition_started.is_some()
    }

    /// Advance the animation clock and, in clock mode, follow wall time.
    fn tick(&mut self) {
        if self.mode == Mode::Clock {
            let now = clock_text();
            if now != self.last_clock {
                self.last_clock = now.clone();
                self.submit(&now);
            }
        }

        let Some(started) = self.transition_started else {
            return;
        };

        let t = started.elapsed().as_secs_f32() / TRANSITION.as_secs_f32();
        if t >= 1.0 {
            self.engine.set_progress(1.0);
            self.engine.on_animation_end();
            self.transition_started = None;
        } else {
            self.engine.set_progress(ease_out(t));
        }
    }

    fn step_value(&mut self, delta: i64) {
        let Ok(value) = self.target_text.trim().parse::<i64>() else {
            self.status_message = format!("{:?} is not a number", self.target_text);
            return;
        };

        let next = value.saturating_add(delta).to_string();
        self.input_buffer = next.clone();
        self.submit(&next);
    }

    fn cycle_direction(&mut self) {
        let next = match self.engine.preferred_direction() {
            ScrollDirection::Any => ScrollDirection::Down,
            ScrollDirection::Down => ScrollDirection::Up,
            ScrollDirection::Up => ScrollDirection::Any,
        };
        self.engine.set_preferred_direction(next);
        self.status_message = format!("scroll direction: {}", direction_label(next));
    }

    fn toggle_clock(&mut self) {
        self.mode = match self.mode {
            Mode::Input => {
                // Force an immediate clock update on the next tick.
                self.last_clock.clear();
                Mode::Clock
            }
            Mode::Clock => Mode::Input,
        };
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('x')) | (_, KeyCode::Esc) => {
                self.should_quit = true;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                self.cycle_direction();
            }
            (_, KeyCode::Enter) => {
                if self.mode == Mode::Input {
                    let text = self.input_buffer.clone();
                    self.submit(&text);
                }
            }
            (_, KeyCode::Tab) => {
                self.toggle_clock();
            }
            (_, KeyCode::Up) => {
                self.step_value(1);
            }
            (_, KeyCode::Down) => {
                self.step_value(-1);
            }
            (_, KeyCode::Backspace) => {
                if self.mode == Mode::Input {
                    self.input_buffer.pop();
                }
            }
            // Unbound control chords stay out of the input buffer.
            (mods, KeyCode::Char(_)) if mods.contains(KeyModifiers::CONTROL) => {}
            (_, KeyCode::Char(c)) => {
                if self.mode == Mode::Clock {
                    self.toggle_clock();
                }
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: String) {
        if self.mode == Mode::Clock {
            self.toggle_clock();
        }
        self.input_buffer.push_str(&text);
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // ticker strip
                Constraint::Length(3), // input box
                Constraint::Length(1), // status line
                Constraint::Length(1), // key hints
            ])
            .split(frame.area());

        self.render_ticker(frame, chunks[0]);
        self.render_input(frame, chunks[1]);
        self.render_status_line(frame, chunks[2]);
        self.render_shortcuts(frame, chunks[3]);
    }

    fn render_ticker(&self, frame: &mut Frame, area: Rect) {
        let snapshot = self.engine.frame();
        let [top, middle, bottom] = self.rasterize(&snapshot);

        let dim = Style::default().fg(Color::DarkGray);
        let main = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(top, dim)),
            Line::from(Span::styled(middle, main)),
            Line::from(Span::styled(bottom, dim)),
        ];

        let strip = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(strip, centered_band(area, 3));
    }

    /// Rasterize a frame onto three text rows. Row height is one cell, so a cell's
    /// vertical offset picks the row above, on, or below the resting line.
    fn rasterize(&self, snapshot: &TickerFrame) -> [String; 3] {
        // Size the strip to the reserved width so the centering stays put while
        // columns grow and shrink.
        let width = snapshot
            .width
            .max(self.engine.minimum_required_width())
            .ceil() as usize;
        let mut rows = [vec![' '; width], vec![' '; width], vec![' '; width]];

        for column in &snapshot.columns {
            let x = column.x.round() as usize;
            if x >= width {
                continue;
            }
            for cell in &column.cells {
                let band = (cell.y / snapshot.line_height + 1.5).floor();
                if !(0.0..3.0).contains(&band) {
                    continue;
                }
                let row = &mut rows[band as usize];
                row[x] = cell.glyph;
                // A double-width glyph swallows the slot to its right.
                if self.engine.metrics().glyph_width(cell.glyph) > 1.0 && x + 1 < width {
                    row[x + 1] = EMPTY_GLYPH;
                }
            }
        }

        rows.map(|row| row.into_iter().filter(|&ch| ch != EMPTY_GLYPH).collect())
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let (title, content) = match self.mode {
            Mode::Input => ("input", format!("> {}", self.input_buffer)),
            Mode::Clock => ("clock (UTC)", format!("  {}", self.target_text)),
        };

        let input =
            Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            format!(
                "showing:{:?} | width:{:.1} reserved:{:.1} | direction:{} | {}",
                self.engine.visible_text(),
                self.engine.current_width(),
                self.engine.minimum_required_width(),
                direction_label(self.engine.preferred_direction()),
                if self.is_animating() {
                    "animating"
                } else {
                    "settled"
                },
            )
        };

        let status_line = Paragraph::new(status_text).style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(status_line, area);
    }

    fn render_shortcuts(&self, frame: &mut Frame, area: Rect) {
        let shortcuts = "Enter:animate  Up/Down:step number  Tab:clock  Ctrl-D:direction  Esc:quit";
        let shortcuts_line =
            Paragraph::new(shortcuts).style(Style::default().bg(Color::Blue).fg(Color::White));
        frame.render_widget(shortcuts_line, area);
    }
}

/// A `height`-row band vertically centered in `area`.
fn centered_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    Rect::new(area.x, top, area.width, height)
}

fn main() -> io::Result<()> {
    let initial = env::args().nth(1).unwrap_or_else(|| "0".to_string());
    let mut app = App::new(&initial).map_err(io::Error::other)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| app.render(f))?;

        if app.should_quit {
            break;
        }

        // Poll tightly only while a transition is playing.
        let timeout = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Paste(text) => app.handle_paste(text),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
