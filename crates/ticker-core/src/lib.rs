#![warn(missing_docs)]
//! Ticker Core - Headless Odometer-Text Animation Engine
//!
//! # Overview
//!
//! `ticker-core` animates text changes the way a mechanical odometer or split-flap board
//! does: each character column scrolls through a sequence of glyphs toward its new value
//! instead of cross-fading or jump-cutting. The engine is fully headless, it decides which
//! columns appear, disappear, or stay, which glyphs each column rolls through and in which
//! direction, and where every glyph sits for a given animation progress. Rendering,
//! measurement caching, and the animation clock are left to the embedding layer.
//!
//! # Core Features
//!
//! - **Column Diffing**: insert/delete/keep alignment between old and new text, minimizing
//!   visual churn
//! - **Wrap-Around Scrolling**: `9 -> 0` rolls forward one step over a doubled glyph array
//!   instead of rewinding through the whole set
//! - **Direction Control**: force scrolls up or down, or take the shortest path
//! - **Seamless Interruption**: retargeting mid-animation carries the in-flight offset over
//!   and decays it to zero, with no visual jump
//! - **Variable Widths**: per-glyph widths interpolate linearly as columns change, with
//!   Unicode wide characters handled out of the box
//! - **Pure and Reactive**: no clock, no threads, no I/O; progress comes from outside
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  TickerEngine (text updates + progress)     │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  TickerFrame (per-column render snapshot)   │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  TickerColumn (progress → glyph + offset)   │  ← Animation State
//! ├─────────────────────────────────────────────┤
//! │  Column planner (keep/insert/delete script) │  ← Text Alignment
//! ├─────────────────────────────────────────────┤
//! │  GlyphRoll (wrap-capable glyph sequences)   │  ← Character Sets
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ticker_core::{CellMetrics, DIGITS, TickerEngine};
//!
//! let mut ticker = TickerEngine::new(CellMetrics::new());
//! ticker.set_character_sets(&[DIGITS]).unwrap();
//!
//! // Drive progress from any clock or easing curve you like.
//! ticker.set_text("1024").unwrap();
//! ticker.set_progress(1.0);
//! ticker.on_animation_end();
//!
//! assert_eq!(ticker.visible_text(), "1024");
//! assert_eq!(ticker.current_width(), 4.0);
//! ```
//!
//! Interrupting a running transition is the normal case, not an error:
//!
//! ```rust
//! use ticker_core::{CellMetrics, DIGITS, TickerEngine};
//!
//! let mut ticker = TickerEngine::new(CellMetrics::new());
//! ticker.set_character_sets(&[DIGITS]).unwrap();
//! ticker.set_text("5").unwrap();
//! ticker.set_progress(0.5);
//!
//! // New target mid-flight: the column blends over from wherever it was.
//! ticker.set_text("9").unwrap();
//! ticker.set_progress(1.0);
//! ticker.on_animation_end();
//! assert_eq!(ticker.visible_text(), "9");
//! ```
//!
//! Rendering consumes [`TickerEngine::frame`]: per-column x positions, widths, and up to
//! three visible glyphs with fractional vertical offsets.
//!
//! # Module Description
//!
//! - [`roll`] - glyph rolls: wrap-capable character sequences and scroll range resolution
//! - [`plan`] - keep/insert/delete alignment between old and new text
//! - [`column`] - per-column animation state machine
//! - [`engine`] - the orchestrator owning the column set
//! - [`frame`] - render snapshot data structures
//! - [`metrics`] - glyph width and line height measurement seam
//! - [`error`] - error taxonomy
//!
//! # Unicode Support
//!
//! - One column per `char`; East Asian wide characters get double-cell widths through
//!   [`CellMetrics`]
//! - Grapheme clusters spanning multiple `char`s are out of scope

pub mod column;
pub mod engine;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod plan;
pub mod roll;

pub use column::TickerColumn;
pub use engine::TickerEngine;
pub use error::TickerError;
pub use frame::{ColumnFrame, GlyphCell, TickerFrame};
pub use metrics::{CellMetrics, GlyphMetrics};
pub use plan::{ColumnAction, column_actions};
pub use roll::{ASCII_LETTERS, DIGITS, EMPTY_GLYPH, GlyphRoll, ScrollDirection, ScrollRange};
