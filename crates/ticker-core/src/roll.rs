//! Glyph rolls: the wrap-capable character sequences that columns scroll through.
//!
//! A roll stores its characters in a doubled backing array (`EMPTY`, set, set) so that a
//! wrap-around scroll such as `9 -> 0` is expressed as a plain increasing index range into the
//! second copy instead of modular arithmetic scattered through the animation math.

use std::collections::HashMap;

use crate::error::TickerError;

/// The sentinel glyph for a column that shows nothing (before insertion, after deletion).
///
/// It always resolves to index 0 of every roll and must not appear in a caller-supplied
/// character set.
pub const EMPTY_GLYPH: char = '\0';

/// The decimal digits, in counting order.
pub const DIGITS: &str = "0123456789";

/// ASCII letters, lowercase then uppercase.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Preferred scroll direction when resolving a range between two glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Always scroll backward through the roll, wrapping if necessary.
    Up,
    /// Always scroll forward through the roll, wrapping if necessary.
    Down,
    /// Take whichever of the direct and wrap-around paths is shorter.
    #[default]
    Any,
}

/// A closed index range into a roll's backing array that a column traverses.
///
/// `end` may exceed `start + glyph_count()` when the range crosses into the duplicated half of
/// the backing array (wrap-around), or equal the backing length exactly when scrolling fully
/// past the end into emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRange {
    /// Index the scroll starts from.
    pub start: usize,
    /// Index the scroll ends on.
    pub end: usize,
}

impl ScrollRange {
    /// Number of glyph steps between the endpoints.
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    /// Returns `true` if the range does not move (start and end coincide).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Direction of travel: `+1` for forward (or stationary), `-1` for backward.
    pub fn direction_sign(&self) -> i32 {
        if self.end >= self.start { 1 } else { -1 }
    }
}

/// An immutable, shareable glyph sequence with O(1) glyph-to-index resolution.
///
/// The backing array has length `2N + 1` for `N` distinct characters: index 0 is
/// [`EMPTY_GLYPH`], `1..=N` the characters in caller order, `N+1..=2N` the same characters
/// again. Rolls are built once and never mutated; the engine shares them across columns by
/// `Arc`.
#[derive(Debug)]
pub struct GlyphRoll {
    /// Backing array: `EMPTY`, characters, characters.
    glyphs: Vec<char>,
    /// Number of distinct characters (`N`).
    glyph_count: usize,
    /// Glyph to 0-based position in the original character list.
    indices: HashMap<char, usize>,
}

impl GlyphRoll {
    /// Build a roll from a character set.
    ///
    /// Duplicate characters are dropped (first occurrence wins) so that every retained glyph
    /// has a unique primary index. Fails if the set contains [`EMPTY_GLYPH`].
    pub fn new(characters: &str) -> Result<Self, TickerError> {
        let mut ordered = Vec::new();
        let mut indices = HashMap::new();
        for ch in characters.chars() {
            if ch == EMPTY_GLYPH {
                return Err(TickerError::SentinelInCharacterSet);
            }
            if !indices.contains_key(&ch) {
                indices.insert(ch, ordered.len());
                ordered.push(ch);
            }
        }

        let glyph_count = ordered.len();
        let mut glyphs = Vec::with_capacity(glyph_count * 2 + 1);
        glyphs.push(EMPTY_GLYPH);
        glyphs.extend_from_slice(&ordered);
        glyphs.extend_from_slice(&ordered);

        Ok(Self {
            glyphs,
            glyph_count,
            indices,
        })
    }

    /// Resolve a glyph to its primary index: 0 for the sentinel, `1..=N` for set members,
    /// `None` for anything this roll does not know.
    pub fn index_of(&self, glyph: char) -> Option<usize> {
        if glyph == EMPTY_GLYPH {
            return Some(0);
        }
        self.indices.get(&glyph).map(|i| i + 1)
    }

    /// Resolve the index range a column must traverse to animate `start` into `end` under the
    /// given direction preference.
    ///
    /// Returns `None` when either glyph is absent from this roll; callers fall back to a
    /// direct two-glyph sequence in that case rather than failing the update.
    pub fn scroll_range(
        &self,
        start: char,
        end: char,
        direction: ScrollDirection,
    ) -> Option<ScrollRange> {
        let mut start_index = self.index_of(start)?;
        let mut end_index = self.index_of(end)?;
        let n = self.glyph_count;

        match direction {
            ScrollDirection::Down => {
                if end == EMPTY_GLYPH {
                    // Empty out by continuing forward past the end rather than wrapping
                    // back to the sentinel.
                    end_index = self.glyphs.len();
                } else if end_index < start_index {
                    end_index += n;
                }
            }
            ScrollDirection::Up => {
                if start_index < end_index {
                    start_index += n;
                }
            }
            ScrollDirection::Any => {
                // Wrap-around only ever beats the direct path between two real glyphs.
                if start != EMPTY_GLYPH && end != EMPTY_GLYPH {
                    if end_index < start_index {
                        let non_wrap = start_index - end_index;
                        let wrap = n - start_index + end_index;
                        if wrap < non_wrap {
                            end_index += n;
                        }
                    } else if start_index < end_index {
                        let non_wrap = end_index - start_index;
                        let wrap = n - end_index + start_index;
                        if wrap < non_wrap {
                            start_index += n;
                        }
                    }
                }
            }
        }

        Some(ScrollRange {
            start: start_index,
            end: end_index,
        })
    }

    /// Bounds-checked access into the backing array.
    ///
    /// Signed so that animation math may produce out-of-range anchor indices (including
    /// negative ones) and simply observe `None`, mirroring a draw that falls outside the roll.
    pub fn glyph_at(&self, index: isize) -> Option<char> {
        if index < 0 {
            return None;
        }
        self.glyphs.get(index as usize).copied()
    }

    /// Characters this roll can animate between (sentinel excluded).
    pub fn supported_glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.indices.keys().copied()
    }

    /// Returns `true` if `glyph` is a member of the character set (the sentinel is not).
    pub fn contains(&self, glyph: char) -> bool {
        self.indices.contains_key(&glyph)
    }

    /// Number of distinct characters in the set (`N`).
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Length of the backing array (`2N + 1`).
    pub fn backing_len(&self) -> usize {
        self.glyphs.len()
    }
}
