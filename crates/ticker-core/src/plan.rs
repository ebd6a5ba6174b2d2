//! Column edit planning.
//!
//! Aligns the currently displayed text with a new target text as an ordered script of
//! per-column actions. The alignment is an edit distance restricted to match, insert, and
//! delete; there is no substitution. A changed character therefore becomes a delete plus an
//! insert at the same position, which keeps that column animating through intermediate glyphs
//! instead of jump-cutting to the new character.

/// One step of a column edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAction {
    /// Retarget the column at the cursor to the next input character.
    Keep,
    /// Create a new column at the cursor for the next input character.
    Insert,
    /// Retarget the column at the cursor to the empty sentinel; it collapses and is dropped
    /// once its width reaches zero.
    Delete,
}

/// Compute the minimal-cost action script that transforms `old` into `new`.
///
/// The script has length `old.len() + number_of_inserts` and, replayed left to right against
/// the old column list, produces the new one. Matches are taken greedily wherever characters
/// are equal (maximizing kept columns); at insert/delete cost ties, deletions are ordered
/// before insertions so column order stays stable left to right. Total function: every input
/// produces a valid script.
pub fn column_actions(old: &[char], new: &[char]) -> Vec<ColumnAction> {
    let rows = old.len();
    let cols = new.len();
    let stride = cols + 1;

    // Cost table: cost[i * stride + j] is the edit distance between old[..i] and new[..j].
    let mut cost = vec![0u32; (rows + 1) * stride];
    for (j, slot) in cost[..stride].iter_mut().enumerate() {
        *slot = j as u32;
    }
    for i in 1..=rows {
        cost[i * stride] = i as u32;
        for j in 1..=cols {
            let delete = cost[(i - 1) * stride + j] + 1;
            let insert = cost[i * stride + (j - 1)] + 1;
            let mut best = delete.min(insert);
            if old[i - 1] == new[j - 1] {
                best = best.min(cost[(i - 1) * stride + (j - 1)]);
            }
            cost[i * stride + j] = best;
        }
    }

    // Backtrack from the far corner. Actions come out right-to-left and are reversed at the
    // end, so picking Insert on a cost tie here is what puts Delete first in the final script.
    let mut actions = Vec::with_capacity(rows + cols);
    let mut i = rows;
    let mut j = cols;
    while i > 0 || j > 0 {
        if i == 0 {
            actions.push(ColumnAction::Insert);
            j -= 1;
            continue;
        }
        if j == 0 {
            actions.push(ColumnAction::Delete);
            i -= 1;
            continue;
        }

        let here = cost[i * stride + j];
        if old[i - 1] == new[j - 1] && here == cost[(i - 1) * stride + (j - 1)] {
            actions.push(ColumnAction::Keep);
            i -= 1;
            j -= 1;
        } else if here == cost[i * stride + (j - 1)] + 1 {
            actions.push(ColumnAction::Insert);
            j -= 1;
        } else {
            actions.push(ColumnAction::Delete);
            i -= 1;
        }
    }

    actions.reverse();
    actions
}
