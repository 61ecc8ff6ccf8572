//! Line compaction and merging for a single swipe.
//!
//! Each row (Left/Right) or column (Up/Down) is handled on its own: the
//! non-empty tiles are read in the order motion proceeds toward the leading
//! edge, equal neighbours are merged pairwise in one pass, and the result is
//! written back from the leading edge with the tail padded by empties.

use super::{tile_value, Board, Direction};

/// Result of resolving a swipe against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub score_gained: u64,
    pub changed: bool,
}

/// Compact and merge one line given in motion order.
///
/// Returns the emitted tiles (without padding) and the score they earned.
/// A tile produced by a merge is never merged again in the same pass, and
/// exponent 255 has no successor so it never merges.
pub fn merge_line(values: &[u8]) -> (Vec<u8>, u64) {
    let tiles: Vec<u8> = values.iter().copied().filter(|&v| v != 0).collect();
    let mut merged = Vec::with_capacity(tiles.len());
    let mut gained = 0u64;
    let mut i = 0;
    while i < tiles.len() {
        let v = tiles[i];
        if i + 1 < tiles.len() && tiles[i + 1] == v && v < u8::MAX {
            merged.push(v + 1);
            gained = gained.saturating_add(tile_value(v + 1));
            i += 2;
        } else {
            merged.push(v);
            i += 1;
        }
    }
    (merged, gained)
}

/// Flat indices of line `line`, leading edge first.
fn line_indices(direction: Direction, size: usize, line: usize) -> Vec<usize> {
    match direction {
        Direction::Left => (0..size).map(|col| line * size + col).collect(),
        Direction::Right => (0..size).rev().map(|col| line * size + col).collect(),
        Direction::Up => (0..size).map(|row| row * size + line).collect(),
        Direction::Down => (0..size).rev().map(|row| row * size + line).collect(),
    }
}

/// Resolve `direction` against `board` without touching the input.
pub fn resolve(direction: Direction, board: &Board) -> MoveOutcome {
    let size = board.size();
    let mut next = board.clone();
    let mut score_gained = 0u64;

    for line in 0..size {
        let indices = line_indices(direction, size, line);
        let values: Vec<u8> = indices.iter().map(|&i| board.cells()[i]).collect();
        let (merged, gained) = merge_line(&values);
        score_gained = score_gained.saturating_add(gained);

        let cells = next.cells_mut();
        for (pos, &i) in indices.iter().enumerate() {
            cells[i] = merged.get(pos).copied().unwrap_or(0);
        }
    }

    let changed = !next.structurally_equal(board);
    MoveOutcome {
        board: next,
        score_gained,
        changed,
    }
}
