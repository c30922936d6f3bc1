//! Symmetry-aware position hashing for the transposition table
//!
//! Each active board symmetry gets its own bijective cell numbering. A
//! position is hashed additively under every numbering at once, so boards
//! that are rotations or reflections of each other produce overlapping key
//! sets and share cache entries.

use reversi_core::{Board, Player};

/// Hash multiplier for own discs
const PRIME: u64 = 31;

/// Additional multiplier distinguishing opponent discs
const OPP_MULT: u64 = 434;

/// Cache key: additive position hash plus the search context that produced
/// it. Depth and side ride along as typed fields so equal hashes from
/// different contexts never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub hash: u64,
    pub depth: u8,
    pub side: Player,
}

/// Per-dimension symmetry index grids, built once per board size.
///
/// Rectangular boards activate four symmetries (identity, horizontal flip,
/// vertical flip, 180° rotation); square boards add the 90°/270° rotations
/// and both diagonal flips for the full set of eight.
#[derive(Clone, Debug)]
pub struct SymmetryHasher {
    grids: Vec<Vec<u64>>,
    rows: usize,
    cols: usize,
}

impl SymmetryHasher {
    pub fn new(rows: usize, cols: usize) -> Self {
        // Identity numbering: cells 1..=rows*cols, row-major
        let identity: Vec<u64> = (1..=(rows * cols) as u64).collect();
        let mut grids = vec![
            flip_h(&identity, rows, cols),
            flip_v(&identity, rows, cols),
            rot180(&identity, rows, cols),
        ];
        if rows == cols {
            let r90 = rot90(&identity, rows);
            let r270 = rot90(&rot90(&r90, rows), rows);
            // Diagonal flip = 90° rotation + vertical flip;
            // anti-diagonal flip = 270° rotation + vertical flip
            grids.push(flip_v(&r90, rows, cols));
            grids.push(flip_v(&r270, rows, cols));
            grids.push(r90);
            grids.push(r270);
        }
        grids.insert(0, identity);
        Self { grids, rows, cols }
    }

    /// Number of symmetries active for these dimensions (4 or 8)
    pub fn active_symmetries(&self) -> usize {
        self.grids.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One key per active symmetry. O(cells) over the whole set: the board
    /// is scanned once and every grid accumulates in the same pass.
    pub fn hash(&self, board: &Board, side: Player, depth: u8) -> Vec<CacheKey> {
        let own = side.cell();
        let opp = side.opponent().cell();
        let mut sums = vec![0u64; self.grids.len()];
        for (idx, &cell) in board.cells().iter().enumerate() {
            let mult = if cell == own {
                PRIME
            } else if cell == opp {
                PRIME * OPP_MULT
            } else {
                continue;
            };
            for (sum, grid) in sums.iter_mut().zip(&self.grids) {
                *sum = sum.wrapping_add(grid[idx].wrapping_mul(mult));
            }
        }
        sums.into_iter()
            .map(|hash| CacheKey { hash, depth, side })
            .collect()
    }
}

fn flip_h(grid: &[u64], rows: usize, cols: usize) -> Vec<u64> {
    let mut out = vec![0; grid.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[r * cols + c] = grid[r * cols + (cols - 1 - c)];
        }
    }
    out
}

fn flip_v(grid: &[u64], rows: usize, cols: usize) -> Vec<u64> {
    let mut out = vec![0; grid.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[r * cols + c] = grid[(rows - 1 - r) * cols + c];
        }
    }
    out
}

fn rot180(grid: &[u64], rows: usize, cols: usize) -> Vec<u64> {
    let mut out = vec![0; grid.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[r * cols + c] = grid[(rows - 1 - r) * cols + (cols - 1 - c)];
        }
    }
    out
}

/// Clockwise quarter turn; square grids only
fn rot90(grid: &[u64], n: usize) -> Vec<u64> {
    let mut out = vec![0; grid.len()];
    for r in 0..n {
        for c in 0..n {
            out[r * n + c] = grid[(n - 1 - c) * n + r];
        }
    }
    out
}
