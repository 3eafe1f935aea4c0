//! The candidate engine: bitmask bookkeeping over a grid's lines.
//!
//! Everything here is a pure function of an immutable grid view; the
//! propagator recomputes these tables between phases rather than patching
//! them incrementally.

use crate::core::*;

/// The full candidate picture for one grid: per-cell allowed masks and
/// per-line needed masks.
#[derive(Clone, Debug)]
pub struct Masks {
  /// For each location, the intersection of its row, column, and box
  /// missing-digit masks.  Filled locations get the empty mask.
  allowed: [NumSet; 81],

  /// For each line, the numerals not yet placed anywhere on it.
  needed: [NumSet; 27],
}

impl Masks {
  /// Computes the candidate picture for the given grid.
  pub fn figure(grid: &Grid) -> Masks {
    let mut allowed = [NumSet::new(); 81];
    for loc in Loc::all() {
      if grid[loc].is_none() {
        allowed[loc.index()] = NumSet::all();
      }
    }
    let mut needed = [NumSet::new(); 27];
    for line in Line::all() {
      let missing = line_missing(grid, line);
      needed[line.index()] = missing;
      for loc in line.locs() {
        allowed[loc.index()] &= missing;
      }
    }
    Masks { allowed, needed }
  }

  /// The candidate mask for the given location.
  pub fn allowed(&self, loc: Loc) -> NumSet {
    self.allowed[loc.index()]
  }

  /// The numerals still needed somewhere on the given line.
  pub fn needed(&self, line: Line) -> NumSet {
    self.needed[line.index()]
  }
}

/// The numerals not present among the filled cells of the given line.
pub fn line_missing(grid: &Grid, line: Line) -> NumSet {
  let mut present = NumSet::new();
  for loc in line.locs() {
    if let Some(num) = grid[loc] {
      present.insert(num);
    }
  }
  !present
}

/// Single-cell convenience query: the intersection of the missing-digit
/// masks of the location's row, column, and box.
///
/// Unlike `Masks::figure`, this does not blank out filled locations, and its
/// relationship to the bulk computation is easy to get wrong: a caller that
/// mixes the two views can double-count a cell's own numeral.
// TODO: document which callers may rely on this without also consulting
// Masks::figure.
pub fn allowed_at(grid: &Grid, loc: Loc) -> NumSet {
  let mut bits = NumSet::all();
  for axis in Axis::all() {
    bits &= line_missing(grid, loc.line(axis));
  }
  bits
}
