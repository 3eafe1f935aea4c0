//! The deductive propagator: repeatedly applies forced placements until the
//! grid is solved, contradicted, or a branch decision is required.

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::core::*;

pub mod masks;

use masks::{line_missing, Masks};

/// A single untried hypothesis: one numeral in one location.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Guess {
  pub loc: Loc,
  pub num: Num,
}

impl Guess {
  /// Writes this guess into the given grid.
  pub fn apply(self, grid: &mut Grid) {
    grid[self.loc] = Some(self.num);
  }
}

/// The tri-state result of running the propagator over a grid.  Callers must
/// distinguish all three; in particular a contradiction is an ordinary
/// outcome of exploring a losing branch, not an error.
#[derive(Clone, Debug)]
pub enum Outcome {
  /// Every cell is filled and consistent; here is the answer.
  Solved(SolvedGrid),
  /// Some cell or line ran out of candidates.
  Contradiction,
  /// Propagation is exhausted; the contained guesses are the alternatives
  /// of the narrowest undetermined decision point, in random order.  Never
  /// empty.
  Branch(Vec<Guess>),
}

/// Reservoir for the narrowest branch group seen during a pass.
struct GroupPicker {
  best: Option<Vec<Guess>>,
  seen: u32,
}

impl GroupPicker {
  fn new() -> Self {
    GroupPicker { best: None, seen: 0 }
  }

  /// Offers one decision point's alternatives.  A strictly smaller group
  /// always wins; a group tied with the current best is kept with
  /// probability 1/n, where n is the number of equally-small groups seen so
  /// far, so every narrowest group is equally likely to survive the pass.
  fn offer<R: Rng>(&mut self, group: Vec<Guess>, rng: &mut R) {
    match &self.best {
      Some(best) if group.len() > best.len() => {}
      Some(best) if group.len() == best.len() => {
        self.seen += 1;
        if rng.random_range(0..self.seen) == 0 {
          self.best = Some(group);
        }
      }
      _ => {
        self.best = Some(group);
        self.seen = 1;
      }
    }
  }
}

/// Runs forced placements on the grid until a full pass changes nothing.
///
/// Each pass fills naked singles (cells with one allowed numeral), then
/// hidden singles (numerals with one open spot on a line), recomputing the
/// candidate masks between the two phases.  A cell or line with no remaining
/// option aborts with `Contradiction`.  Once stuck, the narrowest decision
/// point collected during the pass comes back as `Branch`, its guesses
/// shuffled so repeated searches explore in different orders.
pub fn deduce<R: Rng>(grid: &mut Grid, rng: &mut R) -> Outcome {
  loop {
    let mut stuck = true;
    let mut picker = GroupPicker::new();
    let mut masks = Masks::figure(grid);

    // Naked singles.
    for loc in Loc::all() {
      if grid[loc].is_none() {
        let nums = masks.allowed(loc);
        match nums.len() {
          0 => return Outcome::Contradiction,
          1 => {
            grid[loc] = nums.smallest();
            stuck = false;
          }
          _ if stuck => picker.offer(nums.iter().map(|num| Guess { loc, num }).collect(), rng),
          _ => {}
        }
      }
    }

    if !stuck {
      masks = Masks::figure(grid);
    }

    // Hidden singles.  The needed mask goes stale as this phase fills cells,
    // so intersect it with the line's live missing set: a numeral another
    // line's deduction just placed here is no longer a contradiction when it
    // has no open spot.
    for (axis, x) in iproduct!(Axis::all(), 0..9) {
      let line = Line::at(axis, x);
      for num in (masks.needed(line) & line_missing(grid, line)).iter() {
        let spots: Vec<Loc> = line
          .locs()
          .filter(|&loc| grid[loc].is_none() && masks.allowed(loc).contains(num))
          .collect();
        match spots.len() {
          0 => return Outcome::Contradiction,
          1 => {
            grid[spots[0]] = Some(num);
            stuck = false;
          }
          _ if stuck => {
            picker.offer(spots.iter().map(|&loc| Guess { loc, num }).collect(), rng)
          }
          _ => {}
        }
      }
    }

    if stuck {
      return match picker.best {
        Some(mut group) => {
          group.shuffle(rng);
          Outcome::Branch(group)
        }
        // Nothing left to decide.  A full grid that nonetheless violates a
        // line constraint must not be blessed as solved.
        None => match grid.solved_grid() {
          Some(solved) => Outcome::Solved(solved),
          None => Outcome::Contradiction,
        },
      };
    }
  }
}
