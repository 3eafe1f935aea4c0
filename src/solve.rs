//! The iterative backtracking search over propagator branch points.
//!
//! Recursion is deliberately avoided in favor of an explicit frame stack so
//! that a search can be paused after its first success and resumed later:
//! uniqueness checking and rating both need to look for a *further* solution
//! without re-deriving already-explored state.

use rand::Rng;

use crate::core::*;
use crate::deduce::{deduce, Guess, Outcome};

/// One open branch decision: the alternatives of a decision point, how many
/// of them have been tried, and the grid as it stood when the decision
/// arose.  Each frame owns its own snapshot; nothing aliases it.
#[derive(Clone, Debug)]
struct Frame {
  guesses: Vec<Guess>,
  tried: usize,
  grid: Grid,
}

/// A suspended (or finished) search.  `found` holds the most recent answer;
/// the stack holds every alternative not yet explored, so `resume` can pick
/// up where the previous success left off.
#[derive(Clone, Debug, Default)]
pub struct Search {
  /// The answer produced by the latest `solve_one`/`resume` step, if any.
  pub found: Option<SolvedGrid>,
  stack: Vec<Frame>,
}

/// Searches for one completion of the given clues.
///
/// Runs the propagator; a direct solve or contradiction finishes with an
/// empty stack, and otherwise the first branch point goes on the stack and
/// the search runs until its first success.  The returned `Search` can be
/// `resume`d to look for further completions.
pub fn solve_one<R: Rng>(clues: &Grid, rng: &mut R) -> Search {
  let mut grid = *clues;
  match deduce(&mut grid, rng) {
    Outcome::Solved(solved) => Search { found: Some(solved), stack: Vec::new() },
    Outcome::Contradiction => Search::default(),
    Outcome::Branch(guesses) => {
      let mut search = Search {
        found: None,
        stack: vec![Frame { guesses, tried: 0, grid }],
      };
      search.resume(rng);
      search
    }
  }
}

impl Search {
  /// Continues this search until its next success or until the stack is
  /// exhausted.  Returns the answer, which is also left in `found`.
  ///
  /// The successful frame's untried alternatives stay on the stack, so each
  /// call yields a solution not seen before; an exhausted search comes back
  /// with `found` of None and an empty stack.
  pub fn resume<R: Rng>(&mut self, rng: &mut R) -> Option<SolvedGrid> {
    self.found = None;
    while let Some(frame) = self.stack.last_mut() {
      if frame.tried >= frame.guesses.len() {
        // Every alternative here failed; backtrack to the frame below.
        self.stack.pop();
        continue;
      }
      let guess = frame.guesses[frame.tried];
      frame.tried += 1;
      let mut grid = frame.grid;
      guess.apply(&mut grid);
      match deduce(&mut grid, rng) {
        Outcome::Contradiction => {}
        Outcome::Solved(solved) => {
          self.found = Some(solved);
          break;
        }
        Outcome::Branch(guesses) => self.stack.push(Frame { guesses, tried: 0, grid }),
      }
    }
    self.found
  }

  /// The number of branch decisions currently open: the depth of the
  /// successful path when `found` is set.
  pub fn depth(&self) -> usize {
    self.stack.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use paste::paste;
  use rand::SeedableRng;
  use rand_pcg::Pcg64Mcg;
  use std::str::FromStr;

  const MAX_SOLUTIONS: usize = 12;

  fn rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
  }

  /// Counts completions by resuming past each success, stopping once the
  /// count exceeds `MAX_SOLUTIONS`.
  fn count_solutions(clues: &Grid, rng: &mut Pcg64Mcg) -> usize {
    let mut search = solve_one(clues, rng);
    let mut count = 0;
    while let Some(solved) = search.found {
      count += 1;
      // Every answer is a valid completion of the clues.
      let mut grid = solved.grid();
      grid.intersect(clues);
      assert_eq!(grid, *clues);
      if count > MAX_SOLUTIONS {
        break;
      }
      search.resume(rng);
    }
    count
  }

  macro_rules! solve_test {
    ($name:ident, $clues:expr, $count:expr) => {
      paste! {
          #[test]
          fn [<test_solve_ $name>]() {
              let clues = Grid::from_str($clues).unwrap();
              let count = count_solutions(&clues, &mut rng(1));
              if $count > MAX_SOLUTIONS {
                assert!(count > MAX_SOLUTIONS);
              } else {
                assert_eq!($count, count);
              }
          }
      }
    };
  }

  solve_test!(
    broken,
    "...8.9..6.23.........6.8...7....1..2...45...9......6......7......1.46.....3......",
    0
  );
  solve_test!(
    no_solution_1,
    "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....",
    0
  );
  solve_test!(
    no_solution_2_slow,
    "..9..87....65..3...............3..69.........23..7...............8..36....41..2..",
    0
  );
  solve_test!(
    unique_solution,
    ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4.",
    1
  );
  solve_test!(
    multiple_solutions,
    ".3....91.8.6.....2...8.4...5.2..7..........7.9..4.65.....7.3...3.8.....1.97...8..",
    9
  );
  solve_test!(
    many_solutions,
    ".....6....59.....82....8....45........3........6..3.54...325..6..................",
    MAX_SOLUTIONS + 1
  );

  #[test]
  fn empty_grid_has_many_solutions() {
    let mut r = rng(3);
    let search = solve_one(&Grid::new(), &mut r);
    let solved = search.found.expect("the empty grid is solvable");
    assert_eq!(GridState::Solved(&solved.grid()), solved.grid().state());
  }

  #[test]
  fn immediate_solve_leaves_nothing_to_resume() {
    let full = Grid::from_str(
      "123456789456789123789123456234567891567891234891234567345678912678912345912345678",
    )
    .unwrap();
    let mut clues = full;
    clues[L11] = None;
    let mut search = solve_one(&clues, &mut rng(0));
    assert_eq!(Some(full), search.found.map(|s| s.grid()));
    assert_eq!(0, search.depth());
    assert_eq!(None, search.resume(&mut rng(0)));
  }

  #[test]
  fn resumed_solutions_are_distinct() {
    let clues = Grid::from_str(
      ".3....91.8.6.....2...8.4...5.2..7..........7.9..4.65.....7.3...3.8.....1.97...8..",
    )
    .unwrap();
    let mut r = rng(5);
    let mut search = solve_one(&clues, &mut r);
    let mut seen = Vec::new();
    while let Some(solved) = search.found {
      assert!(!seen.contains(&solved), "solution repeated");
      seen.push(solved);
      search.resume(&mut r);
    }
    assert_eq!(9, seen.len());
  }
}
