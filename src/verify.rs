//! Uniqueness verification.
//!
//! A puzzle is only worth publishing if its clues admit exactly one
//! completion.  The check here descends through the search tree without ever
//! committing to a branch that more than one alternative could justify: at
//! each decision point every alternative is probed for solvability, and two
//! viable alternatives condemn the puzzle immediately.

use itertools::Itertools;

use crate::core::*;
use crate::deduce::{deduce, Outcome};
use crate::random::Rng;
use crate::solve::solve_one;

/// Returns the puzzle's solution if it has exactly one, and None if it has
/// none, has several, or is broken outright.
///
/// At every branch point, all solutions of the current grid pass through
/// whichever alternatives are solvable.  A single solvable alternative
/// therefore loses nothing by being committed; more than one means two
/// distinct completions exist.  Propagation alone pins down any cell where
/// all completions agree, so a difference between two completions is always
/// caught at some branch point along the way.
pub fn unique_solution<R: Rng>(raw: &Grid, rng: &mut R) -> Option<SolvedGrid> {
  if let GridState::Broken(_) = raw.state() {
    return None;
  }
  let mut grid = *raw;
  loop {
    match deduce(&mut grid, rng) {
      Outcome::Solved(solved) => return Some(solved),
      Outcome::Contradiction => return None,
      Outcome::Branch(guesses) => {
        let snapshot = grid;
        grid = guesses
          .iter()
          .filter_map(|&guess| {
            let mut next = snapshot;
            guess.apply(&mut next);
            solve_one(&next, rng).found.map(|_| next)
          })
          .exactly_one()
          .ok()?;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::new_prng;
  use std::str::FromStr;

  const UNIQUE: &str =
    ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4.";
  const MULTIPLE: &str =
    ".3....91.8.6.....2...8.4...5.2..7..........7.9..4.65.....7.3...3.8.....1.97...8..";
  const UNSOLVABLE: &str =
    "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....";

  #[test]
  fn unique_puzzle_yields_its_solution() {
    let clues = Grid::from_str(UNIQUE).unwrap();
    let solved = unique_solution(&clues, &mut new_prng(1)).expect("puzzle is unique");
    let mut check = solved.grid();
    check.intersect(&clues);
    assert_eq!(clues, check);
  }

  #[test]
  fn answer_does_not_depend_on_the_seed() {
    let clues = Grid::from_str(UNIQUE).unwrap();
    let baseline = unique_solution(&clues, &mut new_prng(0));
    assert!(baseline.is_some());
    for seed in 1..6 {
      assert_eq!(baseline, unique_solution(&clues, &mut new_prng(seed)));
    }
  }

  #[test]
  fn several_solutions_yield_none() {
    let clues = Grid::from_str(MULTIPLE).unwrap();
    assert_eq!(None, unique_solution(&clues, &mut new_prng(1)));
  }

  #[test]
  fn unsolvable_yields_none() {
    let clues = Grid::from_str(UNSOLVABLE).unwrap();
    assert_eq!(None, unique_solution(&clues, &mut new_prng(1)));
  }

  #[test]
  fn broken_yields_none() {
    let mut clues = Grid::from_str(UNIQUE).unwrap();
    clues[L12] = clues[L21]; // collides in box 1
    assert!(matches!(clues.state(), GridState::Broken(_)));
    assert_eq!(None, unique_solution(&clues, &mut new_prng(1)));
  }

  /// Two numerals arranged as a/b over b/a in two boxes can be swapped
  /// without disturbing any line, so blanking all four cells of such a
  /// rectangle makes any puzzle ambiguous.
  #[test]
  fn blanked_swap_rectangle_is_ambiguous() {
    // The top band embeds the rectangle 1/7 over 7/1 at rows 1-2, columns
    // 1 and 7.  Any completion of the band will do.
    let band = Grid::from_str(concat!(
      "123456789",
      "756892143",
      "489137256",
      "......................................................",
    ))
    .unwrap();
    let mut rng = new_prng(2);
    let solved = solve_one(&band, &mut rng).found.expect("a band always completes");
    let mut clues = solved.grid();
    for loc in [L11, L17, L21, L27] {
      clues[loc] = None;
    }
    assert_eq!(None, unique_solution(&clues, &mut rng));
    // Restoring a single corner disambiguates the other three.
    clues[L11] = Some(N1);
    assert_eq!(Some(solved), unique_solution(&clues, &mut rng));
  }
}
