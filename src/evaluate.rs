//! Puzzle rating and validation.
//!
//! Difficulty here is a search statistic, not a model of human technique:
//! the number of branch decisions still open when the search first succeeds.
//! A puzzle the propagator finishes on its own rates 0.

use crate::core::*;
use crate::random::Rng;
use crate::solve::solve_one;

/// Rates a puzzle by averaging its search difficulty over the given number
/// of randomized solves.  Returns None if the puzzle is unsolvable or
/// `samples` is not positive.
///
/// Branch order is random, so single runs are noisy; more samples buy a
/// steadier estimate.
pub fn rate<R: Rng>(puzzle: &Grid, samples: i32, rng: &mut R) -> Option<f64> {
  if samples <= 0 {
    return None;
  }
  let mut total = 0;
  for _ in 0..samples {
    let search = solve_one(puzzle, rng);
    search.found?;
    total += search.depth();
  }
  Some(total as f64 / samples as f64)
}

/// Checks a puzzle against an intended solution and rates it in one pass.
///
/// Returns the difficulty of the first randomized solve, or None if the
/// puzzle is unsolvable, solves to something other than `target`, or has a
/// second solution.
pub fn validate<R: Rng>(
  puzzle: &Grid,
  target: Option<&SolvedGrid>,
  rng: &mut R,
) -> Option<i32> {
  let mut search = solve_one(puzzle, rng);
  let solved = search.found?;
  if let Some(target) = target {
    if *target != solved {
      return None;
    }
  }
  let difficulty = search.depth() as i32;
  if search.resume(rng).is_some() {
    return None;
  }
  Some(difficulty)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::new_prng;
  use std::str::FromStr;

  const SOLVED: &str =
    "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
  const UNIQUE: &str =
    ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4.";
  const MULTIPLE: &str =
    ".3....91.8.6.....2...8.4...5.2..7..........7.9..4.65.....7.3...3.8.....1.97...8..";
  const UNSOLVABLE: &str =
    "1....6....59.....82....8....45...3....3...7....6..3.54...325..6........17389.....";

  #[test]
  fn propagation_only_puzzle_rates_zero() {
    let mut puzzle = Grid::from_str(SOLVED).unwrap();
    puzzle[L11] = None;
    puzzle[L55] = None;
    assert_eq!(Some(0.0), rate(&puzzle, 4, &mut new_prng(1)));
  }

  #[test]
  fn nonpositive_sample_count_rates_none() {
    let mut puzzle = Grid::from_str(SOLVED).unwrap();
    puzzle[L11] = None;
    assert_eq!(None, rate(&puzzle, 0, &mut new_prng(1)));
    assert_eq!(None, rate(&puzzle, -3, &mut new_prng(1)));
  }

  #[test]
  fn unsolvable_puzzle_rates_none() {
    let puzzle = Grid::from_str(UNSOLVABLE).unwrap();
    assert_eq!(None, rate(&puzzle, 2, &mut new_prng(1)));
  }

  #[test]
  fn rating_needs_every_sample_to_solve() {
    // A grid that sometimes needs a guess still averages over all samples.
    let puzzle = Grid::from_str(UNIQUE).unwrap();
    let rating = rate(&puzzle, 3, &mut new_prng(1)).expect("puzzle is solvable");
    assert!(rating >= 0.0);
  }

  #[test]
  fn validate_accepts_the_real_solution() {
    let puzzle = Grid::from_str(UNIQUE).unwrap();
    let mut rng = new_prng(1);
    let solved = solve_one(&puzzle, &mut rng).found.unwrap();
    let difficulty = validate(&puzzle, Some(&solved), &mut rng);
    assert!(difficulty.is_some());
    assert!(difficulty.unwrap() >= 0);
  }

  #[test]
  fn validate_rejects_a_mismatched_target() {
    let puzzle = Grid::from_str(UNIQUE).unwrap();
    let other = Grid::from_str(SOLVED).unwrap().solved_grid().unwrap();
    assert_eq!(None, validate(&puzzle, Some(&other), &mut new_prng(1)));
  }

  #[test]
  fn validate_rejects_several_solutions() {
    let puzzle = Grid::from_str(MULTIPLE).unwrap();
    assert_eq!(None, validate(&puzzle, None, &mut new_prng(1)));
  }

  #[test]
  fn validate_without_target_accepts_any_unique_puzzle() {
    let puzzle = Grid::from_str(UNIQUE).unwrap();
    assert!(validate(&puzzle, None, &mut new_prng(2)).is_some());
  }
}
