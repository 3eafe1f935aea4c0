//! Puzzle generation by digging clues out of a solved grid.
//!
//! Generation runs in two passes.  The first walks the cells in random
//! order, keeping a cell as a given only when propagation from the givens so
//! far has not already implied it; the second tries to discard each given
//! and keeps it only if the puzzle stops validating without it.  The result
//! is locally irreducible: blanking any single remaining given admits a
//! second solution.

use rand::seq::SliceRandom;

use crate::core::*;
use crate::deduce::{deduce, Guess};
use crate::evaluate::validate;
use crate::random::Rng;

fn grid_of(givens: &[Guess]) -> Grid {
  let mut grid = Grid::new();
  for &guess in givens {
    guess.apply(&mut grid);
  }
  grid
}

/// Digs a puzzle out of the given solution.
///
/// The returned grid's givens all come from `solution`, and the puzzle
/// solves back to `solution` uniquely.
pub fn dig<R: Rng>(solution: &SolvedGrid, rng: &mut R) -> Grid {
  let mut order: Vec<Loc> = Loc::all().collect();
  order.shuffle(rng);

  // First pass: accumulate givens, skipping any cell that propagation has
  // already filled in.  The board carries the deduced consequences of the
  // givens so far; every deduction from true givens is itself true, so the
  // board never disagrees with the solution.
  let mut givens: Vec<Guess> = Vec::new();
  let mut board = Grid::new();
  for loc in order {
    if board[loc].is_none() {
      let guess = Guess { loc, num: solution[loc] };
      givens.push(guess);
      guess.apply(&mut board);
      let _ = deduce(&mut board, rng);
    }
  }

  // Second pass: drop whatever the remaining givens make redundant.  Each
  // given is tried once; one that fails to drop now would also fail against
  // the smaller final set, so no second sweep is needed.
  givens.shuffle(rng);
  let mut i = givens.len();
  while i > 0 {
    i -= 1;
    let guess = givens.remove(i);
    if validate(&grid_of(&givens), Some(solution), rng).is_none() {
      givens.push(guess);
    }
  }
  grid_of(&givens)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::new_prng;
  use crate::solve::solve_one;
  use crate::verify::unique_solution;

  fn any_solution(seed: u64) -> SolvedGrid {
    solve_one(&Grid::new(), &mut new_prng(seed))
      .found
      .expect("the empty grid is solvable")
  }

  #[test]
  fn dug_puzzle_solves_back_to_its_solution() {
    let solution = any_solution(11);
    let mut rng = new_prng(12);
    let puzzle = dig(&solution, &mut rng);
    assert!(!puzzle.is_empty());
    assert!(puzzle.len() < 81);
    let mut check = solution.grid();
    check.intersect(&puzzle);
    assert_eq!(puzzle, check);
    assert_eq!(Some(solution), unique_solution(&puzzle, &mut rng));
  }

  #[test]
  fn dug_puzzle_is_locally_irreducible() {
    let solution = any_solution(21);
    let mut rng = new_prng(22);
    let puzzle = dig(&solution, &mut rng);
    for (loc, _) in puzzle.iter() {
      let mut reduced = puzzle;
      reduced[loc] = None;
      assert_eq!(
        None,
        validate(&reduced, Some(&solution), &mut rng),
        "given at {:?} is redundant",
        loc
      );
    }
  }

  #[test]
  fn different_seeds_dig_different_puzzles() {
    let solution = any_solution(31);
    let a = dig(&solution, &mut new_prng(32));
    let b = dig(&solution, &mut new_prng(33));
    assert_ne!(a, b);
    assert_eq!(Some(solution), unique_solution(&a, &mut new_prng(0)));
    assert_eq!(Some(solution), unique_solution(&b, &mut new_prng(0)));
  }
}
