use bitdoku::{core::*, evaluate::validate, gen::dig, random::new_prng, solve::solve_one};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// Digs a puzzle from a randomly generated solution and prints both.
fn main() {
  let args: Vec<String> = env::args().collect();
  assert!(args.len() <= 2, "usage: {} [seed]", args[0]);
  let seed = match args.get(1) {
    Some(arg) => arg
      .parse::<u64>()
      .unwrap_or_else(|_| panic!("seed (`{}`) must be a nonnegative integer", arg)),
    None => SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64,
  };
  let mut rng = new_prng(seed);
  let solution = solve_one(&Grid::new(), &mut rng).found.unwrap();
  let puzzle = dig(&solution, &mut rng);
  let difficulty = validate(&puzzle, Some(&solution), &mut rng).unwrap();
  println!(
    "Seed {}: {} givens, difficulty {}\n{:?}\n{}",
    seed,
    puzzle.len(),
    difficulty,
    puzzle,
    puzzle
  );
  println!("Solution:\n{:?}", solution);
}
