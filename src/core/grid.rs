//! Defines the Grid type, representing a Sudoku grid and the assignments of
//! numerals to locations within such a grid.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::*;

/// A Sudoku grid: a 9x9 array with each location holding an optional numeral
/// from 1 through 9.  We model this as a map from `Loc` to `Option<Num>`.
///
/// Grids are plain values: they are `Copy`, and every solver component that
/// needs to speculate does so on its own copy.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Grid([Option<Num>; 81]);

impl Grid {
  /// Makes an empty Grid.
  pub const fn new() -> Grid {
    Grid([None; 81])
  }

  /// Returns the number of locations that have assigned numerals.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  /// Whether no location has an assigned numeral.
  pub fn is_empty(&self) -> bool {
    self.0.iter().all(|optional| optional.is_none())
  }

  /// Iterates the assignments in this grid as (location, numeral) pairs.
  pub fn iter(&self) -> impl Iterator<Item = (Loc, Num)> + '_ {
    Loc::all().zip(self.0).filter_map(|(loc, optional)| optional.map(|num| (loc, num)))
  }

  /// This grid's state: solved, incomplete, or broken.
  pub fn state(&self) -> GridState {
    let mut broken = LocSet::new();
    // Look for repeated numerals in every line.
    for line in Line::all() {
      let mut where_seen: [Option<Loc>; 9] = [None; 9];
      for loc in line.locs() {
        if let Some(num) = self[loc] {
          if let Some(first_loc) = where_seen[num.index()] {
            broken.insert(loc);
            broken.insert(first_loc);
          } else {
            where_seen[num.index()] = Some(loc);
          }
        }
      }
    }
    if broken.is_empty() {
      if self.len() == 81 {
        GridState::Solved(self)
      } else {
        GridState::Incomplete
      }
    } else {
      GridState::Broken(broken)
    }
  }

  /// Clears all cells that have different assignments from `other`.
  pub fn intersect(&mut self, other: &Grid) {
    for loc in Loc::all() {
      if self[loc] != other[loc] {
        self[loc] = None;
      }
    }
  }

  /// Converts this grid to a SolvedGrid when this grid is solved.
  pub fn solved_grid(&self) -> Option<SolvedGrid> {
    self.state().solved_grid()
  }
}

/// A grid is either a complete and valid Sudoku solution, a consistent but
/// partial grid, or broken: some line holds a repeated numeral.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GridState<'a> {
  Solved(&'a Grid),
  Incomplete,
  Broken(LocSet),
}

impl<'a> GridState<'a> {
  /// When the state is solved, returns a SolvedGrid; otherwise, returns
  /// None.
  pub fn solved_grid(&self) -> Option<SolvedGrid> {
    if let GridState::Solved(g) = self {
      // Safe because it's in fact a solved grid.
      unsafe { return Some(SolvedGrid::new(g)) }
    }
    None
  }
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Loc> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked(loc.index())
    }
  }
}

impl IndexMut<Loc> for Grid {
  fn index_mut(&mut self, loc: Loc) -> &mut Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked_mut(loc.index())
    }
  }
}

impl fmt::Display for Grid {
  /// Prints this grid in row-major order, with `.` for unassigned squares.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for optional in self.0 {
      match optional {
        Some(num) => num.get().fmt(f)?,
        None => '.'.fmt(f)?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let flat = self.to_string();
    let chars: Vec<_> = flat.split("").skip(1).collect();
    let ch = |n| chars[n as usize];
    let subrow = |n| [ch(n), ch(n + 1), ch(n + 2)].join(" ");
    let row = |n| [subrow(n), subrow(n + 3), subrow(n + 6)].join(" | ");
    let band = |n| [row(n), row(n + 9), row(n + 18)].join("\n");
    let grid = [band(0), band(27), band(54)].join("\n- - - + - - - + - - -\n");
    f.write_str(&grid)
  }
}

impl Serialize for Grid {
  /// Serializes as the flat 81-character string form.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string, which must contain exactly 81
  /// location characters, plus any number of other characters.
  ///
  /// A location character is `1` through `9`, signifying an assignment of
  /// that digit to the corresponding location, or `0` or `.`, signifying
  /// that the location is blank.
  ///
  /// This method ignores all other characters, which means that strings in
  /// both of Grid's Display and Debug forms are correctly parsed back into
  /// the original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut i = 0;
    let mut grid = Grid::new();
    for c in s.chars() {
      if c.is_ascii_digit() || c == '.' {
        if i >= Loc::COUNT {
          return Err(format!("More than 81 locations in {}", s));
        }
        if c != '0' && c != '.' {
          // 0 and . are placeholders meaning a blank square.
          let num = c.to_digit(10).unwrap() as i8;
          grid.0[i] = Some(unsafe { Num::new_unchecked(num) });
        }
        i += 1
      }
    }
    if i == Loc::COUNT {
      Ok(grid)
    } else {
      Err(format!("Fewer than 81 locations in {}", s))
    }
  }
}

/// A solved Sudoku grid: a 9x9 array with each location holding a numeral
/// from 1 through 9, and each row, column, and box containing one copy of
/// every numeral.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SolvedGrid([Num; 81]);

impl SolvedGrid {
  /// Makes a SolvedGrid from a Grid.
  ///
  /// # Safety
  ///
  /// Callers must ensure that the Grid's state is Solved.
  pub unsafe fn new(grid: &Grid) -> SolvedGrid {
    let mut nums = [N1; 81];
    for (i, optional) in grid.0.iter().enumerate() {
      nums[i] = optional.unwrap_unchecked();
    }
    SolvedGrid(nums)
  }

  /// Converts back to Grid.  This always works.
  pub fn grid(&self) -> Grid {
    let mut grid = Grid::new();
    for (i, num) in self.0.iter().enumerate() {
      grid.0[i] = Some(*num);
    }
    grid
  }
}

impl From<&SolvedGrid> for Grid {
  fn from(value: &SolvedGrid) -> Grid {
    value.grid()
  }
}

impl TryFrom<&Grid> for SolvedGrid {
  type Error = &'static str;

  fn try_from(value: &Grid) -> Result<Self, Self::Error> {
    value.solved_grid().ok_or("Grid is not solved")
  }
}

impl Index<Loc> for SolvedGrid {
  type Output = Num;

  /// Allows `SolvedGrid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Num {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked(loc.index())
    }
  }
}

impl fmt::Display for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.grid(), f)
  }
}

impl fmt::Debug for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.grid(), f)
  }
}

impl Serialize for SolvedGrid {
  /// Serializes as the flat 81-character string form.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}
