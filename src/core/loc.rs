//! Defines the Loc type, which identifies the locations (or squares or cells)
//! of a Sudoku grid, and the three line families that partition them.

use super::bits::{Bits81, Bits81Values};
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use std::fmt;

/// One of the three families of lines that partition the grid: rows,
/// columns, or 3x3 boxes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Axis {
  Row,
  Col,
  Box,
}

impl Axis {
  /// How many axes there are.
  pub const COUNT: usize = 3;

  /// Iterates the three axes.
  pub fn all() -> impl Iterator<Item = Axis> {
    [Axis::Row, Axis::Col, Axis::Box].into_iter()
  }

  /// Returns this axis's index, in 0..3.
  pub const fn index(self) -> usize {
    self as usize
  }
}

/// Identifies one of the 81 locations in a Sudoku grid.
///
/// Sudokus are represented as length-81 arrays in row-major order.
/// `Loc(0)` is the top left square of the grid, and `Loc(80)` is the
/// bottom right.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Loc(i8);

// Constant Loc values, L11 through L99.
seq!(R in 1..=9 {
    seq!(C in 1..=9 {
        paste! {
            #[allow(clippy::identity_op, clippy::erasing_op, clippy::eq_op)]
            pub const [<L R C>]: Loc = Loc((R - 1) * 9 + (C - 1));
        }
    });
});

impl Loc {
  /// How many locations there are.
  pub const COUNT: usize = 81;

  /// Makes a new Loc given its ID, which the caller must ensure is in the
  /// range 0..81.
  ///
  /// # Safety
  ///
  /// Callers must ensure the argument is in range.
  pub const unsafe fn new_unchecked(id: i8) -> Self {
    Loc(id)
  }

  /// Makes a new Loc given its ID, if it's in the range 0..81.
  pub const fn new(id: i8) -> Option<Self> {
    if id >= 0 && id < 81 {
      Some(Loc(id))
    } else {
      None
    }
  }

  /// Makes a new Loc from an index, if it's in the range 0..81.
  pub const fn from_index(i: usize) -> Option<Self> {
    if i < 81 {
      Some(Loc(i as i8))
    } else {
      None
    }
  }

  /// Converts from zero-based row/col to Loc.
  pub const fn at(row: i8, col: i8) -> Loc {
    Loc(row * 9 + col)
  }

  /// Returns this Loc's ID.
  pub const fn get(self) -> i8 {
    self.0
  }

  /// Returns this Loc's ID in a form suitable for use as an array index.
  pub const fn index(self) -> usize {
    self.0 as usize
  }

  /// Iterates all 81 locations in row-major order.
  pub fn all() -> impl Iterator<Item = Self> {
    (0..81).map(|id| Loc(id))
  }

  /// This location's zero-based row.
  pub const fn row(self) -> i8 {
    self.0 / 9
  }

  /// This location's zero-based column.
  pub const fn col(self) -> i8 {
    self.0 % 9
  }

  /// The line through this location along the given axis.
  pub const fn line(self, axis: Axis) -> Line {
    let index = match axis {
      Axis::Row => self.row(),
      Axis::Col => self.col(),
      Axis::Box => self.0 / 27 * 3 + self.0 / 3 % 3,
    };
    Line::at(axis, index)
  }

  /// This location's position within its line along the given axis, in
  /// 0..9.  Inverse of `Line::loc_at`.
  pub const fn offset(self, axis: Axis) -> i8 {
    match axis {
      Axis::Row => self.col(),
      Axis::Col => self.row(),
      Axis::Box => self.row() % 3 * 3 + self.col() % 3,
    }
  }

  /// Returns a singleton set containing just this location.
  pub fn as_set(self) -> LocSet {
    LocSet::singleton(self)
  }
}

impl fmt::Display for Loc {
  /// Prints this location as (r, c), where r and c are the ordinal numbers
  /// of the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row() + 1, self.col() + 1)
  }
}

impl fmt::Debug for Loc {
  /// Prints this location as Lrc, where r and c are the ordinal numbers of
  /// the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "L{}{}", self.row() + 1, self.col() + 1)
  }
}

/// Identifies one of the 27 lines of a Sudoku grid: 9 rows, then 9 columns,
/// then 9 boxes.  Every line holds 9 locations, and each axis's lines
/// partition the grid.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Line(i8);

/// Top-left location of each box, in box order.
const BOX_BASE: [i8; 9] = [0, 3, 6, 27, 30, 33, 54, 57, 60];

/// Offset from a box's top-left location to each of its cells.
const BOX_STEP: [i8; 9] = [0, 1, 2, 9, 10, 11, 18, 19, 20];

impl Line {
  /// How many lines there are.
  pub const COUNT: usize = 27;

  /// The line along the given axis with the given index, which callers must
  /// keep in 0..9.
  pub const fn at(axis: Axis, index: i8) -> Line {
    Line(axis.index() as i8 * 9 + index)
  }

  /// Which axis this line belongs to.
  pub const fn axis(self) -> Axis {
    match self.0 / 9 {
      0 => Axis::Row,
      1 => Axis::Col,
      _ => Axis::Box,
    }
  }

  /// This line's index within its axis, in 0..9.
  pub const fn line_index(self) -> i8 {
    self.0 % 9
  }

  /// This line's ID in a form suitable for use as an array index, in 0..27.
  pub const fn index(self) -> usize {
    self.0 as usize
  }

  /// The location at the given offset within this line.  Inverse of
  /// `Loc::offset` for this line's axis.
  pub const fn loc_at(self, offset: i8) -> Loc {
    let x = self.line_index();
    match self.axis() {
      Axis::Row => Loc::at(x, offset),
      Axis::Col => Loc::at(offset, x),
      Axis::Box => Loc(BOX_BASE[x as usize] + BOX_STEP[offset as usize]),
    }
  }

  /// Iterates this line's 9 locations in offset order.
  pub fn locs(self) -> impl Iterator<Item = Loc> {
    (0..9).map(move |offset| self.loc_at(offset))
  }

  /// Iterates all 27 lines: rows, then columns, then boxes.
  pub fn all() -> impl Iterator<Item = Self> {
    (0..27).map(|id| Line(id))
  }
}

impl fmt::Debug for Line {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tag = match self.axis() {
      Axis::Row => 'R',
      Axis::Col => 'C',
      Axis::Box => 'B',
    };
    write!(f, "{}{}", tag, self.line_index() + 1)
  }
}

/// A set of `Loc`s.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct LocSet(pub Bits81);

impl LocSet {
  /// Makes a new empty LocSet.
  pub const fn new() -> Self {
    LocSet(Bits81::ZERO)
  }

  /// Makes a new single-valued LocSet.
  pub fn singleton(loc: Loc) -> Self {
    LocSet(Bits81::singleton(loc.index() as i32))
  }

  /// Makes a new LocSet containing all locations.
  pub const fn all() -> Self {
    LocSet(Bits81::ONES)
  }

  /// Whether this set is empty.
  pub const fn is_empty(self) -> bool {
    self.0.is_empty()
  }

  /// How many locations are in this set.
  pub const fn len(self) -> i32 {
    self.0.len()
  }

  /// Whether the given location is in this set.
  pub fn contains(self, loc: Loc) -> bool {
    self.0.contains(loc.index() as i32)
  }

  /// Adds a location.  Tells whether it was previously absent.
  pub fn insert(&mut self, loc: Loc) -> bool {
    self.0.insert(loc.index() as i32)
  }

  /// Removes a location.  Tells whether it was previously present.
  pub fn remove(&mut self, loc: Loc) -> bool {
    self.0.remove(loc.index() as i32)
  }

  /// Iterates this set's locations in row-major order.
  pub fn iter(self) -> LocSetIter {
    LocSetIter(self.0.value_iter())
  }
}

/// Row-major iterator over a LocSet.
#[derive(Clone, Copy, Debug)]
pub struct LocSetIter(Bits81Values);

impl Iterator for LocSetIter {
  type Item = Loc;

  fn next(&mut self) -> Option<Loc> {
    // Safe because Bits81 only returns values in 0..81.
    self.0.next().map(|value| unsafe { Loc::new_unchecked(value as i8) })
  }
}

impl FromIterator<Loc> for LocSet {
  fn from_iter<I: IntoIterator<Item = Loc>>(iter: I) -> Self {
    let mut set = Self::new();
    for loc in iter {
      set.insert(loc);
    }
    set
  }
}

impl std::ops::BitOr for LocSet {
  type Output = Self;
  fn bitor(self, rhs: Self) -> Self {
    LocSet(self.0 | rhs.0)
  }
}
impl std::ops::BitOrAssign for LocSet {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}
impl std::ops::BitAnd for LocSet {
  type Output = Self;
  fn bitand(self, rhs: Self) -> Self {
    LocSet(self.0 & rhs.0)
  }
}

impl fmt::Debug for LocSet {
  /// Prints this set as a list of locations.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "LocSet(")?;
    let mut prev = false;
    for loc in self.iter() {
      if prev {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", loc)?;
      prev = true;
    }
    write!(f, ")")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use itertools::iproduct;

  #[test]
  fn line_loc_round_trip() {
    for (line, offset) in iproduct!(Line::all(), 0..9) {
      let loc = line.loc_at(offset);
      assert_eq!(line, loc.line(line.axis()));
      assert_eq!(offset, loc.offset(line.axis()));
    }
  }

  #[test]
  fn lines_partition_the_grid() {
    for axis in Axis::all() {
      let mut seen = LocSet::new();
      for x in 0..9 {
        for loc in Line::at(axis, x).locs() {
          assert!(seen.insert(loc), "{:?} repeated on axis {:?}", loc, axis);
        }
      }
      assert_eq!(LocSet::all(), seen);
    }
  }

  #[test]
  fn box_tiling() {
    assert_eq!(L11.line(Axis::Box), L33.line(Axis::Box));
    assert_ne!(L11.line(Axis::Box), L44.line(Axis::Box));
    assert_eq!(8, L99.line(Axis::Box).line_index());
    assert_eq!(4, L55.line(Axis::Box).line_index());
    // Box offsets run row-major within the box.
    assert_eq!(0, L44.offset(Axis::Box));
    assert_eq!(8, L66.offset(Axis::Box));
  }

  #[test]
  fn set_basics() {
    let mut set = LocSet::new();
    assert!(set.insert(L11));
    assert!(set.insert(L12));
    assert!(set.insert(L13));
    assert_eq!(vec![L11, L12, L13], set.iter().collect::<Vec<_>>());

    assert!(!set.remove(L21));
    assert!(set.remove(L12));
    assert_eq!(vec![L11, L13], set.iter().collect::<Vec<_>>());
    assert_eq!(L11.as_set() | L13.as_set(), set);
  }
}
