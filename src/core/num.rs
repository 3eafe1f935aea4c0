//! Defines the Num type, which represents the numerals written in a Sudoku.

use super::bits::{Bits9, Bits9Values};
use core::fmt;
use paste::paste;
use seq_macro::seq;
use serde::Serialize;
use std::num::NonZeroI8;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Identifies one of the 9 numerals that can occupy a location of a Sudoku
/// grid.
///
/// The wrapped int is the human-facing digit 1 through 9; everything inside
/// the engine works with the zero-based `index()`, which is also the bit a
/// numeral occupies in a candidate mask.  Translation between the two
/// happens only here.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Num(NonZeroI8);

// Constant Num values, N1 through N9.
seq!(K in 1..=9 {
    paste! {
        pub const [<N K>]: Num = Num(unsafe {
            // Safe because K in 1..=9
            NonZeroI8::new_unchecked(K)
        });
    }
});

impl Num {
  /// How many distinct numerals there are.
  pub const COUNT: usize = 9;

  /// Makes a Num from an int, which callers must ensure is in the range
  /// 1..=9.
  ///
  /// # Safety
  ///
  /// Callers must ensure the argument is in `1..=9`.
  pub const unsafe fn new_unchecked(num: i8) -> Self {
    Num(NonZeroI8::new_unchecked(num))
  }

  /// Makes an optional Num from an int, present when it's in range and
  /// absent otherwise.
  pub fn new(num: i8) -> Option<Self> {
    if num > 0 && num <= 9 {
      Some(unsafe { Self::new_unchecked(num) })
    } else {
      None
    }
  }

  /// Makes an optional Num from a zero-based digit index, present when it's
  /// in range and absent otherwise.
  pub fn from_index(i: usize) -> Option<Self> {
    if i < 9 {
      Some(unsafe { Self::new_unchecked(i as i8 + 1) })
    } else {
      None
    }
  }

  /// Returns the int that this Num wraps, which is in 1..=9.
  pub const fn get(self) -> i8 {
    self.0.get()
  }

  /// Returns this numeral's zero-based digit index, in 0..9.  This is the
  /// bit it occupies in candidate masks.
  pub const fn index(self) -> usize {
    (self.get() - 1) as usize
  }

  /// Iterates all distinct `Num`s, 1 through 9.
  pub fn all() -> impl Iterator<Item = Self> {
    (1..=9).map(|n| unsafe { Self::new_unchecked(n) })
  }

  /// Returns a singleton set containing just this numeral.
  pub fn as_set(self) -> NumSet {
    NumSet::singleton(self)
  }
}

impl fmt::Debug for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "N{}", self.get())
  }
}

impl fmt::Display for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.get())
  }
}

/// A set of `Num`s: a candidate mask with bit `d` standing for the numeral
/// whose index is `d`.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct NumSet(pub Bits9);

impl NumSet {
  /// Makes a new empty NumSet.
  pub const fn new() -> Self {
    NumSet(Bits9::ZERO)
  }

  /// Makes a new single-valued NumSet.
  pub fn singleton(num: Num) -> Self {
    NumSet(Bits9::singleton(num.index() as i32))
  }

  /// Makes a new NumSet containing all numerals.
  pub const fn all() -> Self {
    NumSet(Bits9::ONES)
  }

  /// Whether this set is empty.
  pub const fn is_empty(self) -> bool {
    self.0.is_empty()
  }

  /// How many numerals are in this set.
  pub const fn len(self) -> i32 {
    self.0.len()
  }

  /// Whether the given numeral is in this set.
  pub fn contains(self, num: Num) -> bool {
    self.0.contains(num.index() as i32)
  }

  /// Adds a numeral.  Tells whether it was previously absent.
  pub fn insert(&mut self, num: Num) -> bool {
    self.0.insert(num.index() as i32)
  }

  /// Removes a numeral.  Tells whether it was previously present.
  pub fn remove(&mut self, num: Num) -> bool {
    self.0.remove(num.index() as i32)
  }

  /// The smallest numeral in this set, or None if empty.
  pub fn smallest(self) -> Option<Num> {
    self.0.smallest_value().map(|value| {
      // Safe because Bits9 only returns values in 0..9.
      unsafe { Num::new_unchecked(value as i8 + 1) }
    })
  }

  /// Iterates this set's numerals in ascending order.  This is how a mask
  /// decodes into its digit list.
  pub fn iter(self) -> NumSetIter {
    NumSetIter(self.0.value_iter())
  }
}

/// Ascending iterator over a NumSet.
#[derive(Clone, Copy, Debug)]
pub struct NumSetIter(Bits9Values);

impl Iterator for NumSetIter {
  type Item = Num;

  fn next(&mut self) -> Option<Num> {
    // Safe because Bits9 only returns values in 0..9.
    self.0.next().map(|value| unsafe { Num::new_unchecked(value as i8 + 1) })
  }
}

impl FromIterator<Num> for NumSet {
  fn from_iter<I: IntoIterator<Item = Num>>(iter: I) -> Self {
    let mut set = Self::new();
    for num in iter {
      set.insert(num);
    }
    set
  }
}

#[macro_export]
/// Returns a NumSet containing the given numerals.
macro_rules! num_set {
  ($($num:expr),*) => {
    NumSet::from_iter([$($num),*])
  };
}

impl BitAnd for NumSet {
  type Output = Self;
  fn bitand(self, rhs: Self) -> Self {
    NumSet(self.0 & rhs.0)
  }
}
impl BitAndAssign for NumSet {
  fn bitand_assign(&mut self, rhs: Self) {
    self.0 &= rhs.0;
  }
}
impl BitOr for NumSet {
  type Output = Self;
  fn bitor(self, rhs: Self) -> Self {
    NumSet(self.0 | rhs.0)
  }
}
impl BitOrAssign for NumSet {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}
impl BitXor for NumSet {
  type Output = Self;
  fn bitxor(self, rhs: Self) -> Self {
    NumSet(self.0 ^ rhs.0)
  }
}
impl BitXorAssign for NumSet {
  fn bitxor_assign(&mut self, rhs: Self) {
    self.0 ^= rhs.0;
  }
}
impl Not for NumSet {
  type Output = Self;
  fn not(self) -> Self {
    NumSet(!self.0)
  }
}

impl fmt::Debug for NumSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    write!(f, "{{")?;
    for num in self.iter() {
      if first {
        first = false;
      } else {
        write!(f, ", ")?;
      }
      write!(f, "{:?}", num)?;
    }
    write!(f, "}}")
  }
}
