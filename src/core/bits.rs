//! Bitmask primitives treated as fixed-capacity sets of small integers.

use paste::paste;
use static_assertions::const_assert;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Defines a bitmask type backed by an unsigned int, holding values in
/// `0..CAPACITY`.
macro_rules! define_bits {
  (
    $(
      $(#[$outer:meta])*
      $name:ident: $int:ty [$capacity:expr];
    )*
  ) => {
    $(
      paste! {
        $(#[$outer])*
        #[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name($int);

        const_assert!($capacity <= <$int>::BITS as i32);

        impl $name {
          /// The number of distinct values this mask can hold.
          pub const CAPACITY: i32 = $capacity;

          /// The empty mask.
          pub const ZERO: Self = Self(0);

          /// The mask with all `CAPACITY` bits set.
          pub const ONES: Self = Self(!0 >> (<$int>::BITS as i32 - $capacity));

          /// Wraps a raw int as a mask.  Callers must keep it within
          /// `ONES`.
          pub const fn from_backing_int(bits: $int) -> Self {
            Self(bits)
          }

          /// The raw int backing this mask.
          pub const fn backing_int(self) -> $int {
            self.0
          }

          /// The mask with the single bit corresponding to the given value.
          ///
          /// ## Panics
          ///
          /// Panics if the value is not in `0..CAPACITY`.
          pub fn singleton(value: i32) -> Self {
            assert!(
              (0..Self::CAPACITY).contains(&value),
              "{} is out of bounds, must be in 0..{}",
              value,
              Self::CAPACITY
            );
            Self(1 << value)
          }

          /// The number of `1` bits in this mask.
          pub const fn len(self) -> i32 {
            self.0.count_ones() as i32
          }

          /// Whether no bits are set.
          pub const fn is_empty(self) -> bool {
            self.0 == 0
          }

          /// Tells whether the given value's bit is set.
          pub fn contains(self, value: i32) -> bool {
            (0..Self::CAPACITY).contains(&value) && self.0 & (1 << value) != 0
          }

          /// Sets a value's bit.  Tells whether it was previously clear.
          pub fn insert(&mut self, value: i32) -> bool {
            let bit = Self::singleton(value).0;
            let absent = self.0 & bit == 0;
            self.0 |= bit;
            absent
          }

          /// Clears a value's bit.  Tells whether it was previously set.
          pub fn remove(&mut self, value: i32) -> bool {
            let bit = Self::singleton(value).0;
            let present = self.0 & bit != 0;
            self.0 &= !bit;
            present
          }

          /// The smallest value whose bit is set, or None if empty.
          pub fn smallest_value(self) -> Option<i32> {
            if self.0 == 0 {
              None
            } else {
              Some(self.0.trailing_zeros() as i32)
            }
          }

          /// Iterates the set values in ascending order.
          pub fn value_iter(self) -> [<$name Values>] {
            [<$name Values>](self)
          }
        }

        /// Ascending-order iterator over a mask's values.
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct [<$name Values>]($name);

        impl Iterator for [<$name Values>] {
          type Item = i32;

          fn next(&mut self) -> Option<i32> {
            let value = self.0.smallest_value()?;
            self.0 .0 &= self.0 .0 - 1; // clear the lowest set bit
            Some(value)
          }
        }

        impl BitAnd for $name {
          type Output = Self;
          fn bitand(self, rhs: Self) -> Self {
            Self(self.0 & rhs.0)
          }
        }
        impl BitAndAssign for $name {
          fn bitand_assign(&mut self, rhs: Self) {
            self.0 &= rhs.0;
          }
        }
        impl BitOr for $name {
          type Output = Self;
          fn bitor(self, rhs: Self) -> Self {
            Self(self.0 | rhs.0)
          }
        }
        impl BitOrAssign for $name {
          fn bitor_assign(&mut self, rhs: Self) {
            self.0 |= rhs.0;
          }
        }
        impl BitXor for $name {
          type Output = Self;
          fn bitxor(self, rhs: Self) -> Self {
            Self(self.0 ^ rhs.0)
          }
        }
        impl BitXorAssign for $name {
          fn bitxor_assign(&mut self, rhs: Self) {
            self.0 ^= rhs.0;
          }
        }
        impl Not for $name {
          type Output = Self;
          fn not(self) -> Self {
            Self(!self.0 & Self::ONES.0)
          }
        }

        impl fmt::Debug for $name {
          fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
              f,
              concat!(stringify!($name), "({:?})"),
              self.value_iter().collect::<Vec<_>>()
            )
          }
        }
      }
    )*
  };
}

define_bits! {
  /// A 9-bit mask: a set of values in `0..9`.  The unit of candidate
  /// tracking: bit `d` set means digit index `d` is still possible.
  Bits9: u16[9];

  /// An 81-bit mask: a set of values in `0..81`, one per grid location.
  Bits81: u128[81];
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_and_full() {
    assert_eq!(0, Bits9::ZERO.len());
    assert_eq!(9, Bits9::ONES.len());
    assert_eq!(0x1ff, Bits9::ONES.backing_int());
    assert_eq!(81, Bits81::ONES.len());
    assert!(Bits9::ZERO.is_empty());
    assert!(!Bits9::ONES.is_empty());
  }

  #[test]
  fn insert_remove_contains() {
    let mut bits = Bits9::ZERO;
    assert!(bits.insert(4));
    assert!(!bits.insert(4));
    assert!(bits.contains(4));
    assert!(!bits.contains(5));
    assert!(!bits.contains(-1));
    assert!(bits.remove(4));
    assert!(!bits.remove(4));
    assert!(bits.is_empty());
  }

  #[test]
  fn ascending_iteration() {
    let mut bits = Bits9::ZERO;
    for value in [7, 0, 3] {
      bits.insert(value);
    }
    assert_eq!(vec![0, 3, 7], bits.value_iter().collect::<Vec<_>>());
    assert_eq!(Some(0), bits.smallest_value());
  }

  #[test]
  fn ops() {
    let a = Bits9::singleton(1) | Bits9::singleton(2);
    let b = Bits9::singleton(2) | Bits9::singleton(3);
    assert_eq!(vec![2], (a & b).value_iter().collect::<Vec<_>>());
    assert_eq!(vec![1, 2, 3], (a | b).value_iter().collect::<Vec<_>>());
    assert_eq!(vec![1, 3], (a ^ b).value_iter().collect::<Vec<_>>());
    assert_eq!(7, (!a).len());
    assert_eq!(vec![0, 3, 4, 5, 6, 7, 8], (!a).value_iter().collect::<Vec<_>>());
    assert_eq!(Bits9::ONES, a | !a);
    assert_eq!(Bits9::ZERO, a & !a);
  }

  #[test]
  fn bits81_range() {
    let mut bits = Bits81::ZERO;
    assert!(bits.insert(80));
    assert!(bits.contains(80));
    assert!(!bits.contains(81));
    assert_eq!(vec![80], bits.value_iter().collect::<Vec<_>>());
  }
}
