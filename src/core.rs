//! Defines the core Sudoku types.
//!
//! Among these are:
//!
//! - Grid: the 9x9 Sudoku board
//! - Num: the 9 numerals that go in the grid's squares
//! - Loc: the 81 locations of the grid
//! - Axis and Line: the three families of 9-cell lines (rows, columns,
//!   boxes) that every numeral must appear in exactly once

pub mod bits;
mod grid;
mod loc;
mod num;

pub use grid::*;
pub use loc::*;
pub use num::*;
