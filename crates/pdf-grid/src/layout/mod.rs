//! Layout calculation modules for grid sheets
//!
//! This module handles all the geometric calculations for placing images:
//! - Cell geometry (page size, margins, column/row count)
//! - Slot assignment and pagination (which image goes where)
//! - Scale-to-fit and centering inside a cell
//! - Conversion between top-down and bottom-up coordinates
//!
//! Nothing in here performs I/O or logs; every function is a pure
//! computation over its arguments.

mod coords;
mod engine;
mod geometry;
mod types;

pub use coords::*;
pub use engine::*;
pub use geometry::*;
pub use types::*;
