//! **mazes3d** generates perfect mazes over a lattice of cells stacked in levels.
//!
//! Walls and passages live in a compact wall grid (see `grid_coordinates` for its layout),
//! carved by Wilson's loop-erased random walk algorithm and rendered as text for inspection.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_coordinates;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod units;
mod utils;
