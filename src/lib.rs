//! # grid_path_visualizer
//!
//! The core of an interactive shortest-path visualizer. A [Grid] of [Cell]s is edited by
//! toggling walls, after which a unit-cost
//! [Dijkstra search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) settles cells in
//! order of distance from the start until the finish is reached or no reachable cell is left.
//! The settle order and the path reconstructed from the predecessor links are what a
//! presentation layer animates; [Visualizer] and [Animation] model that layer's state without
//! rendering anything.
//!
//! Connected components of open cells are maintained alongside the grid, so reachability can be
//! checked without running a search.
mod animation;
mod cell;
mod config;
mod error;
mod frontier;
pub mod grid;
pub mod solver;
mod visualizer;

use std::time::Duration;

pub use crate::animation::{Animation, Frame, FrameKind};
pub use crate::cell::{Cell, CellIx, Position, INFINITY};
pub use crate::config::GridConfig;
pub use crate::error::GridError;
pub use crate::grid::Grid;
pub use crate::solver::dijkstra::DijkstraSolver;
pub use crate::solver::{is_valid_path, reconstruct_path, GridSolver, SearchRun};
pub use crate::visualizer::Visualizer;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: Position = Position::new(10, 10);
pub const DEFAULT_FINISH: Position = Position::new(10, 40);
/// Chance of each cell flipping when random walls are generated.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.2;
pub const VISITED_FRAME_DELAY: Duration = Duration::from_millis(10);
pub const PATH_FRAME_DELAY: Duration = Duration::from_millis(50);

/// Runs a unit-cost Dijkstra search on `grid` from `start` to `finish`. Reset the grid's search
/// state with [Grid::reset_search_state] before every run after the first.
pub fn run_shortest_path(
    grid: &mut Grid,
    start: Position,
    finish: Position,
) -> Result<SearchRun, GridError> {
    DijkstraSolver.search(grid, start, finish)
}
