use crate::cell::Position;
use crate::error::GridError;
use crate::grid::Grid;
use crate::{DEFAULT_COLS, DEFAULT_FINISH, DEFAULT_ROWS, DEFAULT_START, DEFAULT_WALL_PROBABILITY};

/// Dimensions, endpoints and wall density of a visualizer session.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub finish: Position,
    pub wall_probability: f64,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
            wall_probability: DEFAULT_WALL_PROBABILITY,
        }
    }
}

impl GridConfig {
    /// A fresh grid without walls.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::new(self.rows, self.cols, self.start, self.finish)
    }
}
