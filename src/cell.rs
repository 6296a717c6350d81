use core::fmt;

/// Row-major index of a cell inside its [Grid](crate::grid::Grid).
pub type CellIx = usize;

/// Sentinel distance of a cell that has not been reached by a search.
pub const INFINITY: u32 = u32::MAX;

/// A 0-indexed (row, col) coordinate on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
    /// Number of orthogonal steps between two positions.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    /// Whether the two positions are orthogonal neighbours.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One addressable position on the grid. Identity and role flags are fixed once the cell is
/// placed in a grid; the search state is owned by the search engine and reset between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) is_wall: bool,
    pub(crate) distance: u32,
    pub(crate) is_visited: bool,
    pub(crate) previous: Option<Position>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            is_start: false,
            is_finish: false,
            is_wall: false,
            distance: INFINITY,
            is_visited: false,
            previous: None,
        }
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
    pub fn is_start(&self) -> bool {
        self.is_start
    }
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// Tentative distance from the start of the last search, [None] if the cell was never reached.
    pub fn distance(&self) -> Option<u32> {
        (self.distance != INFINITY).then_some(self.distance)
    }
    /// Predecessor on the shortest path found so far.
    pub fn previous(&self) -> Option<Position> {
        self.previous
    }
    pub(crate) fn clear_search_state(&mut self) {
        self.distance = if self.is_start { 0 } else { INFINITY };
        self.is_visited = false;
        self.previous = None;
    }
}
