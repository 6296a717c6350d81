use crate::cell::{Cell, CellIx, Position};
use crate::error::GridError;
use core::fmt;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;
use rand::Rng;
use std::str::FromStr;

/// [Grid] is a fixed-size, row-major field of [Cell]s with exactly one start and one finish.
/// In addition to the cells it maintains the connected components of open cells in a
/// [UnionFind] structure, so that reachability can be answered without running a search.
///
/// Wall edits go through [toggle_wall](Self::toggle_wall), which hands back a new snapshot and
/// leaves the old one untouched.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    finish: Position,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Builds a `rows x cols` grid without walls. Fails if either endpoint lies outside the grid,
    /// or if both endpoints share a cell on a grid larger than 1x1.
    pub fn new<S, F>(rows: usize, cols: usize, start: S, finish: F) -> Result<Grid, GridError>
    where
        S: Into<Position>,
        F: Into<Position>,
    {
        let (start, finish) = (start.into(), finish.into());
        for p in [start, finish] {
            if p.row >= rows || p.col >= cols {
                return Err(GridError::OutOfBounds(p.row, p.col, rows, cols));
            }
        }
        // A single cell leaves no other placement for the finish.
        if start == finish && rows * cols > 1 {
            return Err(GridError::CoincidentEndpoints(start.row, start.col));
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = Cell::new(row, col);
                cell.is_start = start == cell.position();
                cell.is_finish = finish == cell.position();
                cell.clear_search_state();
                cells.push(cell);
            }
        }
        let mut grid = Grid {
            rows,
            cols,
            cells,
            start,
            finish,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Position {
        self.start
    }
    pub fn finish(&self) -> Position {
        self.finish
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
    pub fn cell(&self, pos: Position) -> Result<&Cell, GridError> {
        let ix = self.get_ix(pos)?;
        Ok(&self.cells[ix])
    }
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    pub(crate) fn get_ix(&self, pos: Position) -> Result<CellIx, GridError> {
        if self.in_bounds(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(GridError::OutOfBounds(pos.row, pos.col, self.rows, self.cols))
        }
    }
    pub(crate) fn position(&self, ix: CellIx) -> Position {
        Position::new(ix / self.cols, ix % self.cols)
    }
    pub(crate) fn cell_ix(&self, ix: CellIx) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_ix_mut(&mut self, ix: CellIx) -> &mut Cell {
        &mut self.cells[ix]
    }

    /// The orthogonal neighbours of a cell in up, down, left, right order.
    pub(crate) fn neumann_neighbours(&self, ix: CellIx) -> impl Iterator<Item = CellIx> {
        let (row, col) = (ix / self.cols, ix % self.cols);
        [
            (row > 0).then(|| ix - self.cols),
            (row + 1 < self.rows).then(|| ix + self.cols),
            (col > 0).then(|| ix - 1),
            (col + 1 < self.cols).then(|| ix + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns a new grid in which the wall flag of `(row, col)` is flipped. Cells that are the
    /// start or finish are never walled; for those the returned grid equals the current one.
    pub fn toggle_wall(&self, row: usize, col: usize) -> Result<Grid, GridError> {
        let ix = self.get_ix(Position::new(row, col))?;
        let mut grid = self.clone();
        let cell = self.cells[ix];
        if cell.is_start || cell.is_finish {
            debug!("Ignoring wall toggle on endpoint {}", cell.position());
            return Ok(grid);
        }
        grid.set_wall(ix, !cell.is_wall);
        Ok(grid)
    }

    /// Returns a new grid in which every cell other than the endpoints has its wall flag flipped
    /// with the given probability, which is clamped to `[0, 1]`.
    pub fn with_random_walls<R: Rng + ?Sized>(&self, rng: &mut R, probability: f64) -> Grid {
        let probability = probability.clamp(0.0, 1.0);
        let mut grid = self.clone();
        for ix in 0..grid.cells.len() {
            let cell = grid.cells[ix];
            if cell.is_start || cell.is_finish {
                continue;
            }
            if rng.gen_bool(probability) {
                grid.set_wall(ix, !cell.is_wall);
            }
        }
        debug!("Random walls: {} of {} cells", grid.wall_count(), grid.cells.len());
        grid
    }

    /// Replaces the cell at `ix` by a copy with the given wall flag. Joins newly connected
    /// components and flags the components as dirty if they are (potentially) broken apart.
    fn set_wall(&mut self, ix: CellIx, wall: bool) {
        let mut cell = self.cells[ix];
        if cell.is_wall == wall {
            return;
        }
        cell.is_wall = wall;
        self.cells[ix] = cell;
        if wall {
            self.components_dirty = true;
        } else {
            let open = self
                .neumann_neighbours(ix)
                .filter(|&n| !self.cells[n].is_wall)
                .collect::<Vec<_>>();
            for n in open {
                self.components.union(ix, n);
            }
        }
    }

    /// Reinitializes distance, visited flag and predecessor of every cell. Roles and walls are
    /// left as they are.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_search_state();
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open orthogonal neighbours.
    pub fn generate_components(&mut self) {
        info!("Generating connected components for {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_wall {
                continue;
            }
            let (row, col) = (ix / self.cols, ix % self.cols);
            if row + 1 < self.rows && !self.cells[ix + self.cols].is_wall {
                self.components.union(ix, ix + self.cols);
            }
            if col + 1 < self.cols && !self.cells[ix + 1].is_wall {
                self.components.union(ix, ix + 1);
            }
        }
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: Position) -> Result<usize, GridError> {
        Ok(self.components.find(self.get_ix(pos)?))
    }

    /// Checks if `a` and `b` are open cells on the same connected component.
    pub fn reachable(&self, a: Position, b: Position) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if `a` and `b` are not on the same component. Positions outside the grid and walls
    /// are unreachable.
    pub fn unreachable(&self, a: Position, b: Position) -> bool {
        if self.components_dirty {
            warn!("Querying reachability on dirty components, call update() first");
        }
        match (self.get_ix(a), self.get_ix(b)) {
            (Ok(a_ix), Ok(b_ix)) => {
                self.cells[a_ix].is_wall
                    || self.cells[b_ix].is_wall
                    || !self.components.equiv(a_ix, b_ix)
            }
            _ => true,
        }
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row: `S` start, `F` finish, `#` wall, `.` open.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|c| match c {
                    c if c.is_start => 'S',
                    c if c.is_finish => 'F',
                    c if c.is_wall => '#',
                    _ => '.',
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the format written by [Display](fmt::Display). Surrounding whitespace and blank lines
    /// are ignored.
    fn from_str(s: &str) -> Result<Grid, GridError> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::Parse(format!(
                    "row {row} has {width} cells, expected {cols}"
                )));
            }
            for (col, tile) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                match tile {
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::Parse("more than one start".to_owned()));
                        }
                    }
                    'F' => {
                        if finish.replace(pos).is_some() {
                            return Err(GridError::Parse("more than one finish".to_owned()));
                        }
                    }
                    '#' => walls.push(pos),
                    '.' => {}
                    other => {
                        return Err(GridError::Parse(format!(
                            "unknown tile {other:?} at {pos}"
                        )))
                    }
                }
            }
        }
        let start = start.ok_or_else(|| GridError::Parse("missing start".to_owned()))?;
        // The single cell of a 1x1 map is written as `S` and is the finish as well.
        let finish = match finish {
            Some(finish) => finish,
            None if rows * cols == 1 => start,
            None => return Err(GridError::Parse("missing finish".to_owned())),
        };
        let mut grid = Grid::new(rows, cols, start, finish)?;
        for pos in walls {
            let ix = grid.get_ix(pos)?;
            grid.set_wall(ix, true);
        }
        grid.generate_components();
        Ok(grid)
    }
}
