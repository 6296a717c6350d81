use crate::cell::Position;
use crate::error::GridError;
use crate::grid::Grid;
use itertools::Itertools;
use log::debug;

pub mod dijkstra;

/// Output of one search: the cells in the order they were settled, and whether the finish was
/// among them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRun {
    visited_in_order: Vec<Position>,
    reached_finish: bool,
}

impl SearchRun {
    pub(crate) fn new(visited_in_order: Vec<Position>, reached_finish: bool) -> SearchRun {
        SearchRun {
            visited_in_order,
            reached_finish,
        }
    }
    pub fn visited_in_order(&self) -> &[Position] {
        &self.visited_in_order
    }
    pub fn visited_count(&self) -> usize {
        self.visited_in_order.len()
    }
    pub fn reached_finish(&self) -> bool {
        self.reached_finish
    }
}

pub trait GridSolver {
    /// Searches from `start` towards `finish`, writing distances, visited flags and predecessors
    /// into the grid's cells. The grid's search state is expected to be freshly reset.
    fn search(
        &self,
        grid: &mut Grid,
        start: Position,
        finish: Position,
    ) -> Result<SearchRun, GridError>;

    /// Resets the search state, searches from the grid's start to its finish and returns the path
    /// between them, or [None] if the finish cannot be reached.
    fn get_path(&self, grid: &mut Grid) -> Option<Vec<Position>> {
        grid.reset_search_state();
        let (start, finish) = (grid.start(), grid.finish());
        let run = self.search(grid, start, finish).ok()?;
        if !run.reached_finish() {
            return None;
        }
        let path = reconstruct_path(grid, finish).ok()?;
        debug_assert!(is_valid_path(grid, &path));
        Some(path)
    }
}

/// Follows the predecessor links back from `finish` and returns the path from the search's start
/// to `finish`, both inclusive. The path is empty if `finish` was not settled by the last search.
pub fn reconstruct_path(grid: &Grid, finish: Position) -> Result<Vec<Position>, GridError> {
    if !grid.cell(finish)?.is_visited() {
        debug!("{} was not settled, no path to reconstruct", finish);
        return Ok(Vec::new());
    }
    let mut path = std::iter::successors(Some(finish), |&pos| {
        grid.cell(pos).ok().and_then(|c| c.previous())
    })
    .take(grid.cells().len())
    .collect::<Vec<_>>();
    path.reverse();
    // Only a chain rooted at a source (distance 0) is a path.
    let rooted = match path.first() {
        Some(&first) => grid.cell(first)?.distance() == Some(0),
        None => false,
    };
    if rooted {
        Ok(path)
    } else {
        debug!("Predecessor chain of {} is not rooted at a start", finish);
        Ok(Vec::new())
    }
}

/// Checks that `path` runs from the grid's start to its finish through open, orthogonally
/// adjacent cells.
pub fn is_valid_path(grid: &Grid, path: &[Position]) -> bool {
    path.first() == Some(&grid.start())
        && path.last() == Some(&grid.finish())
        && path
            .iter()
            .all(|&p| grid.cell(p).map_or(false, |c| !c.is_wall()))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

#[cfg(test)]
mod tests {
    use super::dijkstra::DijkstraSolver;
    use super::*;

    #[test]
    fn unsearched_grid_has_no_path() {
        let grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
        assert!(reconstruct_path(&grid, grid.finish()).unwrap().is_empty());
    }

    #[test]
    fn reconstruct_out_of_bounds() {
        let grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
        assert_eq!(
            reconstruct_path(&grid, Position::new(4, 0)).unwrap_err(),
            GridError::OutOfBounds(4, 0, 2, 2)
        );
    }

    #[test]
    fn path_validation() {
        let grid: Grid = "S.\n#F".parse().unwrap();
        let p = |row, col| Position::new(row, col);
        assert!(is_valid_path(&grid, &[p(0, 0), p(0, 1), p(1, 1)]));
        assert!(!is_valid_path(&grid, &[p(0, 0), p(1, 0), p(1, 1)]));
        assert!(!is_valid_path(&grid, &[p(0, 0), p(1, 1)]));
        assert!(!is_valid_path(&grid, &[]));
    }

    #[test]
    fn get_path_resets_between_runs() {
        let mut grid: Grid = "S..\n.#.\n..F".parse().unwrap();
        let first = DijkstraSolver.get_path(&mut grid).unwrap();
        let second = DijkstraSolver.get_path(&mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
