use crate::cell::{CellIx, Position, INFINITY};
use crate::error::GridError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::solver::{GridSolver, SearchRun};
use log::info;

/// Dijkstra's algorithm specialized to unit edge costs on the 4-neighbourhood.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    /// Gives every unvisited, open neighbour of `ix` the distance of `ix` plus one and `ix` as
    /// predecessor. Earlier assignments are overwritten, there is no decrease-only check.
    fn relax_neighbours(grid: &mut Grid, ix: CellIx) {
        let distance = grid.cell_ix(ix).distance + 1;
        let previous = grid.position(ix);
        for n in grid.neumann_neighbours(ix) {
            let neighbour = grid.cell_ix_mut(n);
            if neighbour.is_visited || neighbour.is_wall {
                continue;
            }
            neighbour.distance = distance;
            neighbour.previous = Some(previous);
        }
    }
}

impl GridSolver for DijkstraSolver {
    fn search(
        &self,
        grid: &mut Grid,
        start: Position,
        finish: Position,
    ) -> Result<SearchRun, GridError> {
        let start_ix = grid.get_ix(start)?;
        let finish_ix = grid.get_ix(finish)?;
        info!("Searching for a path from {} to {}", start, finish);

        // Only the start of this run may enter the frontier as a source.
        let len = grid.cells().len();
        for ix in (0..len).filter(|&ix| ix != start_ix) {
            let cell = grid.cell_ix_mut(ix);
            if cell.distance == 0 && !cell.is_visited {
                cell.distance = INFINITY;
            }
        }
        grid.cell_ix_mut(start_ix).distance = 0;

        let mut frontier = Frontier::new(len);
        let mut visited_in_order = Vec::new();
        while let Some(ix) = frontier.pop_closest(|ix| grid.cell_ix(ix).distance) {
            debug_assert!(!frontier.contains(ix));
            let cell = *grid.cell_ix(ix);
            if cell.is_wall {
                continue;
            }
            if cell.distance == INFINITY {
                info!(
                    "{} is unreachable: settled {} cells, {} left unreached",
                    finish,
                    visited_in_order.len(),
                    frontier.len() + 1
                );
                return Ok(SearchRun::new(visited_in_order, false));
            }
            grid.cell_ix_mut(ix).is_visited = true;
            visited_in_order.push(cell.position());
            if ix == finish_ix {
                info!(
                    "Reached {} at distance {} after settling {} cells",
                    finish,
                    cell.distance,
                    visited_in_order.len()
                );
                return Ok(SearchRun::new(visited_in_order, true));
            }
            Self::relax_neighbours(grid, ix);
        }
        info!("Frontier exhausted without settling {}", finish);
        Ok(SearchRun::new(visited_in_order, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::reconstruct_path;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// Asserts that the case in which start and finish are equal is handled correctly.
    #[test]
    fn equal_start_finish() {
        let mut grid = Grid::new(1, 1, (0, 0), (0, 0)).unwrap();
        let run = DijkstraSolver.search(&mut grid, p(0, 0), p(0, 0)).unwrap();
        assert_eq!(run.visited_in_order(), &[p(0, 0)]);
        assert!(run.reached_finish());
        assert_eq!(reconstruct_path(&grid, p(0, 0)).unwrap(), vec![p(0, 0)]);
    }

    /// Ties are settled in the order the frontier scan produces them.
    #[test]
    fn settle_order_on_open_grid() {
        // |S..|
        // |..F|
        let mut grid = Grid::new(2, 3, (0, 0), (1, 2)).unwrap();
        let run = DijkstraSolver.search(&mut grid, p(0, 0), p(1, 2)).unwrap();
        assert_eq!(
            run.visited_in_order(),
            &[p(0, 0), p(0, 1), p(1, 0), p(0, 2), p(1, 1), p(1, 2)]
        );
        assert_eq!(
            reconstruct_path(&grid, p(1, 2)).unwrap(),
            vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2)]
        );
    }

    /// The last cell to relax a neighbour becomes its predecessor.
    #[test]
    fn relaxation_overwrites_predecessor() {
        let mut grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
        DijkstraSolver.search(&mut grid, p(0, 0), p(1, 1)).unwrap();
        // (0, 1) settles before (1, 0), then (1, 0) relaxes (1, 1) again.
        let finish = grid.cell(p(1, 1)).unwrap();
        assert_eq!(finish.previous(), Some(p(1, 0)));
        assert_eq!(finish.distance(), Some(2));
    }

    #[test]
    fn walls_are_never_settled() {
        let mut grid: Grid = "S#.\n...\n.#F".parse().unwrap();
        let (start, finish) = (grid.start(), grid.finish());
        let run = DijkstraSolver.search(&mut grid, start, finish).unwrap();
        assert!(run.reached_finish());
        assert!(!run.visited_in_order().contains(&p(0, 1)));
        assert!(!run.visited_in_order().contains(&p(2, 1)));
        assert_eq!(grid.cell(p(0, 1)).unwrap().distance(), None);
    }

    #[test]
    fn enclosed_finish_is_unreachable() {
        let mut grid: Grid = "S...\n..#.\n.#F#\n..#.".parse().unwrap();
        let (start, finish) = (grid.start(), grid.finish());
        let run = DijkstraSolver.search(&mut grid, start, finish).unwrap();
        assert!(!run.reached_finish());
        assert!(!run.visited_in_order().contains(&finish));
        // (3, 3) is cut off as well.
        assert_eq!(run.visited_count(), 10);
        assert_eq!(grid.cell(finish).unwrap().distance(), None);
        assert!(reconstruct_path(&grid, finish).unwrap().is_empty());
    }

    #[test]
    fn search_from_other_cell_ignores_flagged_start() {
        let mut grid = Grid::new(1, 4, (0, 0), (0, 3)).unwrap();
        let run = DijkstraSolver.search(&mut grid, p(0, 2), p(0, 3)).unwrap();
        assert_eq!(run.visited_in_order(), &[p(0, 2), p(0, 1), p(0, 3)]);
        assert_eq!(grid.cell(p(0, 0)).unwrap().distance(), Some(2));
        assert_eq!(reconstruct_path(&grid, p(0, 3)).unwrap(), vec![p(0, 2), p(0, 3)]);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let mut grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
        assert_eq!(
            DijkstraSolver.search(&mut grid, p(0, 0), p(2, 2)).unwrap_err(),
            GridError::OutOfBounds(2, 2, 2, 2)
        );
    }
}
