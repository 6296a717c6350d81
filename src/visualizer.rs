use crate::animation::Animation;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::{reconstruct_path, GridSolver};
use log::info;
use rand::Rng;

/// Session state of the interactive visualizer: the current grid snapshot, wall painting with a
/// pressed mouse button, and the statistics of the last run.
#[derive(Clone, Debug)]
pub struct Visualizer {
    config: GridConfig,
    grid: Grid,
    solver: DijkstraSolver,
    mouse_pressed: bool,
    nodes_visited: usize,
    shortest_path_length: usize,
}

impl Visualizer {
    pub fn new(config: GridConfig) -> Result<Visualizer, GridError> {
        let grid = config.build()?;
        Ok(Visualizer {
            config,
            grid,
            solver: DijkstraSolver,
            mouse_pressed: false,
            nodes_visited: 0,
            shortest_path_length: 0,
        })
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }
    /// Cells settled by the last run.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }
    /// Cells on the last path, endpoints included; 0 if the finish was unreachable.
    pub fn shortest_path_length(&self) -> usize {
        self.shortest_path_length
    }

    /// Starts painting: toggles the wall under the cursor.
    pub fn mouse_down(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = self.grid.toggle_wall(row, col)?;
        self.mouse_pressed = true;
        Ok(())
    }
    /// Toggles the wall under the cursor while painting.
    pub fn mouse_enter(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        if self.mouse_pressed {
            self.grid = self.grid.toggle_wall(row, col)?;
        }
        Ok(())
    }
    pub fn mouse_up(&mut self) {
        self.mouse_pressed = false;
    }

    /// Searches from the start to the finish of the current grid and returns the replay schedule
    /// of the run.
    pub fn visualize(&mut self) -> Result<Animation, GridError> {
        self.grid.reset_search_state();
        let (start, finish) = (self.grid.start(), self.grid.finish());
        let run = self.solver.search(&mut self.grid, start, finish)?;
        let path = reconstruct_path(&self.grid, finish)?;
        self.nodes_visited = run.visited_count();
        self.shortest_path_length = path.len();
        info!(
            "Visited {} cells, shortest path has {} cells",
            self.nodes_visited, self.shortest_path_length
        );
        Ok(Animation::new(run.visited_in_order(), &path))
    }

    /// Replaces the grid by a fresh one built from the config.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.grid = self.config.build()?;
        self.mouse_pressed = false;
        self.nodes_visited = 0;
        self.shortest_path_length = 0;
        Ok(())
    }

    /// Forgets the last run but keeps the walls.
    pub fn clear_path(&mut self) {
        self.grid.reset_search_state();
    }

    pub fn generate_random_walls<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = self
            .grid
            .with_random_walls(rng, self.config.wall_probability);
    }

    /// Whether the finish can currently be reached, without running a search.
    pub fn finish_reachable(&mut self) -> bool {
        self.grid.update();
        self.grid.reachable(self.grid.start(), self.grid.finish())
    }
}
