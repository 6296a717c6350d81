use grid_path_visualizer::{reconstruct_path, run_shortest_path, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  F|
//  ___
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// Cells have a 4-neighbourhood

fn main() {
    let grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
    let mut grid = grid.toggle_wall(1, 1).unwrap();
    println!("{}", grid);
    let (start, finish) = (grid.start(), grid.finish());
    let run = run_shortest_path(&mut grid, start, finish).unwrap();
    println!("Visited {} cells: {:?}", run.visited_count(), run.visited_in_order());
    let path = reconstruct_path(&grid, finish).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
