use grid_path_visualizer::{FrameKind, GridConfig, Position, Visualizer};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;

// Runs one session on the default 20x50 grid with random walls and prints the final frame of
// the animation: `o` visited, `*` shortest path.

fn main() {
    let mut visualizer = Visualizer::new(GridConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    visualizer.generate_random_walls(&mut rng);
    let animation = visualizer.visualize().unwrap();

    let mut marks: HashMap<Position, char> = HashMap::new();
    for frame in animation.frames() {
        let mark = match frame.kind {
            FrameKind::Visited => 'o',
            FrameKind::ShortestPath => '*',
        };
        marks.insert(frame.position, mark);
    }
    let grid = visualizer.grid();
    for (row, line) in grid.to_string().lines().enumerate() {
        let line = line
            .chars()
            .enumerate()
            .map(|(col, tile)| match (tile, marks.get(&Position::new(row, col))) {
                ('.', Some(&mark)) => mark,
                (tile, _) => tile,
            })
            .collect::<String>();
        println!("{}", line);
    }
    println!(
        "Nodes visited: {}, shortest path length: {}, animation takes {:?}",
        visualizer.nodes_visited(),
        visualizer.shortest_path_length(),
        animation.duration()
    );
}
