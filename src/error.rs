use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GridError {
        OutOfBounds(row: usize, col: usize, rows: usize, cols: usize) {
            display("cell ({row}, {col}) lies outside the {rows}x{cols} grid")
        }
        CoincidentEndpoints(row: usize, col: usize) {
            display("start and finish cannot share cell ({row}, {col})")
        }
        Parse(reason: String) {
            display("could not parse grid: {reason}")
        }
    }
}
