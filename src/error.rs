use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error(
        "invalid maze dimensions {num_rows}x{num_cols}: need at least one row and column, laid out within u32 pixel coordinates"
    )]
    InvalidDimensions { num_rows: usize, num_cols: usize },
    #[error("cell ({i}, {j}) is out of bounds for a {num_rows}x{num_cols} maze")]
    OutOfBounds {
        i: usize,
        j: usize,
        num_rows: usize,
        num_cols: usize,
    },
    #[error("cells {a:?} and {b:?} do not share an edge")]
    NotAdjacent {
        a: (usize, usize),
        b: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
