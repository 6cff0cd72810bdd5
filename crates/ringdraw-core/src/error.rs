#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot lay out an empty graph (vertex count must be at least 1)")]
    EmptyLayout,
    #[error("invalid canvas size {width}x{height}: both sides must be finite and positive")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("invalid vertex radius {radius}: must be finite and positive")]
    InvalidRadius { radius: f64 },
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("adjacency entry [{row}][{col}] is {value}, expected 0 or 1")]
    InvalidAdjacencyEntry { row: usize, col: usize, value: u64 },
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
    #[error("cannot draw {requested} vertices: the graph only has {available}")]
    VertexCountMismatch { requested: usize, available: usize },
    #[error("no layout has been computed yet; draw the graph before drawing single steps")]
    NoLayout,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
