use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlankError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("dangling reference to board {board_id}")]
    DanglingReference { board_id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
