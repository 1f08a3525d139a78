use thiserror::Error;

/// Main error type for index operations
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Snapshot checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Snapshot error: incompatible version {actual}, expected <= {expected}")]
    IncompatibleSnapshot { expected: u32, actual: u32 },

    #[error("Invalid vector dimensions for vector {id}: expected {expected}, got {actual}")]
    DimensionMismatch { id: u32, expected: usize, actual: usize },

    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
}

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// Check if this error was caused by malformed persisted data
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            IndexError::Serialization(_)
                | IndexError::InvalidSnapshot(_)
                | IndexError::ChecksumMismatch { .. }
                | IndexError::IncompatibleSnapshot { .. }
        )
    }
}
