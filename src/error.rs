use std::fmt;

/// Why an add was rejected. Both variants are recoverable: the ledger is left
/// untouched and the message is shown in place of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both of the stock/price fields were left empty
    MissingField,
    /// A field was non-numeric, non-finite, or not strictly positive
    InvalidRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => {
                write!(f, "Please fill both stock and price fields")
            }
            ValidationError::InvalidRange => {
                write!(f, "Stock and price must be positive numbers")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unified error type for snapshot persistence operations
#[derive(Debug)]
pub enum SnapshotError {
    /// File I/O error
    Io(std::io::Error),
    /// Failed to (de)serialize the snapshot JSON
    Parse(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "I/O error: {}", e),
            SnapshotError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(e) => Some(e),
            SnapshotError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Parse(err)
    }
}

/// Result alias for snapshot persistence operations
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;
