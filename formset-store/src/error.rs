use std::fmt;

/// Failures raised by a [`KeyValueStore`](crate::KeyValueStore)
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    Io(std::io::Error),
    /// The backing file does not contain a JSON object of strings
    Serialization(String),
    /// No platform data directory could be determined
    StorageDirUnavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Storage IO error: {}", err),
            StoreError::Serialization(msg) => write!(f, "Storage serialization error: {}", msg),
            StoreError::StorageDirUnavailable => {
                write!(f, "Could not determine platform storage directory")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
