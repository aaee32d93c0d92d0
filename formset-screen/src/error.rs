use std::fmt;

use formset_model::FormName;
use formset_store::StoreError;

/// Failures inside the persistence bridge.
///
/// These never leave the bridge; they are logged and turned into "no data"
/// or a failed [`Outcome`](crate::Outcome).
#[derive(Debug)]
pub enum PersistenceError {
    /// The store could not be read
    Read { form: FormName, source: StoreError },
    /// The stored entry is not a valid record
    Malformed {
        form: FormName,
        source: serde_json::Error,
    },
    /// The store rejected a write or delete
    Write { form: FormName, source: StoreError },
    /// The record could not be serialized
    Encode {
        form: FormName,
        source: serde_json::Error,
    },
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Read { form, source } => {
                write!(f, "Failed to read {}: {}", form.key(), source)
            }
            PersistenceError::Malformed { form, source } => {
                write!(f, "Stored data for {} is malformed: {}", form.key(), source)
            }
            PersistenceError::Write { form, source } => {
                write!(f, "Failed to write {}: {}", form.key(), source)
            }
            PersistenceError::Encode { form, source } => {
                write!(f, "Failed to encode {}: {}", form.key(), source)
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Read { source, .. } | PersistenceError::Write { source, .. } => {
                Some(source)
            }
            PersistenceError::Malformed { source, .. } | PersistenceError::Encode { source, .. } => {
                Some(source)
            }
        }
    }
}
