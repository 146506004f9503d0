//! Error types for the save surface.
//!
//! Everything else in the crate is infallible pure computation, so the
//! taxonomy is narrow: saving a document can fail, nothing else can.

use thiserror::Error;

/// Failure while saving a serialized document.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The host environment has no storage capability.
    #[error("storage is not available in this environment")]
    Unavailable,

    /// The storage sink accepted the write but the underlying I/O failed.
    #[error("failed to write '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_descriptive() {
        let message = SaveError::Unavailable.to_string();
        assert!(message.contains("not available"));
    }

    #[test]
    fn test_io_error_names_the_destination() {
        let err = SaveError::Io {
            name: "out.svg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.svg"));
    }
}
