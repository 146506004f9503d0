//! Storage-sink capability behind the document save operation.
//!
//! The node model and serializer never touch I/O; saving goes through a
//! sink supplied by the caller, and hosts without storage surface a typed
//! error instead of probing the environment inline.

use crate::error::SaveError;

/// Destination for serialized documents.
pub trait StorageSink {
    /// Write `contents` under `name`.
    fn write(&mut self, name: &str, contents: &str) -> Result<(), SaveError>;
}

/// Sink backed by the local filesystem.
///
/// The write is a single blocking `std::fs::write` call, the only I/O in
/// the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl StorageSink for FileSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), SaveError> {
        std::fs::write(name, contents).map_err(|source| SaveError::Io {
            name: name.to_string(),
            source,
        })
    }
}

/// Sink for hosts without filesystem access: every write fails with
/// [`SaveError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl StorageSink for NoStorage {
    fn write(&mut self, _name: &str, _contents: &str) -> Result<(), SaveError> {
        Err(SaveError::Unavailable)
    }
}
