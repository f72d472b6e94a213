//! Error types for the MIX index library

use std::io;
use thiserror::Error;

/// Result type alias for MIX index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for MIX index operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index record shorter than the fixed 12-byte layout
    #[error("truncated index entry: expected {expected} bytes, got {actual}")]
    TruncatedEntry {
        /// Bytes required to decode one record
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// Hash algorithm name outside the closed Classic/CRC32 set
    #[error("unsupported hash algorithm `{0}`")]
    UnsupportedAlgorithm(String),

    /// Two distinct filenames hashed to the same index key
    #[error("duplicate hash 0x{hash:08x}: `{name}` collides with registered `{existing}`")]
    DuplicateHash {
        /// The colliding 32-bit key
        hash: u32,
        /// Filename already registered under the key
        existing: String,
        /// Filename whose registration failed
        name: String,
    },
}
