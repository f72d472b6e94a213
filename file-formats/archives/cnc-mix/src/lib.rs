//! # cnc_mix - MIX Archive Index Library
//!
//! Index primitives for the MIX archive format used by the classic
//! Command & Conquer titles. MIX archives concatenate many assets into one
//! file and locate them through a compact table of fixed 12-byte records
//! holding a filename hash, a byte offset and a byte length - the filenames
//! themselves are never stored.
//!
//! ## Features
//!
//! - The 12-byte index record with its exact little-endian layout
//! - Both legacy filename hash algorithms, bit-exact: the rotate-and-add
//!   hash of Tiberian Dawn and Red Alert, and the self-padded CRC-32 hash
//!   of Tiberian Sun
//! - A diagnostic name registry resolving known hashes back to filenames
//!   for readable archive listings
//!
//! The archive container itself (header, body, table search) and the
//! virtual filesystem mounting archives are out of scope; this crate is the
//! index layer those sit on.
//!
//! ## Examples
//!
//! ```
//! use cnc_mix::{NameRegistry, PackageEntry, PackageHashType, hash_filename};
//!
//! # fn main() -> Result<(), cnc_mix::Error> {
//! // Hash a filename the way a first-generation archive does
//! let key = hash_filename("conquer.mix", PackageHashType::Classic);
//!
//! // Decode an index record and render it for humans
//! let entry = PackageEntry::new(key, 0x100, 0x2000);
//! let decoded = PackageEntry::from_bytes(&entry.to_bytes())?;
//!
//! let names = NameRegistry::with_standard_names();
//! assert_eq!(
//!     decoded.display(&names).to_string(),
//!     "conquer.mix - offset 0x00000100 - length 0x00002000"
//! );
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod entry;
pub mod error;
pub mod hash;
pub mod names;

// Re-export commonly used types
pub use entry::{EntryDisplay, PackageEntry};
pub use error::{Error, Result};
pub use hash::{PackageHashType, classic_hash, crc32_hash, hash_filename};
pub use names::{NameRegistry, STANDARD_NAMES};
