//! Reverse lookup from index hashes to well-known filenames
//!
//! Index records identify files only by hash, so listings of an archive
//! without outside knowledge are a wall of hex. The registry maps hashes of
//! a known filename catalog back to readable names for logs and tooling.
//! It is never consulted to resolve a file; lookup correctness depends only
//! on the hashes in the index itself.
//!
//! Intended use is populate-then-freeze: register the catalog once during
//! startup, then share the registry immutably. [`NameRegistry::register`]
//! takes `&mut self`, so after population the borrow rules guarantee
//! concurrent [`NameRegistry::lookup`] calls race with nothing.

use std::collections::HashMap;

use crate::hash::{PackageHashType, hash_filename};
use crate::{Error, Result};

/// Well-known archive filenames shipped by the supported titles
///
/// Seed catalog for [`NameRegistry::with_standard_names`]. Curated to be
/// collision-free under both hash algorithms.
pub const STANDARD_NAMES: &[&str] = &[
    // Tiberian Dawn
    "conquer.mix",
    "desert.mix",
    "general.mix",
    "local.mix",
    "scores.mix",
    "sounds.mix",
    "speech.mix",
    "temperat.mix",
    "transit.mix",
    "winter.mix",
    // Red Alert
    "redalert.mix",
    "main.mix",
    "expand.mix",
    "expand2.mix",
    "hires.mix",
    "lores.mix",
    "allies.mix",
    "russian.mix",
    "interior.mix",
    "snow.mix",
    "movies1.mix",
    "movies2.mix",
    // Tiberian Sun
    "tibsun.mix",
    "cache.mix",
    "isosnow.mix",
    "isotemp.mix",
    "multi.mix",
    "sidec01.mix",
    "sidec02.mix",
];

/// Reverse mapping from index hashes to registered filenames
///
/// Each registered filename contributes two mappings, one per hash
/// generation, so a single registry resolves entries from any supported
/// archive format.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    names: HashMap<u32, String>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with [`STANDARD_NAMES`]
    pub fn with_standard_names() -> Self {
        let mut registry = Self::new();
        for name in STANDARD_NAMES {
            if let Err(err) = registry.register(name) {
                // The catalog is curated to be collision-free; hitting this
                // is a catalog bug, not a caller error
                log::warn!("standard name catalog: {err}");
            }
        }
        registry
    }

    /// Register `name` under both hash algorithms
    ///
    /// Registering the same name again is a no-op. A hash already owned by
    /// a different name fails with [`Error::DuplicateHash`] and leaves the
    /// registry unchanged, so the caller can decide whether to rename or
    /// accept the known collision.
    pub fn register(&mut self, name: &str) -> Result<()> {
        let classic = hash_filename(name, PackageHashType::Classic);
        let crc32 = hash_filename(name, PackageHashType::Crc32);

        for hash in [classic, crc32] {
            if let Some(existing) = self.names.get(&hash) {
                if existing != name {
                    log::warn!("hash collision on 0x{hash:08x}: `{name}` vs `{existing}`");
                    return Err(Error::DuplicateHash {
                        hash,
                        existing: existing.clone(),
                        name: name.to_string(),
                    });
                }
            }
        }

        log::trace!("registered `{name}` as 0x{classic:08x} (classic) / 0x{crc32:08x} (crc32)");
        self.names.insert(classic, name.to_string());
        self.names.insert(crc32, name.to_string());
        Ok(())
    }

    /// Look up the filename registered for `hash`, if any
    pub fn lookup(&self, hash: u32) -> Option<&str> {
        self.names.get(&hash).map(String::as_str)
    }

    /// Number of hash mappings held
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether no names have been registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
