//! Filename hash algorithms for MIX archive indices
//!
//! MIX archives do not store filenames. Each index record carries a 32-bit
//! key derived from the uppercased filename, and the derivation changed
//! between game generations:
//!
//! - [`PackageHashType::Classic`] - rotate-and-add word fold used by
//!   Tiberian Dawn and Red Alert
//! - [`PackageHashType::Crc32`] - CRC-32 over a self-padded name, used by
//!   Tiberian Sun
//!
//! Both algorithms are reproduced bit-exactly; archives in the wild were
//! written with these keys and any deviation makes their files unfindable.
//! Filenames are ASCII in the legacy format. Non-ASCII input is passed
//! through with only ASCII letters case-folded; feeding it is the caller's
//! responsibility and yields no meaningful key.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Hash algorithm used to derive index keys from filenames
///
/// Which algorithm applies is a property of the archive's format
/// generation, not recorded per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageHashType {
    /// Rotate-and-add word hash (Tiberian Dawn, Red Alert)
    Classic,
    /// CRC-32 over a self-padded name (Tiberian Sun)
    Crc32,
}

impl PackageHashType {
    /// Canonical lowercase name of the algorithm
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Crc32 => "crc32",
        }
    }
}

impl fmt::Display for PackageHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageHashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("classic") {
            Ok(Self::Classic)
        } else if s.eq_ignore_ascii_case("crc32") {
            Ok(Self::Crc32)
        } else {
            Err(Error::UnsupportedAlgorithm(s.to_string()))
        }
    }
}

/// Hash a filename into the 32-bit key stored in an index record
pub fn hash_filename(name: &str, hash_type: PackageHashType) -> u32 {
    match hash_type {
        PackageHashType::Classic => classic_hash(name),
        PackageHashType::Crc32 => crc32_hash(name),
    }
}

/// Hash a filename using the first-generation algorithm
///
/// The uppercased name is NUL-padded to a multiple of four bytes and folded
/// left-to-right as little-endian words: `acc = rot1(acc) + word`, wrapping
/// on overflow. The empty name hashes to 0.
pub fn classic_hash(name: &str) -> u32 {
    let mut data = name.to_ascii_uppercase().into_bytes();
    while data.len() % 4 != 0 {
        data.push(0);
    }

    let mut result = 0u32;
    for word in data.chunks_exact(4) {
        let next = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        result = result.rotate_left(1).wrapping_add(next);
    }

    result
}

/// Hash a filename using the Tiberian Sun algorithm
///
/// The uppercased name is padded to a multiple of four bytes, then run
/// through standard CRC-32. The padding is not zeros: one byte holding the
/// residue count (`len % 4`), then copies of the byte at index
/// `(len / 4) * 4` until aligned. Names already a multiple of four bytes
/// long (including the empty name) get no padding at all.
pub fn crc32_hash(name: &str) -> u32 {
    let mut data = name.to_ascii_uppercase().into_bytes();
    let len = data.len();
    let tail = len % 4;
    if tail != 0 {
        data.push(tail as u8);
        // First byte of the trailing partial word of the original name
        let fill = data[len - tail];
        for _ in 0..3 - tail {
            data.push(fill);
        }
    }

    crc32fast::hash(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_vectors() {
        // "ab" uppercases to "AB", pads to "AB\0\0", a single LE word
        assert_eq!(classic_hash("ab"), 16961);
        assert_eq!(classic_hash("ab"), 0x0000_4241);

        // Aligned names fold without padding
        assert_eq!(classic_hash("abcd"), 0x4443_4241);
        assert_eq!(classic_hash("abcdefgh"), 0xD0CD_CAC7);
    }

    #[test]
    fn test_classic_empty() {
        assert_eq!(classic_hash(""), 0);
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(classic_hash("a.mix"), classic_hash("A.MIX"));
        assert_eq!(crc32_hash("a.mix"), crc32_hash("A.MIX"));

        assert_eq!(
            hash_filename("conquer.mix", PackageHashType::Classic),
            hash_filename("CONQUER.MIX", PackageHashType::Classic)
        );
        assert_eq!(
            hash_filename("conquer.mix", PackageHashType::Crc32),
            hash_filename("CONQUER.MIX", PackageHashType::Crc32)
        );
    }

    #[test]
    fn test_crc32_self_padding() {
        // Unaligned names gain a residue-count byte, then copies of the
        // first byte of the trailing partial word
        assert_eq!(crc32_hash("a"), crc32fast::hash(b"A\x01AA"));
        assert_eq!(crc32_hash("ab"), crc32fast::hash(b"AB\x02A"));
        assert_eq!(crc32_hash("abc"), crc32fast::hash(b"ABC\x03"));
        assert_eq!(crc32_hash("abcde"), crc32fast::hash(b"ABCDE\x01EE"));
        assert_eq!(crc32_hash("abcdef"), crc32fast::hash(b"ABCDEF\x02E"));
    }

    #[test]
    fn test_crc32_aligned_names_unpadded() {
        assert_eq!(crc32_hash("abcd"), crc32fast::hash(b"ABCD"));
        assert_eq!(crc32_hash("temperat"), crc32fast::hash(b"TEMPERAT"));
    }

    #[test]
    fn test_crc32_empty() {
        // No padding for length 0; CRC-32 of zero bytes is 0
        assert_eq!(crc32_hash(""), 0);
    }

    #[test]
    fn test_determinism() {
        for name in ["local.mix", "e1.shp", "redalert.mix", ""] {
            assert_eq!(classic_hash(name), classic_hash(name));
            assert_eq!(crc32_hash(name), crc32_hash(name));
        }
    }

    #[test]
    fn test_hash_type_parsing() {
        assert_eq!(
            "classic".parse::<PackageHashType>().unwrap(),
            PackageHashType::Classic
        );
        assert_eq!(
            "CRC32".parse::<PackageHashType>().unwrap(),
            PackageHashType::Crc32
        );

        let err = "md5".parse::<PackageHashType>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "md5"));
    }

    #[test]
    fn test_hash_type_display_roundtrip() {
        for hash_type in [PackageHashType::Classic, PackageHashType::Crc32] {
            let parsed: PackageHashType = hash_type.as_str().parse().unwrap();
            assert_eq!(parsed, hash_type);
        }
    }
}
