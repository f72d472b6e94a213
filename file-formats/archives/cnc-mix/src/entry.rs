//! Index records for MIX archives

use std::fmt;
use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::names::NameRegistry;
use crate::{Error, Result};

/// Index record locating one file inside a MIX archive (12 bytes)
///
/// The index table at the head of an archive is a contiguous run of these
/// records. Offset and length are not validated against the archive body
/// here; bounds checking belongs to the container reader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageEntry {
    /// Hash of the filename under the archive generation's algorithm
    pub hash: u32,
    /// Byte offset of the file's content within the archive body
    pub offset: u32,
    /// Byte length of the file's content
    pub length: u32,
}

impl PackageEntry {
    /// Serialized size of one record in bytes
    pub const SIZE: usize = 12;

    /// Create an entry from explicit field values
    pub fn new(hash: u32, offset: u32, length: u32) -> Self {
        Self {
            hash,
            offset,
            length,
        }
    }

    /// Read an entry from raw bytes
    ///
    /// Decodes three little-endian `u32` values in hash, offset, length
    /// order. Only the first [`Self::SIZE`] bytes are examined; callers
    /// slicing a larger index table can pass the remainder untouched.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::TruncatedEntry {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);
        Ok(Self {
            hash: cursor.read_u32::<LittleEndian>()?,
            offset: cursor.read_u32::<LittleEndian>()?,
            length: cursor.read_u32::<LittleEndian>()?,
        })
    }

    /// Serialize the entry into its fixed 12-byte layout
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.hash.to_le_bytes());
        buf[4..8].copy_from_slice(&self.offset.to_le_bytes());
        buf[8..12].copy_from_slice(&self.length.to_le_bytes());
        buf
    }

    /// Read an entry from a stream
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            hash: reader.read_u32::<LittleEndian>()?,
            offset: reader.read_u32::<LittleEndian>()?,
            length: reader.read_u32::<LittleEndian>()?,
        })
    }

    /// Write the entry to a stream
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(self.hash)?;
        writer.write_u32::<LittleEndian>(self.offset)?;
        writer.write_u32::<LittleEndian>(self.length)?;
        Ok(())
    }

    /// Render the entry for humans, resolving the hash through `names`
    ///
    /// Hashes present in the registry render as the original filename,
    /// anything else as the raw hash. Lookup failures never affect archive
    /// reading; this is diagnostics only.
    pub fn display<'a>(&'a self, names: &'a NameRegistry) -> EntryDisplay<'a> {
        EntryDisplay { entry: self, names }
    }
}

/// Borrowed display adapter returned by [`PackageEntry::display`]
#[derive(Debug)]
pub struct EntryDisplay<'a> {
    entry: &'a PackageEntry,
    names: &'a NameRegistry,
}

impl fmt::Display for EntryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names.lookup(self.entry.hash) {
            Some(name) => write!(
                f,
                "{} - offset 0x{:08x} - length 0x{:08x}",
                name, self.entry.offset, self.entry.length
            ),
            None => write!(
                f,
                "0x{:08x} - offset 0x{:08x} - length 0x{:08x}",
                self.entry.hash, self.entry.offset, self.entry.length
            ),
        }
    }
}
