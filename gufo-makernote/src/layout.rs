//! Records with fixed offsets
//!
//! Some vendors store parts of their maker note as plain records instead of
//! IFDs. A [`Layout`] lists the fields of such a record in order.

mod reader;

use gufo_common::read::ByteOrder;

use crate::cipher::CipherTable;
use crate::error::{Error, Result};
use crate::{Directory, Tag, TagValue, TextEncoding, Vendor};
use reader::Reader;

/// Field of a record
///
/// Integers narrower than 32 bits and `I32` are stored as
/// [`TagValue::I32`], `U32` as [`TagValue::I64`].
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    U8(Tag),
    I8(Tag),
    U16(Tag),
    I16(Tag),
    U32(Tag),
    I32(Tag),
    Bytes(Tag, usize),
    Str {
        tag: Tag,
        width: usize,
        /// Only use the bytes before the first NULL byte
        terminated: bool,
        encoding: TextEncoding,
    },
    /// Bytes without meaning or with unknown meaning
    Skip(usize),
}

impl Entry {
    /// Number of bytes the entry occupies
    pub const fn width(&self) -> usize {
        match self {
            Self::U8(_) | Self::I8(_) => 1,
            Self::U16(_) | Self::I16(_) => 2,
            Self::U32(_) | Self::I32(_) => 4,
            Self::Bytes(_, len) | Self::Skip(len) => *len,
            Self::Str { width, .. } => *width,
        }
    }
}

/// Declared shape of a fixed size record
#[derive(Debug)]
pub struct Layout {
    pub vendor: Vendor,
    /// Exact length of valid records
    pub len: usize,
    pub byte_order: ByteOrder,
    /// Applied to the record before reading any field
    pub cipher: Option<&'static CipherTable>,
    pub entries: &'static [Entry],
}

impl Layout {
    /// Sum of all entry widths
    ///
    /// Returns `None` on overflow.
    pub fn span(&self) -> Option<usize> {
        self.entries
            .iter()
            .try_fold(0_usize, |span, entry| span.checked_add(entry.width()))
    }

    /// Decode a record into a new directory
    ///
    /// Fails with [`Error::LengthMismatch`] without reading anything if `data`
    /// does not have the declared length. The given data is never modified,
    /// deciphering happens on a copy.
    pub fn decode(&self, data: &[u8]) -> Result<Directory> {
        if data.len() != self.len {
            tracing::info!(
                "Rejecting {:?} record with {} bytes, expected {}",
                self.vendor,
                data.len(),
                self.len
            );
            return Err(Error::LengthMismatch {
                vendor: self.vendor,
                expected: self.len,
                actual: data.len(),
            });
        }

        tracing::debug!("Decoding {:?} record", self.vendor);

        match self.cipher {
            Some(cipher) => self.read_entries(&cipher.deciphered(data)),
            None => self.read_entries(data),
        }
    }

    fn read_entries(&self, data: &[u8]) -> Result<Directory> {
        let mut reader = Reader::new(data, self.byte_order);
        let mut directory = Directory::new(self.vendor);

        for entry in self.entries {
            match *entry {
                Entry::U8(tag) => directory.set(tag, i32::from(reader.read_u8()?)),
                Entry::I8(tag) => directory.set(tag, i32::from(reader.read_i8()?)),
                Entry::U16(tag) => directory.set(tag, i32::from(reader.read_u16()?)),
                Entry::I16(tag) => directory.set(tag, i32::from(reader.read_i16()?)),
                Entry::U32(tag) => directory.set(tag, i64::from(reader.read_u32()?)),
                Entry::I32(tag) => directory.set(tag, reader.read_i32()?),
                Entry::Bytes(tag, len) => directory.set(tag, reader.read_bytes(len)?.to_vec()),
                Entry::Str {
                    tag,
                    width,
                    terminated,
                    encoding,
                } => {
                    let bytes = reader.read_str(width, terminated)?.to_vec();
                    directory.set(tag, TagValue::Text { bytes, encoding });
                }
                Entry::Skip(len) => reader.skip(len)?,
            }
        }

        let end = reader.position()?;
        if end != self.len {
            tracing::error!(
                "Layout of {:?} record ends at byte {end} instead of {}",
                self.vendor,
                self.len
            );
        }
        debug_assert_eq!(end, self.len);

        tracing::debug!("Decoded {} fields", directory.len());

        Ok(directory)
    }
}
