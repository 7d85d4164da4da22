use std::io::{Cursor, Seek};

use crate::math::*;

crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Byte order of multi-byte values
    ///
    /// The values are the TIFF markers `II` and `MM`.
    pub enum ByteOrder {
        LittleEndian = 0x4949,
        BigEndian = 0x4D4D,
    }
);

pub trait ReadExt: std::io::BufRead + std::io::Seek {
    fn read_array<const T: usize>(&mut self) -> Result<[u8; T], ReadError> {
        let buf = &mut [0; T];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    fn read_byte(&mut self) -> Result<u8, ReadError> {
        let buf = &mut [0; 1];
        self.read_exact(buf)?;
        Ok(buf[0])
    }

    fn read_i8(&mut self) -> Result<i8, ReadError> {
        Ok(i8::from_ne_bytes(self.read_array()?))
    }

    /// Read `u16` in the given byte order
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use gufo_common::read::*;
    /// let mut s = Cursor::new([0x01_u8, 0x02, 0x01, 0x02]);
    /// assert_eq!(s.read_u16(ByteOrder::BigEndian).unwrap(), 0x0102);
    /// assert_eq!(s.read_u16(ByteOrder::LittleEndian).unwrap(), 0x0201);
    /// assert!(s.read_u16(ByteOrder::LittleEndian).is_err());
    /// ```
    fn read_u16(&mut self, byte_order: ByteOrder) -> Result<u16, ReadError> {
        let bytes = self.read_array()?;
        Ok(match byte_order {
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
        })
    }

    fn read_i16(&mut self, byte_order: ByteOrder) -> Result<i16, ReadError> {
        let bytes = self.read_array()?;
        Ok(match byte_order {
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
        })
    }

    fn read_u32(&mut self, byte_order: ByteOrder) -> Result<u32, ReadError> {
        let bytes = self.read_array()?;
        Ok(match byte_order {
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
        })
    }

    fn read_i32(&mut self, byte_order: ByteOrder) -> Result<i32, ReadError> {
        let bytes = self.read_array()?;
        Ok(match byte_order {
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
        })
    }
}

impl<T: AsRef<[u8]>> ReadExt for Cursor<T> {}

pub trait SliceExt<'a>: std::io::BufRead + std::io::Seek {
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError>;
    fn slice_len(&mut self, len: usize) -> Result<&'a [u8], ReadError>;
}

impl<'a> SliceExt<'a> for Cursor<&'a [u8]> {
    /// Read until `byte` and return as slice
    ///
    /// If `byte` does not occur, the remaining data is returned.
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use gufo_common::read::*;
    /// let mut s = Cursor::new(b"abc\0defgh\0end".as_slice());
    /// assert_eq!(s.slice_until(b'\0').unwrap(), b"abc");
    /// assert_eq!(s.slice_until(b'\0').unwrap(), b"defgh");
    /// assert_eq!(s.slice_until(b'\0').unwrap(), b"end");
    /// ```
    fn slice_until(&mut self, byte: u8) -> Result<&'a [u8], ReadError> {
        let data: &'a [u8] = *self.get_ref();
        let start = self.position().usize()?;
        let rest = data.get(start..).ok_or(ReadError::UnexpectedEof)?;
        let len = rest.iter().take_while(|x| **x != byte).count();
        let end = start.safe_add(len)?;

        // Skip the terminator as well, if there is one
        let next = end.safe_add(1)?.min(data.len());
        self.set_position(next.u64()?);

        data.get(start..end).ok_or(ReadError::UnexpectedEof)
    }

    /// Read exactly `len` bytes and return as slice
    ///
    /// ```
    /// # use std::io::Cursor;
    /// # use gufo_common::read::*;
    /// let mut s = Cursor::new(b"abcdef".as_slice());
    /// assert_eq!(s.slice_len(2).unwrap(), b"ab");
    /// assert_eq!(s.slice_len(3).unwrap(), b"cde");
    /// assert!(s.slice_len(2).is_err());
    /// ```
    fn slice_len(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let data: &'a [u8] = *self.get_ref();
        let start = self.position().usize()?;
        let end = start.safe_add(len)?;
        let slice = data.get(start..end).ok_or(ReadError::UnexpectedEof)?;

        self.seek_relative(len.i64()?)?;

        Ok(slice)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of data")]
    UnexpectedEof,
}
