use std::io::Cursor;

use gufo_common::math::ToUsize;
use gufo_common::read::{ByteOrder, ReadExt, SliceExt};

use crate::error::Result;

/// Cursor over a record with fixed byte order
#[derive(Debug)]
pub struct Reader<'a> {
    byte_order: ByteOrder,
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            cursor: Cursor::new(data),
        }
    }

    pub fn position(&self) -> Result<usize> {
        Ok(self.cursor.position().usize()?)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.cursor.slice_len(len)?;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.cursor.read_byte()?)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.cursor.read_i8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.cursor.read_u16(self.byte_order)?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.cursor.read_i16(self.byte_order)?)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.cursor.read_u32(self.byte_order)?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.cursor.read_i32(self.byte_order)?)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        Ok(self.cursor.slice_len(len)?)
    }

    /// Reads a field of `width` bytes
    ///
    /// For `terminated` fields, everything from the first NULL byte on is
    /// dropped.
    pub fn read_str(&mut self, width: usize, terminated: bool) -> Result<&'a [u8]> {
        let field = self.cursor.slice_len(width)?;

        if terminated {
            Ok(Cursor::new(field).slice_until(0)?)
        } else {
            Ok(field)
        }
    }
}
