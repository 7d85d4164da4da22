use gufo_common::math::MathError;
use gufo_common::read::ReadError;

use crate::{Tag, ValueKind, Vendor};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No value stored for tag {0}")]
    Absent(Tag),
    #[error("Tag {tag} holds {actual} which can not be read as {expected}")]
    TypeMismatch {
        tag: Tag,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("{vendor:?} record must be {expected} bytes long, got {actual} bytes")]
    LengthMismatch {
        vendor: Vendor,
        expected: usize,
        actual: usize,
    },
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    /// Absent values and type mismatches only affect a single tag
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Absent(_) | Self::TypeMismatch { .. })
    }
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
