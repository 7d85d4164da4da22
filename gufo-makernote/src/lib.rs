#![doc = include_str!("../README.md")]

pub mod cipher;
mod descriptor;
mod directory;
pub mod error;
pub mod layout;
pub mod tag;
mod value;
pub mod vendor;

pub use descriptor::{Descriptor, NO_FLAGS};
pub use directory::Directory;
pub use tag::{Field, Tag};
pub use value::{Rational, TagValue, TextEncoding, ValueKind};
pub use vendor::{Vendor, VendorPolicy};
