//! Tag codes and per-vendor tag name tables

use std::collections::HashMap;
use std::fmt;

/// Code identifying one field within a directory
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl<T: Field> From<T> for Tag {
    fn from(_value: T) -> Self {
        T::TAG
    }
}

/// A documented tag of a vendor directory
pub trait Field {
    /// Canonical, human facing name
    const NAME: &'static str;
    const TAG: Tag;
}

/// Read-only mapping from tag code to canonical name
pub type TagNames = HashMap<Tag, &'static str>;

/// Defines a unit struct implementing [`Field`] for every tag and the
/// `TAG_NAMES` table of the calling module
macro_rules! make_tags {
    ($($(#[$($attrss:tt)*])*($tag:literal, $id:ident, $name:literal)),*$(,)?) => {
        $(
            $(#[$($attrss)*])*
            #[derive(Copy, Clone, Debug)]
            pub struct $id;

            impl $crate::tag::Field for $id {
                const NAME: &'static str = $name;
                const TAG: $crate::tag::Tag = $crate::tag::Tag($tag);
            }
        )*

        pub(crate) static TAG_NAMES: once_cell::sync::Lazy<$crate::tag::TagNames> =
            once_cell::sync::Lazy::new(|| std::collections::HashMap::from([
                $(
                    ($crate::tag::Tag($tag), $name),
                )*
            ]));
    };
}

pub(crate) use make_tags;
