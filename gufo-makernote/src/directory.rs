use std::collections::BTreeMap;

use crate::error::{Error, Result, ResultExt};
use crate::{Descriptor, Rational, Tag, TagValue, ValueKind, Vendor};

/// Decoded tags of one maker note block
///
/// The vendor is fixed at construction and selects the tag names and the
/// description rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directory {
    vendor: Vendor,
    values: BTreeMap<Tag, TagValue>,
}

impl Directory {
    pub fn new(vendor: Vendor) -> Self {
        Self {
            vendor,
            values: BTreeMap::new(),
        }
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Name of the directory type, like "Pentax Makernote"
    pub fn name(&self) -> &'static str {
        self.vendor.policy().name()
    }

    /// Stores the value, replacing an existing one
    pub fn set(&mut self, tag: impl Into<Tag>, value: impl Into<TagValue>) {
        let tag = tag.into();
        if self.values.insert(tag, value.into()).is_some() {
            tracing::debug!("Overwriting tag {tag} in '{}'", self.name());
        }
    }

    /// Raw stored value
    pub fn get(&self, tag: impl Into<Tag>) -> Option<&TagValue> {
        self.values.get(&tag.into())
    }

    pub fn contains(&self, tag: impl Into<Tag>) -> bool {
        self.values.contains_key(&tag.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored values in ascending tag order
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &TagValue)> {
        self.values.iter().map(|(tag, value)| (*tag, value))
    }

    fn convert<T>(
        &self,
        tag: impl Into<Tag>,
        expected: ValueKind,
        f: impl FnOnce(&TagValue) -> Option<T>,
    ) -> Result<T> {
        let tag = tag.into();
        let value = self.values.get(&tag).e(Error::Absent(tag))?;

        f(value).e(Error::TypeMismatch {
            tag,
            expected,
            actual: value.kind(),
        })
    }

    pub fn get_i32(&self, tag: impl Into<Tag>) -> Result<i32> {
        self.convert(tag, ValueKind::I32, TagValue::to_i32)
    }

    pub fn get_i64(&self, tag: impl Into<Tag>) -> Result<i64> {
        self.convert(tag, ValueKind::I64, TagValue::to_i64)
    }

    pub fn get_f32(&self, tag: impl Into<Tag>) -> Result<f32> {
        self.convert(tag, ValueKind::F32, TagValue::to_f32)
    }

    pub fn get_f64(&self, tag: impl Into<Tag>) -> Result<f64> {
        self.convert(tag, ValueKind::F64, TagValue::to_f64)
    }

    pub fn get_rational(&self, tag: impl Into<Tag>) -> Result<Rational> {
        self.convert(tag, ValueKind::Rational, TagValue::to_rational)
    }

    pub fn get_bytes(&self, tag: impl Into<Tag>) -> Result<&[u8]> {
        let tag = tag.into();
        let value = self.values.get(&tag).e(Error::Absent(tag))?;

        value.as_bytes().e(Error::TypeMismatch {
            tag,
            expected: ValueKind::Bytes,
            actual: value.kind(),
        })
    }

    pub fn get_i32_array(&self, tag: impl Into<Tag>) -> Result<Vec<i32>> {
        self.convert(tag, ValueKind::I32Array, TagValue::to_i32_array)
    }

    /// Text decoded with its declared encoding
    pub fn get_string(&self, tag: impl Into<Tag>) -> Result<String> {
        self.convert(tag, ValueKind::Text, TagValue::to_text)
    }

    /// Canonical tag name from the vendor's table
    ///
    /// Returns `None` for undocumented tags, even if a value is stored.
    pub fn tag_name(&self, tag: impl Into<Tag>) -> Option<&'static str> {
        self.vendor.policy().tag_names().get(&tag.into()).copied()
    }

    pub fn descriptor(&self) -> Descriptor<'_> {
        Descriptor::new(self)
    }

    /// Human readable value, see [`Descriptor::describe`]
    pub fn describe(&self, tag: impl Into<Tag>) -> Option<String> {
        self.descriptor().describe(tag)
    }

    /// Lists all stored tags with name and description
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", self.name()));
        out.push_str("------------------------------\n");

        let descriptor = self.descriptor();
        for (tag, value) in self.iter() {
            let name = self
                .tag_name(tag)
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("Unknown tag ({tag})"));
            let description = descriptor
                .describe(tag)
                .unwrap_or_else(|| format!("[{}]", value.kind()));

            out.push_str(&format!("{name}: {description}\n"));
        }

        out
    }
}
