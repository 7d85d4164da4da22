use crate::error::Error;
use crate::{Directory, Tag};

/// Text shown for a bitmask without any bit set
pub const NO_FLAGS: &str = "(none)";

/// Renders values of a [`Directory`] as human readable text
///
/// The rules are selected by the directory's [`Vendor`](crate::Vendor). The
/// helpers are shared by all vendors. They never modify the directory and
/// return `None` if a value is missing or has an unexpected type.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<'a> {
    directory: &'a Directory,
}

impl<'a> Descriptor<'a> {
    pub(crate) fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &'a Directory {
        self.directory
    }

    /// Description of the tag's value
    ///
    /// Returns `None` if no value is stored for the tag or the vendor defines
    /// no text for the value.
    pub fn describe(&self, tag: impl Into<Tag>) -> Option<String> {
        let tag = tag.into();
        if !self.directory.contains(tag) {
            return None;
        }

        self.directory.vendor().policy().describe(self, tag)
    }

    /// Rendering by value type, see [`TagValue`](crate::TagValue)'s `Display`
    pub fn generic(&self, tag: impl Into<Tag>) -> Option<String> {
        self.directory.get(tag).map(ToString::to_string)
    }

    /// Text for values that have no label
    pub fn unknown(value: i64) -> String {
        format!("Unknown ({value})")
    }

    fn ok<T>(&self, result: crate::error::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err @ Error::TypeMismatch { .. }) => {
                tracing::info!("No description in '{}': {err}", self.directory.name());
                None
            }
            Err(_) => None,
        }
    }

    pub fn int(&self, tag: impl Into<Tag>) -> Option<i64> {
        self.ok(self.directory.get_i64(tag))
    }

    pub fn text(&self, tag: impl Into<Tag>) -> Option<String> {
        self.ok(self.directory.get_string(tag))
    }

    /// Label for values counted from `base`
    ///
    /// Values outside the labels are shown as `Unknown (value)`.
    pub fn indexed(&self, tag: impl Into<Tag>, base: i64, labels: &[&str]) -> Option<String> {
        let value = self.int(tag)?;

        let label = value
            .checked_sub(base)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| labels.get(index));

        Some(match label {
            Some(label) => label.to_string(),
            None => Self::unknown(value),
        })
    }

    /// Like [`Self::indexed`] but with reserved slots
    ///
    /// A `None` label gives no description, while values outside the labels
    /// are shown as `Unknown (value)`.
    pub fn indexed_gaps(
        &self,
        tag: impl Into<Tag>,
        base: i64,
        labels: &[Option<&str>],
    ) -> Option<String> {
        let value = self.int(tag)?;

        let label = value
            .checked_sub(base)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| labels.get(index));

        match label {
            Some(label) => label.map(ToString::to_string),
            None => Some(Self::unknown(value)),
        }
    }

    /// Label from a sparse list of codes
    ///
    /// Several codes may share a label. The first matching code wins.
    pub fn labelled(&self, tag: impl Into<Tag>, codes: &[(i64, &str)]) -> Option<String> {
        let value = self.int(tag)?;

        Some(
            codes
                .iter()
                .find(|(code, _)| *code == value)
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| Self::unknown(value)),
        )
    }

    /// Labels of all set bits, lowest bit first, joined by `", "`
    ///
    /// Set bits without label are ignored. A value of zero gives
    /// [`NO_FLAGS`], a value with only unlabelled bits set gives `None`.
    pub fn bitmask(&self, tag: impl Into<Tag>, bits: &[(u32, &str)]) -> Option<String> {
        let value = self.int(tag)?;

        if value == 0 {
            return Some(NO_FLAGS.to_string());
        }

        let mut bits = bits.to_vec();
        bits.sort_by_key(|(bit, _)| *bit);

        let labels = bits
            .iter()
            .filter(|(bit, _)| {
                1_i64
                    .checked_shl(*bit)
                    .is_some_and(|mask| value & mask != 0)
            })
            .map(|(_, label)| *label)
            .collect::<Vec<_>>();

        if labels.is_empty() {
            tracing::debug!("Only unlabelled bits set in {value:#x}");
            return None;
        }

        Some(labels.join(", "))
    }

    /// See [`Rational::to_simple_string`](crate::Rational::to_simple_string)
    pub fn rational(&self, tag: impl Into<Tag>, allow_decimal: bool) -> Option<String> {
        self.ok(self.directory.get_rational(tag))
            .map(|x| x.to_simple_string(allow_decimal))
    }

    /// Length of a byte sequence, like `(12 bytes)`
    pub fn byte_length(&self, tag: impl Into<Tag>) -> Option<String> {
        let len = self.ok(self.directory.get_bytes(tag))?.len();
        let plural = if len == 1 { "" } else { "s" };

        Some(format!("({len} byte{plural})"))
    }

    /// Version from a sequence of exactly `components` bytes
    ///
    /// Each byte is one component. ASCII digits are shown as the digit they
    /// represent.
    pub fn version_bytes(&self, tag: impl Into<Tag>, components: usize) -> Option<String> {
        let values = self.ok(self.directory.get_i32_array(tag))?;

        if values.len() != components {
            return None;
        }

        let components = values
            .into_iter()
            .map(|x| match u8::try_from(x) {
                Ok(c) if c.is_ascii_digit() => char::from(c).to_string(),
                _ => x.to_string(),
            })
            .collect::<Vec<_>>();

        Some(components.join("."))
    }

    /// Integer rendered by `format`, usually adding a unit or applying a scale
    pub fn formatted(
        &self,
        tag: impl Into<Tag>,
        format: impl FnOnce(i64) -> String,
    ) -> Option<String> {
        self.int(tag).map(format)
    }

    /// Label selected by the first character of a text value
    ///
    /// Unrecognized characters give the text itself.
    pub fn char_coded(&self, tag: impl Into<Tag>, codes: &[(char, &str)]) -> Option<String> {
        let text = self.text(tag)?;

        let label = text
            .chars()
            .next()
            .and_then(|first| codes.iter().find(|(c, _)| *c == first))
            .map(|(_, label)| label.to_string());

        Some(label.unwrap_or(text))
    }

    /// Integer quotient of two tags
    ///
    /// Gives `None` if either is missing or the divisor is zero.
    pub fn quotient(&self, dividend: impl Into<Tag>, divisor: impl Into<Tag>) -> Option<i64> {
        let dividend = self.int(dividend)?;
        let divisor = self.int(divisor)?;

        dividend.checked_div(divisor)
    }
}
