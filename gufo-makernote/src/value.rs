use std::fmt;

use gufo_common::math::{gcd, SafeDiv, ToI32};

/// Value stored for a tag
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagValue {
    I32(i32),
    I64(i64),
    F64(f64),
    Rational(Rational),
    Bytes(Vec<u8>),
    I32Array(Vec<i32>),
    /// Text as stored, decoded on access
    Text {
        bytes: Vec<u8>,
        encoding: TextEncoding,
    },
}

/// Representation of a [`TagValue`], used to report conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    I32,
    I64,
    F32,
    F64,
    Rational,
    Bytes,
    I32Array,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I32 => "32-bit integer",
            Self::I64 => "64-bit integer",
            Self::F32 => "32-bit float",
            Self::F64 => "64-bit float",
            Self::Rational => "rational",
            Self::Bytes => "byte sequence",
            Self::I32Array => "integer sequence",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Declared encoding of a text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    Ascii,
    Utf8,
    /// Windows-1252, which is what vendors mean when they write Latin-1
    Latin1,
    ShiftJis,
}

impl TextEncoding {
    pub fn encoding(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Ascii | Self::Utf8 => encoding_rs::UTF_8,
            Self::Latin1 => encoding_rs::WINDOWS_1252,
            Self::ShiftJis => encoding_rs::SHIFT_JIS,
        }
    }

    /// Decode text, dropping trailing NULL bytes
    ///
    /// ```
    /// # use gufo_makernote::TextEncoding;
    /// assert_eq!(TextEncoding::Ascii.decode(b"EX-Z3\0\0"), "EX-Z3");
    /// assert_eq!(TextEncoding::Latin1.decode(b"Caf\xe9"), "Café");
    /// ```
    pub fn decode(self, bytes: &[u8]) -> String {
        let (text, _) = self.encoding().decode_without_bom_handling(bytes);
        text.trim_end_matches('\0').to_string()
    }
}

/// Fraction with signed numerator and denominator
///
/// The values are kept as stored. Use [`Rational::simplified`] to reduce
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `None` for a zero denominator
    pub fn to_f64(self) -> Option<f64> {
        (self.numerator as f64)
            .safe_div(self.denominator as f64)
            .ok()
    }

    /// `0/0` counts as integer zero
    pub fn is_integer(self) -> bool {
        self.denominator == 1
            || (self.denominator != 0 && self.numerator.checked_rem(self.denominator) == Some(0))
            || (self.denominator == 0 && self.numerator == 0)
    }

    /// Integer part, zero for a zero denominator
    pub fn int_value(self) -> i64 {
        self.numerator
            .checked_div(self.denominator)
            .unwrap_or_default()
    }

    /// Reduced by the greatest common divisor
    ///
    /// Fractions with a zero denominator are kept as they are.
    ///
    /// ```
    /// # use gufo_makernote::Rational;
    /// assert_eq!(Rational::new(10, 4).simplified(), Rational::new(5, 2));
    /// assert_eq!(Rational::new(3, 0).simplified(), Rational::new(3, 0));
    /// ```
    pub fn simplified(self) -> Self {
        if self.denominator == 0 {
            return self;
        }

        let Ok(divisor) = i64::try_from(gcd(self.numerator, self.denominator)) else {
            return self;
        };

        match (
            self.numerator.checked_div(divisor),
            self.denominator.checked_div(divisor),
        ) {
            (Some(numerator), Some(denominator)) if divisor > 1 => {
                Self::new(numerator, denominator)
            }
            _ => self,
        }
    }

    /// Shortest exact text representation
    ///
    /// Integers are shown without denominator and fractions with a numerator
    /// dividing the denominator as `1/x`. Other fractions are reduced. With
    /// `allow_decimal`, a decimal is used if it is shorter than five
    /// characters.
    ///
    /// ```
    /// # use gufo_makernote::Rational;
    /// assert_eq!(Rational::new(10, 5).to_simple_string(false), "2");
    /// assert_eq!(Rational::new(10, 1000).to_simple_string(false), "1/100");
    /// assert_eq!(Rational::new(6, 4).to_simple_string(false), "3/2");
    /// assert_eq!(Rational::new(6, 4).to_simple_string(true), "1.5");
    /// assert_eq!(Rational::new(5, 0).to_simple_string(true), "5/0");
    /// ```
    pub fn to_simple_string(self, allow_decimal: bool) -> String {
        if self.denominator == 0 && self.numerator != 0 {
            return self.to_string();
        }

        if self.is_integer() {
            return self.int_value().to_string();
        }

        if self.numerator != 1 && self.denominator.checked_rem(self.numerator) == Some(0) {
            if let Some(denominator) = self.denominator.checked_div(self.numerator) {
                return Self::new(1, denominator).to_simple_string(allow_decimal);
            }
        }

        let simplified = self.simplified();
        if allow_decimal {
            if let Some(decimal) = simplified.to_f64().map(|x| x.to_string()) {
                if decimal.len() < 5 {
                    return decimal;
                }
            }
        }

        simplified.to_string()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl TagValue {
    /// UTF-8 text value
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            bytes: text.into().into_bytes(),
            encoding: TextEncoding::Utf8,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::F64(_) => ValueKind::F64,
            Self::Rational(_) => ValueKind::Rational,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::I32Array(_) => ValueKind::I32Array,
            Self::Text { .. } => ValueKind::Text,
        }
    }

    pub fn to_i32(&self) -> Option<i32> {
        match self {
            Self::I32(x) => Some(*x),
            Self::I32Array(x) if x.len() == 1 => x.first().copied(),
            _ => self.to_i64().and_then(|x| x.i32().ok()),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn to_i64(&self) -> Option<i64> {
        // Bounds are exactly representable as f64
        const MIN: f64 = -9_223_372_036_854_775_808.;
        const MAX: f64 = 9_223_372_036_854_775_808.;

        match self {
            Self::I32(x) => Some(i64::from(*x)),
            Self::I64(x) => Some(*x),
            Self::F64(x) if x.is_finite() && *x >= MIN && *x < MAX => Some(x.trunc() as i64),
            Self::Rational(x) => x.numerator.checked_div(x.denominator),
            Self::I32Array(x) if x.len() == 1 => x.first().copied().map(i64::from),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::I32(x) => Some(f64::from(*x)),
            Self::I64(x) => Some(*x as f64),
            Self::F64(x) => Some(*x),
            Self::Rational(x) => x.to_f64(),
            Self::I32Array(x) if x.len() == 1 => x.first().copied().map(f64::from),
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|x| x as f32)
    }

    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::I32(x) => Some(Rational::new(i64::from(*x), 1)),
            Self::I64(x) => Some(Rational::new(*x, 1)),
            Self::Rational(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(x) => Some(x),
            Self::Text { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    pub fn to_i32_array(&self) -> Option<Vec<i32>> {
        match self {
            Self::I32Array(x) => Some(x.clone()),
            Self::Bytes(x) => Some(x.iter().copied().map(i32::from).collect()),
            Self::I32(_) | Self::I64(_) => self.to_i32().map(|x| vec![x]),
            _ => None,
        }
    }

    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text { bytes, encoding } => Some(encoding.decode(bytes)),
            _ => None,
        }
    }
}

/// Generic rendering used when a vendor has no rule for a tag
///
/// ```
/// # use gufo_makernote::{Rational, TagValue};
/// assert_eq!(TagValue::Rational(Rational::new(3, 2)).to_string(), "3/2");
/// assert_eq!(TagValue::Bytes(vec![0, 1, 2]).to_string(), "0 1 2");
/// ```
impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: ToString>(values: &[T]) -> String {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }

        match self {
            Self::I32(x) => write!(f, "{x}"),
            Self::I64(x) => write!(f, "{x}"),
            Self::F64(x) => write!(f, "{x}"),
            Self::Rational(x) => write!(f, "{x}"),
            Self::Bytes(x) => f.write_str(&join(x)),
            Self::I32Array(x) => f.write_str(&join(x)),
            Self::Text { bytes, encoding } => f.write_str(&encoding.decode(bytes)),
        }
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<Rational> for TagValue {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<Vec<u8>> for TagValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<i32>> for TagValue {
    fn from(value: Vec<i32>) -> Self {
        Self::I32Array(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}
