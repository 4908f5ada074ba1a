//! Byte-to-text formatting for fixed-size values
//!
//! Bytes are emitted from the highest in-memory index down to index 0, so the
//! most significant byte of a little-endian integer comes first. This is a
//! display convention: on a big-endian host the output follows the storage
//! order instead.

use crate::repr::RawBytes;
use std::fmt;
use std::str::FromStr;

/// Digit base of a rendered byte group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hex,
}

impl Radix {
    /// Characters per byte group, leading zeros included
    #[must_use]
    pub const fn group_width(self) -> usize {
        match self {
            Self::Binary => 8,
            Self::Hex => 2,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "bin"),
            Self::Hex => write!(f, "hex"),
        }
    }
}

impl FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "binary" | "2" => Ok(Self::Binary),
            "hex" | "16" => Ok(Self::Hex),
            other => Err(format!("unknown radix: {other}")),
        }
    }
}

/// Letter case of hexadecimal digits. Lowercase unless configured otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Renders byte sequences as separated, zero-padded digit groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteFormatter {
    separator: String,
    case: HexCase,
}

impl Default for ByteFormatter {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            case: HexCase::Lower,
        }
    }
}

impl ByteFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `separator` between adjacent groups. An empty separator gives
    /// compact output such as `12345678`.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub const fn with_case(mut self, case: HexCase) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub const fn case(&self) -> HexCase {
        self.case
    }

    /// Format `bytes`, given in memory order, highest index first.
    ///
    /// An empty slice formats to an empty string.
    #[must_use]
    pub fn format_bytes(&self, radix: Radix, bytes: &[u8]) -> String {
        let display_order: Vec<u8> = bytes.iter().rev().copied().collect();
        let digits = match (radix, self.case) {
            (Radix::Hex, HexCase::Lower) => hex::encode(&display_order),
            (Radix::Hex, HexCase::Upper) => hex::encode_upper(&display_order),
            (Radix::Binary, _) => display_order.iter().map(|b| format!("{b:08b}")).collect(),
        };

        let width = radix.group_width();
        let groups = bytes.len();
        let mut output =
            String::with_capacity(digits.len() + groups.saturating_sub(1) * self.separator.len());
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && i % width == 0 {
                output.push_str(&self.separator);
            }
            output.push(digit);
        }
        output
    }

    #[must_use]
    pub fn format<T: RawBytes + ?Sized>(&self, radix: Radix, value: &T) -> String {
        self.format_bytes(radix, &value.raw_bytes())
    }

    #[must_use]
    pub fn binary<T: RawBytes + ?Sized>(&self, value: &T) -> String {
        self.format(Radix::Binary, value)
    }

    #[must_use]
    pub fn hex<T: RawBytes + ?Sized>(&self, value: &T) -> String {
        self.format(Radix::Hex, value)
    }
}

/// Binary dump of `value`: 8-digit groups separated by single spaces
///
/// # Examples
///
/// ```
/// use byte_lens::format::to_binary_string;
/// assert_eq!(to_binary_string(&5u8), "00000101");
/// ```
#[must_use]
pub fn to_binary_string<T: RawBytes + ?Sized>(value: &T) -> String {
    ByteFormatter::default().binary(value)
}

/// Hex dump of `value`: lowercase 2-digit groups separated by single spaces
///
/// # Examples
///
/// ```
/// use byte_lens::format::to_hex_string;
/// let value = u32::from_ne_bytes([0x78, 0x56, 0x34, 0x12]);
/// assert_eq!(to_hex_string(&value), "12 34 56 78");
/// ```
#[must_use]
pub fn to_hex_string<T: RawBytes + ?Sized>(value: &T) -> String {
    ByteFormatter::default().hex(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_most_significant_first() {
        let value = u16::from_ne_bytes([0x34, 0x12]);
        assert_eq!(to_hex_string(&value), "12 34");
        assert_eq!(to_binary_string(&value), "00010010 00110100");
    }

    #[test]
    fn zero_padding() {
        assert_eq!(to_hex_string(&5u8), "05");
        assert_eq!(to_binary_string(&5u8), "00000101");
        assert_eq!(to_hex_string(&0u8), "00");
        assert_eq!(to_binary_string(&0u8), "00000000");
    }

    #[test]
    fn single_byte_has_no_separator() {
        assert_eq!(to_hex_string(&0xffu8), "ff");
        assert_eq!(to_binary_string(&0xffu8), "11111111");
    }

    #[test]
    fn end_to_end_u32() {
        let value = u32::from_ne_bytes([0x78, 0x56, 0x34, 0x12]);
        assert_eq!(to_hex_string(&value), "12 34 56 78");
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn little_endian_host_reads_like_a_literal() {
        assert_eq!(to_hex_string(&305_419_896u32), "12 34 56 78");
        assert_eq!(to_hex_string(&0x0102u16), "01 02");
    }

    #[test]
    fn zero_size_is_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(to_hex_string(&empty), "");
        assert_eq!(to_binary_string(&empty), "");
    }

    #[test]
    fn output_lengths() {
        assert_eq!(to_hex_string(&0u64).len(), 3 * 8 - 1);
        assert_eq!(to_binary_string(&0u64).len(), 9 * 8 - 1);
        assert_eq!(to_hex_string(&[0u8; 10]).len(), 3 * 10 - 1);
        assert_eq!(to_binary_string(&0i128).len(), 9 * 16 - 1);
    }

    #[test]
    fn text_buffer_is_dumped_raw() {
        let mut name = [0u8; 4];
        name[0] = b'h';
        name[1] = b'i';
        // highest index first, so the NUL padding leads
        assert_eq!(to_hex_string(&name), "00 00 69 68");
    }

    #[test]
    fn custom_separator_and_case() {
        let value = u32::from_ne_bytes([0xef, 0xbe, 0xad, 0xde]);
        let compact = ByteFormatter::new().with_separator("");
        assert_eq!(compact.hex(&value), "deadbeef");

        let upper = ByteFormatter::new()
            .with_separator(":")
            .with_case(HexCase::Upper);
        assert_eq!(upper.hex(&value), "DE:AD:BE:EF");
        // case only affects hex digits
        assert_eq!(upper.binary(&0x0au8), "00001010");
    }

    #[test]
    fn multichar_separator() {
        let formatter = ByteFormatter::new().with_separator(" | ");
        assert_eq!(formatter.format_bytes(Radix::Hex, &[0x01, 0x02]), "02 | 01");
    }

    #[test]
    fn pure_repeated_calls() {
        let value = 0xdead_beef_u32;
        assert_eq!(to_hex_string(&value), to_hex_string(&value));
        assert_eq!(to_binary_string(&value), to_binary_string(&value));
        assert_eq!(value, 0xdead_beef_u32);
    }

    #[test]
    fn radix_parsing() {
        assert_eq!("hex".parse::<Radix>(), Ok(Radix::Hex));
        assert_eq!("BIN".parse::<Radix>(), Ok(Radix::Binary));
        assert!("octal".parse::<Radix>().is_err());
        assert_eq!(Radix::Hex.to_string(), "hex");
    }
}
