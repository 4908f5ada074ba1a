//! Typed value literals such as `u32:0x12345678`, `f64:-2.5` or `str10:hello`

use crate::repr::RawBytes;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{alpha1, char, digit0},
    combinator::{all_consuming, map, opt, rest, success, value},
    sequence::{pair, separated_pair},
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("Expected TYPE:LITERAL, got '{0}'")]
    Syntax(String),

    #[error("Unknown value type: {0}")]
    UnknownType(String),

    #[error("Invalid {ty} literal: '{literal}'")]
    InvalidLiteral { ty: String, literal: String },

    #[error("Literal '{literal}' does not fit in {ty}")]
    OutOfRange { ty: String, literal: String },

    #[error("Text of {len} bytes does not fit in a {capacity}-byte buffer")]
    TextTooLong { capacity: usize, len: usize },

    #[error("Text buffer of {capacity} bytes exceeds the {max}-byte limit")]
    CapacityTooLarge { capacity: String, max: usize },
}

/// Largest `strN` buffer accepted
pub const MAX_TEXT_LEN: usize = 4096;

/// A fixed-size value parsed from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    /// Zero-filled text buffer of fixed capacity
    Text(Vec<u8>),
}

impl Value {
    /// Type tag as accepted by the parser
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::U8(_) => "u8".to_string(),
            Self::U16(_) => "u16".to_string(),
            Self::U32(_) => "u32".to_string(),
            Self::U64(_) => "u64".to_string(),
            Self::U128(_) => "u128".to_string(),
            Self::I8(_) => "i8".to_string(),
            Self::I16(_) => "i16".to_string(),
            Self::I32(_) => "i32".to_string(),
            Self::I64(_) => "i64".to_string(),
            Self::I128(_) => "i128".to_string(),
            Self::F32(_) => "f32".to_string(),
            Self::F64(_) => "f64".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::Char(_) => "char".to_string(),
            Self::Text(buf) => format!("str{}", buf.len()),
        }
    }

    /// Build an N-byte text buffer holding `text`, zero-filled after it
    pub fn text(capacity: usize, text: &str) -> Result<Self, ValueError> {
        if capacity > MAX_TEXT_LEN {
            return Err(ValueError::CapacityTooLarge {
                capacity: capacity.to_string(),
                max: MAX_TEXT_LEN,
            });
        }
        let bytes = text.as_bytes();
        if bytes.len() > capacity {
            return Err(ValueError::TextTooLong {
                capacity,
                len: bytes.len(),
            });
        }
        let mut buf = vec![0u8; capacity];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::Text(buf))
    }
}

impl RawBytes for Value {
    fn raw_bytes(&self) -> Vec<u8> {
        match self {
            Self::U8(v) => v.raw_bytes(),
            Self::U16(v) => v.raw_bytes(),
            Self::U32(v) => v.raw_bytes(),
            Self::U64(v) => v.raw_bytes(),
            Self::U128(v) => v.raw_bytes(),
            Self::I8(v) => v.raw_bytes(),
            Self::I16(v) => v.raw_bytes(),
            Self::I32(v) => v.raw_bytes(),
            Self::I64(v) => v.raw_bytes(),
            Self::I128(v) => v.raw_bytes(),
            Self::F32(v) => v.raw_bytes(),
            Self::F64(v) => v.raw_bytes(),
            Self::Bool(v) => v.raw_bytes(),
            Self::Char(v) => v.raw_bytes(),
            Self::Text(buf) => buf.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::U128(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::I128(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Text(buf) => write!(f, "{:?}", c_text(buf)),
        }
    }
}

/// Text of a NUL-terminated buffer, up to the first NUL
#[must_use]
pub fn c_text(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// `TYPE:LITERAL`, the type split into its letters and its width digits
fn value_spec(input: &str) -> IResult<&str, ((&str, &str), &str)> {
    separated_pair(pair(alpha1, digit0), char(':'), rest).parse(input)
}

/// Integer literal: optional sign, optional radix prefix, digits with `_`
fn int_literal(input: &str) -> IResult<&str, (bool, u32, &str)> {
    all_consuming((
        map(opt(char('-')), |sign| sign.is_some()),
        alt((
            value(16, tag_no_case("0x")),
            value(2, tag_no_case("0b")),
            value(8, tag_no_case("0o")),
            success(10),
        )),
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

struct Literal<'a> {
    ty: &'a str,
    text: &'a str,
}

impl Literal<'_> {
    fn invalid(&self) -> ValueError {
        ValueError::InvalidLiteral {
            ty: self.ty.to_string(),
            literal: self.text.to_string(),
        }
    }

    fn out_of_range(&self) -> ValueError {
        ValueError::OutOfRange {
            ty: self.ty.to_string(),
            literal: self.text.to_string(),
        }
    }

    /// Sign and magnitude of an integer literal
    fn magnitude(&self) -> Result<(bool, u128), ValueError> {
        let (_, (negative, radix, digits)) = int_literal(self.text).map_err(|_| self.invalid())?;
        let digits: String = digits.chars().filter(|&c| c != '_').collect();
        if digits.is_empty() {
            return Err(self.invalid());
        }
        let magnitude = u128::from_str_radix(&digits, radix).map_err(|e| {
            if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) {
                self.out_of_range()
            } else {
                self.invalid()
            }
        })?;
        Ok((negative, magnitude))
    }

    fn unsigned<T: TryFrom<u128>>(&self) -> Result<T, ValueError> {
        match self.magnitude()? {
            (true, magnitude) if magnitude != 0 => Err(self.out_of_range()),
            (_, magnitude) => T::try_from(magnitude).map_err(|_| self.out_of_range()),
        }
    }

    fn signed<T: TryFrom<i128>>(&self) -> Result<T, ValueError> {
        let (negative, magnitude) = self.magnitude()?;
        let wide = if negative {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
        .ok_or_else(|| self.out_of_range())?;
        T::try_from(wide).map_err(|_| self.out_of_range())
    }

    /// Overflow to infinity is rejected; `inf` and `nan` spelled out are kept
    fn float<T: FromStr + Copy + Into<f64>>(&self) -> Result<T, ValueError> {
        let parsed: T = self.text.parse().map_err(|_| self.invalid())?;
        let spelled = self.text.trim_start_matches(['-', '+']).to_ascii_lowercase();
        let explicit = matches!(spelled.as_str(), "inf" | "infinity" | "nan");
        let wide: f64 = parsed.into();
        if !wide.is_finite() && !explicit {
            return Err(self.out_of_range());
        }
        Ok(parsed)
    }

    fn boolean(&self) -> Result<bool, ValueError> {
        match self.text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(self.invalid()),
        }
    }

    fn character(&self) -> Result<char, ValueError> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.invalid()),
        }
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, ((letters, width), text)) =
            value_spec(s).map_err(|_| ValueError::Syntax(s.to_string()))?;
        let ty = &s[..letters.len() + width.len()];
        let literal = Literal { ty, text };

        match (letters.to_ascii_lowercase().as_str(), width) {
            ("u", "8") => literal.unsigned().map(Self::U8),
            ("u", "16") => literal.unsigned().map(Self::U16),
            ("u", "32") => literal.unsigned().map(Self::U32),
            ("u", "64") => literal.unsigned().map(Self::U64),
            ("u", "128") => literal.unsigned().map(Self::U128),
            ("i", "8") => literal.signed().map(Self::I8),
            ("i", "16") => literal.signed().map(Self::I16),
            ("i", "32") => literal.signed().map(Self::I32),
            ("i", "64") => literal.signed().map(Self::I64),
            ("i", "128") => literal.signed().map(Self::I128),
            ("f", "32") => literal.float().map(Self::F32),
            ("f", "64") => literal.float().map(Self::F64),
            ("bool", "") => literal.boolean().map(Self::Bool),
            ("char", "") => literal.character().map(Self::Char),
            ("str", capacity) if !capacity.is_empty() => {
                // only digits reach here, so a parse failure means overflow
                let capacity = capacity
                    .parse()
                    .map_err(|_| ValueError::CapacityTooLarge {
                        capacity: capacity.to_string(),
                        max: MAX_TEXT_LEN,
                    })?;
                Self::text(capacity, text)
            }
            _ => Err(ValueError::UnknownType(ty.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::to_hex_string;

    #[test]
    fn parse_integers_in_every_radix() {
        assert_eq!("u32:305419896".parse(), Ok(Value::U32(0x1234_5678)));
        assert_eq!("u32:0x12345678".parse(), Ok(Value::U32(0x1234_5678)));
        assert_eq!("u8:0b1010".parse(), Ok(Value::U8(10)));
        assert_eq!("u16:0o777".parse(), Ok(Value::U16(0o777)));
        assert_eq!("u64:1_000_000".parse(), Ok(Value::U64(1_000_000)));
        assert_eq!("U16:0XFF".parse(), Ok(Value::U16(255)));
    }

    #[test]
    fn parse_signed_bounds() {
        assert_eq!("i8:-128".parse(), Ok(Value::I8(i8::MIN)));
        assert_eq!("i8:127".parse(), Ok(Value::I8(i8::MAX)));
        assert_eq!("i16:-0x8000".parse(), Ok(Value::I16(i16::MIN)));
        assert_eq!(
            "i128:-170141183460469231731687303715884105728".parse(),
            Ok(Value::I128(i128::MIN))
        );
    }

    #[test]
    fn reject_out_of_range() {
        assert!(matches!(
            "u8:256".parse::<Value>(),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            "i8:-129".parse::<Value>(),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            "u16:-1".parse::<Value>(),
            Err(ValueError::OutOfRange { .. })
        ));
        assert_eq!("u16:-0".parse(), Ok(Value::U16(0)));
    }

    #[test]
    fn reject_malformed_input() {
        assert!(matches!(
            "12345".parse::<Value>(),
            Err(ValueError::Syntax(_))
        ));
        assert!(matches!(
            "u24:1".parse::<Value>(),
            Err(ValueError::UnknownType(_))
        ));
        assert!(matches!(
            "u32:12z".parse::<Value>(),
            Err(ValueError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            "u32:".parse::<Value>(),
            Err(ValueError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            "char:ab".parse::<Value>(),
            Err(ValueError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn parse_floats_bools_chars() {
        assert_eq!("f32:1.5".parse(), Ok(Value::F32(1.5)));
        assert_eq!("f64:-2".parse(), Ok(Value::F64(-2.0)));
        assert_eq!("bool:true".parse(), Ok(Value::Bool(true)));
        assert_eq!("bool:0".parse(), Ok(Value::Bool(false)));
        assert_eq!("char:A".parse(), Ok(Value::Char('A')));
    }

    #[test]
    fn text_buffers_are_zero_filled() {
        let value: Value = "str6:hi".parse().unwrap();
        assert_eq!(value.raw_bytes(), b"hi\0\0\0\0".to_vec());
        assert_eq!(value.type_name(), "str6");
        assert_eq!(value.to_string(), "\"hi\"");
        assert_eq!(to_hex_string(&value), "00 00 00 00 69 68");
    }

    #[test]
    fn text_may_contain_colons() {
        let value: Value = "str8:a:b".parse().unwrap();
        assert_eq!(&value.raw_bytes()[..3], b"a:b");
    }

    #[test]
    fn text_too_long() {
        assert_eq!(
            "str2:abc".parse::<Value>(),
            Err(ValueError::TextTooLong {
                capacity: 2,
                len: 3
            })
        );
    }

    #[test]
    fn oversized_text_buffer_is_rejected() {
        assert_eq!(
            "str18446744073709551615:".parse::<Value>(),
            Err(ValueError::CapacityTooLarge {
                capacity: "18446744073709551615".to_string(),
                max: MAX_TEXT_LEN,
            })
        );
        assert!(matches!(
            "str99999999999999999999999:x".parse::<Value>(),
            Err(ValueError::CapacityTooLarge { .. })
        ));
        assert!(matches!(
            "str4097:".parse::<Value>(),
            Err(ValueError::CapacityTooLarge { .. })
        ));
        let largest = format!("str{MAX_TEXT_LEN}:x");
        assert_eq!(largest.parse::<Value>().unwrap().byte_len(), MAX_TEXT_LEN);
    }

    #[test]
    fn overflowing_floats_are_out_of_range() {
        assert!(matches!(
            "f32:1e50".parse::<Value>(),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            "f64:-1e400".parse::<Value>(),
            Err(ValueError::OutOfRange { .. })
        ));
        assert_eq!("f32:1e38".parse(), Ok(Value::F32(1e38)));
        assert_eq!("f32:-inf".parse(), Ok(Value::F32(f32::NEG_INFINITY)));
        assert!(matches!("f64:NaN".parse::<Value>(), Ok(Value::F64(v)) if v.is_nan()));
    }

    #[test]
    fn zero_capacity_text_is_empty() {
        let value: Value = "str0:".parse().unwrap();
        assert_eq!(value.byte_len(), 0);
        assert_eq!(to_hex_string(&value), "");
    }

    #[test]
    fn value_bytes_match_native_types() {
        let value: Value = "i32:-2".parse().unwrap();
        assert_eq!(value.raw_bytes(), (-2i32).to_ne_bytes().to_vec());
        assert_eq!(value.to_string(), "-2");
        assert_eq!(value.type_name(), "i32");
    }

    #[test]
    fn c_text_stops_at_nul() {
        assert_eq!(c_text(b"abc\0def"), "abc");
        assert_eq!(c_text(b"abc"), "abc");
        assert_eq!(c_text(b"\0abc"), "");
    }
}
