//! Dump the raw bytes of fixed-size values as binary and hexadecimal text.
//!
//! ```
//! use byte_lens::{to_binary_string, to_hex_string};
//!
//! let value = u16::from_ne_bytes([0x34, 0x12]);
//! assert_eq!(to_hex_string(&value), "12 34");
//! assert_eq!(to_binary_string(&5u8), "00000101");
//! ```

pub mod cli;
pub mod config;
pub mod format;
pub mod lanes;
pub mod logger;
pub mod repr;
pub mod sample;
pub mod value;
pub mod version;

pub use format::{ByteFormatter, HexCase, Radix, to_binary_string, to_hex_string};
pub use repr::RawBytes;
pub use value::{Value, ValueError};
