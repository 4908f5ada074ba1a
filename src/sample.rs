//! A record with one field of every primitive width, dumped field by field

use crate::format::ByteFormatter;
use crate::repr::RawBytes;
use crate::value::c_text;

pub const NAME_LEN: usize = 10;

/// Sample record. `Default` zeroes every field, including the name buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleRecord {
    pub u8: u8,
    pub i8: i8,
    pub u16: u16,
    pub i16: i16,
    pub u32: u32,
    pub i32: i32,
    pub u64: u64,
    pub i64: i64,
    pub f32: f32,
    pub f64: f64,
    pub name: [u8; NAME_LEN],
}

impl SampleRecord {
    /// Record populated with values whose bytes are easy to recognize
    #[must_use]
    pub fn demo() -> Self {
        let mut name = [0u8; NAME_LEN];
        name[..5].copy_from_slice(b"lanes");
        Self {
            u8: 0xab,
            i8: -1,
            u16: 0x1234,
            i16: -2,
            u32: 0x1234_5678,
            i32: -305_419_896,
            u64: 0x0102_0304_0506_0708,
            i64: i64::MIN,
            f32: 1.0,
            f64: -0.5,
            name,
        }
    }

    /// One `"<field>: <value> [<bytes>]"` line per field, in declaration order
    #[must_use]
    pub fn dump_lines(&self, formatter: &ByteFormatter) -> Vec<String> {
        fn line(
            field: &str,
            shown: impl std::fmt::Display,
            bytes: &dyn RawBytes,
            formatter: &ByteFormatter,
        ) -> String {
            format!("{field}: {shown} [{}]", formatter.hex(bytes))
        }

        vec![
            line("u8", self.u8, &self.u8, formatter),
            line("i8", self.i8, &self.i8, formatter),
            line("u16", self.u16, &self.u16, formatter),
            line("i16", self.i16, &self.i16, formatter),
            line("u32", self.u32, &self.u32, formatter),
            line("i32", self.i32, &self.i32, formatter),
            line("u64", self.u64, &self.u64, formatter),
            line("i64", self.i64, &self.i64, formatter),
            line("f32", self.f32, &self.f32, formatter),
            line("f64", self.f64, &self.f64, formatter),
            line("name", c_text(&self.name), &self.name, formatter),
        ]
    }
}

impl RawBytes for SampleRecord {
    /// Fields concatenated in declaration order, without padding
    fn raw_bytes(&self) -> Vec<u8> {
        let fields: [&dyn RawBytes; 11] = [
            &self.u8, &self.i8, &self.u16, &self.i16, &self.u32, &self.i32, &self.u64, &self.i64,
            &self.f32, &self.f64, &self.name,
        ];
        fields.iter().flat_map(|field| field.raw_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_dumps_zeroes() {
        let lines = SampleRecord::default().dump_lines(&ByteFormatter::default());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "u8: 0 [00]");
        assert_eq!(lines[6], "u64: 0 [00 00 00 00 00 00 00 00]");
        assert_eq!(lines[8], "f32: 0 [00 00 00 00]");
        assert_eq!(lines[10], "name:  [00 00 00 00 00 00 00 00 00 00]");
    }

    #[test]
    fn demo_record_lines() {
        let lines = SampleRecord::demo().dump_lines(&ByteFormatter::default());
        assert_eq!(lines[0], "u8: 171 [ab]");
        assert_eq!(lines[1], "i8: -1 [ff]");
        assert!(lines[10].starts_with("name: lanes ["));
        // the whole buffer is dumped, unset tail first
        assert!(lines[10].ends_with("[00 00 00 00 00 73 65 6e 61 6c]"));
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn demo_record_reads_like_literals_on_little_endian() {
        let lines = SampleRecord::demo().dump_lines(&ByteFormatter::default());
        assert_eq!(lines[2], "u16: 4660 [12 34]");
        assert_eq!(lines[3], "i16: -2 [ff fe]");
        assert_eq!(lines[4], "u32: 305419896 [12 34 56 78]");
        assert_eq!(lines[6], "u64: 72623859790382856 [01 02 03 04 05 06 07 08]");
        assert_eq!(lines[9], "f64: -0.5 [bf e0 00 00 00 00 00 00]");
    }

    #[test]
    fn boxed_and_stack_records_dump_the_same() {
        let formatter = ByteFormatter::default();
        let on_stack = SampleRecord::demo();
        let on_heap = Box::new(SampleRecord::demo());
        assert_eq!(on_stack.dump_lines(&formatter), on_heap.dump_lines(&formatter));
        assert_eq!(on_stack.raw_bytes(), on_heap.raw_bytes());
    }

    #[test]
    fn record_bytes_are_packed_fields() {
        // 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8 + 4 + 8 + 10
        assert_eq!(SampleRecord::default().byte_len(), 52);
    }
}
