//! Text rendering for the CLI commands, kept free of I/O so it can be tested

use crate::config::DumpMode;
use crate::format::ByteFormatter;
use crate::lanes::{self, LaneRun};
use crate::repr::RawBytes;
use crate::sample::SampleRecord;
use crate::value::Value;

pub struct CliDumpFormatter;
pub struct CliSampleFormatter;
pub struct CliLanesFormatter;

fn heading(title: &str, width: usize) -> [String; 2] {
    [format!("\x1b[1m{title}\x1b[0m"), "─".repeat(width)]
}

impl CliDumpFormatter {
    /// Format one value: a summary line followed by one line per requested radix
    #[must_use]
    pub fn format_value(value: &Value, mode: DumpMode, formatter: &ByteFormatter) -> String {
        let size = value.byte_len();
        let unit = if size == 1 { "byte" } else { "bytes" };
        let mut lines = vec![format!("{}:{value} ({size} {unit})", value.type_name())];
        for &radix in mode.radixes() {
            lines.push(format!("  {radix}: {}", formatter.format(radix, value)));
        }
        lines.join("\n")
    }

    #[must_use]
    pub fn format_values(values: &[Value], mode: DumpMode, formatter: &ByteFormatter) -> String {
        values
            .iter()
            .map(|value| Self::format_value(value, mode, formatter))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CliSampleFormatter {
    /// Dump `record` held on the stack, then an identical copy held in a `Box`
    #[must_use]
    pub fn format_samples(record: &SampleRecord, formatter: &ByteFormatter) -> String {
        let on_stack = record.clone();
        let on_heap = Box::new(record.clone());

        let mut lines = Vec::new();
        lines.extend(heading("RECORD ON STACK", 50));
        lines.extend(on_stack.dump_lines(formatter));
        lines.push(String::new());
        lines.extend(heading("RECORD ON HEAP", 50));
        lines.extend(on_heap.dump_lines(formatter));
        lines.join("\n")
    }
}

impl CliLanesFormatter {
    fn format_run(label: &str, run: &LaneRun) -> String {
        let status = if run.truncated {
            " (stopped at cap)"
        } else {
            ""
        };
        format!(
            "{label}: bound {}, ran {} iterations{status}, s : {:.6}",
            run.bound, run.iterations, run.sum
        )
    }

    /// Compare the wrapped and the checked loop bound for `count` lanes
    #[must_use]
    pub fn format_lanes(count: i32, cap: usize) -> String {
        let wrapped = lanes::run_lanes(lanes::wrapped_bound(count), cap);
        let checked = lanes::run_lanes(lanes::checked_bound(count), cap);

        let mut lines = Vec::new();
        lines.extend(heading(&format!("LANE LOOP (count = {count})"), 40));
        lines.push(Self::format_run("unchecked", &wrapped));
        lines.push(Self::format_run("checked", &checked));
        if wrapped.bound != checked.bound {
            lines.push(format!(
                "count - 1 = {} wraps to {} as an unsigned index",
                i64::from(count) - 1,
                wrapped.bound
            ));
        }
        lines.join("\n")
    }
}
