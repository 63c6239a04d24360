use super::{BatchReport, SlideParameters};
use std::fmt::Write as _;
use std::io::{self, Write};

/// `word\tv0\tv1\t…` with three decimals per value, no trailing newline.
pub fn format_row(word: &str, params: &SlideParameters) -> String {
    let mut line = String::with_capacity(word.len() + params.len() * 8);
    line.push_str(word);
    for v in params.values() {
        // String 에 대한 write! 는 실패하지 않음
        let _ = write!(line, "\t{:.3}", v);
    }
    line
}

/// Writes one line per extracted word, in report order.
pub fn write_rows<W: Write>(writer: &mut W, report: &BatchReport) -> io::Result<()> {
    for (word, params) in &report.rows {
        writeln!(writer, "{}", format_row(word, params))?;
    }
    writer.flush()
}

/// Writes the coverage audit: one `ignoring word <word> (<reason>)` line per
/// skipped word, in input order. Independent of the log filter.
pub fn write_skipped<W: Write>(writer: &mut W, report: &BatchReport) -> io::Result<()> {
    for skipped in &report.skipped {
        writeln!(writer, "ignoring word {} ({})", skipped.word, skipped.reason)?;
    }
    writer.flush()
}
