//! Plain-text reports
//!
//! Output formats:
//!
//! ```text
//! <token> == <count>
//! <path> has <count> lines
//! The total number of lines is <total>.
//! ```

use crate::aggregate::FrequencyMap;
use crate::error::Result;
use crate::pipeline::LineReport;
use std::io::Write;

/// Write one `<token> == <count>` line per token whose count is strictly
/// greater than `threshold`, in ascending token order
pub fn write_word_report<W: Write>(
    out: &mut W,
    counts: &FrequencyMap,
    threshold: u64,
) -> Result<()> {
    for (token, count) in counts.above_threshold(threshold) {
        writeln!(out, "{token} == {count}")?;
    }
    Ok(())
}

/// Write one line per file followed by the total
pub fn write_line_report<W: Write>(out: &mut W, report: &LineReport) -> Result<()> {
    for (path, count) in &report.files {
        writeln!(out, "{} has {} lines", path.display(), count)?;
    }
    writeln!(out, "The total number of lines is {}.", report.total)?;
    Ok(())
}
