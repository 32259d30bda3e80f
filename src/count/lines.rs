use super::read_text;
use crate::aggregate::LineCount;
use crate::error::Result;
use std::path::Path;

/// Number of newline-separated segments in `text`
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line ending
/// still yields a final empty segment, so `"a\nb\n"` counts as three lines
/// and the empty string counts as one.
pub fn count_lines(text: &str) -> LineCount {
    let mut bytes = text.bytes().peekable();
    let mut separators = 0;
    while let Some(byte) = bytes.next() {
        match byte {
            b'\n' => separators += 1,
            b'\r' => {
                bytes.next_if_eq(&b'\n');
                separators += 1;
            }
            _ => {}
        }
    }
    LineCount(separators + 1)
}

pub fn count_lines_in_file(path: &Path) -> Result<LineCount> {
    Ok(count_lines(&read_text(path)?))
}
