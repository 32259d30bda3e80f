//! Per-file counting
//!
//! Everything here is a pure function of a file's path and contents, safe to
//! run on any worker thread without coordination.

pub mod lines;
pub mod tokenizer;
pub mod words;

pub use lines::{count_lines, count_lines_in_file};
pub use tokenizer::{normalize_word, tokens};
pub use words::{count_words, count_words_in_file};

use crate::error::{Error, Result};
use std::path::Path;

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::read_failure(path, e))
}
