//! # corpus-stats
//!
//! Line counts and word frequencies over a directory of text files.
//!
//! ## Usage
//!
//! ```bash
//! corpus-stats lines [DIR]
//! corpus-stats words [DIR] [--threshold N] [--workers N] [--chunk-size N]
//! ```
//!
//! ## Modules
//!
//! - `aggregate` - Frequency maps, line counts and their associative combiners
//! - `config` - Word-count run configuration
//! - `corpus` - Sorted input file sets and directory discovery
//! - `count` - Tokenizer and per-file word and line counters
//! - `pipeline` - Parallel word-frequency driver and sequential line counter
//! - `pool` - Bounded worker pool with batch dispatch
//! - `report` - Plain-text output
pub mod aggregate;
pub mod config;
pub mod corpus;
pub mod count;
pub mod error;
pub mod pipeline;
pub mod pool;
pub mod report;

pub use error::{Error, Result};
