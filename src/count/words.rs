use super::{read_text, tokens};
use crate::aggregate::FrequencyMap;
use crate::error::Result;
use std::path::Path;
use tracing::trace;

/// Count token frequencies in `text`
///
/// # Example
/// ```
/// use corpus_stats::count::count_words;
///
/// let counts = count_words("the The the.");
/// assert_eq!(counts.get("the"), 3);
/// assert_eq!(counts.len(), 1);
/// ```
pub fn count_words(text: &str) -> FrequencyMap {
    tokens(text).collect()
}

/// Count token frequencies in the file at `path`
///
/// A file that cannot be read, or is not valid UTF-8, is an error; it is
/// never treated as empty.
pub fn count_words_in_file(path: &Path) -> Result<FrequencyMap> {
    let text = read_text(path)?;
    let counts = count_words(&text);
    trace!(
        "Counted {} tokens ({} distinct) in {}",
        counts.total(),
        counts.len(),
        path.display()
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_case_and_punctuation_fold_together() {
        let counts = count_words("the The the.");
        assert_eq!(counts, FrequencyMap::from_counts([("the", 3)]));
    }

    #[test]
    fn test_words_without_tokens_are_skipped() {
        let counts = count_words("Act 1, Scene 2: 3.14 -- exeunt");
        assert_eq!(
            counts,
            FrequencyMap::from_counts([("act", 1), ("scene", 1), ("--", 1), ("exeunt", 1)])
        );
    }

    #[test]
    fn test_empty_text_is_empty_map() {
        assert!(count_words("").is_empty());
        assert!(count_words(" \n\t ").is_empty());
    }

    #[test]
    fn test_count_words_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("play.txt");
        fs::write(&path, "To be, or not to be:\nthat is the question.\n").unwrap();

        let counts = count_words_in_file(&path).unwrap();

        assert_eq!(counts.get("to"), 2);
        assert_eq!(counts.get("be"), 2);
        assert_eq!(counts.get("question"), 1);
        assert_eq!(counts.total(), 10);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = count_words_in_file(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(Error::ReadFile { .. })));
    }

    #[test]
    fn test_binary_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let result = count_words_in_file(&path);

        assert!(matches!(result, Err(Error::InvalidText { .. })));
    }
}
