//! Word normalization
//!
//! A raw word is lowercased and reduced to the first maximal run of
//! characters in `[a-z-]` it contains. Words without such a run produce no
//! token. Runs after the first one in the same word are ignored, so
//! `"end.start"` yields only `"end"`.

/// Characters that may appear in a token
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '-'
}

/// Normalize a single whitespace-delimited word into a token
///
/// # Examples
///
/// ```
/// use corpus_stats::count::tokenizer::normalize_word;
///
/// assert_eq!(normalize_word("Hello,").as_deref(), Some("hello"));
/// assert_eq!(normalize_word("foo123bar").as_deref(), Some("foo"));
/// assert_eq!(normalize_word("3.14"), None);
/// ```
pub fn normalize_word(word: &str) -> Option<String> {
    let lowered = word.to_lowercase();
    let start = lowered.find(is_token_char)?;
    let rest = &lowered[start..];
    let end = rest.find(|c: char| !is_token_char(c)).unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

/// Word separators: Unicode whitespace plus the ASCII information
/// separators `\x1c`..=`\x1f`
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Iterate over the tokens of `text`, in the order the words appear
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .filter_map(normalize_word)
}
