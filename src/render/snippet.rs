/// Number of characters of each context snippet shown on the results page
pub const SNIPPET_PREVIEW_CHARS: usize = 100;

/// Build the display form of a context snippet: its first 100 characters
/// with a trailing ellipsis.
///
/// The ellipsis is appended unconditionally, even when the snippet is
/// already shorter than the cutoff. Truncation counts characters, not
/// bytes, so multi-byte input can never be split mid-sequence. The
/// original snippet is left untouched.
pub fn preview(snippet: &str) -> String {
    let mut out: String = snippet.chars().take(SNIPPET_PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}
