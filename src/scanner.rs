use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder substituted for whitespace runs inside string literals.
/// Built from word characters only, so marker-joined string contents fuse
/// into a single token the word sweep cannot match against the word list.
pub const SPACE_MARKER: &str = "__ws0x20__";

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Removes every `/* ... */` block comment, license headers included.
/// Non-greedy, so adjacent comments are removed one at a time and the code
/// between them survives. A `/*` inside a string literal is a known blind
/// spot of this pass.
pub fn strip_block_comments(input: &str) -> String {
    BLOCK_COMMENT.replace_all(input, "").into_owned()
}

/// Single left-to-right scan that rewrites whitespace runs inside
/// double-quoted string literals to [`SPACE_MARKER`].
///
/// A quote toggles string mode unless the immediately preceding character is
/// a backslash. The check is exactly one character deep, so `\\"` does not
/// close a string. Characters outside strings pass through unchanged, the
/// quotes themselves included. A string still open at end of input is
/// dropped along with its buffered content.
pub fn protect_string_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = String::new();
    let mut in_string = false;
    let mut prev: Option<char> = None;

    for c in input.chars() {
        let escaped = prev == Some('\\');
        if c == '"' && !escaped {
            if in_string {
                out.push_str(&WHITESPACE_RUN.replace_all(&buf, SPACE_MARKER));
                out.push('"');
                buf.clear();
            } else {
                out.push('"');
            }
            in_string = !in_string;
        } else if in_string {
            buf.push(c);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Collapses every whitespace run to a single space, trims the ends, then
/// restores each [`SPACE_MARKER`] to one literal space. The collapse must
/// run first: the markers are not whitespace, so intentional spacing inside
/// strings comes back as exactly one space no matter how wide it was.
pub fn normalize_whitespace(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    collapsed.trim().replace(SPACE_MARKER, " ")
}
