//! Quote-aware argument splitting.
//!
//! Turns the linear argument portion of a frame body into discrete tokens,
//! the same shape a shell would hand to `main()`. Both single and double
//! quotes group interior whitespace into one token; the quote characters
//! themselves are dropped.

/// Separator substituted for quote characters and unquoted spaces before the
/// final split. Never appears in frame bodies (frames are single lines).
const TOKEN_SEPARATOR: char = '\n';

/// Split a linear argument string into tokens on unquoted whitespace.
///
/// Single pass: two boolean flags track whether the cursor is inside a
/// single- or double-quoted span. A quote of one kind inside a span of the
/// other kind is not a toggle (`"it's"` stays one token). Quote characters
/// are replaced, not kept, and empty tokens are discarded.
pub fn split_arguments(command_line: &str) -> Vec<String> {
    let mut chars: Vec<char> = command_line.chars().collect();
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for c in chars.iter_mut() {
        if *c == '"' && !in_single_quote {
            in_double_quote = !in_double_quote;
            *c = TOKEN_SEPARATOR;
        }
        if *c == '\'' && !in_double_quote {
            in_single_quote = !in_single_quote;
            *c = TOKEN_SEPARATOR;
        }
        if !in_single_quote && !in_double_quote && *c == ' ' {
            *c = TOKEN_SEPARATOR;
        }
    }

    chars
        .into_iter()
        .collect::<String>()
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
