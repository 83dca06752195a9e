//! Option and positional-parameter extraction.
//!
//! Walks the token sequence produced by the tokenizer and sorts it into two
//! piles: tokens matching one of the command's registered options (by flag
//! spelling) mark that option detected, everything else is collected in
//! order as positional parameter values.

use crate::command::Command;

/// Prefix that marks a token as a flag on the wire.
pub const OPTION_MARKER: char = '-';

/// Match `tokens` against the command's registered options and return the
/// remaining tokens as positional parameter values, in order.
///
/// A token spelled `-name` where `name` is a registered option sets that
/// option's `detected` flag; when the option carries a value the following
/// token is consumed as it (a trailing flag with no token left keeps its
/// previous value). A flag-shaped token that matches no registered option is
/// NOT an error: it falls through and is collected as positional data.
pub fn parse_arguments(command: &mut Command, tokens: &[String]) -> Vec<String> {
    let mut positionals = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(flag) = token.strip_prefix(OPTION_MARKER) {
            if let Some(option) = command.option_mut(flag) {
                option.detected = true;
                if option.has_value {
                    i += 1;
                    if let Some(value) = tokens.get(i) {
                        option.value = value.clone();
                    }
                }
                i += 1;
                continue;
            }
        }

        positionals.push(token.clone());
        i += 1;
    }

    positionals
}
