//! POSIX shell-word splitting
//!
//! Splits a free-form string into arguments the way `sh` would before running a
//! command, without performing any expansion:
//! - unquoted space, tab, newline and carriage return separate words
//! - `'...'` keeps everything literally
//! - `"..."` keeps everything literally except `\` before `$`, `` ` ``, `"`, `\`
//!   and newline
//! - an unquoted `\` escapes the next character; `\<newline>` is removed
//!
//! `#` has no special meaning. Malformed input never fails: an unterminated
//! quote runs to the end of the string and a trailing `\` is kept as-is.

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between words
    Blank,
    /// Inside an unquoted part of a word
    Word,
    SingleQuoted,
    DoubleQuoted,
}

/// Split `input` into words using POSIX shell quoting rules
pub fn split(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Distinguishes `""` (an empty word) from no word at all
    let mut in_word = false;
    let mut state = State::Blank;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Blank | State::Word => match c {
                ' ' | '\t' | '\n' | '\r' => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                    state = State::Blank;
                }
                '\'' => {
                    in_word = true;
                    state = State::SingleQuoted;
                }
                '"' => {
                    in_word = true;
                    state = State::DoubleQuoted;
                }
                '\\' => match chars.next() {
                    // Line continuation
                    Some('\n') => {}
                    Some(next) => {
                        current.push(next);
                        in_word = true;
                        state = State::Word;
                    }
                    None => {
                        warn!(input, "trailing backslash in shell words, keeping it literally");
                        current.push('\\');
                        in_word = true;
                    }
                },
                c => {
                    current.push(c);
                    in_word = true;
                    state = State::Word;
                }
            },
            State::SingleQuoted => match c {
                '\'' => state = State::Word,
                c => current.push(c),
            },
            State::DoubleQuoted => match c {
                '"' => state = State::Word,
                '\\' => match chars.peek() {
                    Some('\n') => {
                        chars.next();
                    }
                    Some(&next @ ('$' | '`' | '"' | '\\')) => {
                        chars.next();
                        current.push(next);
                    }
                    _ => current.push('\\'),
                },
                c => current.push(c),
            },
        }
    }

    if matches!(state, State::SingleQuoted | State::DoubleQuoted) {
        warn!(input, "unterminated quote in shell words, closing it at end of input");
    }
    if in_word {
        words.push(current);
    }

    words
}
