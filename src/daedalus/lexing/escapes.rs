//! String literal escapes
//!
//!     Accepted escapes:
//!         - single characters: `\\ \" \' \/ \n \t \r \a \b \f \v`
//!         - octal: `\N`, `\NN`, `\NNN`
//!         - hex: `\xHH` (exactly two digits)
//!         - unicode: `\uHHHH` (exactly four digits)
//!
//!     A malformed hex/unicode escape or a backslash with nothing after it is invalid. Any
//!     other escaped character is unknown: kept as the character itself, reported as a
//!     warning.

use std::ops::Range as ByteRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeIssueKind {
    Invalid,
    Unknown,
}

/// A problem with one escape sequence. The span is absolute in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeIssue {
    pub kind: EscapeIssueKind,
    pub span: ByteRange<usize>,
    pub sequence: String,
}

enum Escape {
    Char(char),
    Invalid,
    Unknown(char),
}

/// The text between the quotes. The closing quote is only stripped when present.
pub fn string_body(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    if crate::daedalus::token::is_terminated_string(lexeme) {
        &inner[..inner.len() - 1]
    } else {
        inner
    }
}

fn single_char_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '/' => Some('/'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// Reads one escape starting right after the backslash. Returns the escape and the number of
/// bytes it occupies after the backslash.
fn read_escape(rest: &str) -> (Escape, usize) {
    let mut chars = rest.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return (Escape::Invalid, 0),
    };

    if let Some(c) = single_char_escape(first) {
        return (Escape::Char(c), 1);
    }

    match first {
        '0'..='7' => {
            let digits: String = rest.chars().take(3).take_while(|c| c.is_digit(8)).collect();
            let value = u32::from_str_radix(&digits, 8).unwrap_or(0);
            let decoded = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
            (Escape::Char(decoded), digits.len())
        }
        'x' | 'u' => {
            let width = if first == 'x' { 2 } else { 4 };
            let digits: String = rest[1..]
                .chars()
                .take(width)
                .take_while(|c| c.is_ascii_hexdigit())
                .collect();
            if digits.len() < width {
                return (Escape::Invalid, 1 + digits.len());
            }
            let value = u32::from_str_radix(&digits, 16).unwrap_or(0);
            let decoded = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
            (Escape::Char(decoded), 1 + width)
        }
        other => (Escape::Unknown(other), other.len_utf8()),
    }
}

/// Check every escape in a string lexeme. `base` is the lexeme's offset in the source.
pub fn check_escapes(lexeme: &str, base: usize) -> Vec<EscapeIssue> {
    let body = string_body(lexeme);
    let body_base = base + 1;
    let mut issues = Vec::new();
    let mut index = 0;

    while let Some(found) = body[index..].find('\\') {
        let start = index + found;
        let (escape, len) = read_escape(&body[start + 1..]);
        let end = start + 1 + len;
        let kind = match escape {
            Escape::Char(_) => None,
            Escape::Invalid => Some(EscapeIssueKind::Invalid),
            Escape::Unknown(_) => Some(EscapeIssueKind::Unknown),
        };
        if let Some(kind) = kind {
            issues.push(EscapeIssue {
                kind,
                span: body_base + start..body_base + end,
                sequence: body[start..end].to_string(),
            });
        }
        index = end;
    }

    issues
}

/// Decode the value of a string lexeme. Invalid escapes are kept verbatim.
pub fn decode(lexeme: &str) -> String {
    let body = string_body(lexeme);
    let mut value = String::with_capacity(body.len());
    let mut index = 0;

    while let Some(found) = body[index..].find('\\') {
        let start = index + found;
        value.push_str(&body[index..start]);
        let (escape, len) = read_escape(&body[start + 1..]);
        let end = start + 1 + len;
        match escape {
            Escape::Char(c) | Escape::Unknown(c) => value.push(c),
            Escape::Invalid => value.push_str(&body[start..end]),
        }
        index = end;
    }
    value.push_str(&body[index..]);

    value
}
