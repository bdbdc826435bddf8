//! Splitting of double-quoted strings with interpolation.
//!
//! A double-quoted string without interpolation stays one
//! `T_CONSTANT_ENCAPSED_STRING`. Otherwise it becomes:
//!
//! ```text
//! "  literal  $var  {$expr}  ${name}  "
//! ^  ^        ^     ^     ^  ^     ^  ^
//! |  |        |     |     |  |     |  bare `"`
//! |  |        |     |     |  |     T_STRING_VARNAME, then bare `}`
//! |  |        |     |     |  T_DOLLAR_OPEN_CURLY_BRACES
//! |  |        |     |     bare `}`
//! |  |        |     T_CURLY_OPEN, then the expression lexed as PHP
//! |  |        T_VARIABLE
//! |  T_ENCAPSED_AND_WHITESPACE
//! bare `"`
//! ```

use tokfix_token::{Prototype, TokenKind};

/// Push the prototypes for a complete double-quoted string literal.
pub(crate) fn push_double_quoted(literal: &str, out: &mut Vec<Prototype>) {
    let body = &literal[1..literal.len() - 1];
    let parts = split_body(body);

    let interpolated = parts
        .iter()
        .any(|part| part.kind() != Some(TokenKind::EncapsedAndWhitespace));
    if !interpolated {
        out.push(Prototype::kinded(TokenKind::ConstantEncapsedString, literal));
        return;
    }

    out.push(Prototype::bare("\""));
    out.extend(parts);
    out.push(Prototype::bare("\""));
}

fn split_body(body: &str) -> Vec<Prototype> {
    let bytes = body.as_bytes();
    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                let escaped = body
                    .get(i + 1..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(0, char::len_utf8);
                i += 1 + escaped;
            }
            b'$' if bytes.get(i + 1).is_some_and(|&b| is_name_start(b)) => {
                push_literal(body, literal_start, i, &mut parts);
                let end = name_end(bytes, i + 1);
                parts.push(Prototype::kinded(TokenKind::Variable, &body[i..end]));
                i = end;
                literal_start = i;
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                let Some(close) = matching_brace(bytes, i + 1) else {
                    i += 1;
                    continue;
                };
                push_literal(body, literal_start, i, &mut parts);
                parts.push(Prototype::kinded(TokenKind::DollarOpenCurlyBraces, "${"));
                let inner = &body[i + 2..close];
                if is_name(inner) {
                    parts.push(Prototype::kinded(TokenKind::StringVarname, inner));
                } else {
                    lex_fragment(inner, &mut parts);
                }
                parts.push(Prototype::bare("}"));
                i = close + 1;
                literal_start = i;
            }
            b'{' if bytes.get(i + 1) == Some(&b'$') => {
                let Some(close) = matching_brace(bytes, i) else {
                    i += 1;
                    continue;
                };
                push_literal(body, literal_start, i, &mut parts);
                parts.push(Prototype::kinded(TokenKind::CurlyOpen, "{"));
                lex_fragment(&body[i + 1..close], &mut parts);
                parts.push(Prototype::bare("}"));
                i = close + 1;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    push_literal(body, literal_start, bytes.len(), &mut parts);
    parts
}

fn push_literal(body: &str, start: usize, end: usize, parts: &mut Vec<Prototype>) {
    if start < end {
        parts.push(Prototype::kinded(
            TokenKind::EncapsedAndWhitespace,
            &body[start..end],
        ));
    }
}

/// Lex an embedded expression as PHP code.
fn lex_fragment(mut code: &str, parts: &mut Vec<Prototype>) {
    while !code.is_empty() {
        let consumed = crate::lex_php(code, parts);
        code = &code[consumed..];
    }
}

/// Index of the `}` closing the `{` at `open`.
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Bytes `0x80..=0xff` are name characters, so multi-byte UTF-8 characters
/// are taken whole.
#[inline]
fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte >= 0x80
}

#[inline]
fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

fn name_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !is_name_continue(b))
        .map_or(bytes.len(), |offset| start + offset)
}

fn is_name(text: &str) -> bool {
    let bytes = text.as_bytes();
    !bytes.is_empty()
        && is_name_start(bytes[0])
        && bytes[1..].iter().all(|&b| is_name_continue(b))
}
