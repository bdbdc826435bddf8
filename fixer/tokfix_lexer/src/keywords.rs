//! Keyword resolution.
//!
//! PHP keywords are case-insensitive: `FUNCTION`, `Function` and `function`
//! all lex as `T_FUNCTION`. The identifier is lowercased into a stack buffer
//! and matched in length buckets (keywords range from 2-10 chars).

use tokfix_token::TokenKind;

const MAX_KEYWORD_LEN: usize = 10;

/// Look up a keyword by identifier text.
///
/// Returns `None` for plain identifiers, which lex as `T_STRING`.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=MAX_KEYWORD_LEN).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    buf[..len].copy_from_slice(bytes);
    buf.make_ascii_lowercase();
    let lower = std::str::from_utf8(&buf[..len]).ok()?;

    match len {
        2 => match lower {
            "as" => Some(TokenKind::As),
            "do" => Some(TokenKind::Do),
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match lower {
            "for" => Some(TokenKind::For),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "use" => Some(TokenKind::Use),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match lower {
            "case" => Some(TokenKind::Case),
            "echo" => Some(TokenKind::Echo),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match lower {
            "array" => Some(TokenKind::Array),
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "clone" => Some(TokenKind::Clone),
            "const" => Some(TokenKind::Const),
            "final" => Some(TokenKind::Final),
            "throw" => Some(TokenKind::Throw),
            "trait" => Some(TokenKind::Trait),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match lower {
            "elseif" => Some(TokenKind::ElseIf),
            "global" => Some(TokenKind::Global),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match lower {
            "declare" => Some(TokenKind::Declare),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "foreach" => Some(TokenKind::Foreach),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match lower {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        9 => match lower {
            "interface" => Some(TokenKind::Interface),
            "namespace" => Some(TokenKind::Namespace),
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        10 => match lower {
            "implements" => Some(TokenKind::Implements),
            "instanceof" => Some(TokenKind::Instanceof),
            _ => None,
        },
        _ => None,
    }
}
