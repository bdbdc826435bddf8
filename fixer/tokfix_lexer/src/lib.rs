//! Lossless PHP lexer built on logos.
//!
//! Produces [`Prototype`]s for the token collection. Every byte of the input
//! ends up in exactly one prototype, so concatenating their contents
//! reproduces the source. Input logos cannot classify becomes bare tokens
//! rather than an error.
//!
//! Text outside `<?php ... ?>` is emitted as `T_INLINE_HTML`.

mod interpolation;
mod keywords;

use logos::Logos;
use tokfix_token::{Lex, Prototype, TokenKind};

/// Raw token from logos, before keyword resolution and string splitting.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"(//|#)[^\r\n]*")]
    LineComment,

    /// Both `/* */` and `/** */`; doc comments are told apart afterwards.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"\?>(\r\n|\n)?")]
    CloseTag,

    /// Names may contain any non-ASCII character, as PHP accepts bytes
    /// `0x80..=0xff` in names.
    #[regex(r"\$([a-zA-Z_]|[^\x00-\x7F])([a-zA-Z0-9_]|[^\x00-\x7F])*")]
    Variable,

    #[regex(r"([a-zA-Z_]|[^\x00-\x7F])([a-zA-Z0-9_]|[^\x00-\x7F])*")]
    Ident,

    #[regex(r"0[xX][0-9a-fA-F]+|0[bB][01]+|[0-9]+")]
    LNumber,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+(\.[0-9]*)?[eE][+-]?[0-9]+")]
    DNumber,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    SingleQuoted,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleQuoted,

    #[token("\\")]
    NsSeparator,
    #[token("->")]
    ObjectOperator,
    #[token("::")]
    DoubleColon,
    #[token("=>")]
    DoubleArrow,
    #[token("==")]
    IsEqual,
    #[token("===")]
    IsIdentical,
    #[token("!=")]
    #[token("<>")]
    IsNotEqual,
    #[token("!==")]
    IsNotIdentical,
    #[token("<=")]
    IsSmallerOrEqual,
    #[token(">=")]
    IsGreaterOrEqual,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("&&")]
    BooleanAnd,
    #[token("||")]
    BooleanOr,
    #[token("??")]
    Coalesce,
    #[token(".=")]
    ConcatEqual,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    MulEqual,
    #[token("/=")]
    DivEqual,
    #[token("...")]
    Ellipsis,
    #[token("<<")]
    Sl,
    #[token(">>")]
    Sr,

    /// Single-character punctuation; lexes as a kind-less token.
    #[regex(r#"[{}()\[\];,=.+\-*/!?:<>&|^%@~$`"']"#)]
    Punct,
}

/// Lexer for PHP source.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhpLexer;

impl PhpLexer {
    pub fn new() -> Self {
        PhpLexer
    }
}

impl Lex for PhpLexer {
    fn lex(&self, code: &str) -> Vec<Prototype> {
        let mut out = Vec::new();
        let mut rest = code;

        while !rest.is_empty() {
            let Some(open) = find_open_tag(rest) else {
                out.push(Prototype::kinded(TokenKind::InlineHtml, rest));
                break;
            };
            if open.start > 0 {
                out.push(Prototype::kinded(
                    TokenKind::InlineHtml,
                    &rest[..open.start],
                ));
            }
            out.push(Prototype::kinded(open.kind, &rest[open.start..open.end]));
            rest = &rest[open.end..];

            let consumed = lex_php(rest, &mut out);
            rest = &rest[consumed..];
        }

        out
    }
}

/// Location of an opening tag inside inline HTML.
struct OpenTag {
    start: usize,
    end: usize,
    kind: TokenKind,
}

/// Find the next `<?php` or `<?=` tag.
///
/// `<?php` must be followed by a single whitespace character (which belongs
/// to the tag) or the end of input. Short `<?` tags are not recognized.
fn find_open_tag(html: &str) -> Option<OpenTag> {
    let bytes = html.as_bytes();
    let mut from = 0;

    while let Some(pos) = memchr::memmem::find(&bytes[from..], b"<?") {
        let start = from + pos;
        let after = &bytes[start + 2..];

        if after.first() == Some(&b'=') {
            return Some(OpenTag {
                start,
                end: start + 3,
                kind: TokenKind::OpenTagWithEcho,
            });
        }

        if after.len() >= 3 && after[..3].eq_ignore_ascii_case(b"php") {
            let trailing = match &after[3..] {
                [b'\r', b'\n', ..] => Some(2),
                [b' ' | b'\t' | b'\r' | b'\n', ..] => Some(1),
                [] => Some(0),
                _ => None,
            };
            if let Some(trailing) = trailing {
                return Some(OpenTag {
                    start,
                    end: start + 5 + trailing,
                    kind: TokenKind::OpenTag,
                });
            }
        }

        from = start + 2;
    }

    None
}

/// Length of a close tag at the start of `text`, including one newline.
fn close_tag_len(text: &str) -> usize {
    let tail = &text.as_bytes()[2..];
    match tail {
        [b'\r', b'\n', ..] => 4,
        [b'\n', ..] => 3,
        _ => 2,
    }
}

/// Lex PHP code until a close tag or the end of `src`.
///
/// Returns the number of bytes consumed, close tag included.
pub(crate) fn lex_php(src: &str, out: &mut Vec<Prototype>) -> usize {
    let mut lexer = RawToken::lexer(src);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let Ok(raw) = result else {
            out.push(Prototype::bare(slice));
            continue;
        };

        match raw {
            RawToken::CloseTag => {
                out.push(Prototype::kinded(TokenKind::CloseTag, slice));
                return span.end;
            }
            RawToken::LineComment => {
                // A line comment ends before `?>`.
                if let Some(close) = slice.find("?>") {
                    if close > 0 {
                        out.push(Prototype::kinded(TokenKind::Comment, &slice[..close]));
                    }
                    let tag_start = span.start + close;
                    let tag_end = tag_start + close_tag_len(&src[tag_start..]);
                    out.push(Prototype::kinded(
                        TokenKind::CloseTag,
                        &src[tag_start..tag_end],
                    ));
                    return tag_end;
                }
                out.push(Prototype::kinded(TokenKind::Comment, slice));
            }
            RawToken::BlockComment => {
                let kind = if is_doc_comment(slice) {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                };
                out.push(Prototype::kinded(kind, slice));
            }
            RawToken::Ident => match keywords::lookup(slice) {
                Some(kind) => out.push(Prototype::kinded(kind, slice)),
                None => out.push(Prototype::kinded(TokenKind::String, slice)),
            },
            RawToken::DoubleQuoted => interpolation::push_double_quoted(slice, out),
            other => match other.kind() {
                Some(kind) => out.push(Prototype::kinded(kind, slice)),
                None => out.push(Prototype::bare(slice)),
            },
        }
    }

    src.len()
}

/// `/**` followed by whitespace opens a doc comment; `/**/` does not.
fn is_doc_comment(comment: &str) -> bool {
    comment.len() > 4
        && comment.starts_with("/**")
        && comment.as_bytes()[3].is_ascii_whitespace()
}

impl RawToken {
    /// The kind of a raw token that maps to exactly one kind.
    ///
    /// `None` for punctuation, and for the tokens [`lex_php`] resolves itself
    /// (comments, close tags, identifiers, double-quoted strings).
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Variable => TokenKind::Variable,
            RawToken::LNumber => TokenKind::LNumber,
            RawToken::DNumber => TokenKind::DNumber,
            RawToken::SingleQuoted => TokenKind::ConstantEncapsedString,
            RawToken::NsSeparator => TokenKind::NsSeparator,
            RawToken::ObjectOperator => TokenKind::ObjectOperator,
            RawToken::DoubleColon => TokenKind::DoubleColon,
            RawToken::DoubleArrow => TokenKind::DoubleArrow,
            RawToken::IsEqual => TokenKind::IsEqual,
            RawToken::IsIdentical => TokenKind::IsIdentical,
            RawToken::IsNotEqual => TokenKind::IsNotEqual,
            RawToken::IsNotIdentical => TokenKind::IsNotIdentical,
            RawToken::IsSmallerOrEqual => TokenKind::IsSmallerOrEqual,
            RawToken::IsGreaterOrEqual => TokenKind::IsGreaterOrEqual,
            RawToken::Inc => TokenKind::Inc,
            RawToken::Dec => TokenKind::Dec,
            RawToken::BooleanAnd => TokenKind::BooleanAnd,
            RawToken::BooleanOr => TokenKind::BooleanOr,
            RawToken::Coalesce => TokenKind::Coalesce,
            RawToken::ConcatEqual => TokenKind::ConcatEqual,
            RawToken::PlusEqual => TokenKind::PlusEqual,
            RawToken::MinusEqual => TokenKind::MinusEqual,
            RawToken::MulEqual => TokenKind::MulEqual,
            RawToken::DivEqual => TokenKind::DivEqual,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::Sl => TokenKind::Sl,
            RawToken::Sr => TokenKind::Sr,
            RawToken::LineComment
            | RawToken::BlockComment
            | RawToken::CloseTag
            | RawToken::Ident
            | RawToken::DoubleQuoted
            | RawToken::Punct => return None,
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests;
