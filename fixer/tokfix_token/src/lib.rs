//! Tokfix tokens - the lexical unit of source rewriting
//!
//! This crate contains the token-level vocabulary shared by the lexer and the
//! token collection:
//! - [`Token`]: an optional kind plus literal content
//! - [`TokenKind`]: the kinds a token may carry
//! - [`Prototype`]: the raw `(kind, content)` / bare-content shape lexers emit
//! - [`TokenPattern`]: partial-match patterns used by searches
//! - [`WhitespaceOptions`]: what counts as whitespace
//! - [`Lex`]: the tokenizer boundary

mod kind;
mod pattern;
mod whitespace;

pub use kind::TokenKind;
pub use pattern::TokenPattern;
pub use whitespace::{WhitespaceOptions, DEFAULT_WHITESPACE};

use std::fmt;

/// Turns source text into raw token prototypes.
///
/// Implementations must be lossless: concatenating the contents of the
/// returned prototypes reproduces `code`.
pub trait Lex {
    fn lex(&self, code: &str) -> Vec<Prototype>;
}

/// A raw token as produced by a lexer, before it is wrapped into a [`Token`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prototype {
    /// Kind-less token such as `;` or `{`.
    Bare(String),
    Kinded(TokenKind, String),
}

impl Prototype {
    pub fn bare(content: impl Into<String>) -> Self {
        Prototype::Bare(content.into())
    }

    pub fn kinded(kind: TokenKind, content: impl Into<String>) -> Self {
        Prototype::Kinded(kind, content.into())
    }

    #[inline]
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Prototype::Bare(_) => None,
            Prototype::Kinded(kind, _) => Some(*kind),
        }
    }

    #[inline]
    pub fn content(&self) -> &str {
        match self {
            Prototype::Bare(content) | Prototype::Kinded(_, content) => content,
        }
    }
}

/// One lexical unit: an optional kind plus literal content.
///
/// A token with no kind and empty content is the empty token; it is what
/// [`Token::clear`] leaves behind and it serializes to nothing.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: Option<TokenKind>,
    content: String,
}

impl Token {
    /// Create a kinded token.
    #[inline]
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Token {
            kind: Some(kind),
            content: content.into(),
        }
    }

    /// Create a kind-less token.
    #[inline]
    pub fn bare(content: impl Into<String>) -> Self {
        Token {
            kind: None,
            content: content.into(),
        }
    }

    /// Create a `T_WHITESPACE` token.
    #[inline]
    pub fn whitespace(content: impl Into<String>) -> Self {
        Token::new(TokenKind::Whitespace, content)
    }

    /// The empty token.
    #[inline]
    pub fn empty() -> Self {
        Token::default()
    }

    #[inline]
    pub fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content, keeping the kind.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether the token carries a concrete kind.
    #[inline]
    pub fn has_kind(&self) -> bool {
        self.kind.is_some()
    }

    #[inline]
    pub fn is_given_kind(&self, kind: TokenKind) -> bool {
        self.kind == Some(kind)
    }

    #[inline]
    pub fn is_any_kind(&self, kinds: &[TokenKind]) -> bool {
        self.kind.is_some_and(|kind| kinds.contains(&kind))
    }

    /// Whether this is a `class`, `interface` or `trait` keyword.
    #[inline]
    pub fn is_classy(&self) -> bool {
        self.kind.is_some_and(TokenKind::is_classy)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind.is_some_and(TokenKind::is_comment)
    }

    /// Whether this is the empty token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.content.is_empty()
    }

    /// Whether the token is whitespace under `options`.
    ///
    /// Kinded tokens other than `T_WHITESPACE` never are. `T_WHITESPACE` and
    /// kind-less tokens are when their content consists only of characters in
    /// the whitespace set, so the empty token counts as whitespace.
    pub fn is_whitespace(&self, options: &WhitespaceOptions) -> bool {
        if self.kind.is_some_and(|kind| kind != TokenKind::Whitespace) {
            return false;
        }
        options.is_blank(&self.content)
    }

    /// Whether the token matches `pattern`.
    #[inline]
    pub fn matches(&self, pattern: &TokenPattern) -> bool {
        pattern.matches(self)
    }

    /// Whether the token matches any of `patterns`.
    pub fn matches_any(&self, patterns: &[TokenPattern]) -> bool {
        patterns.iter().any(|pattern| pattern.matches(self))
    }

    /// The raw prototype this token would be lexed from.
    pub fn prototype(&self) -> Prototype {
        match self.kind {
            Some(kind) => Prototype::Kinded(kind, self.content.clone()),
            None => Prototype::Bare(self.content.clone()),
        }
    }

    /// Turn the token into the empty token.
    pub fn clear(&mut self) {
        self.kind = None;
        self.content.clear();
    }
}

impl From<Prototype> for Token {
    fn from(prototype: Prototype) -> Self {
        match prototype {
            Prototype::Bare(content) => Token::bare(content),
            Prototype::Kinded(kind, content) => Token::new(kind, content),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{}({:?})", kind.name(), self.content),
            None => write!(f, "{:?}", self.content),
        }
    }
}
