//! Partial-match patterns over tokens.

use super::{Token, TokenKind};

/// A pattern a [`Token`] can be compared against.
///
/// A `Content` pattern only matches kind-less tokens, by exact content. A
/// `Kind` pattern only matches kinded tokens: the kind must be equal and, if
/// the pattern names a content, the content must be equal too.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenPattern {
    Content(String),
    Kind {
        kind: TokenKind,
        content: Option<String>,
        ignore_case: bool,
    },
}

impl TokenPattern {
    /// Matches a kind-less token with exactly this content.
    pub fn content(content: impl Into<String>) -> Self {
        TokenPattern::Content(content.into())
    }

    /// Matches any token of `kind`.
    pub fn kind(kind: TokenKind) -> Self {
        TokenPattern::Kind {
            kind,
            content: None,
            ignore_case: false,
        }
    }

    /// Matches a token of `kind` whose content is `content`.
    pub fn kind_content(kind: TokenKind, content: impl Into<String>) -> Self {
        TokenPattern::Kind {
            kind,
            content: Some(content.into()),
            ignore_case: false,
        }
    }

    /// Compare the content of a kinded pattern ASCII case-insensitively.
    ///
    /// Bare content patterns are always compared exactly.
    #[must_use]
    pub fn ignore_case(self) -> Self {
        match self {
            TokenPattern::Kind { kind, content, .. } => TokenPattern::Kind {
                kind,
                content,
                ignore_case: true,
            },
            bare @ TokenPattern::Content(_) => bare,
        }
    }

    /// Whether `token` matches this pattern.
    pub fn matches(&self, token: &Token) -> bool {
        match (self, token.kind()) {
            (TokenPattern::Content(content), None) => token.content() == content,
            (
                TokenPattern::Kind {
                    kind,
                    content,
                    ignore_case,
                },
                Some(token_kind),
            ) => {
                if *kind != token_kind {
                    return false;
                }
                match content {
                    None => true,
                    Some(content) if *ignore_case => {
                        token.content().eq_ignore_ascii_case(content)
                    }
                    Some(content) => token.content() == content,
                }
            }
            _ => false,
        }
    }
}

impl From<TokenKind> for TokenPattern {
    fn from(kind: TokenKind) -> Self {
        TokenPattern::kind(kind)
    }
}

impl From<&str> for TokenPattern {
    fn from(content: &str) -> Self {
        TokenPattern::content(content)
    }
}

impl From<&Token> for TokenPattern {
    /// The exact pattern for `token`: its content, and its kind if it has one.
    fn from(token: &Token) -> Self {
        match token.kind() {
            Some(kind) => TokenPattern::kind_content(kind, token.content()),
            None => TokenPattern::content(token.content()),
        }
    }
}
