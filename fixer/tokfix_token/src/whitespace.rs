//! Whitespace classification options.

use std::borrow::Cow;

/// Characters trimmed by PHP's `trim()` by default.
pub const DEFAULT_WHITESPACE: &str = " \t\n\r\0\x0B";

/// The set of characters a token's content may consist of and still count as
/// whitespace.
///
/// Passed to [`Token::is_whitespace`](crate::Token::is_whitespace) and to the
/// sibling walks of the token collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WhitespaceOptions {
    chars: Cow<'static, str>,
}

impl WhitespaceOptions {
    /// Treat exactly the characters of `chars` as whitespace.
    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        WhitespaceOptions {
            chars: chars.into(),
        }
    }

    /// The whitespace character set.
    #[inline]
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Whether `c` is in the whitespace set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }

    /// Whether `text` is empty or made only of whitespace characters.
    pub fn is_blank(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }
}

impl Default for WhitespaceOptions {
    fn default() -> Self {
        WhitespaceOptions::new(DEFAULT_WHITESPACE)
    }
}
