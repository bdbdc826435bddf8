//! The token collection.

use std::fmt;

use tokfix_token::{Prototype, Token, WhitespaceOptions};

use crate::{CodeHash, TokensError};

/// An ordered, index-addressable sequence of tokens.
///
/// Every slot holds exactly one [`Token`]; a removed token is represented by
/// the empty token (see [`Token::clear`]) rather than by shrinking the
/// collection, so indices stay stable across most edits. Only
/// [`set_size`](Self::set_size) and [`insert_at`](Self::insert_at) change the
/// length.
///
/// The collection remembers the hash of the code it was last generated from
/// or serialized to. Only the [`TokenStore`](crate::TokenStore) assigns it.
#[derive(Clone, Default)]
pub struct Tokens {
    tokens: Vec<Token>,
    code_hash: Option<CodeHash>,
}

// Equality compares the tokens only. A clone that has been regenerated under
// another hash still equals its original as long as the slots agree.
impl PartialEq for Tokens {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}
impl Eq for Tokens {}

impl Tokens {
    /// Create an empty collection.
    #[inline]
    pub fn new() -> Self {
        Tokens {
            tokens: Vec::new(),
            code_hash: None,
        }
    }

    /// Create a collection of `size` empty tokens.
    pub fn with_size(size: usize) -> Self {
        Tokens {
            tokens: vec![Token::empty(); size],
            code_hash: None,
        }
    }

    /// Build a collection from `(index, token)` pairs.
    ///
    /// With `preserve_indexes` each token lands at its own index; the result
    /// is sized to the largest index plus one and slots no pair names hold
    /// the empty token. Later pairs for the same index win. Without it the
    /// indexes are ignored and the tokens are packed densely in iteration
    /// order.
    pub fn from_array<I>(items: I, preserve_indexes: bool) -> Self
    where
        I: IntoIterator<Item = (usize, Token)>,
    {
        if !preserve_indexes {
            return items.into_iter().map(|(_, token)| token).collect();
        }

        let mut collection = Tokens::new();
        for (index, token) in items {
            if index >= collection.len() {
                collection.set_size(index + 1);
            }
            collection.tokens[index] = token;
        }
        collection
    }

    /// Build a dense collection from lexer output.
    pub fn from_prototypes(prototypes: Vec<Prototype>) -> Self {
        prototypes.into_iter().map(Token::from).collect()
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resize in place.
    ///
    /// Slots below `min(old, new)` keep their tokens; growing appends empty
    /// tokens.
    pub fn set_size(&mut self, size: usize) {
        self.tokens.resize_with(size, Token::empty);
    }

    /// Hash of the code this collection was last generated from, if any.
    #[inline]
    pub fn code_hash(&self) -> Option<CodeHash> {
        self.code_hash
    }

    /// Assign a new hash, returning the previous one.
    pub(crate) fn replace_code_hash(&mut self, hash: CodeHash) -> Option<CodeHash> {
        self.code_hash.replace(hash)
    }

    /// Drop all slots and refill from lexer output, keeping this collection.
    pub(crate) fn refill(&mut self, prototypes: Vec<Prototype>) {
        self.set_size(0);
        self.tokens.reserve(prototypes.len());
        self.tokens.extend(prototypes.into_iter().map(Token::from));
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    /// Checked slot access.
    pub fn at(&self, index: usize) -> Result<&Token, TokensError> {
        let len = self.len();
        self.tokens
            .get(index)
            .ok_or(TokensError::OutOfRange { index, len })
    }

    /// Checked mutable slot access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Token, TokensError> {
        let len = self.len();
        self.tokens
            .get_mut(index)
            .ok_or(TokensError::OutOfRange { index, len })
    }

    /// Replace the token at `index`.
    pub fn override_at(&mut self, index: usize, token: Token) -> Result<(), TokensError> {
        *self.at_mut(index)? = token;
        Ok(())
    }

    /// Clear the token at `index`.
    pub fn clear_at(&mut self, index: usize) -> Result<(), TokensError> {
        self.at_mut(index)?.clear();
        Ok(())
    }

    /// Clear every token in `start..=end`.
    pub fn clear_range(&mut self, start: usize, end: usize) -> Result<(), TokensError> {
        let len = self.len();
        let slots = self
            .tokens
            .get_mut(start..=end)
            .ok_or(TokensError::OutOfRange {
                index: start.max(end),
                len,
            })?;
        slots.iter_mut().for_each(Token::clear);
        Ok(())
    }

    /// Insert `items` before `index`, shifting everything at or after it.
    ///
    /// `index` may equal the length, which appends. The shift happens once,
    /// however many tokens are inserted.
    pub fn insert_at<I>(&mut self, index: usize, items: I) -> Result<(), TokensError>
    where
        I: IntoIterator<Item = Token>,
    {
        let len = self.len();
        if index > len {
            return Err(TokensError::OutOfRange { index, len });
        }
        self.tokens.splice(index..index, items);
        tracing::trace!(index, inserted = self.len() - len, "inserted tokens");
        Ok(())
    }

    /// Clear the token before `index` if it is whitespace.
    pub fn remove_leading_whitespace(&mut self, index: usize) {
        if let Some(prev) = index.checked_sub(1) {
            self.clear_whitespace_at(prev);
        }
    }

    /// Clear the token after `index` if it is whitespace.
    pub fn remove_trailing_whitespace(&mut self, index: usize) {
        if let Some(next) = index.checked_add(1) {
            self.clear_whitespace_at(next);
        }
    }

    fn clear_whitespace_at(&mut self, index: usize) {
        let whitespace = WhitespaceOptions::default();
        if let Some(token) = self.tokens.get_mut(index) {
            if token.is_whitespace(&whitespace) {
                token.clear();
            }
        }
    }

    /// Concatenate all token contents.
    ///
    /// This does not touch the code hash; regenerating through the
    /// [`TokenStore`](crate::TokenStore) does.
    pub fn to_code(&self) -> String {
        self.tokens.iter().map(Token::content).collect()
    }

    /// Concatenate the contents of `start..=end`.
    pub fn generate_partial_code(&self, start: usize, end: usize) -> Result<String, TokensError> {
        let slots = self.tokens.get(start..=end).ok_or(TokensError::OutOfRange {
            index: start.max(end),
            len: self.len(),
        })?;
        Ok(slots.iter().map(Token::content).collect())
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Token> {
        self.tokens.iter_mut()
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code_hash {
            Some(hash) => write!(f, "Tokens({} tokens, hash {hash})", self.tokens.len()),
            None => write!(f, "Tokens({} tokens)", self.tokens.len()),
        }
    }
}

impl std::ops::Index<usize> for Tokens {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl std::ops::IndexMut<usize> for Tokens {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.tokens[index]
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Tokens {
            tokens: iter.into_iter().collect(),
            code_hash: None,
        }
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
