//! Sibling walks and kind searches.
//!
//! Walks start one step away from the reference index and stop at the first
//! token satisfying their predicate. Running off either end of the collection
//! yields `None`, never an error.

use std::collections::BTreeMap;

use tokfix_token::{Token, TokenKind, TokenPattern, WhitespaceOptions};

use crate::Tokens;

/// Direction of a sibling walk.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Forward => index.checked_add(1),
            Direction::Backward => index.checked_sub(1),
        }
    }
}

impl Tokens {
    fn sibling_where<F>(
        &self,
        index: usize,
        direction: Direction,
        found: F,
    ) -> Option<(usize, &Token)>
    where
        F: Fn(&Token) -> bool,
    {
        let mut current = index;
        loop {
            current = direction.step(current)?;
            let token = self.get(current)?;
            if found(token) {
                return Some((current, token));
            }
        }
    }

    /// Nearest token in `direction` that is not whitespace under `options`.
    pub fn non_whitespace_sibling(
        &self,
        index: usize,
        direction: Direction,
        options: &WhitespaceOptions,
    ) -> Option<(usize, &Token)> {
        self.sibling_where(index, direction, |token| !token.is_whitespace(options))
    }

    pub fn next_non_whitespace(&self, index: usize) -> Option<(usize, &Token)> {
        self.non_whitespace_sibling(index, Direction::Forward, &WhitespaceOptions::default())
    }

    pub fn prev_non_whitespace(&self, index: usize) -> Option<(usize, &Token)> {
        self.non_whitespace_sibling(index, Direction::Backward, &WhitespaceOptions::default())
    }

    /// Nearest token in `direction` matching any of `patterns`.
    pub fn token_of_kind_sibling(
        &self,
        index: usize,
        direction: Direction,
        patterns: &[TokenPattern],
    ) -> Option<(usize, &Token)> {
        self.sibling_where(index, direction, |token| token.matches_any(patterns))
    }

    pub fn next_token_of_kind(
        &self,
        index: usize,
        patterns: &[TokenPattern],
    ) -> Option<(usize, &Token)> {
        self.token_of_kind_sibling(index, Direction::Forward, patterns)
    }

    pub fn prev_token_of_kind(
        &self,
        index: usize,
        patterns: &[TokenPattern],
    ) -> Option<(usize, &Token)> {
        self.token_of_kind_sibling(index, Direction::Backward, patterns)
    }

    /// Nearest token in `direction` matching none of `patterns`.
    pub fn token_not_of_kind_sibling(
        &self,
        index: usize,
        direction: Direction,
        patterns: &[TokenPattern],
    ) -> Option<(usize, &Token)> {
        self.sibling_where(index, direction, |token| !token.matches_any(patterns))
    }

    /// All tokens of `kind`, by index.
    pub fn find_given_kind(&self, kind: TokenKind) -> BTreeMap<usize, &Token> {
        self.iter()
            .enumerate()
            .filter(|(_, token)| token.is_given_kind(kind))
            .collect()
    }

    /// All tokens of each of `kinds`, by kind then index.
    ///
    /// Every requested kind has an entry, empty when nothing matched.
    pub fn find_given_kinds(
        &self,
        kinds: &[TokenKind],
    ) -> BTreeMap<TokenKind, BTreeMap<usize, &Token>> {
        let mut found: BTreeMap<TokenKind, BTreeMap<usize, &Token>> =
            kinds.iter().map(|&kind| (kind, BTreeMap::new())).collect();

        for (index, token) in self.iter().enumerate() {
            if let Some(matches) = token.kind().and_then(|kind| found.get_mut(&kind)) {
                matches.insert(index, token);
            }
        }

        found
    }
}

#[cfg(test)]
mod tests;
