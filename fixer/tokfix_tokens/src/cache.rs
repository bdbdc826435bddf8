//! Content-hash cache of token collections.

use rustc_hash::FxHashMap;

use crate::{CodeHash, SharedTokens, TokensError};

/// Maps the hash of a piece of code to the collection that represents it.
///
/// The map itself has no locking; it is owned by a
/// [`TokenStore`](crate::TokenStore) and callers serialize access to that.
#[derive(Default)]
pub struct CodeCache {
    entries: FxHashMap<CodeHash, SharedTokens>,
}

impl CodeCache {
    pub fn new() -> Self {
        CodeCache {
            entries: FxHashMap::default(),
        }
    }

    /// The collection cached for `hash`.
    pub fn get(&self, hash: CodeHash) -> Result<&SharedTokens, TokensError> {
        self.entries.get(&hash).ok_or(TokensError::NotFound { hash })
    }

    #[inline]
    pub fn has(&self, hash: CodeHash) -> bool {
        self.entries.contains_key(&hash)
    }

    /// Associate `tokens` with `hash`, replacing any previous association.
    pub fn set(&mut self, hash: CodeHash, tokens: SharedTokens) {
        self.entries.insert(hash, tokens);
    }

    /// Drop the association for `hash`. Absent keys are ignored.
    pub fn remove(&mut self, hash: CodeHash) -> Option<SharedTokens> {
        self.entries.remove(&hash)
    }

    /// Drop every association.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CodeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CodeCache({} entries)", self.entries.len())
    }
}
