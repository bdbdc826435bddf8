//! Building, re-lexing and serializing collections through the cache.

use tokfix_lexer::PhpLexer;
use tokfix_token::{Lex, Token};

use crate::{CodeCache, CodeHash, SharedTokens, Tokens};

/// Owns the [`CodeCache`] and the lexer used to fill it.
///
/// Every operation that assigns a collection's code hash lives here, so the
/// cache always maps a hash to the collection last generated from or set to
/// that code.
#[derive(Debug, Default)]
pub struct TokenStore<L: Lex = PhpLexer> {
    cache: CodeCache,
    lexer: L,
}

impl<L: Lex> TokenStore<L> {
    pub fn new(lexer: L) -> Self {
        TokenStore {
            cache: CodeCache::new(),
            lexer,
        }
    }

    /// The collection for `code`.
    ///
    /// A cache hit returns the cached handle itself, so two calls with the
    /// same code share one collection. A miss lexes `code` and registers the
    /// new collection under its hash.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = code.len()))]
    pub fn from_code(&mut self, code: &str) -> SharedTokens {
        let hash = CodeHash::of(code);
        if let Ok(cached) = self.cache.get(hash) {
            tracing::debug!(%hash, "code cache hit");
            return cached.clone();
        }

        tracing::debug!(%hash, "code cache miss");
        let prototypes = self.lexer.lex(code);
        let mut tokens = Tokens::from_array(
            prototypes.into_iter().map(Token::from).enumerate(),
            true,
        );
        tokens.replace_code_hash(hash);

        let shared = SharedTokens::new(tokens);
        self.cache.set(hash, shared.clone());
        shared
    }

    /// Replace the contents of `tokens` with the lexed `code`, in place.
    ///
    /// Every handle to the collection sees the new tokens. The cache is not
    /// consulted for a hit; the collection is re-keyed under the new hash.
    ///
    /// # Deadlocks
    /// Takes the write lock of `tokens`. Calling this while the caller holds
    /// a [`read`](SharedTokens::read) or [`write`](SharedTokens::write) guard
    /// on the same handle blocks forever.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = code.len()))]
    pub fn set_code(&mut self, tokens: &SharedTokens, code: &str) {
        let prototypes = self.lexer.lex(code);
        tokens.write().refill(prototypes);
        self.change_code_hash(tokens, CodeHash::of(code));
    }

    /// Serialize `tokens` and re-key it under the hash of the result.
    ///
    /// # Deadlocks
    /// Takes the read lock, then the write lock of `tokens`. Calling this
    /// while the caller holds a [`read`](SharedTokens::read) or
    /// [`write`](SharedTokens::write) guard on the same handle blocks forever.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate_code(&mut self, tokens: &SharedTokens) -> String {
        let code = tokens.read().to_code();
        self.change_code_hash(tokens, CodeHash::of(&code));
        code
    }

    /// Whether a collection is cached for `hash`.
    #[inline]
    pub fn has_cache(&self, hash: CodeHash) -> bool {
        self.cache.has(hash)
    }

    /// Drop the cache entry for `hash`, or every entry when `hash` is `None`.
    pub fn clear_cache(&mut self, hash: Option<CodeHash>) {
        match hash {
            Some(hash) => {
                self.cache.remove(hash);
            }
            None => self.cache.clear(),
        }
    }

    #[inline]
    pub fn cache(&self) -> &CodeCache {
        &self.cache
    }

    #[inline]
    pub fn cache_mut(&mut self) -> &mut CodeCache {
        &mut self.cache
    }

    #[inline]
    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    /// Move `tokens` from its current cache key to `hash`.
    ///
    /// The old key is dropped only while it still maps to this collection;
    /// another collection registered under it since is left alone.
    fn change_code_hash(&mut self, tokens: &SharedTokens, hash: CodeHash) {
        let previous = tokens.write().replace_code_hash(hash);

        if let Some(previous) = previous {
            let still_ours = self
                .cache
                .get(previous)
                .is_ok_and(|cached| cached.ptr_eq(tokens));
            if still_ours {
                self.cache.remove(previous);
            }
        }

        tracing::debug!(?previous, %hash, "re-keyed token collection");
        self.cache.set(hash, tokens.clone());
    }
}
