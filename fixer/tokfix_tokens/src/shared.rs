//! Shared handles to token collections.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Tokens;

/// A reference-counted, lockable handle to a [`Tokens`] collection.
///
/// The [`CodeCache`](crate::CodeCache) and every caller that received the
/// collection from [`TokenStore::from_code`](crate::TokenStore::from_code)
/// hold clones of the same handle, so an edit through one is seen by all.
/// Use [`snapshot`](Self::snapshot) for an independent copy.
///
/// # Locking
/// The lock is not reentrant. Drop a read guard before taking the write
/// guard on the same handle.
#[derive(Clone, Default)]
pub struct SharedTokens(Arc<RwLock<Tokens>>);

impl SharedTokens {
    pub fn new(tokens: Tokens) -> Self {
        SharedTokens(Arc::new(RwLock::new(tokens)))
    }

    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Tokens> {
        self.0.read()
    }

    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Tokens> {
        self.0.write()
    }

    /// Whether both handles point at the same collection.
    #[inline]
    pub fn ptr_eq(&self, other: &SharedTokens) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Deep copy of the collection, detached from this handle and the cache.
    pub fn snapshot(&self) -> Tokens {
        self.read().clone()
    }
}

impl From<Tokens> for SharedTokens {
    fn from(tokens: Tokens) -> Self {
        SharedTokens::new(tokens)
    }
}

impl fmt::Debug for SharedTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_read() {
            Some(tokens) => write!(f, "SharedTokens({tokens:?})"),
            None => f.write_str("SharedTokens(<locked>)"),
        }
    }
}
