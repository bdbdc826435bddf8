//! Content hashes of source text.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Hash of the source text a token collection represents.
///
/// Used as the key of the [`CodeCache`](crate::CodeCache).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct CodeHash(u64);

impl CodeHash {
    /// Hash `code`.
    pub fn of(code: &str) -> Self {
        let mut hasher = FxHasher::default();
        code.hash(&mut hasher);
        CodeHash(hasher.finish())
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
