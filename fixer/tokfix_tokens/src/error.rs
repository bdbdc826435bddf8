//! Errors raised by the token collection and its cache.

use crate::CodeHash;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokensError {
    /// A cache read for a hash that was never set or has been cleared.
    #[error("no token collection cached for code hash {hash}")]
    NotFound { hash: CodeHash },

    /// A checked slot access outside `0..len`.
    #[error("token index {index} is out of range for a collection of {len} tokens")]
    OutOfRange { index: usize, len: usize },
}
