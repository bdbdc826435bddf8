//! Tokfix tokens - the mutable token collection behind source rewriting
//!
//! Fixing rules work on a flat, index-addressable list of tokens rather than
//! on a syntax tree. This crate contains:
//! - [`Tokens`]: the collection, with sibling walks, kind searches, insertion,
//!   clearing and serialization
//! - [`TokenStore`]: builds collections from code and keeps a [`CodeCache`]
//!   from content hash to the collection representing that code
//! - [`SharedTokens`]: the handle through which the cache and callers share a
//!   collection
//! - Structural helpers: [`Tokens::classy_elements`], modifier
//!   [`Attributes`] grabbing and applying, [`is_magic_method_name`]
//!
//! # Identity
//!
//! Lexing the same code twice through one store yields the same collection.
//! Rules that edit a collection and then call
//! [`TokenStore::generate_code`] move it to the hash of the new code, so the
//! next rule asking for that code gets the already-lexed collection back.
//!
//! # Removal
//!
//! Tokens are never removed by shrinking the collection. A removed token is
//! cleared to the empty token, which serializes to nothing and counts as
//! whitespace in walks, so indices found earlier stay valid.

mod attribs;
mod cache;
mod classy;
mod error;
mod hash;
mod list;
mod magic;
mod navigation;
mod shared;
mod store;

pub use attribs::{Attribute, AttributeMap, Attributes};
pub use cache::CodeCache;
pub use classy::{ClassyElement, ElementKind};
pub use error::TokensError;
pub use hash::CodeHash;
pub use list::Tokens;
pub use magic::is_magic_method_name;
pub use navigation::Direction;
pub use shared::SharedTokens;
pub use store::TokenStore;

pub use tokfix_lexer::PhpLexer;
pub use tokfix_token::{Lex, Prototype, Token, TokenKind, TokenPattern, WhitespaceOptions};
