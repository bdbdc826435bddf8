//! Grabbing and re-applying declaration modifiers.
//!
//! Rules that move or reorder declarations first strip the leading modifiers
//! (`public static`, `abstract protected`, ...) off a declaration, remember
//! them as [`Attributes`], and later insert them again, normalized, in front
//! of the declaration keyword.

use std::fmt;

use smallvec::SmallVec;
use tokfix_token::{Token, TokenKind, WhitespaceOptions};

use crate::{Tokens, TokensError};

/// A modifier slot of a declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Attribute {
    Abstract,
    Final,
    Visibility,
    Static,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Abstract => "abstract",
            Attribute::Final => "final",
            Attribute::Visibility => "visibility",
            Attribute::Static => "static",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute slots with the modifier token grabbed for each, in order.
///
/// The order of the slots is the order [`Tokens::apply_attribs`] writes them
/// in. Setting a slot that already exists keeps its position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attributes {
    slots: SmallVec<[(Attribute, Option<Token>); 4]>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            slots: SmallVec::new(),
        }
    }

    /// `abstract`, `final`, `visibility` (default `public`), `static`.
    pub fn method_defaults() -> Self {
        let mut attributes = Attributes::new();
        attributes.set(Attribute::Abstract, None);
        attributes.set(Attribute::Final, None);
        attributes.set(Attribute::Visibility, Some(Token::new(TokenKind::Public, "public")));
        attributes.set(Attribute::Static, None);
        attributes
    }

    /// `visibility` (default `public`), `static`.
    pub fn property_defaults() -> Self {
        let mut attributes = Attributes::new();
        attributes.set(Attribute::Visibility, Some(Token::new(TokenKind::Public, "public")));
        attributes.set(Attribute::Static, None);
        attributes
    }

    /// The token held for `attribute`, if the slot exists and is filled.
    pub fn get(&self, attribute: Attribute) -> Option<&Token> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == attribute)
            .and_then(|(_, token)| token.as_ref())
    }

    /// Whether a slot for `attribute` exists, filled or not.
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.slots.iter().any(|(slot, _)| *slot == attribute)
    }

    /// Fill (or empty, with `None`) the slot for `attribute`.
    pub fn set(&mut self, attribute: Attribute, token: Option<Token>) {
        match self.slots.iter_mut().find(|(slot, _)| *slot == attribute) {
            Some((_, existing)) => *existing = token,
            None => self.slots.push((attribute, token)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Option<&Token>)> + '_ {
        self.slots
            .iter()
            .map(|(attribute, token)| (*attribute, token.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Which token kinds count as modifiers, and which attribute each fills.
///
/// A kind mapped to `None` is a modifier that is stripped but not kept.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AttributeMap {
    entries: &'static [(TokenKind, Option<Attribute>)],
}

impl AttributeMap {
    pub const METHOD: AttributeMap = AttributeMap::new(&[
        (TokenKind::Private, Some(Attribute::Visibility)),
        (TokenKind::Protected, Some(Attribute::Visibility)),
        (TokenKind::Public, Some(Attribute::Visibility)),
        (TokenKind::Abstract, Some(Attribute::Abstract)),
        (TokenKind::Final, Some(Attribute::Final)),
        (TokenKind::Static, Some(Attribute::Static)),
    ]);

    pub const PROPERTY: AttributeMap = AttributeMap::new(&[
        (TokenKind::Var, None),
        (TokenKind::Public, Some(Attribute::Visibility)),
        (TokenKind::Protected, Some(Attribute::Visibility)),
        (TokenKind::Private, Some(Attribute::Visibility)),
        (TokenKind::Static, Some(Attribute::Static)),
    ]);

    pub const fn new(entries: &'static [(TokenKind, Option<Attribute>)]) -> Self {
        AttributeMap { entries }
    }

    /// `None` if `kind` is not a modifier, otherwise the attribute it fills.
    #[expect(
        clippy::option_option,
        reason = "outer None means not a modifier, inner None means discarded"
    )]
    pub fn lookup(&self, kind: TokenKind) -> Option<Option<Attribute>> {
        self.entries
            .iter()
            .find(|(modifier, _)| *modifier == kind)
            .map(|&(_, attribute)| attribute)
    }
}

/// `{`, `}`, `(` and `)` end the modifier region of a declaration.
fn is_structural_delimiter(token: &Token) -> bool {
    !token.has_kind() && matches!(token.content(), "{" | "}" | "(" | ")")
}

impl Tokens {
    /// Strip the modifiers preceding the declaration at `index`.
    ///
    /// Walks backward from `index`. Whitespace and comments are skipped. A
    /// modifier listed in `map` is recorded in `attributes` when the map names
    /// an attribute for it (a modifier found further back overwrites a closer
    /// one for the same attribute), then it and the slot after it are
    /// cleared. A structural delimiter or any other token ends the walk.
    pub fn grab_attribs_before_token(
        &mut self,
        index: usize,
        map: &AttributeMap,
        mut attributes: Attributes,
    ) -> Attributes {
        let whitespace = WhitespaceOptions::default();
        let mut current = index.min(self.len());

        while let Some(prev) = current.checked_sub(1) {
            current = prev;
            let token = &self[current];

            if is_structural_delimiter(token) {
                break;
            }

            if let Some(slot) = token.kind().and_then(|kind| map.lookup(kind)) {
                if let Some(attribute) = slot {
                    tracing::trace!(index = current, %attribute, "grabbed modifier");
                    attributes.set(attribute, Some(token.clone()));
                }
                self[current].clear();
                if let Some(next) = self.get_mut(current + 1) {
                    next.clear();
                }
                continue;
            }

            if token.is_whitespace(&whitespace) || token.is_comment() {
                continue;
            }

            break;
        }

        attributes
    }

    /// Strip the modifiers of the method whose `function` keyword is at `index`.
    pub fn grab_method_attribs(&mut self, index: usize) -> Attributes {
        self.grab_attribs_before_token(index, &AttributeMap::METHOD, Attributes::method_defaults())
    }

    /// Strip the modifiers of the property whose variable is at `index`.
    pub fn grab_property_attribs(&mut self, index: usize) -> Attributes {
        self.grab_attribs_before_token(
            index,
            &AttributeMap::PROPERTY,
            Attributes::property_defaults(),
        )
    }

    /// Insert the filled attributes before `index`, each followed by a space.
    ///
    /// Empty slots and tokens with empty content are skipped. All tokens go
    /// in with a single insertion.
    pub fn apply_attribs(
        &mut self,
        index: usize,
        attributes: &Attributes,
    ) -> Result<(), TokensError> {
        let to_insert: Vec<Token> = attributes
            .iter()
            .filter_map(|(_, token)| token)
            .filter(|token| !token.content().is_empty())
            .flat_map(|token| [token.clone(), Token::whitespace(" ")])
            .collect();

        if to_insert.is_empty() {
            return Ok(());
        }
        self.insert_at(index, to_insert)
    }
}
