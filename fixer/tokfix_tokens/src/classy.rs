//! Members of class, interface and trait bodies.

use std::collections::BTreeMap;

use tokfix_token::{Token, TokenKind};

use crate::Tokens;

/// What a classy element declares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Property,
    Method,
}

/// A member found directly inside a type body.
///
/// For a property `token` is its `T_VARIABLE`, for a method the `function`
/// keyword.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClassyElement<'a> {
    pub token: &'a Token,
    pub kind: ElementKind,
}

impl Tokens {
    /// Properties and methods declared at the top level of type bodies.
    ///
    /// Tracks paren and curly depth in one forward pass. Only kinded tokens
    /// at curly depth 1 are candidates, so members of nested bodies and
    /// closures are skipped, and variables at paren depth above 0 (parameter
    /// lists) are not properties.
    ///
    /// `T_CURLY_OPEN` and `T_DOLLAR_OPEN_CURLY_BRACES` open a depth level that
    /// the bare `}` ending the interpolation closes, and string literal parts
    /// are skipped; the two rules keep the depth balanced together.
    ///
    /// `Foo::class` does not open a body.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len()))]
    pub fn classy_elements(&self) -> BTreeMap<usize, ClassyElement<'_>> {
        let mut elements = BTreeMap::new();
        let mut in_classy = false;
        let mut curly_depth = 0usize;
        let mut paren_depth = 0usize;

        for (index, token) in self.iter().enumerate() {
            if token.is_given_kind(TokenKind::EncapsedAndWhitespace) {
                continue;
            }

            if !in_classy {
                in_classy = token.is_classy() && !self.is_class_constant(index);
                continue;
            }

            match token.content() {
                "(" => {
                    paren_depth += 1;
                    continue;
                }
                ")" => {
                    paren_depth = paren_depth.saturating_sub(1);
                    continue;
                }
                "}" => {
                    curly_depth = curly_depth.saturating_sub(1);
                    if curly_depth == 0 {
                        in_classy = false;
                    }
                    continue;
                }
                "{" => {
                    curly_depth += 1;
                    continue;
                }
                _ => {}
            }
            if token.is_any_kind(&[TokenKind::CurlyOpen, TokenKind::DollarOpenCurlyBraces]) {
                curly_depth += 1;
                continue;
            }

            if curly_depth != 1 {
                continue;
            }

            let kind = match token.kind() {
                Some(TokenKind::Variable) if paren_depth == 0 => ElementKind::Property,
                Some(TokenKind::Function) => ElementKind::Method,
                _ => continue,
            };
            elements.insert(index, ClassyElement { token, kind });
        }

        tracing::debug!(count = elements.len(), "collected classy elements");
        elements
    }

    /// Whether the `class` keyword at `index` is the `Foo::class` constant.
    fn is_class_constant(&self, index: usize) -> bool {
        self.prev_non_whitespace(index)
            .is_some_and(|(_, prev)| prev.is_given_kind(TokenKind::DoubleColon))
    }
}

#[cfg(test)]
mod tests;
