use super::*;
use pretty_assertions::assert_eq;

#[test]
fn names_follow_tokenizer_constants() {
    assert_eq!(TokenKind::Variable.name(), "T_VARIABLE");
    assert_eq!(TokenKind::CurlyOpen.name(), "T_CURLY_OPEN");
    assert_eq!(TokenKind::Function.to_string(), "T_FUNCTION");
}

#[test]
fn classy_kinds() {
    assert!(TokenKind::Class.is_classy());
    assert!(TokenKind::Interface.is_classy());
    assert!(TokenKind::Trait.is_classy());
    assert!(!TokenKind::Function.is_classy());
    assert!(!TokenKind::Extends.is_classy());
}

#[test]
fn comment_and_visibility_groups() {
    assert!(TokenKind::Comment.is_comment());
    assert!(TokenKind::DocComment.is_comment());
    assert!(!TokenKind::Whitespace.is_comment());

    assert!(TokenKind::Public.is_visibility());
    assert!(TokenKind::Private.is_visibility());
    assert!(!TokenKind::Static.is_visibility());
}

#[test]
fn kinds_order_by_declaration() {
    assert!(TokenKind::Whitespace < TokenKind::Variable);
    assert!(TokenKind::Variable < TokenKind::Function);
}
