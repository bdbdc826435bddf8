use super::*;
use pretty_assertions::assert_eq;
use tokfix_lexer::PhpLexer;
use tokfix_token::Lex;

fn tokens(code: &str) -> Tokens {
    Tokens::from_prototypes(PhpLexer::new().lex(code))
}

/// `(content, kind)` of every element, in index order.
fn summary(tokens: &Tokens) -> Vec<(String, ElementKind)> {
    tokens
        .classy_elements()
        .values()
        .map(|element| (element.token.content().to_owned(), element.kind))
        .collect()
}

#[test]
fn method_only_body() {
    let tokens: Tokens = vec![
        Token::new(TokenKind::Class, "class"),  // 0
        Token::whitespace(" "),                 // 1
        Token::new(TokenKind::String, "A"),     // 2
        Token::bare("{"),                       // 3
        Token::new(TokenKind::Public, "public"), // 4
        Token::whitespace(" "),                 // 5
        Token::new(TokenKind::Function, "function"), // 6
        Token::whitespace(" "),                 // 7
        Token::new(TokenKind::String, "foo"),   // 8
        Token::bare("("),                       // 9
        Token::bare(")"),                       // 10
        Token::bare("{"),                       // 11
        Token::bare("}"),                       // 12
        Token::bare("}"),                       // 13
    ]
    .into_iter()
    .collect();

    let elements = tokens.classy_elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(
        elements[&6],
        ClassyElement {
            token: &tokens[6],
            kind: ElementKind::Method,
        }
    );
}

#[test]
fn properties_and_methods() {
    let tokens = tokens(
        "<?php
class Foo {
    public $a;
    protected static $b = 1;
    private function bar($param, $other = null) {
        $local = 1;
    }
    var $c;
}",
    );

    assert_eq!(
        summary(&tokens),
        vec![
            ("$a".to_owned(), ElementKind::Property),
            ("$b".to_owned(), ElementKind::Property),
            ("function".to_owned(), ElementKind::Method),
            ("$c".to_owned(), ElementKind::Property),
        ]
    );
}

#[test]
fn closure_parameters_and_nested_bodies_are_ignored() {
    let tokens = tokens(
        "<?php
class Foo {
    public $callback;
    public function make() {
        return function ($inner) { return new class { public $nested; }; };
    }
    public $after;
}",
    );

    assert_eq!(
        summary(&tokens),
        vec![
            ("$callback".to_owned(), ElementKind::Property),
            ("function".to_owned(), ElementKind::Method),
            ("$after".to_owned(), ElementKind::Property),
        ]
    );
}

#[test]
fn code_outside_bodies_is_ignored() {
    let tokens = tokens(
        "<?php
$x = 1;
function free($y) { $z = 2; }
interface I { public function i(); }
$w = 3;
trait T { private $t; }",
    );

    assert_eq!(
        summary(&tokens),
        vec![
            ("function".to_owned(), ElementKind::Method),
            ("$t".to_owned(), ElementKind::Property),
        ]
    );
}

#[test]
fn interpolation_keeps_depth_balanced() {
    let tokens = tokens(
        r#"<?php
class Foo {
    public function greet() {
        return "Hi {$this->name} and ${who}, $x";
    }
    public $name;
}"#,
    );

    assert_eq!(
        summary(&tokens),
        vec![
            ("function".to_owned(), ElementKind::Method),
            ("$name".to_owned(), ElementKind::Property),
        ]
    );
}

#[test]
fn class_constant_does_not_open_a_body() {
    let tokens = tokens(
        "<?php
$name = Foo::class;
if ($name) { $y = 1; }
class Bar { public $z; }",
    );

    assert_eq!(
        summary(&tokens),
        vec![("$z".to_owned(), ElementKind::Property)]
    );
}

#[test]
fn non_ascii_property_names() {
    let tokens = tokens("<?php class A { public $naïve; public $ok; function größe() {} }");

    assert_eq!(
        summary(&tokens),
        vec![
            ("$naïve".to_owned(), ElementKind::Property),
            ("$ok".to_owned(), ElementKind::Property),
            ("function".to_owned(), ElementKind::Method),
        ]
    );
}

#[test]
fn indexes_point_at_member_tokens() {
    let tokens = tokens("<?php class A { public $p; function m() {} }");
    for (index, element) in tokens.classy_elements() {
        assert_eq!(&tokens[index], element.token);
    }
}
