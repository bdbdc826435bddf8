use super::*;
use pretty_assertions::assert_eq;

fn lex(code: &str) -> Vec<Prototype> {
    PhpLexer::new().lex(code)
}

fn kinds(code: &str) -> Vec<Option<TokenKind>> {
    lex(code).iter().map(Prototype::kind).collect()
}

fn joined(prototypes: &[Prototype]) -> String {
    prototypes.iter().map(Prototype::content).collect()
}

#[test]
fn empty_input() {
    assert_eq!(lex(""), vec![]);
}

#[test]
fn html_only() {
    assert_eq!(
        lex("<p>hi</p>"),
        vec![Prototype::kinded(TokenKind::InlineHtml, "<p>hi</p>")]
    );
}

#[test]
fn open_tag_takes_one_newline() {
    assert_eq!(
        lex("<?php\n\n$a;"),
        vec![
            Prototype::kinded(TokenKind::OpenTag, "<?php\n"),
            Prototype::kinded(TokenKind::Whitespace, "\n"),
            Prototype::kinded(TokenKind::Variable, "$a"),
            Prototype::bare(";"),
        ]
    );
}

#[test]
fn open_tag_with_crlf_and_at_eof() {
    assert_eq!(
        lex("<?php\r\n"),
        vec![Prototype::kinded(TokenKind::OpenTag, "<?php\r\n")]
    );
    assert_eq!(
        lex("<?php"),
        vec![Prototype::kinded(TokenKind::OpenTag, "<?php")]
    );
}

#[test]
fn short_tags_stay_html() {
    assert_eq!(
        lex("<?xml version?>"),
        vec![Prototype::kinded(TokenKind::InlineHtml, "<?xml version?>")]
    );
}

#[test]
fn html_and_php_interleave() {
    let code = "<b><?php echo 1 ?>\n</b><?= $x ?>";
    assert_eq!(
        kinds(code),
        vec![
            Some(TokenKind::InlineHtml),
            Some(TokenKind::OpenTag),
            Some(TokenKind::Echo),
            Some(TokenKind::Whitespace),
            Some(TokenKind::LNumber),
            Some(TokenKind::Whitespace),
            Some(TokenKind::CloseTag),
            Some(TokenKind::InlineHtml),
            Some(TokenKind::OpenTagWithEcho),
            Some(TokenKind::Whitespace),
            Some(TokenKind::Variable),
            Some(TokenKind::Whitespace),
            Some(TokenKind::CloseTag),
        ]
    );
    let tokens = lex(code);
    assert_eq!(tokens[6].content(), "?>\n");
    assert_eq!(tokens[7].content(), "</b>");
    assert_eq!(joined(&tokens), code);
}

#[test]
fn line_comment_stops_at_close_tag() {
    let tokens = lex("<?php // note ?>after");
    assert_eq!(
        tokens,
        vec![
            Prototype::kinded(TokenKind::OpenTag, "<?php "),
            Prototype::kinded(TokenKind::Comment, "// note "),
            Prototype::kinded(TokenKind::CloseTag, "?>"),
            Prototype::kinded(TokenKind::InlineHtml, "after"),
        ]
    );
}

#[test]
fn comments_and_doc_comments() {
    assert_eq!(
        kinds("<?php /** doc */ /* c */ /**/ # hash\n"),
        vec![
            Some(TokenKind::OpenTag),
            Some(TokenKind::DocComment),
            Some(TokenKind::Whitespace),
            Some(TokenKind::Comment),
            Some(TokenKind::Whitespace),
            Some(TokenKind::Comment),
            Some(TokenKind::Whitespace),
            Some(TokenKind::Comment),
            Some(TokenKind::Whitespace),
        ]
    );
}

#[test]
fn class_declaration() {
    assert_eq!(
        lex("<?php class Foo { public static function bar() {} }"),
        vec![
            Prototype::kinded(TokenKind::OpenTag, "<?php "),
            Prototype::kinded(TokenKind::Class, "class"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::String, "Foo"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::bare("{"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::Public, "public"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::Static, "static"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::Function, "function"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::String, "bar"),
            Prototype::bare("("),
            Prototype::bare(")"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::bare("{"),
            Prototype::bare("}"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::bare("}"),
        ]
    );
}

#[test]
fn keywords_keep_original_case() {
    let tokens = lex("<?php FUNCTION");
    assert_eq!(tokens[1], Prototype::kinded(TokenKind::Function, "FUNCTION"));
}

#[test]
fn operators_and_numbers() {
    assert_eq!(
        kinds("<?php $a->b ?? 0x1F === 1.5 <> \\Foo::BAR"),
        vec![
            Some(TokenKind::OpenTag),
            Some(TokenKind::Variable),
            Some(TokenKind::ObjectOperator),
            Some(TokenKind::String),
            Some(TokenKind::Whitespace),
            Some(TokenKind::Coalesce),
            Some(TokenKind::Whitespace),
            Some(TokenKind::LNumber),
            Some(TokenKind::Whitespace),
            Some(TokenKind::IsIdentical),
            Some(TokenKind::Whitespace),
            Some(TokenKind::DNumber),
            Some(TokenKind::Whitespace),
            Some(TokenKind::IsNotEqual),
            Some(TokenKind::Whitespace),
            Some(TokenKind::NsSeparator),
            Some(TokenKind::String),
            Some(TokenKind::DoubleColon),
            Some(TokenKind::String),
        ]
    );
}

#[test]
fn strings() {
    assert_eq!(
        kinds(r#"<?php 'it\'s' "plain" "x $y""#),
        vec![
            Some(TokenKind::OpenTag),
            Some(TokenKind::ConstantEncapsedString),
            Some(TokenKind::Whitespace),
            Some(TokenKind::ConstantEncapsedString),
            Some(TokenKind::Whitespace),
            None,
            Some(TokenKind::EncapsedAndWhitespace),
            Some(TokenKind::Variable),
            None,
        ]
    );
}

#[test]
fn unterminated_string_falls_back_to_bare() {
    let code = "<?php \"abc";
    let tokens = lex(code);
    assert_eq!(tokens[1], Prototype::bare("\""));
    assert_eq!(joined(&tokens), code);
}

#[test]
fn unicode_in_literals_and_comments() {
    let code = "<?php // héllo\n$a = 'ünï' . \"ç $b\";";
    assert_eq!(joined(&lex(code)), code);
}

#[test]
fn non_ascii_names_stay_whole() {
    assert_eq!(
        lex("<?php $naïve = Café::créer($ü);"),
        vec![
            Prototype::kinded(TokenKind::OpenTag, "<?php "),
            Prototype::kinded(TokenKind::Variable, "$naïve"),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::bare("="),
            Prototype::kinded(TokenKind::Whitespace, " "),
            Prototype::kinded(TokenKind::String, "Café"),
            Prototype::kinded(TokenKind::DoubleColon, "::"),
            Prototype::kinded(TokenKind::String, "créer"),
            Prototype::bare("("),
            Prototype::kinded(TokenKind::Variable, "$ü"),
            Prototype::bare(")"),
            Prototype::bare(";"),
        ]
    );
}

mod proptest_lossless {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexing_is_lossless(body in "[ -~\t\n]{0,80}") {
            let code = format!("<?php {body}");
            prop_assert_eq!(joined(&lex(&code)), code);
        }

        #[test]
        fn html_mode_is_lossless(code in "[ -~\n]{0,80}") {
            prop_assert_eq!(joined(&lex(&code)), code);
        }
    }
}
