use super::*;
use pretty_assertions::assert_eq;

/// `$a = foo( $b ) ;` with a cleared slot after `foo`.
fn sample() -> Tokens {
    vec![
        Token::new(TokenKind::Variable, "$a"),   // 0
        Token::whitespace(" "),                  // 1
        Token::bare("="),                        // 2
        Token::whitespace(" "),                  // 3
        Token::new(TokenKind::String, "foo"),    // 4
        Token::empty(),                          // 5
        Token::bare("("),                        // 6
        Token::whitespace(" "),                  // 7
        Token::new(TokenKind::Variable, "$b"),   // 8
        Token::whitespace("\n"),                 // 9
        Token::bare(")"),                        // 10
        Token::bare(";"),                        // 11
    ]
    .into_iter()
    .collect()
}

fn index_of(found: Option<(usize, &Token)>) -> Option<usize> {
    found.map(|(index, _)| index)
}

#[test]
fn next_and_prev_non_whitespace() {
    let tokens = sample();
    assert_eq!(index_of(tokens.next_non_whitespace(0)), Some(2));
    assert_eq!(index_of(tokens.prev_non_whitespace(2)), Some(0));
    // The empty token counts as whitespace.
    assert_eq!(index_of(tokens.next_non_whitespace(4)), Some(6));
    assert_eq!(index_of(tokens.prev_non_whitespace(6)), Some(4));

    let (index, token) = tokens.next_non_whitespace(6).unwrap_or_else(|| unreachable!());
    assert_eq!(index, 8);
    assert_eq!(token.content(), "$b");
}

#[test]
fn walks_stop_at_the_ends() {
    let tokens = sample();
    let last = tokens.len() - 1;
    assert_eq!(tokens.next_non_whitespace(last), None);
    assert_eq!(tokens.prev_non_whitespace(0), None);
    // One past either end.
    assert_eq!(tokens.next_non_whitespace(tokens.len()), None);
    assert_eq!(index_of(tokens.prev_non_whitespace(tokens.len())), Some(last));
}

#[test]
fn custom_whitespace_options() {
    let tokens = sample();
    let spaces_only = WhitespaceOptions::new(" ");
    // With only spaces as whitespace, the newline at 9 stops the walk.
    assert_eq!(
        index_of(tokens.non_whitespace_sibling(8, Direction::Forward, &spaces_only)),
        Some(9)
    );
    assert_eq!(
        index_of(tokens.non_whitespace_sibling(
            8,
            Direction::Forward,
            &WhitespaceOptions::default()
        )),
        Some(10)
    );
}

#[test]
fn token_of_kind_siblings() {
    let tokens = sample();
    let variables = [TokenPattern::kind(TokenKind::Variable)];

    assert_eq!(index_of(tokens.next_token_of_kind(0, &variables)), Some(8));
    assert_eq!(index_of(tokens.prev_token_of_kind(8, &variables)), Some(0));
    assert_eq!(tokens.next_token_of_kind(8, &variables), None);
    assert_eq!(tokens.prev_token_of_kind(0, &variables), None);

    let parens = [TokenPattern::content("("), TokenPattern::content(")")];
    assert_eq!(index_of(tokens.next_token_of_kind(0, &parens)), Some(6));
    assert_eq!(index_of(tokens.next_token_of_kind(6, &parens)), Some(10));

    let named = [TokenPattern::kind_content(TokenKind::String, "FOO").ignore_case()];
    assert_eq!(
        index_of(tokens.token_of_kind_sibling(11, Direction::Backward, &named)),
        Some(4)
    );
}

#[test]
fn token_not_of_kind_sibling() {
    let tokens = sample();
    let skip = [
        TokenPattern::kind(TokenKind::Whitespace),
        TokenPattern::content("="),
    ];
    assert_eq!(
        index_of(tokens.token_not_of_kind_sibling(0, Direction::Forward, &skip)),
        Some(4)
    );
    assert_eq!(
        index_of(tokens.token_not_of_kind_sibling(4, Direction::Backward, &skip)),
        Some(0)
    );
}

#[test]
fn find_single_kind() {
    let tokens = sample();
    let variables = tokens.find_given_kind(TokenKind::Variable);
    assert_eq!(variables.keys().copied().collect::<Vec<_>>(), vec![0, 8]);
    assert_eq!(variables[&8].content(), "$b");

    assert!(tokens.find_given_kind(TokenKind::Class).is_empty());
}

#[test]
fn find_many_kinds_lists_every_kind() {
    let tokens = sample();
    let found =
        tokens.find_given_kinds(&[TokenKind::Whitespace, TokenKind::String, TokenKind::Class]);

    assert_eq!(found.len(), 3);
    assert_eq!(found[&TokenKind::Whitespace].keys().copied().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
    assert_eq!(found[&TokenKind::String].keys().copied().collect::<Vec<_>>(), vec![4]);
    assert!(found[&TokenKind::Class].is_empty());
}
