//! Edge case and property tests for bmc-lex.

use proptest::prelude::*;

use crate::{tokenize, Payload, TokenKind};

#[test]
fn edge_single_char_ident() {
    let tokens = tokenize("x").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
}

#[test]
fn edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = tokenize(&name).unwrap();
    assert_eq!(tokens[0].payload, Payload::Text(name));
}

#[test]
fn edge_adjacent_tokens_without_whitespace() {
    let kinds: Vec<_> = tokenize("x[i]=y[j];")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Ident,
            TokenKind::LBracket,
            TokenKind::Ident,
            TokenKind::RBracket,
            TokenKind::Eq,
            TokenKind::Ident,
            TokenKind::LBracket,
            TokenKind::Ident,
            TokenKind::RBracket,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn edge_number_adjacent_to_operator() {
    // `1--2` is decrement between literals, not a negative literal.
    let kinds: Vec<_> = tokenize("1--2")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::IntLit,
            TokenKind::MinusMinus,
            TokenKind::IntLit,
            TokenKind::Eof
        ]
    );
}

#[test]
fn edge_case_sensitivity() {
    let tokens = tokenize("While while").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::While);
}

#[test]
fn edge_division_chain_is_not_a_comment() {
    let kinds: Vec<_> = tokenize("a / b / c")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Slash).count(), 2);
}

#[test]
fn edge_string_then_char_reuse_scratch_cleanly() {
    let tokens = tokenize("\"text\" 'c' \"more\"").unwrap();
    assert_eq!(
        tokens[0].payload,
        Payload::Str {
            delim: '"',
            text: "text".into()
        }
    );
    assert_eq!(tokens[1].payload, Payload::Int('c' as i64));
    assert_eq!(
        tokens[2].payload,
        Payload::Str {
            delim: '"',
            text: "more".into()
        }
    );
}

#[test]
fn edge_max_value_literal() {
    let tokens = tokenize("9223372036854775807").unwrap();
    assert_eq!(tokens[0].payload, Payload::Int(i64::MAX));
}

proptest! {
    #[test]
    fn prop_whitespace_only_yields_eof(ws in "[ \t\r\n]{0,64}") {
        let tokens = tokenize(&ws).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(tokens[0].is_eof());
    }

    #[test]
    fn prop_decimal_literals_round_trip(n in 1i64..=i64::MAX) {
        let tokens = tokenize(&n.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].payload, &Payload::Int(n));
    }

    #[test]
    fn prop_words_never_split(name in "[a-z_][a-z0-9_]{0,24}") {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        let token = &tokens[0];
        if let Payload::Text(text) = &token.payload {
            prop_assert_eq!(text, &name);
        } else {
            // Reserved words come back as keywords with no payload.
            prop_assert!(token.kind.is_keyword());
        }
    }

    #[test]
    fn prop_positions_are_monotonic(source in "[a-z0-9 +\\-*/<>=!;,(){}\n]{0,128}") {
        if let Ok(tokens) = tokenize(&source) {
            for pair in tokens.windows(2) {
                let a = (pair[0].pos.line, pair[0].pos.column);
                let b = (pair[1].pos.line, pair[1].pos.column);
                prop_assert!(a <= b, "positions went backwards: {:?} then {:?}", a, b);
            }
        }
    }
}
