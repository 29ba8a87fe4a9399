//! End-to-end chain tests: scanning whole documents through the public API.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use proptest::prelude::*;
use rayon::prelude::*;
use sift_ir::{init_tracing, TokenDocument, TokenKind, TokenRef};
use sift_lexer::{scan, Lexeme, ScanConfig, SourceCharStream};

const WORD: TokenKind = TokenKind::new(1);
const SYMBOL: TokenKind = TokenKind::new(2);

/// Words, single-character symbols, whitespace skipped.
fn words(stream: &mut SourceCharStream<'_>) -> Option<Lexeme> {
    let c = stream.read_char()?;
    if c.is_whitespace() {
        stream.eat_while(char::is_whitespace);
        None
    } else if c.is_alphanumeric() {
        stream.eat_while(char::is_alphanumeric);
        Some(Lexeme::new(WORD))
    } else {
        Some(Lexeme::new(SYMBOL))
    }
}

#[test]
fn documents_scan_in_parallel() {
    init_tracing();

    let documents: Vec<TokenDocument> = (0..64)
        .map(|i| TokenDocument::new(format!("fn f{i}(a, b) {{ a + b * {i} }}")))
        .collect();

    let counts: Vec<usize> = documents
        .par_iter()
        .map(|doc| scan(doc, ScanConfig::default(), words).unwrap().len())
        .collect();

    assert!(counts.iter().all(|&count| count == 14));
    for doc in &documents {
        assert_eq!(doc.first_token().unwrap().image(), "fn");
    }
}

#[test]
fn finished_chain_is_read_from_many_threads() {
    let doc = TokenDocument::new("alpha beta gamma delta");
    scan(&doc, ScanConfig::default(), words).unwrap();

    let joined: Vec<String> = (0..8)
        .into_par_iter()
        .map(|_| {
            doc.tokens()
                .unwrap()
                .map(TokenRef::image)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    assert!(joined.iter().all(|s| s == "alpha beta gamma delta"));
}

proptest! {
    #[test]
    fn scanned_tokens_tile_the_input(text in "[a-z0-9 +*(){},;\n]{0,80}") {
        let doc = TokenDocument::new(text.as_str());
        let builder = scan(&doc, ScanConfig::default(), words).unwrap();

        let tokens: Vec<_> = doc.tokens().unwrap().collect();
        prop_assert_eq!(tokens.len(), builder.len());

        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.start() >= last_end);
            prop_assert!(token.start() < token.end());
            prop_assert!(token.end() <= doc.len());
            prop_assert_eq!(token.image(), token.source_text());
            prop_assert!(text[last_end as usize..token.start() as usize]
                .chars()
                .all(char::is_whitespace));
            last_end = token.end();
        }
        prop_assert!(text[last_end as usize..].chars().all(char::is_whitespace));
    }

    #[test]
    fn eof_token_closes_every_chain(text in "[a-z ]{0,40}") {
        let doc = TokenDocument::new(text.as_str());
        let config = ScanConfig::default().with_eof_kind(TokenKind::new(0));
        let builder = scan(&doc, config, words).unwrap();

        let tail = builder.tail();
        prop_assert_eq!(tail.kind(), TokenKind::new(0));
        prop_assert_eq!(tail.start(), doc.len());
        prop_assert!(tail.next().is_none());
        prop_assert_eq!(doc.tokens().unwrap().last(), Some(tail));
    }
}
