use super::*;
use crate::SourceCharStream;
use pretty_assertions::assert_eq;

const IDENT: TokenKind = TokenKind::new(1);
const PLUS: TokenKind = TokenKind::new(2);

#[test]
fn test_new_opens_document() {
    let doc = TokenDocument::new("a");
    let builder = ChainBuilder::new(&doc).unwrap();

    assert!(doc.is_opened());
    assert!(builder.is_empty());
    assert!(builder.tail().is_implicit());
    assert_eq!(Some(builder.tail()), doc.sentinel());
}

#[test]
fn test_new_on_opened_document_fails() {
    let doc = TokenDocument::new("a");
    doc.open().unwrap();

    assert_eq!(
        ChainBuilder::new(&doc).unwrap_err(),
        InvalidState::AlreadyOpened
    );
}

#[test]
fn test_push_moves_tail() {
    let doc = TokenDocument::new("a+b");
    let mut builder = ChainBuilder::new(&doc).unwrap();
    let mut stream = SourceCharStream::new(doc.text());

    stream.begin_token();
    let a = builder.push(IDENT, &stream, None).unwrap();
    stream.begin_token();
    builder.push(PLUS, &stream, Some("+")).unwrap();
    stream.begin_token();
    let b = builder.push(IDENT, &stream, None).unwrap();

    assert_eq!(builder.len(), 3);
    assert_eq!(builder.tail(), b);
    assert_eq!(doc.first_token().unwrap(), a);
    assert!(std::ptr::eq(builder.document(), &doc));
}

#[test]
fn test_rejected_token_leaves_chain_unchanged() {
    let doc = TokenDocument::new("ab");
    let other = TokenDocument::new("ab");
    let mut builder = ChainBuilder::new(&doc).unwrap();
    let mut stream = SourceCharStream::new(doc.text());

    stream.begin_token();
    let foreign = other.create_token(IDENT, &stream, None);
    assert!(matches!(
        builder.push_token(foreign),
        Err(InvalidState::ForeignToken { .. })
    ));
    assert!(builder.is_empty());
    assert_eq!(doc.first_token().unwrap_err(), InvalidState::NoTokens);
}
