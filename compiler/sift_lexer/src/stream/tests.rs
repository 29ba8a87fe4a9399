use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_begin_and_read() {
    let mut stream = SourceCharStream::new("ab c");
    assert_eq!(stream.begin_token(), Some('a'));
    assert_eq!(stream.read_char(), Some('b'));
    assert_eq!(stream.lexeme(), "ab");
    assert_eq!((stream.start_offset(), stream.end_offset()), (0, 2));
    assert_eq!(stream.image(), "ab");

    assert_eq!(stream.begin_token(), Some(' '));
    assert_eq!(stream.begin_token(), Some('c'));
    assert_eq!((stream.start_offset(), stream.end_offset()), (3, 4));
    assert!(stream.is_eof());
    assert_eq!(stream.begin_token(), None);
}

#[test]
fn test_backup_stays_inside_lexeme() {
    let mut stream = SourceCharStream::new("x>>=");
    stream.begin_token();
    stream.begin_token();
    stream.eat_while(|c| c == '>' || c == '=');
    assert_eq!(stream.lexeme(), ">>=");

    stream.backup(1);
    assert_eq!(stream.lexeme(), ">>");
    assert_eq!(stream.peek(), Some('='));

    stream.backup(10);
    assert_eq!(stream.lexeme(), "");
    assert_eq!(stream.pos(), stream.token_start());
    assert_eq!(stream.pos(), 1);
}

#[test]
fn test_multibyte_offsets_are_bytes() {
    let mut stream = SourceCharStream::new("é+ß");
    assert_eq!(stream.begin_token(), Some('é'));
    assert_eq!((stream.start_offset(), stream.end_offset()), (0, 2));

    stream.begin_token();
    assert_eq!(stream.begin_token(), Some('ß'));
    assert_eq!((stream.start_offset(), stream.end_offset()), (3, 5));

    stream.backup(1);
    assert_eq!(stream.pos(), 3);
    assert_eq!(stream.rest(), "ß");
}

#[test]
fn test_start_token_is_zero_width() {
    let mut stream = SourceCharStream::new("ab");
    stream.eat_while(char::is_alphabetic);
    stream.start_token();
    assert_eq!((stream.start_offset(), stream.end_offset()), (2, 2));
    assert_eq!(stream.image(), "");
    assert_eq!(stream.text(), "ab");
}

#[test]
fn test_empty_text() {
    let mut stream = SourceCharStream::new("");
    assert!(stream.is_eof());
    assert_eq!(stream.peek(), None);
    assert_eq!(stream.begin_token(), None);
    assert_eq!(stream.lexeme(), "");
}
