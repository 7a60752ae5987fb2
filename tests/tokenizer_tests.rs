/// End-to-end tests for the toy tokenizer
/// Demonstrates: source -> comment stripping -> scanners -> token stream
use toyscript::{Error, ErrorSeverity, TokenKind, TokenValue, Tokenizer, TokenizerOptions};

const ROW_SCRIPT: &str = r#"
[toy project test]
	[test obj] 1.5 -2 0 3
	[version] `1.0.0`
	[message] `hello, world!`

[toy project block]
	[simple tag]
[toy project block end]

[line tag] 1
[simple tag]
"#;

fn values(tokens: &Tokenizer) -> Vec<TokenValue<'_>> {
    tokens.iter().map(|t| t.value()).collect()
}

#[test]
fn test_load() {
    let tokens = Tokenizer::from_bytes(ROW_SCRIPT.as_bytes().to_vec());
    assert!(!tokens.plain().is_empty());
    assert!(tokens.is_ok(), "{:?}", tokens.error_reason());
}

#[test]
fn test_iterating_kinds_match_values() {
    let tokens = Tokenizer::from_source(ROW_SCRIPT);
    for token in &tokens {
        match token.value() {
            TokenValue::Number(_) => assert_eq!(token.kind(), TokenKind::Number),
            TokenValue::String(_) => assert_eq!(token.kind(), TokenKind::String),
            TokenValue::Tag(_) => assert_eq!(token.kind(), TokenKind::Tag),
        }
    }
}

#[test]
fn test_check_valid_parsing() {
    let tokens = Tokenizer::from_source(
        "[toy project test]\n\t[version] 20211222\n\t[message] `hello, world!`\n",
    );
    assert_eq!(
        values(&tokens),
        vec![
            TokenValue::Tag("[toy project test]"),
            TokenValue::Tag("[version]"),
            TokenValue::Number(20211222.0),
            TokenValue::Tag("[message]"),
            TokenValue::String("hello, world!"),
        ]
    );
    assert!(tokens.error_reason().is_none());
}

#[test]
fn test_numbers_parse_like_std() {
    let tokens = Tokenizer::from_source("1.5 -2 0 3");
    let numbers: Vec<f64> = tokens.iter().filter_map(|t| t.as_number()).collect();
    assert_eq!(numbers, vec![1.5, -2.0, 0.0, 3.0]);
}

#[test]
fn test_err_num_dot_twice() {
    let tokens = Tokenizer::from_source("\n[toy project test]\n\t[test obj] 1.5 -2 0 3\n\t[version] 1.0.\n");
    let reason = tokens.error_reason().expect("scan should fail");
    assert!(!reason.is_empty());
    assert!(matches!(tokens.error(), Some(Error::DuplicateDecimalPoint { .. })));
    // [toy project test] [test obj] 1.5 -2 0 3 [version]
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_err_str_not_end() {
    let tokens = Tokenizer::from_source("\n[toy project test]\n\t[test obj] 1.5 -2 0 3\n\t[version] `1.0.\n");
    assert!(tokens.error_reason().is_some());
    match tokens.error() {
        Some(Error::UnterminatedToken { kind, at }) => {
            assert_eq!(*kind, TokenKind::String);
            assert_eq!((at.line, at.column), (4, 12));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_err_invalid_tag_id() {
    let tokens = Tokenizer::from_source("\n[toy project tes)t]\n");
    assert!(tokens.error_reason().is_some());
    assert!(tokens.is_empty());
    let err = tokens.error().unwrap();
    assert_eq!(err.classify(), ErrorSeverity::Fatal);
    assert!(matches!(err, Error::InvalidTagCharacter { character: ')', .. }));
}

#[test]
fn test_err_invalid_token() {
    let tokens = Tokenizer::from_source("[a] = 1");
    assert_eq!(tokens.len(), 1);
    assert!(matches!(
        tokens.error(),
        Some(Error::InvalidToken { character: '=', .. })
    ));
}

#[test]
fn test_separators_never_fail() {
    let tokens = Tokenizer::from_source("\0 \t\r\n[a]\r\n\t 1 \0`s`\n\n");
    assert!(tokens.is_ok());
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokens_across_comments() {
    let tokens = Tokenizer::from_source("[a] /* 1 2\n 3 */ [b] // `ignored`\n4");
    assert_eq!(
        values(&tokens),
        vec![TokenValue::Tag("[a]"), TokenValue::Tag("[b]"), TokenValue::Number(4.0)]
    );
}

#[test]
fn test_sample_script_from_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/script/sample.toy");
    let tokens = Tokenizer::from_path(path).unwrap();

    assert!(tokens.is_ok(), "{:?}", tokens.error_reason());
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens.iter().next().unwrap().as_tag(), Some("[toy project test]"));
    assert!(!tokens.plain().contains("//"));
    assert!(!tokens.plain().contains("/*"));
}

#[test]
fn test_unreadable_path() {
    let err = Tokenizer::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/script/missing.toy"))
        .unwrap_err();
    assert!(matches!(err, Error::SourceUnreadable { .. }));
    assert_eq!(err.classify(), ErrorSeverity::Recoverable);
}

#[test]
fn test_size_limit_applies_to_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/script/sample.toy");
    let options = TokenizerOptions {
        max_source_bytes: Some(8),
        ..Default::default()
    };
    let err = Tokenizer::from_path_with_options(path, &options).unwrap_err();
    assert!(matches!(err, Error::SourceTooLarge { limit: 8, .. }));
}

#[test]
fn test_interner_holds_text_tokens_in_order() {
    let tokens = Tokenizer::from_source("[a] 1 `b` [c]");
    let texts: Vec<&str> = tokens.interner().iter().map(|(_, s)| s).collect();
    assert_eq!(texts, vec!["[a]", "b", "[c]"]);
}

#[test]
fn test_concurrent_readers() {
    let tokens = Tokenizer::from_source(ROW_SCRIPT);
    let expected = values(&tokens);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| values(&tokens))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
