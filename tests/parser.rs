//! Parser and serializer behavior on whole stylesheets

use rstest::rstest;
use spriter::css::formats::{serialize, to_treeviz_str};
use spriter::css::lexing::tokenize;
use spriter::css::{parse, ParseError, TokenKind, Tree};

/// Selectors with their (property, value) pairs, in tree order
fn rules(tree: &Tree) -> Vec<(String, Vec<(String, String)>)> {
    tree.children(tree.root())
        .map(|selector| {
            let declarations = tree
                .children(selector)
                .filter(|&child| tree.kind(child) == TokenKind::Property)
                .map(|property| {
                    let value = tree
                        .child_of_kind(property, TokenKind::Value)
                        .expect("every declaration has a value");
                    (tree.text(property).to_string(), tree.text(value).to_string())
                })
                .collect();
            (tree.text(selector).to_string(), declarations)
        })
        .collect()
}

#[test]
fn test_round_trip_keeps_rules() {
    let source = "\
body { margin: 0; font: 12px/1.5 sans-serif; }
a:hover, a:focus { color: #f00; }
.empty {}
";
    let tree = parse(source).unwrap();
    let reparsed = parse(&serialize(&tree)).unwrap();
    assert_eq!(rules(&tree), rules(&reparsed));
    assert_eq!(
        rules(&tree),
        vec![
            (
                "body".to_string(),
                vec![
                    ("margin".to_string(), "0".to_string()),
                    ("font".to_string(), "12px/1.5 sans-serif".to_string()),
                ]
            ),
            (
                "a:hover, a:focus".to_string(),
                vec![("color".to_string(), "#f00".to_string())]
            ),
            (".empty".to_string(), vec![]),
        ]
    );
}

#[test]
fn test_serialize_is_canonical() {
    let tree = parse("a{color:red;margin:0;}b{top:0;}").unwrap();
    let once = serialize(&tree);
    let twice = serialize(&parse(&once).unwrap());
    assert_eq!(once, twice);
    assert_eq!(once, "a {\n\tcolor: red;\n\tmargin: 0;\n}\nb {\n\ttop: 0;\n}\n");
}

#[test]
fn test_comment_stripping() {
    let with_comment = parse("a/* c */{color:red;}").unwrap();
    let without_comment = parse("a{color:red;}").unwrap();
    assert_eq!(
        to_treeviz_str(&with_comment),
        to_treeviz_str(&without_comment)
    );
    assert_eq!(serialize(&with_comment), serialize(&without_comment));
}

#[test]
fn test_comments_everywhere() {
    let tree = parse(
        "/* lead */ a /* sel */ { /* body */ color /* name */ : red /* value */ ; /* tail */ }",
    )
    .unwrap();
    assert_eq!(
        rules(&tree),
        vec![(
            "a".to_string(),
            vec![("color".to_string(), "red".to_string())]
        )]
    );
}

#[test]
fn test_split_value_is_joined() {
    let tree = parse("a { margin: 0 /* top */ 1px; }").unwrap();
    assert_eq!(serialize(&tree), "a {\n\tmargin: 0 1px;\n}\n");
}

#[test]
fn test_unterminated_selector_is_dropped() {
    let tree = parse("a { color: red; } b").unwrap();
    assert_eq!(rules(&tree).len(), 1);
}

#[test]
fn test_token_stream() {
    let tokens = tokenize("a /* c */ { color: red; }");
    insta::assert_debug_snapshot!(tokens, @r###"
    [
        Token {
            kind: Selector,
            text: "a",
        },
        Token {
            kind: CommentStart,
            text: "/*",
        },
        Token {
            kind: Comment,
            text: "c",
        },
        Token {
            kind: CommentEnd,
            text: "*/",
        },
        Token {
            kind: LeftBrace,
            text: "{",
        },
        Token {
            kind: Property,
            text: "color",
        },
        Token {
            kind: Separator,
            text: ":",
        },
        Token {
            kind: Value,
            text: "red",
        },
        Token {
            kind: Terminator,
            text: ";",
        },
        Token {
            kind: RightBrace,
            text: "}",
        },
    ]
    "###);
}

#[rstest]
#[case::missing_separator("a { color red; }", TokenKind::Separator, Some(TokenKind::RightBrace))]
#[case::unterminated_value("a { color: red }", TokenKind::Value, None)]
#[case::empty_value("a { color: ; }", TokenKind::Value, Some(TokenKind::Terminator))]
#[case::unclosed_body("a { color: red;", TokenKind::RightBrace, None)]
#[case::open_brace_only("a {", TokenKind::RightBrace, None)]
#[case::missing_selector("{ color: red; }", TokenKind::Selector, Some(TokenKind::LeftBrace))]
#[case::missing_property("a { : red; }", TokenKind::Property, Some(TokenKind::Separator))]
#[case::comment_splits_selector("a/* c */b{}", TokenKind::LeftBrace, Some(TokenKind::Selector))]
#[case::comment_splits_property(
    "a { font /* c */ size: 1px; }",
    TokenKind::Separator,
    Some(TokenKind::Property)
)]
fn test_parse_errors(
    #[case] source: &str,
    #[case] expected: TokenKind,
    #[case] found: Option<TokenKind>,
) {
    let error: ParseError = parse(source).unwrap_err();
    assert_eq!(error.expected(), expected, "{}", error);
    assert_eq!(error.found(), found, "{}", error);
}
