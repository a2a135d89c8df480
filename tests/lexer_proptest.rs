//! Property-based tests for the lexer, parser and serializer
//!
//! The lexer must accept any input without panicking, and any well-formed stylesheet must
//! survive a serialize/parse cycle with its rules intact.

use proptest::prelude::*;
use spriter::css::lexing::tokenize;
use spriter::css::{parse, serialize, TokenKind, Tree};

type Rule = (String, Vec<(String, String)>);

fn selector_strategy() -> impl Strategy<Value = String> {
    "[a-z.#][a-z0-9-]{0,6}( [a-z][a-z0-9]{0,4})?"
}

fn property_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9#(][a-z0-9.()]{0,6}( [a-z0-9]{1,4})?"
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        selector_strategy(),
        prop::collection::vec((property_strategy(), value_strategy()), 0..4),
    )
}

fn render(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|(selector, declarations)| {
            let body: String = declarations
                .iter()
                .map(|(property, value)| format!("{}:{};", property, value))
                .collect();
            format!("{}{{{}}}", selector, body)
        })
        .collect()
}

fn rules_of(tree: &Tree) -> Vec<Rule> {
    tree.children(tree.root())
        .map(|selector| {
            let declarations = tree
                .children(selector)
                .filter(|&child| tree.kind(child) == TokenKind::Property)
                .map(|property| {
                    let value = tree.child_of_kind(property, TokenKind::Value).unwrap();
                    (tree.text(property).to_string(), tree.text(value).to_string())
                })
                .collect();
            (tree.text(selector).to_string(), declarations)
        })
        .collect()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_lexer_never_panics(source in "\\PC{0,64}") {
            let _ = tokenize(&source);
        }

        #[test]
        fn test_tokens_are_trimmed_and_non_empty(source in "[a-z{}:;/* \n\t]{0,64}") {
            for token in tokenize(&source) {
                prop_assert!(!token.text.is_empty(), "{:?}", token);
                prop_assert_eq!(token.text.trim(), token.text.as_str());
                prop_assert_ne!(token.kind, TokenKind::Root);
            }
        }

        #[test]
        fn test_parser_never_panics(source in "[a-z{}:;/* \n]{0,64}") {
            let _ = parse(&source);
        }

        #[test]
        fn test_round_trip_preserves_rules(rules in prop::collection::vec(rule_strategy(), 0..5)) {
            let tree = parse(&render(&rules)).unwrap();
            prop_assert_eq!(rules_of(&tree), rules.clone());

            let serialized = serialize(&tree);
            let reparsed = parse(&serialized).unwrap();
            prop_assert_eq!(rules_of(&reparsed), rules);
            prop_assert_eq!(serialize(&reparsed), serialized);
        }
    }
}
