use pretty_assertions::assert_eq;
use rstruth::parser::*;
use rstruth::{EvalError, IdentifierSet};

fn postfix(formula: &str) -> String {
    Postfix::parse(formula)
        .expect("could not convert formula")
        .to_string()
}

#[test]
fn test_identifiers_sorted() {
    let identifiers = IdentifierSet::collect("c & a | b & a");

    assert_eq!(identifiers.as_slice(), &['a', 'b', 'c']);
    assert_eq!(identifiers.position('a'), Some(0));
    assert_eq!(identifiers.position('c'), Some(2));
    assert_eq!(identifiers.position('d'), None);
    assert_eq!(identifiers.to_string(), "a b c");
}

#[test]
fn test_identifiers_by_character_code() {
    // uppercase letters sort before lowercase ones
    let identifiers = IdentifierSet::collect("b & B | 7 # a");

    assert_eq!(identifiers.as_slice(), &['B', 'a', 'b']);
}

#[test]
fn test_identifiers_match_postfix() {
    let formula = "(q > p) = -(r | p)";

    assert_eq!(
        Postfix::parse(formula).expect("could not convert formula").identifiers(),
        IdentifierSet::collect(formula)
    );
}

#[test]
fn test_basic_conversion() {
    assert_eq!(postfix("a"), "a");
    assert_eq!(postfix("a&b"), "a b &");
    assert_eq!(postfix("  a \t&  b "), "a b &");
    assert_eq!(postfix("(a)"), "a");
    assert_eq!(postfix("((a))"), "a");
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(postfix("a&b|c"), "a b & c |");
    assert_eq!(postfix("a|b&c"), "a b | c &");
    assert_eq!(postfix("a>b>c"), "a b > c >");
    assert_eq!(postfix("a=b&c|d"), "a b = c & d |");
    assert_eq!(postfix("a > (b | c)"), "a b c | >");
    assert_eq!(postfix("(a > b) = (b > a)"), "a b > b a > =");
}

#[test]
fn test_negation() {
    assert_eq!(postfix("-a"), "a -");
    assert_eq!(postfix("--a"), "a - -");
    assert_eq!(postfix("-a&b"), "a - b &");
    assert_eq!(postfix("a&-b"), "a b - &");
    assert_eq!(postfix("a&-b|c"), "a b - & c |");
    assert_eq!(postfix("-(a&b)"), "a b & -");
    assert_eq!(postfix("--(a | -b)"), "a b - | - -");
}

#[test]
fn test_postfix_not_longer_than_formula() {
    for formula in ["a", "-(a&b)", "((a | b) > -c) = d", "  a  ", "--a"] {
        let converted = Postfix::parse(formula).expect("could not convert formula");
        assert!(converted.len() <= formula.chars().count());
    }
}

#[test]
fn test_tokens() {
    let converted: Postfix = "a > -b".parse().expect("could not convert formula");

    assert_eq!(
        converted.tokens(),
        &[
            Token::Var('a'),
            Token::Var('b'),
            Token::Op(Operator::Not),
            Token::Op(Operator::Implies),
        ]
    );
}

#[test]
fn test_mismatched_parenthesis() {
    assert_eq!(
        Postfix::parse("(a&b"),
        Err(ParseError::MismatchedParenthesis { position: 0 })
    );
    assert_eq!(
        Postfix::parse("a&b)"),
        Err(ParseError::MismatchedParenthesis { position: 3 })
    );
    assert_eq!(
        Postfix::parse(")("),
        Err(ParseError::MismatchedParenthesis { position: 0 })
    );
    assert_eq!(
        Postfix::parse("((a)"),
        Err(ParseError::MismatchedParenthesis { position: 0 })
    );
}

#[test]
fn test_illegal_character() {
    assert_eq!(
        Postfix::parse("a#b"),
        Err(ParseError::IllegalCharacter {
            character: '#',
            position: 1
        })
    );
    assert_eq!(
        Postfix::parse("a & 1"),
        Err(ParseError::IllegalCharacter {
            character: '1',
            position: 4
        })
    );
    assert_eq!(
        Postfix::parse("é"),
        Err(ParseError::IllegalCharacter {
            character: 'é',
            position: 0
        })
    );
}

#[test]
fn test_first_error_wins() {
    // conversion stops at the illegal character, before the missing ')' is noticed
    assert_eq!(
        Postfix::parse("(a ^ b"),
        Err(ParseError::IllegalCharacter {
            character: '^',
            position: 3
        })
    );
}

#[test]
fn test_stray_operators_are_accepted_by_conversion() {
    assert_eq!(postfix("-"), "-");
    assert_eq!(postfix("a&"), "a &");
    assert_eq!(postfix("&a"), "a &");
    assert_eq!(postfix(""), "");

    assert_eq!(
        Postfix::parse("-").expect("could not convert").check_arity(),
        Err(EvalError::StackUnderflow { position: 0 })
    );
    assert_eq!(
        Postfix::parse("a&").expect("could not convert").check_arity(),
        Err(EvalError::StackUnderflow { position: 1 })
    );
    assert_eq!(
        Postfix::parse("").expect("could not convert").check_arity(),
        Err(EvalError::EmptyExpression)
    );
    assert_eq!(
        Postfix::parse("ab").expect("could not convert").check_arity(),
        Ok(())
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParseError::IllegalCharacter {
            character: '#',
            position: 1
        }
        .to_string(),
        "illegal character '#' at position 1"
    );
    assert_eq!(
        ParseError::MismatchedParenthesis { position: 0 }.to_string(),
        "mismatched parenthesis at position 0"
    );
}
