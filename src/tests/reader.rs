use crate::errors::ErrorKind;
use crate::expression::Expression;
use crate::lexer::{is_balanced, tokenize, Token};
use crate::parser::{parse, parse_sequence, MAX_NESTING_DEPTH};
use crate::symbol::Symbol;

#[test]
fn tokens_isolate_parens() {
    let tokens = tokenize("(+(x)1)");
    assert_eq!(
        tokens,
        vec![
            Token::ListOpen,
            Token::Atom("+".to_string()),
            Token::ListOpen,
            Token::Atom("x".to_string()),
            Token::ListClose,
            Token::Atom("1".to_string()),
            Token::ListClose,
        ]
    );
}

#[test]
fn tokens_preserve_order_and_skip_whitespace() {
    let tokens = tokenize("  a   b\n\tc ");
    assert_eq!(
        tokens,
        vec![
            Token::Atom("a".to_string()),
            Token::Atom("b".to_string()),
            Token::Atom("c".to_string()),
        ]
    );
}

#[test]
fn balance_tracking() {
    assert!(is_balanced(&tokenize("(a (b c))")));
    assert!(!is_balanced(&tokenize("(a (b c)")));
    // a surplus close paren is the reader's problem, not a
    // continuation line
    assert!(is_balanced(&tokenize(")")));
}

#[test]
fn classify_integer_before_float() {
    assert_eq!(Expression::from_literal("10"), Expression::Integer(10));
    assert_eq!(Expression::from_literal("-3"), Expression::Integer(-3));
    assert_eq!(Expression::from_literal("10.0"), Expression::Float(10.0));
    assert_eq!(Expression::from_literal("2.5e3"), Expression::Float(2500.0));
    assert_eq!(
        Expression::from_literal("x1"),
        Expression::Symbol(Symbol::new("x1"))
    );
    // not valid by the integer or float grammar, so it stays a symbol
    assert_eq!(
        Expression::from_literal("1+2"),
        Expression::Symbol(Symbol::new("1+2"))
    );
}

#[test]
fn read_nested_combination() {
    let expr = parse("(+ 1 (* 2 3))").unwrap();
    assert_eq!(
        expr,
        Expression::Combination(vec![
            Expression::Symbol(Symbol::new("+")),
            Expression::Integer(1),
            Expression::Combination(vec![
                Expression::Symbol(Symbol::new("*")),
                Expression::Integer(2),
                Expression::Integer(3),
            ]),
        ])
    );
}

#[test]
fn unexpected_close_paren() {
    let err = parse(")").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnexpectedCloseParen));
}

#[test]
fn unterminated_list() {
    let err = parse("(").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnexpectedEof));

    let err = parse("(+ 1 2").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnexpectedEof));
}

#[test]
fn empty_input() {
    let err = parse("").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnexpectedEof));
}

#[test]
fn trailing_tokens_are_ignored() {
    // only one top-level expression is read per call
    assert_eq!(parse("123 124").unwrap(), Expression::Integer(123));
}

#[test]
fn sequence_reads_all_forms() {
    let forms = parse_sequence("(define r 10) r").unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[1], Expression::Symbol(Symbol::new("r")));
}

#[test]
fn nesting_depth_is_capped() {
    let depth = MAX_NESTING_DEPTH + 2;
    let source = "(".repeat(depth) + &")".repeat(depth);
    let err = parse(&source).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::RecursionDepth));
}

#[test]
fn expressions_render_as_source() {
    for src in &["(+ 1 (* 2 3))", "10", "10.5", "10.0", "foo", "()"] {
        assert_eq!(parse(src).unwrap().to_string(), *src);
    }
}
