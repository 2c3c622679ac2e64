//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations and assignments
//! - Operator precedence and associativity
//! - Control flow and block collapsing
//! - Syntax errors

use crate::ast::ast::{Expr, ExprType};
use crate::lexer::lexer::tokenize;

use super::parser::{parse, Parser, MAX_NESTING_DEPTH};

fn parse_one(source: &str) -> Expr {
    let mut statements = parse(source.to_string(), Some("test.lang".to_string())).unwrap();
    assert_eq!(statements.len(), 1, "expected a single statement in {:?}", source);
    statements.remove(0)
}

fn parse_error_name(source: &str) -> String {
    parse(source.to_string(), Some("test.lang".to_string()))
        .unwrap_err()
        .get_error_name()
        .to_string()
}

/// Fully parenthesized rendering, so grouping is visible.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            operator,
            left,
            right,
            ..
        } => format!("({} {} {})", shape(left), operator, shape(right)),
        other => other.to_string(),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let statement = parse_one("int x = 42;");

    assert_eq!(statement.get_expr_type(), ExprType::VariableDeclaration);
    assert_eq!(statement.to_string(), "int x = 42.0");
}

#[test]
fn test_parse_array_declaration() {
    match parse_one("int a[5];") {
        Expr::ArrayDeclaration { name, size, .. } => {
            assert_eq!(name, "a");
            assert_eq!(size, 5);
        }
        other => panic!("expected array declaration, got {:?}", other),
    }

    match parse_one("int b[2.9];") {
        Expr::ArrayDeclaration { size, .. } => assert_eq!(size, 2),
        other => panic!("expected array declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_array_access_and_assignment() {
    assert_eq!(parse_one("a[i + 1];").get_expr_type(), ExprType::ArrayAccess);

    let assignment = parse_one("a[1 + 1] = 3 * 2;");
    assert_eq!(assignment.get_expr_type(), ExprType::VariableAssignment);
    assert_eq!(assignment.to_string(), "a[1.0 + 1.0] = 3.0 * 2.0");

    let scalar = parse_one("x = x + 1;");
    assert_eq!(scalar.to_string(), "x = x + 1.0");
}

#[test]
fn test_parse_arithmetic_precedence() {
    assert_eq!(shape(&parse_one("2 + 3 * 4;")), "(2.0 + (3.0 * 4.0))");
    assert_eq!(shape(&parse_one("(2 + 3) * 4;")), "((2.0 + 3.0) * 4.0)");
    assert_eq!(shape(&parse_one("a + b * c - d;")), "((a + (b * c)) - d)");
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(shape(&parse_one("a - b - c;")), "((a - b) - c)");
    assert_eq!(shape(&parse_one("8 / 4 / 2;")), "((8.0 / 4.0) / 2.0)");
    assert_eq!(shape(&parse_one("a == b != c;")), "((a == b) != c)");
}

#[test]
fn test_parse_logical_precedence() {
    assert_eq!(shape(&parse_one("a || b && c;")), "(a || (b && c))");
    assert_eq!(shape(&parse_one("a && b || c;")), "((a && b) || c)");
}

#[test]
fn test_parse_equality_is_looser_than_relational() {
    assert_eq!(shape(&parse_one("a < b == c;")), "((a < b) == c)");
    assert_eq!(shape(&parse_one("a == b < c;")), "(a == (b < c))");
}

#[test]
fn test_parse_relational_binds_tighter_than_additive() {
    assert_eq!(shape(&parse_one("i < n + 1;")), "((i < n) + 1.0)");
    assert_eq!(shape(&parse_one("1 + 2 * 3 < 4 && 5;")), "((1.0 + ((2.0 * 3.0) < 4.0)) && 5.0)");
}

#[test]
fn test_parse_if_statement() {
    let statement = parse_one("if (x > 0) { print x; };");

    match &statement {
        Expr::If { then_body, .. } => assert_eq!(then_body.get_expr_type(), ExprType::Print),
        other => panic!("expected if, got {:?}", other),
    }
    assert_eq!(statement.to_string(), "x > 0.0 x print if");
}

#[test]
fn test_parse_while_loop() {
    let statement = parse_one("while (i < 3) { i = i + 1; print i; }");

    match &statement {
        Expr::While { body, .. } => match body.as_ref() {
            Expr::Block { body, .. } => assert_eq!(body.len(), 2),
            other => panic!("expected block body, got {:?}", other),
        },
        other => panic!("expected while, got {:?}", other),
    }
    assert_eq!(statement.to_string(), "i < 3.0 { i = i + 1.0 ; i print } while");
}

#[test]
fn test_parse_block_collapses_single_statement() {
    let statement = parse_one("while (i < 3) { i = i + 1; }");

    match statement {
        Expr::While { body, .. } => assert_eq!(body.get_expr_type(), ExprType::VariableAssignment),
        other => panic!("expected while, got {:?}", other),
    }
}

#[test]
fn test_parse_block_allows_missing_final_semicolon() {
    let statement = parse_one("if (0) { 99 }");

    match statement {
        Expr::If { then_body, .. } => assert_eq!(then_body.get_expr_type(), ExprType::Number),
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_block() {
    match parse_one("if (1) { ; }") {
        Expr::If { then_body, .. } => match *then_body {
            Expr::Block { body, .. } => assert!(body.is_empty()),
            other => panic!("expected empty block, got {:?}", other),
        },
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration_inside_block() {
    let statement = parse_one("if (1) { int y = 2; print y; }");

    assert_eq!(statement.to_string(), "1.0 { int y = 2.0 ; y print } if");
}

#[test]
fn test_parse_io_statements() {
    assert_eq!(parse_one("print \"hi\";").to_string(), "hi print");
    assert_eq!(parse_one("endl;").to_string(), "endl");
    assert_eq!(parse_one("read x;").to_string(), "x input");
    assert_eq!(parse_one("print 1 + 2;").to_string(), "1.0 + 2.0 print");
}

#[test]
fn test_parse_program_skips_stray_semicolons() {
    let statements = parse(";; int x = 1;;; print x;;".to_string(), None).unwrap();

    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].get_expr_type(), ExprType::VariableDeclaration);
    assert_eq!(statements[1].get_expr_type(), ExprType::Print);
}

#[test]
fn test_parse_last_statement_may_end_at_eof() {
    let statements = parse("int x = 1; print x".to_string(), None).unwrap();

    assert_eq!(statements.len(), 2);
}

#[test]
fn test_parse_syntax_errors() {
    assert_eq!(parse_error_name("if x { print 1; }"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("if (x) print 1;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("while (x { }"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("int = 5;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("int x 5;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("int a[n];"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("(1 + 2;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("a[1;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("read 5;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("print 1 print 2;"), "UnexpectedTokenDetailed");
    assert_eq!(parse_error_name("while (1) { print 1; "), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_missing_right_hand_side() {
    let error = parse("1 + ;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert!(error.get_tip().to_string().contains("right-hand side"));
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_parse_lexer_errors_propagate() {
    assert_eq!(parse_error_name("int x = 1.2.3;"), "NumberParseError");
    assert_eq!(parse_error_name("x = $;"), "UnrecognisedToken");
}

#[test]
fn test_parse_nesting_limit() {
    let nested = |depth: usize| format!("{}1{};", "(".repeat(depth), ")".repeat(depth));

    assert!(parse(nested(100), None).is_ok());
    assert_eq!(parse_error_name(&nested(MAX_NESTING_DEPTH + 10)), "NestingTooDeep");
}

#[test]
fn test_parse_statement_is_incremental() {
    let mut parser = Parser::from_source("print 1; @".to_string(), None).unwrap();

    let first = parser.parse_statement().unwrap();
    assert!(first.is_some());
    assert!(parser.parse_statement().is_err());
}

#[test]
fn test_parser_from_tokens() {
    let tokens = tokenize("int x = 5; x = x * 2;".to_string(), Some("test.lang".to_string())).unwrap();
    let mut parser = Parser::from_tokens(tokens).unwrap();

    let mut count = 0;
    while let Some(_statement) = parser.parse_statement().unwrap() {
        count += 1;
    }

    assert_eq!(count, 2);
}

#[test]
fn test_parse_spans_cover_statement() {
    let statement = parse_one("  int x = 1 + 2;");

    assert_eq!(statement.get_span().start.0, 2);
    assert_eq!(statement.get_span().end.0, 15);
}

fn sum_chain(terms: usize) -> String {
    format!("1{}", " + 1".repeat(terms - 1))
}

#[test]
fn test_parse_long_operator_chain_is_bounded() {
    let error = parse(sum_chain(10_000) + ";", None).unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_parse_operator_chain_within_limit() {
    let statement = parse_one(&(sum_chain(200) + ";"));

    assert_eq!(statement.get_expr_type(), ExprType::Binary);
    assert_eq!(statement.depth(), 200);
}

#[test]
fn test_parse_chain_depth_includes_grouped_operands() {
    let grouped = format!("({}){};", sum_chain(200), " + 1".repeat(100));

    assert_eq!(parse_error_name(&grouped), "NestingTooDeep");
}

#[test]
fn test_parse_array_size_too_large() {
    let error = parse("int a[100000000000000000000];".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "ArrayTooLarge");
    assert_eq!(error.get_position().0, 6);
}
