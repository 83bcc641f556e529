use chaincalc::{
    ast::{Function, Operand, Operator},
    error::{CalcError, ParseError, RuntimeError},
    get_result,
    interpreter::dialect::Dialect,
    run,
};
use pretty_assertions::assert_eq;

fn failure(src: &str) -> CalcError {
    match get_result(src, Dialect::Extended) {
        Ok(value) => panic!("{src:?} succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn parse_failure(src: &str) -> ParseError {
    match failure(src) {
        CalcError::Parse(e) => e,
        other => panic!("{src:?} failed with {other:?} instead of a parse error"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match failure(src) {
        CalcError::Runtime(e) => e,
        other => panic!("{src:?} failed with {other:?} instead of a runtime error"),
    }
}

#[test]
fn missing_argument_is_input_absent() {
    assert_eq!(run(None, Dialect::Extended), Err(CalcError::InputAbsent));
    assert_eq!(CalcError::InputAbsent.to_string(), "empty expression");
}

#[test]
fn present_but_empty_argument_is_not_an_error() {
    assert_eq!(run(Some(""), Dialect::Extended), Ok(None));
    assert_eq!(run(Some("1+1"), Dialect::Sequential), Ok(Some(2.0)));
}

#[test]
fn malformed_literals() {
    for src in ["1.2.3", ".", "1+.", "2..5*3"] {
        assert!(matches!(parse_failure(src), ParseError::MalformedLiteral { .. }), "{src:?}");
    }

    match parse_failure("4*1.2.3") {
        ParseError::MalformedLiteral { literal, .. } => assert_eq!(literal, "1.2.3"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_failure("(1+2"), ParseError::UnclosedGroup { depth: 1 });
    assert_eq!(parse_failure("((1"), ParseError::UnclosedGroup { depth: 2 });
    assert_eq!(parse_failure("1+2)"), ParseError::UnmatchedClose);
    assert_eq!(parse_failure(")"), ParseError::UnmatchedClose);
    assert_eq!(parse_failure("(1))+(2"), ParseError::UnmatchedClose);
}

#[test]
fn missing_operands_fail_at_evaluation() {
    assert_eq!(runtime_failure("-5"),
               RuntimeError::IncompleteExpression { operator: Operator::Subtract,
                                                    operand:  Operand::Left, });
    assert_eq!(runtime_failure("2*"),
               RuntimeError::IncompleteExpression { operator: Operator::Multiply,
                                                    operand:  Operand::Right, });
    assert_eq!(runtime_failure("*"),
               RuntimeError::IncompleteExpression { operator: Operator::Multiply,
                                                    operand:  Operand::Left, });
    assert_eq!(runtime_failure("(1+)*2"),
               RuntimeError::IncompleteExpression { operator: Operator::Add,
                                                    operand:  Operand::Right, });
}

#[test]
fn misplaced_separators() {
    for src in ["1,2", "(1,2)", "pow(1,2,3)", "pow((1,2),3)"] {
        assert_eq!(parse_failure(src), ParseError::UnexpectedSeparator, "{src:?}");
    }
}

#[test]
fn malformed_calls() {
    assert_eq!(parse_failure("pow(2)"),
               ParseError::MissingArgument { function: Function::Pow });
    assert_eq!(parse_failure("pow 2"),
               ParseError::ExpectedArguments { function: Function::Pow });
    assert_eq!(parse_failure("2+pow"),
               ParseError::ExpectedArguments { function: Function::Pow });
}

#[test]
fn function_syntax_is_only_checked_in_the_extended_dialect() {
    assert_eq!(get_result("1,2", Dialect::Grouped), Ok(Some(12.0)));
    assert_eq!(get_result("pow 2", Dialect::Sequential), Ok(Some(2.0)));
}

#[test]
fn arithmetic_edge_cases_are_not_errors() {
    assert_eq!(get_result("1/0", Dialect::Extended), Ok(Some(f64::INFINITY)));
    assert_eq!(get_result("pow(0,0)", Dialect::Extended), Ok(Some(1.0)));

    let nan = get_result("0/0", Dialect::Extended).unwrap().unwrap();
    assert!(nan.is_nan());

    let root = get_result("pow((0-8),0.5)", Dialect::Extended).unwrap().unwrap();
    assert!(root.is_nan());
}

#[test]
fn error_messages() {
    assert_eq!(ParseError::UnmatchedClose.to_string(),
               "Closing parenthesis ')' has no matching '('.");
    assert_eq!(failure("(1").to_string(),
               "Expected closing parenthesis ')' but none found (1 group(s) left open).");
    assert_eq!(failure("+1").to_string(),
               "Incomplete expression: left operand of '+' is missing.");
    assert_eq!(failure("pow(1)").to_string(),
               "Function 'pow' expects two arguments separated by ','.");
}
