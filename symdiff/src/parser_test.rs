use crate::expr::Expr;
use crate::parser::{parse, FunctionParser, ParseError};

fn x() -> Expr {
    Expr::var("x")
}

fn num(n: f64) -> Expr {
    Expr::constant(n)
}

#[test]
fn test_parse1() {
    let expr = FunctionParser::parse_str("x+3").unwrap();
    assert_eq!(expr, Expr::add(x(), num(3.0)));
    fuzzy_eq!(expr.eval(5.0), 8.0);
}

#[test]
fn test_parse2() {
    let expr = parse("2 * x ^ 2").unwrap();
    assert_eq!(expr, Expr::mul(num(2.0), Expr::pow(x(), num(2.0))));
}

#[test]
fn test_parse3() {
    // additive and multiplicative chains fold from the left
    assert_eq!(
        parse("1-2+x").unwrap(),
        Expr::add(Expr::sub(num(1.0), num(2.0)), x())
    );
    assert_eq!(
        parse("x/2*3").unwrap(),
        Expr::mul(Expr::div(x(), num(2.0)), num(3.0))
    );
    assert_eq!(
        parse("1+x*2-3/x").unwrap(),
        Expr::sub(
            Expr::add(num(1.0), Expr::mul(x(), num(2.0))),
            Expr::div(num(3.0), x())
        )
    );
}

#[test]
fn power_is_left_associative() {
    let expr = parse("2^3^2").unwrap();
    assert_eq!(expr, Expr::pow(Expr::pow(num(2.0), num(3.0)), num(2.0)));
    fuzzy_eq!(expr.eval(0.0), 64.0);
}

#[test]
fn functions() {
    assert_eq!(parse("sin(x)").unwrap(), Expr::sin(x()));
    assert_eq!(parse("ln((x))").unwrap(), Expr::ln(x()));
    assert_eq!(
        parse("cos(x+1)").unwrap(),
        Expr::cos(Expr::add(x(), num(1.0)))
    );
    assert_eq!(
        parse("sin(x)^2").unwrap(),
        Expr::pow(Expr::sin(x()), num(2.0))
    );
    assert_eq!(
        parse("ln(sin(cos(x)))").unwrap(),
        Expr::ln(Expr::sin(Expr::cos(x())))
    );
    assert_eq!(
        parse("(x^2+1)^(1/2)").unwrap(),
        Expr::pow(
            Expr::add(Expr::pow(x(), num(2.0)), num(1.0)),
            Expr::div(num(1.0), num(2.0))
        )
    );
}

#[test]
fn redundant_parens() {
    assert_eq!(parse("((x))").unwrap(), x());
    assert_eq!(parse("( (x + 3) )").unwrap(), Expr::add(x(), num(3.0)));
    // (x)+(3) is not wrapped in a single outer pair
    assert_eq!(parse("(x)+(3)").unwrap(), Expr::add(x(), num(3.0)));
}

#[test]
fn empty_input() {
    assert_eq!(parse("").unwrap(), num(0.0));
    assert_eq!(parse("   ").unwrap(), num(0.0));
    assert_eq!(parse("()").unwrap(), num(0.0));
}

#[test]
fn missing_operands() {
    // an empty side of an operator reads as 0
    assert_eq!(parse("-x").unwrap(), Expr::sub(num(0.0), x()));
    assert_eq!(
        parse("2*-x").unwrap(),
        Expr::sub(Expr::mul(num(2.0), num(0.0)), x())
    );
    fuzzy_eq!(parse("2*-x").unwrap().eval(5.0), -5.0);
}

#[test]
fn numbers() {
    assert_eq!(parse("3").unwrap(), num(3.0));
    assert_eq!(parse("2.50").unwrap(), num(2.5));
    assert_eq!(parse(".5").unwrap(), num(0.5));
    assert_eq!(parse("1.2.3").unwrap(), num(1.2));
}

#[test]
fn anything_else_is_the_variable() {
    assert_eq!(parse("theta").unwrap(), Expr::var("theta"));
    assert_eq!(parse("1e5").unwrap(), Expr::var("1e5"));
    // unknown functions and juxtaposition aren't understood
    assert_eq!(parse("foo(x)").unwrap(), Expr::var("foo(x)"));
    assert_eq!(parse("sin x").unwrap(), Expr::var("sinx"));
    assert_eq!(parse("SIN(x)").unwrap(), Expr::var("SIN(x)"));
    let expr = parse("a+b").unwrap();
    assert_eq!(expr, Expr::add(Expr::var("a"), Expr::var("b")));
    fuzzy_eq!(expr.eval(2.0), 4.0);
}

#[test]
fn bad_parse() {
    assert_eq!(parse("(1+2"), Err(ParseError));
    assert_eq!(parse("x+1)"), Err(ParseError));
    assert_eq!(parse("(1+2))"), Err(ParseError));
    assert_eq!(parse("x*(1+2"), Err(ParseError));
    assert_eq!(parse(")"), Err(ParseError));
    // operators present but all of them nested
    assert_eq!(parse("(x+1)(x+2)"), Err(ParseError));
}

#[test]
fn nested_errors_propagate() {
    assert_eq!(parse("2*(x+1)) + 1"), Err(ParseError));
    assert_eq!(parse("x) + 1"), Err(ParseError));
    assert_eq!(parse("cos((1+x)(2))"), Err(ParseError));
}

#[test]
fn parse_error_display() {
    assert_eq!(ParseError.to_string(), "failed to parse");
}
