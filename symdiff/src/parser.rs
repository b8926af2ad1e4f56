use crate::expr::Expr;
use crate::scan::{
    has_brackets, has_operators, is_additive, is_multiplicative, is_number, is_power,
    leading_float, matching_bracket,
};
use std::fmt;
use std::sync::Arc;

/// The parser gives no detail on what went wrong, input is either an
/// expression or it isn't.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse")
    }
}

impl std::error::Error for ParseError {}

// Lowest precedence first
const LEVELS: [(&str, fn(u8) -> bool); 3] = [
    ("additive", is_additive),
    ("multiplicative", is_multiplicative),
    ("power", is_power),
];

pub struct FunctionParser;

impl FunctionParser {
    pub fn parse_str(expr: &str) -> Result<Expr, ParseError> {
        let expr: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
        Self::parse(&expr)
    }

    fn parse(expr: &str) -> Result<Expr, ParseError> {
        let expr = strip_outer_parens(expr);
        debug!("parse: '{}'", expr);
        if expr.is_empty() {
            return Ok(Expr::constant(0.0));
        }

        // function call: name(args)
        if expr.ends_with(')') {
            let open = matching_bracket(expr, expr.len() - 1).ok_or(ParseError)?;
            let (name, arg) = expr.split_at(open);
            if !has_brackets(name) && !has_operators(name) {
                let func: Option<fn(Arc<Expr>) -> Expr> = match name {
                    "ln" => Some(Expr::Ln),
                    "sin" => Some(Expr::Sin),
                    "cos" => Some(Expr::Cos),
                    _ => None,
                };
                if let Some(func) = func {
                    debug!("  function '{}' on '{}'", name, arg);
                    return Ok(func(Arc::new(Self::parse(arg)?)));
                }
            }
        }

        // anything that isn't a number is taken to be the variable
        if !has_operators(expr) {
            debug!("  leaf '{}'", expr);
            if is_number(expr) {
                return Ok(Expr::constant(leading_float(expr)));
            }
            return Ok(Expr::var(expr));
        }

        for (level, is_op) in LEVELS {
            let ops = top_level_operators(expr, is_op)?;
            if !ops.is_empty() {
                debug!("  {} operators at {:?}", level, ops);
                return Self::fold(expr, &ops);
            }
        }
        // operators exist but they're all nested, eg: (1+x)(2+x)
        Err(ParseError)
    }

    // Split at each operator and reduce left to right. This makes '^' left
    // associative too: 2^3^2 is (2^3)^2.
    fn fold(expr: &str, ops: &[usize]) -> Result<Expr, ParseError> {
        let mut acc = Self::parse(&expr[..ops[0]])?;
        for (i, &op) in ops.iter().enumerate() {
            let end = ops.get(i + 1).copied().unwrap_or(expr.len());
            let rhs = Self::parse(&expr[op + 1..end])?;
            acc = match expr.as_bytes()[op] {
                b'+' => Expr::add(acc, rhs),
                b'-' => Expr::sub(acc, rhs),
                b'*' => Expr::mul(acc, rhs),
                b'/' => Expr::div(acc, rhs),
                b'^' => Expr::pow(acc, rhs),
                _ => return Err(ParseError),
            };
        }
        Ok(acc)
    }
}

pub fn parse(expr: &str) -> Result<Expr, ParseError> {
    FunctionParser::parse_str(expr)
}

fn strip_outer_parens(mut expr: &str) -> &str {
    while expr.starts_with('(') && matching_bracket(expr, 0) == Some(expr.len() - 1) {
        expr = &expr[1..expr.len() - 1];
    }
    expr
}

// Positions of operators not nested in any brackets. Bracketed regions are
// skipped in one jump.
fn top_level_operators(expr: &str, is_op: fn(u8) -> bool) -> Result<Vec<usize>, ParseError> {
    let bytes = expr.as_bytes();
    let mut ops = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'(' {
            i = matching_bracket(expr, i).ok_or(ParseError)? + 1;
            continue;
        }
        if is_op(bytes[i]) {
            ops.push(i);
        }
        i += 1;
    }
    Ok(ops)
}
