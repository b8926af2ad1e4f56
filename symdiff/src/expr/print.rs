use super::Expr;
use std::fmt;

// Fixed 6 decimals, then drop trailing zeros and a dangling point.
fn fmt_constant(c: f64) -> String {
    let mut s = format!("{:.6}", c);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

// Binary nodes already come wrapped in their own parens, anything else
// needs a pair to read as a function argument.
fn fmt_argument(arg: &Expr) -> String {
    match arg {
        Expr::Add(..)
        | Expr::Subtract(..)
        | Expr::Multiply(..)
        | Expr::Divide(..)
        | Expr::Power(..) => arg.to_string(),
        _ => format!("({})", arg),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Constant(c) => write!(f, "{}", fmt_constant(*c)),
            Expr::Add(l, r) => write!(f, "({}+{})", l, r),
            Expr::Subtract(l, r) => write!(f, "({}-{})", l, r),
            Expr::Multiply(l, r) => write!(f, "({}*{})", l, r),
            Expr::Divide(l, r) => write!(f, "({}/{})", l, r),
            Expr::Power(l, r) => write!(f, "({}^{})", l, r),
            Expr::Ln(a) => write!(f, "ln{}", fmt_argument(a)),
            Expr::Sin(a) => write!(f, "sin{}", fmt_argument(a)),
            Expr::Cos(a) => write!(f, "cos{}", fmt_argument(a)),
        }
    }
}
