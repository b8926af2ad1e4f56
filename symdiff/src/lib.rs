macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

#[cfg(test)]
macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { fuzzy_eq!($lhs, $rhs, 1.0e-10) };
    ($lhs:expr, $rhs:expr, $tol:expr) => {{
        let (lhs, rhs): (f64, f64) = ($lhs, $rhs);
        assert!((lhs - rhs).abs() < $tol, "{} != {}", lhs, rhs)
    }};
}

mod scan;
pub use scan::matching_bracket;

mod expr;
pub use expr::Expr;

pub mod parser;
pub use parser::{parse, FunctionParser, ParseError};

#[cfg(test)]
mod parser_test;
