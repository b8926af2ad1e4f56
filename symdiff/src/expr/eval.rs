use super::Expr;

impl Expr {
    /// Evaluate the expression with the variable bound to `x`.
    ///
    /// Never fails: division by zero, log of non-positive numbers and
    /// friends produce whatever IEEE-754 says (inf, -inf, NaN).
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Variable(_) => x,
            Expr::Constant(c) => *c,
            Expr::Add(l, r) => l.eval(x) + r.eval(x),
            Expr::Subtract(l, r) => l.eval(x) - r.eval(x),
            Expr::Multiply(l, r) => l.eval(x) * r.eval(x),
            Expr::Divide(l, r) => l.eval(x) / r.eval(x),
            Expr::Power(l, r) => l.eval(x).powf(r.eval(x)),
            Expr::Ln(a) => a.eval(x).ln(),
            Expr::Sin(a) => a.eval(x).sin(),
            Expr::Cos(a) => a.eval(x).cos(),
        }
    }
}
