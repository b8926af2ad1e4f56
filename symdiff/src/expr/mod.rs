mod derivative;
mod eval;
mod print;

use std::sync::Arc;

/// A node of a single variable expression tree.
///
/// Nodes are immutable once built. Children sit behind `Arc` so that a
/// derivative can reference sub-trees of the expression it was taken from
/// instead of copying them, and so trees can be read from several threads.
#[derive(PartialEq, Clone, Debug)]
pub enum Expr {
    /// The independent variable, spelled as it showed up in the input.
    Variable(String),
    Constant(f64),
    Add(Arc<Expr>, Arc<Expr>),
    Subtract(Arc<Expr>, Arc<Expr>),
    Multiply(Arc<Expr>, Arc<Expr>),
    Divide(Arc<Expr>, Arc<Expr>),
    Power(Arc<Expr>, Arc<Expr>),
    Ln(Arc<Expr>),
    Sin(Arc<Expr>),
    Cos(Arc<Expr>),
}

impl Expr {
    pub fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    pub fn constant(c: f64) -> Expr {
        Expr::Constant(c)
    }

    pub fn add(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Expr {
        Expr::Add(lhs.into(), rhs.into())
    }

    pub fn sub(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Expr {
        Expr::Subtract(lhs.into(), rhs.into())
    }

    pub fn mul(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Expr {
        Expr::Multiply(lhs.into(), rhs.into())
    }

    pub fn div(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Expr {
        Expr::Divide(lhs.into(), rhs.into())
    }

    pub fn pow(lhs: impl Into<Arc<Expr>>, rhs: impl Into<Arc<Expr>>) -> Expr {
        Expr::Power(lhs.into(), rhs.into())
    }

    pub fn ln(arg: impl Into<Arc<Expr>>) -> Expr {
        Expr::Ln(arg.into())
    }

    pub fn sin(arg: impl Into<Arc<Expr>>) -> Expr {
        Expr::Sin(arg.into())
    }

    pub fn cos(arg: impl Into<Arc<Expr>>) -> Expr {
        Expr::Cos(arg.into())
    }

    pub fn arity(&self) -> usize {
        self.children().len()
    }

    pub fn children(&self) -> Vec<&Arc<Expr>> {
        match self {
            Expr::Variable(_) | Expr::Constant(_) => vec![],
            Expr::Ln(a) | Expr::Sin(a) | Expr::Cos(a) => vec![a],
            Expr::Add(l, r)
            | Expr::Subtract(l, r)
            | Expr::Multiply(l, r)
            | Expr::Divide(l, r)
            | Expr::Power(l, r) => vec![l, r],
        }
    }
}
