//! Parameter expressions for variational circuits.
//!
//! An ansatz is usually built either from concrete angles (`f64`) or from
//! named placeholders (`theta[0]`, `theta[1]`, ...) that an optimizer binds
//! later. Both are represented by [`ParameterExpression`]. Arithmetic between
//! two constants is folded eagerly, so a fully bound circuit never carries
//! expression trees.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};

/// A symbolic or concrete parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A named placeholder.
    Symbol(String),
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// The zero constant.
    pub fn zero() -> Self {
        ParameterExpression::Constant(0.0)
    }

    /// Create `len` indexed symbols named `prefix[0]`, `prefix[1]`, ...
    pub fn vector(prefix: &str, len: usize) -> Vec<Self> {
        (0..len)
            .map(|k| ParameterExpression::Symbol(format!("{prefix}[{k}]")))
            .collect()
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Try to evaluate as a concrete value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            ParameterExpression::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
        }
    }

    /// Evaluate, reporting the first unbound symbol on failure.
    pub fn evaluate(&self) -> IrResult<f64> {
        self.as_f64().ok_or_else(|| {
            let name = self
                .symbols()
                .into_iter()
                .next()
                .unwrap_or_else(|| self.to_string());
            IrError::UnboundParameter(name)
        })
    }

    /// All symbol names in this expression, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            ParameterExpression::Constant(_) => {}
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Neg(e) => e.collect_symbols(set),
            ParameterExpression::Add(a, b) | ParameterExpression::Mul(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Substitute every symbol found in `values`, folding constants.
    ///
    /// Symbols missing from `values` are left in place.
    pub fn bind_all(&self, values: &FxHashMap<String, f64>) -> Self {
        match self {
            ParameterExpression::Constant(_) => self.clone(),
            ParameterExpression::Symbol(name) => values
                .get(name)
                .map_or_else(|| self.clone(), |v| ParameterExpression::Constant(*v)),
            ParameterExpression::Neg(e) => -e.bind_all(values),
            ParameterExpression::Add(a, b) => a.bind_all(values) + b.bind_all(values),
            ParameterExpression::Mul(a, b) => a.bind_all(values) * b.bind_all(values),
        }
    }

    /// Bind a single symbol to a value.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        let mut values = FxHashMap::default();
        values.insert(name.to_string(), value);
        self.bind_all(&values)
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<&ParameterExpression> for ParameterExpression {
    fn from(value: &ParameterExpression) -> Self {
        value.clone()
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.as_f64(), rhs.as_f64()) {
            (Some(a), Some(b)) => ParameterExpression::Constant(a + b),
            _ => ParameterExpression::Add(Box::new(self), Box::new(rhs)),
        }
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self.as_f64(), rhs.as_f64()) {
            (Some(a), Some(b)) => ParameterExpression::Constant(a * b),
            (Some(a), _) if a == 1.0 => rhs,
            (_, Some(b)) if b == 1.0 => self,
            _ => ParameterExpression::Mul(Box::new(self), Box::new(rhs)),
        }
    }
}

impl std::ops::Mul<f64> for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self * ParameterExpression::Constant(rhs)
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            ParameterExpression::Constant(v) => ParameterExpression::Constant(-v),
            ParameterExpression::Neg(inner) => *inner,
            other => ParameterExpression::Neg(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_constant_folding() {
        let p = ParameterExpression::constant(2.0) * ParameterExpression::constant(3.0);
        assert_eq!(p, ParameterExpression::Constant(6.0));
        assert_eq!((-p).as_f64(), Some(-6.0));
    }

    #[test]
    fn test_symbol_stays_symbolic() {
        let theta = ParameterExpression::symbol("theta");
        let scaled = theta.clone() * 0.5;
        assert!(scaled.is_symbolic());
        assert_eq!(scaled.as_f64(), None);
        assert!(scaled.symbols().contains("theta"));
        assert_eq!(theta.clone() * 1.0, theta);
    }

    #[test]
    fn test_bind() {
        let expr = ParameterExpression::symbol("theta") * 2.0;
        let bound = expr.bind("theta", PI / 4.0);
        assert!(!bound.is_symbolic());
        assert!((bound.as_f64().unwrap() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_reports_symbol() {
        let expr = ParameterExpression::symbol("a") + ParameterExpression::constant(1.0);
        match expr.evaluate() {
            Err(IrError::UnboundParameter(name)) => assert_eq!(name, "a"),
            other => panic!("expected unbound parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_vector_names() {
        let v = ParameterExpression::vector("theta", 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v[2].to_string(), "theta[2]");
    }
}
