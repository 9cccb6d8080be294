//! Pauli strings.
//!
//! A Pauli string is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) on indexed qubits. Identity factors are never stored;
//! qubits not listed are implicitly I.
//!
//! The textual form lists factors as `<op><qubit>` separated by whitespace,
//! e.g. `"X0 Z1 Y3"`. The empty string and `"I"` denote the identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Upper-case letter for this operator.
    pub fn letter(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PauliOp::I),
            'X' => Some(PauliOp::X),
            'Y' => Some(PauliOp::Y),
            'Z' => Some(PauliOp::Z),
            _ => None,
        }
    }
}

/// A tensor product of Pauli operators on indexed qubits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPauliString")]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

#[derive(Deserialize)]
struct RawPauliString {
    ops: Vec<(u32, PauliOp)>,
}

impl TryFrom<RawPauliString> for PauliString {
    type Error = IrError;

    fn try_from(raw: RawPauliString) -> IrResult<Self> {
        Self::from_ops(raw.ops)
    }
}

impl PauliString {
    /// The identity string.
    pub fn identity() -> Self {
        Self { ops: vec![] }
    }

    /// Construct from `(qubit, op)` pairs.
    ///
    /// Identity factors are dropped and the rest sorted by qubit. Two
    /// factors on the same qubit are rejected.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> IrResult<Self> {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        if let Some(w) = v.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(IrError::InvalidPauli {
                input: format!("{}{} {}{}", w[0].1.letter(), w[0].0, w[1].1.letter(), w[1].0),
                reason: format!("qubit {} appears twice", w[0].0),
            });
        }
        Ok(Self { ops: v })
    }

    /// Non-identity `(qubit, op)` factors, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Qubits the string acts on non-trivially, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = u32> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// True if there are no non-identity factors.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        let parts: Vec<String> = self
            .ops
            .iter()
            .map(|(q, op)| format!("{}{q}", op.letter()))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for PauliString {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| IrError::InvalidPauli {
            input: s.to_string(),
            reason,
        };

        let mut ops = Vec::new();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            let Some(letter) = chars.next() else {
                continue;
            };
            let op = PauliOp::from_letter(letter)
                .ok_or_else(|| invalid(format!("unknown operator '{letter}'")))?;
            let index = chars.as_str();
            if index.is_empty() {
                if op == PauliOp::I {
                    continue;
                }
                return Err(invalid(format!("factor '{token}' has no qubit index")));
            }
            let qubit: u32 = index
                .parse()
                .map_err(|_| invalid(format!("bad qubit index in '{token}'")))?;
            ops.push((qubit, op));
        }

        PauliString::from_ops(ops).map_err(|e| match e {
            IrError::InvalidPauli { reason, .. } => invalid(reason),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_factors_dropped_and_sorted() {
        let ps = PauliString::from_ops([(3, PauliOp::X), (1, PauliOp::I), (0, PauliOp::Z)]).unwrap();
        assert_eq!(ps.ops(), &[(0, PauliOp::Z), (3, PauliOp::X)]);
        assert_eq!(ps.max_qubit(), Some(3));
        assert_eq!(ps.weight(), 2);
    }

    #[test]
    fn test_deserialize_normalizes_and_validates() {
        let p: PauliString =
            serde_json::from_str(r#"{"ops": [[2, "X"], [0, "I"], [1, "Z"]]}"#).unwrap();
        assert_eq!(p.ops(), &[(1, PauliOp::Z), (2, PauliOp::X)]);

        let err = serde_json::from_str::<PauliString>(r#"{"ops": [[1, "Z"], [1, "X"]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("appears twice"), "{err}");
    }

    #[test]
    fn test_parse_and_display() {
        let ps: PauliString = "Z1 x0 Y4".parse().unwrap();
        assert_eq!(ps.to_string(), "X0 Z1 Y4");
        assert!("I".parse::<PauliString>().unwrap().is_identity());
        assert!("".parse::<PauliString>().unwrap().is_identity());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Q0".parse::<PauliString>().is_err());
        assert!("X".parse::<PauliString>().is_err());
        assert!("Xa".parse::<PauliString>().is_err());
        assert!("X0 Z0".parse::<PauliString>().is_err());
    }
}
