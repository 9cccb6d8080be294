//! Qubit operators.
//!
//! A qubit operator is a weighted sum of Pauli strings over a declared
//! number of qubits:
//!
//!   H = Σ_k  c_k · P_k
//!
//! The operator is taken as given: it is expected to be the already-mapped
//! qubit form of whatever physical Hamiltonian the caller started from.
//! Term order is preserved; terms are never merged or reordered.
//!
//! # Example
//!
//! ```rust
//! use qoca_ansatz::hamiltonian::QubitOperator;
//!
//! let op = QubitOperator::parse(2, "-1.0 * Z0 Z1; 0.5 * X0; 0.5 * X1").unwrap();
//! assert_eq!(op.num_terms(), 3);
//! assert_eq!(op.terms()[0].pauli.to_string(), "Z0 Z1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use qoca_ir::PauliString;

use crate::error::{AnsatzError, AnsatzResult};

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// True if the term is a multiple of the identity (a global phase).
    pub fn is_identity(&self) -> bool {
        self.pauli.is_identity()
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.coeff, self.pauli)
    }
}

/// Parses `"<coeff> * <pauli>"`, a bare Pauli string (coefficient 1) or a
/// bare number (identity term).
impl FromStr for PauliTerm {
    type Err = AnsatzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| AnsatzError::InvalidTerm {
            term: s.trim().to_string(),
            reason,
        };

        let (coeff, pauli) = match s.split_once('*') {
            Some((c, p)) => {
                let coeff = c
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| invalid(format!("bad coefficient: {e}")))?;
                (coeff, p.trim())
            }
            None => match s.trim().parse::<f64>() {
                Ok(coeff) => (coeff, ""),
                Err(_) => (1.0, s.trim()),
            },
        };
        if !coeff.is_finite() {
            return Err(invalid("coefficient must be finite".into()));
        }
        let pauli = pauli
            .parse::<PauliString>()
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self::new(coeff, pauli))
    }
}

/// An ordered sum of Pauli terms acting on `num_qubits` qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitOperator {
    num_qubits: u32,
    terms: Vec<PauliTerm>,
}

impl QubitOperator {
    /// Create an operator, checking that every term fits in `num_qubits`.
    pub fn new(num_qubits: u32, terms: Vec<PauliTerm>) -> AnsatzResult<Self> {
        for term in &terms {
            if let Some(q) = term.pauli.max_qubit() {
                if q >= num_qubits {
                    return Err(AnsatzError::InvalidTerm {
                        term: term.to_string(),
                        reason: format!(
                            "references qubit {q} but the operator has {num_qubits} qubits"
                        ),
                    });
                }
            }
        }
        Ok(Self { num_qubits, terms })
    }

    /// Parse terms separated by `;` or newlines.
    pub fn parse(num_qubits: u32, text: &str) -> AnsatzResult<Self> {
        Self::from_strs(
            num_qubits,
            text.split([';', '\n']).filter(|t| !t.trim().is_empty()),
        )
    }

    /// Parse one term per item.
    pub fn from_strs<'a>(
        num_qubits: u32,
        terms: impl IntoIterator<Item = &'a str>,
    ) -> AnsatzResult<Self> {
        let terms = terms
            .into_iter()
            .map(str::parse)
            .collect::<AnsatzResult<Vec<PauliTerm>>>()?;
        Self::new(num_qubits, terms)
    }

    /// Declared number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// All terms, in order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Multiply every coefficient by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            num_qubits: self.num_qubits,
            terms: self
                .terms
                .iter()
                .map(|t| PauliTerm::new(t.coeff * factor, t.pauli.clone()))
                .collect(),
        }
    }
}

impl fmt::Display for QubitOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, term) in self.terms.iter().enumerate() {
            if k > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
