//! Fermion-to-qubit mapping labels.
//!
//! The ansatz does not transform operators; the mapping records how the
//! injected [`QubitOperator`](crate::hamiltonian::QubitOperator) was
//! produced so that callers can report or check it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnsatzError;

/// Fermion-to-qubit mapping a qubit operator was derived with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QubitMapping {
    /// Jordan-Wigner transformation.
    #[default]
    JordanWigner,
    /// Parity transformation.
    Parity,
}

impl QubitMapping {
    /// Configuration label of this mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            QubitMapping::JordanWigner => "jordan_wigner",
            QubitMapping::Parity => "parity",
        }
    }
}

impl fmt::Display for QubitMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QubitMapping {
    type Err = AnsatzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "jordan_wigner" | "jw" => Ok(QubitMapping::JordanWigner),
            "parity" => Ok(QubitMapping::Parity),
            _ => Err(AnsatzError::UnsupportedMapping(s.to_string())),
        }
    }
}
