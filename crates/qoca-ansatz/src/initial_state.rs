//! Initial states prepended to the ansatz.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use qoca_ir::{Circuit, QubitId};

use crate::error::{AnsatzError, AnsatzResult};

/// State preparation applied before the first layer.
///
/// In configuration files the state is a string: `uniform`, `zero`, or a
/// bit string such as `"1100"` whose k-th character is qubit k. Bit strings
/// must be quoted in YAML; an unquoted `1100` is an integer and is rejected
/// since leading zeros would be lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInitialState", into = "String")]
pub enum InitialState {
    /// `|0…0⟩`; prepares nothing.
    Zero,
    /// Equal superposition: `H` on every qubit.
    Uniform,
    /// A computational basis state: `X` on each set bit.
    BasisState(Vec<bool>),
}

impl InitialState {
    /// Number of qubits this state requires, if it fixes one.
    pub fn num_qubits(&self) -> Option<u32> {
        match self {
            InitialState::BasisState(bits) => Some(bits.len() as u32),
            InitialState::Zero | InitialState::Uniform => None,
        }
    }

    /// Check the state against a register of `num_qubits` qubits.
    pub fn validate(&self, num_qubits: u32) -> AnsatzResult<()> {
        match self.num_qubits() {
            Some(len) if len != num_qubits => Err(AnsatzError::InvalidInitialState(format!(
                "basis state has {len} bits but the ansatz has {num_qubits} qubits"
            ))),
            _ => Ok(()),
        }
    }

    /// Append the preparation gates to `circuit`.
    pub fn apply(&self, circuit: &mut Circuit) -> AnsatzResult<()> {
        let num_qubits = circuit.num_qubits() as u32;
        self.validate(num_qubits)?;
        match self {
            InitialState::Zero => {}
            InitialState::Uniform => {
                for q in 0..num_qubits {
                    circuit.h(QubitId(q))?;
                }
            }
            InitialState::BasisState(bits) => {
                for (q, _) in bits.iter().enumerate().filter(|(_, set)| **set) {
                    circuit.x(QubitId(q as u32))?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialState::Zero => f.write_str("zero"),
            InitialState::Uniform => f.write_str("uniform"),
            InitialState::BasisState(bits) => {
                for b in bits {
                    f.write_str(if *b { "1" } else { "0" })?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for InitialState {
    type Err = AnsatzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "zero" => Ok(InitialState::Zero),
            "uniform" => Ok(InitialState::Uniform),
            "" => Err(AnsatzError::InvalidInitialState("empty".into())),
            bits => bits
                .chars()
                .map(|c| match c {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    _ => Err(AnsatzError::InvalidInitialState(format!(
                        "'{bits}' is not 'zero', 'uniform' or a bit string"
                    ))),
                })
                .collect::<AnsatzResult<Vec<bool>>>()
                .map(InitialState::BasisState),
        }
    }
}

/// Wire form: a string, or the integer a YAML parser makes of an unquoted
/// bit string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInitialState {
    Text(String),
    Integer(u64),
}

impl TryFrom<RawInitialState> for InitialState {
    type Error = AnsatzError;

    fn try_from(raw: RawInitialState) -> Result<Self, Self::Error> {
        match raw {
            RawInitialState::Text(s) => s.parse(),
            RawInitialState::Integer(n) => Err(AnsatzError::InvalidInitialState(format!(
                "basis state {n} must be quoted, e.g. \"{n}\""
            ))),
        }
    }
}

impl From<InitialState> for String {
    fn from(state: InitialState) -> Self {
        state.to_string()
    }
}
