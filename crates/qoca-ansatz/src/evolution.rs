//! Hamiltonian layer.
//!
//! Appends `exp(-i · t_k · P_k)` for every term `c_k · P_k` of a qubit
//! operator, in operator order, as one opaque `pauli_evolution` instruction
//! per term. With a parameterized layer `t_k = θ_k · c_k`; with a fixed
//! layer `t_k = c_k` and no parameters are consumed.

use serde::{Deserialize, Serialize};

use qoca_ir::{Circuit, ParameterExpression};
use tracing::trace;

use crate::error::{AnsatzError, AnsatzResult};
use crate::hamiltonian::QubitOperator;

/// How term evolution times are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HamiltonianMode {
    /// One variational parameter per term.
    #[default]
    Parameterized,
    /// Unit evolution of every term; no parameters.
    Fixed,
}

impl HamiltonianMode {
    /// Parameters one layer of `operator` consumes.
    pub fn parameter_count(self, operator: &QubitOperator) -> usize {
        match self {
            HamiltonianMode::Parameterized => operator.num_terms(),
            HamiltonianMode::Fixed => 0,
        }
    }
}

/// Append one Hamiltonian layer to `circuit`.
///
/// The operator must be declared over exactly the circuit's qubits. All
/// checks happen before the first instruction is appended.
pub fn append_hamiltonian_layer(
    circuit: &mut Circuit,
    operator: &QubitOperator,
    mode: HamiltonianMode,
    params: &[ParameterExpression],
) -> AnsatzResult<()> {
    let num_qubits = circuit.num_qubits() as u32;
    if operator.num_qubits() != num_qubits {
        return Err(AnsatzError::QubitCountMismatch {
            ansatz: num_qubits,
            operator: operator.num_qubits(),
        });
    }
    let expected = mode.parameter_count(operator);
    if params.len() != expected {
        return Err(AnsatzError::ParameterCountMismatch {
            expected,
            got: params.len(),
        });
    }

    for (k, term) in operator.terms().iter().enumerate() {
        let time = match mode {
            HamiltonianMode::Parameterized => params[k].clone() * term.coeff,
            HamiltonianMode::Fixed => ParameterExpression::constant(term.coeff),
        };
        if term.is_identity() {
            trace!(term = k, "identity term skipped");
            continue;
        }
        circuit.pauli_evolution(&term.pauli, time)?;
    }
    Ok(())
}
