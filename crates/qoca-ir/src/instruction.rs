//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::error::IrResult;
use crate::gate::{CompositeGate, Gate, StandardGate};
use crate::qubit::QubitId;

/// A gate applied to an ordered list of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: Gate,
    /// Qubits the gate acts on, in the gate's operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate: gate.into(),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: impl Into<Gate>, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// True if the gate is a primitive.
    pub fn is_standard(&self) -> bool {
        self.gate.is_standard()
    }

    /// Get the composite gate, if this is one.
    pub fn as_composite(&self) -> Option<&CompositeGate> {
        match &self.gate {
            Gate::Composite(g) => Some(g),
            Gate::Standard(_) => None,
        }
    }

    /// Expand one level. Primitive instructions expand to themselves.
    pub fn decompose(&self) -> IrResult<Vec<Instruction>> {
        self.gate.decompose(&self.qubits)
    }

    /// Expand recursively until only primitives remain.
    pub fn flatten(&self) -> IrResult<Vec<Instruction>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out)?;
        Ok(out)
    }

    fn flatten_into(&self, out: &mut Vec<Instruction>) -> IrResult<()> {
        if self.is_standard() {
            out.push(self.clone());
            return Ok(());
        }
        for inst in self.decompose()? {
            inst.flatten_into(out)?;
        }
        Ok(())
    }
}
