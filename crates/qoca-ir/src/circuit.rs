//! High-level circuit builder API.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{IrError, IrResult};
use crate::gate::{CompositeGate, Gate, StandardGate};
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::pauli::PauliString;
use crate::qubit::{Qubit, QubitId};

/// Default register name.
pub const DEFAULT_REGISTER: &str = "q";

/// A quantum circuit: an ordered sequence of gate applications over a fixed
/// register of qubit slots `0..n`.
///
/// Every append is validated: operands must lie inside the register, match
/// the gate's arity and be pairwise distinct. Instructions are never removed.
/// Deserialized circuits are replayed through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubit slots, indexed by `QubitId`.
    qubits: Vec<Qubit>,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

/// Unchecked wire form of a [`Circuit`].
#[derive(Deserialize)]
struct RawCircuit {
    name: String,
    qubits: Vec<Qubit>,
    instructions: Vec<Instruction>,
}

impl TryFrom<RawCircuit> for Circuit {
    type Error = IrError;

    fn try_from(raw: RawCircuit) -> IrResult<Self> {
        let register = raw
            .qubits
            .first()
            .map_or(DEFAULT_REGISTER, |q| q.register.as_str());
        for (i, q) in raw.qubits.iter().enumerate() {
            if q.id.0 as usize != i || q.register != register {
                return Err(IrError::MalformedRegister(format!(
                    "slot {i} holds {q}, expected {register}[{i}]"
                )));
            }
        }

        let mut circuit = Circuit::with_register(raw.name, register, raw.qubits.len() as u32);
        for inst in raw.instructions {
            circuit.apply(inst)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a circuit over `num_qubits` qubits in the default register.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self::with_register(name, DEFAULT_REGISTER, num_qubits)
    }

    /// Create a circuit over a named register of `num_qubits` qubits.
    pub fn with_register(name: impl Into<String>, register: &str, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            qubits: (0..num_qubits)
                .map(|i| Qubit::new(QubitId(i), register))
                .collect(),
            instructions: vec![],
        }
    }

    /// Append an instruction after validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = instruction.name();
        let expected = instruction.gate.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate_name.to_string(),
                expected,
                got,
            });
        }

        let num_qubits = self.qubits.len() as u32;
        for (i, q) in instruction.qubits.iter().enumerate() {
            if q.0 >= num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: *q,
                    num_qubits,
                    gate_name: Some(gate_name.to_string()),
                });
            }
            if instruction.qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Ry(theta.into()),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            StandardGate::Rz(theta.into()),
            qubit,
        ))
    }

    /// Apply the parameter-free `G` basis-change gate.
    pub fn g(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(CompositeGate::G, [qubit]))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply a ZX rotation.
    pub fn zx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q0: QubitId,
        q1: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            CompositeGate::ZX(theta.into()),
            q0,
            q1,
        ))
    }

    /// Apply a ZY rotation.
    pub fn zy(
        &mut self,
        theta: impl Into<ParameterExpression>,
        q0: QubitId,
        q1: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            CompositeGate::ZY(theta.into()),
            q0,
            q1,
        ))
    }

    // =========================================================================
    // Multi-qubit operations
    // =========================================================================

    /// Apply `exp(-i · time · P)` as a single instruction on the qubits `P`
    /// acts on. The identity string appends nothing.
    pub fn pauli_evolution(
        &mut self,
        pauli: &PauliString,
        time: impl Into<ParameterExpression>,
    ) -> IrResult<&mut Self> {
        if pauli.is_identity() {
            return Ok(self);
        }
        let qubits: Vec<QubitId> = pauli.qubits().map(QubitId).collect();
        self.apply(Instruction::gate(
            CompositeGate::PauliEvolution {
                pauli: pauli.clone(),
                time: time.into(),
            },
            qubits,
        ))
    }

    /// Apply an arbitrary gate.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Expand every composite gate by one level.
    pub fn decompose(&self) -> IrResult<Self> {
        let mut out = self.empty_like();
        for inst in &self.instructions {
            for sub in inst.decompose()? {
                out.apply(sub)?;
            }
        }
        Ok(out)
    }

    /// Expand until only primitive gates remain.
    pub fn decompose_all(&self) -> IrResult<Self> {
        let mut out = self.empty_like();
        for inst in &self.instructions {
            for sub in inst.flatten()? {
                out.apply(sub)?;
            }
        }
        Ok(out)
    }

    /// Substitute symbol values in every gate parameter.
    ///
    /// Symbols absent from `values` stay symbolic.
    pub fn bind_parameters(&self, values: &FxHashMap<String, f64>) -> Self {
        let mut out = self.empty_like();
        out.instructions = self
            .instructions
            .iter()
            .map(|inst| Instruction {
                gate: inst.gate.map_params(|p| p.bind_all(values)),
                qubits: inst.qubits.clone(),
            })
            .collect();
        out
    }

    fn empty_like(&self) -> Self {
        Self {
            name: self.name.clone(),
            qubits: self.qubits.clone(),
            instructions: vec![],
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the register the qubits belong to.
    pub fn register(&self) -> &str {
        self.qubits
            .first()
            .map_or(DEFAULT_REGISTER, |q| q.register.as_str())
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// True if no instruction has been appended.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of instructions per gate name.
    pub fn count_ops(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.instructions {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Length of the longest chain of instructions sharing qubits.
    pub fn depth(&self) -> usize {
        let mut levels = vec![0usize; self.qubits.len()];
        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .map(|q| levels[q.0 as usize])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                levels[q.0 as usize] = level;
            }
        }
        levels.into_iter().max().unwrap_or(0)
    }

    /// Names of all unbound symbols, sorted.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for inst in &self.instructions {
            for p in inst.gate.parameters() {
                p.collect_symbols(&mut set);
            }
        }
        set
    }

    /// True if any gate still carries a symbolic parameter.
    pub fn is_parameterized(&self) -> bool {
        self.instructions.iter().any(|i| i.gate.is_parameterized())
    }
}
