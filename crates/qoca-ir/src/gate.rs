//! Quantum gate types.
//!
//! Gates form a closed set. [`StandardGate`] holds the primitives every
//! backend understands; [`CompositeGate`] holds the QOCA building blocks
//! (`g`, `zx`, `zy`) and Pauli-string evolutions. Each composite carries its
//! decomposition recipe, expanded by [`CompositeGate::decompose`].

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::pauli::{PauliOp, PauliString};
use crate::qubit::QubitId;

/// Primitive gates with known matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX => 2,
            _ => 1,
        }
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            StandardGate::Rx(p) | StandardGate::Ry(p) | StandardGate::Rz(p) => vec![p],
            _ => vec![],
        }
    }

    fn map_params(&self, f: impl Fn(&ParameterExpression) -> ParameterExpression) -> Self {
        match self {
            StandardGate::Rx(p) => StandardGate::Rx(f(p)),
            StandardGate::Ry(p) => StandardGate::Ry(f(p)),
            StandardGate::Rz(p) => StandardGate::Rz(f(p)),
            other => other.clone(),
        }
    }
}

/// Gates defined by a fixed decomposition into other gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompositeGate {
    /// `G = Rx(π/2) · Rz(π)`, the basis change taking Z-rotations to
    /// Y-rotations under conjugation.
    G,
    /// `exp(-i θ/2 · Z⊗X)`, conjugating an Rz by Hadamard on the target.
    ZX(ParameterExpression),
    /// `Z⊗Y` rotation equal to `-exp(i θ/2 · Z⊗Y)`, conjugating an Rz by `G`
    /// on the target.
    ZY(ParameterExpression),
    /// `exp(-i · time · P)` for a Pauli string `P`; acts on the string's
    /// non-identity qubits, in ascending order.
    PauliEvolution {
        /// The Pauli string being exponentiated.
        pauli: PauliString,
        /// Evolution time (coefficient times variational parameter).
        time: ParameterExpression,
    },
}

impl CompositeGate {
    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        match self {
            CompositeGate::G => "g",
            CompositeGate::ZX(_) => "zx",
            CompositeGate::ZY(_) => "zy",
            CompositeGate::PauliEvolution { .. } => "pauli_evolution",
        }
    }

    /// Get the number of qubits this gate operates on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            CompositeGate::G => 1,
            CompositeGate::ZX(_) | CompositeGate::ZY(_) => 2,
            CompositeGate::PauliEvolution { pauli, .. } => pauli.weight() as u32,
        }
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            CompositeGate::G => vec![],
            CompositeGate::ZX(p) | CompositeGate::ZY(p) => vec![p],
            CompositeGate::PauliEvolution { time, .. } => vec![time],
        }
    }

    /// Expand into its definition, applied to `qubits`.
    ///
    /// The expansion is one level deep: `zy` yields `g` instructions, which
    /// expand further on request.
    pub fn decompose(&self, qubits: &[QubitId]) -> IrResult<Vec<Instruction>> {
        let expected = self.num_qubits();
        if qubits.len() != expected as usize {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name().to_string(),
                expected,
                got: qubits.len() as u32,
            });
        }

        let prim = |gate: StandardGate, qs: &[QubitId]| Instruction::gate(gate, qs.iter().copied());

        let rules = match self {
            CompositeGate::G => vec![
                prim(StandardGate::Rz(PI.into()), qubits),
                prim(StandardGate::Rx(FRAC_PI_2.into()), qubits),
            ],
            CompositeGate::ZX(theta) => {
                let (q0, q1) = (qubits[0], qubits[1]);
                vec![
                    prim(StandardGate::H, &[q1]),
                    prim(StandardGate::CX, &[q0, q1]),
                    prim(StandardGate::Rz(theta.clone()), &[q1]),
                    prim(StandardGate::CX, &[q0, q1]),
                    prim(StandardGate::H, &[q1]),
                ]
            }
            CompositeGate::ZY(theta) => {
                let (q0, q1) = (qubits[0], qubits[1]);
                vec![
                    Instruction::gate(CompositeGate::G, [q1]),
                    prim(StandardGate::CX, &[q0, q1]),
                    prim(StandardGate::Rz(theta.clone()), &[q1]),
                    prim(StandardGate::CX, &[q0, q1]),
                    Instruction::gate(CompositeGate::G, [q1]),
                ]
            }
            CompositeGate::PauliEvolution { pauli, time } => {
                pauli_evolution_rules(pauli, time, qubits)
            }
        };
        Ok(rules)
    }

    fn map_params(&self, f: impl Fn(&ParameterExpression) -> ParameterExpression) -> Self {
        match self {
            CompositeGate::G => CompositeGate::G,
            CompositeGate::ZX(p) => CompositeGate::ZX(f(p)),
            CompositeGate::ZY(p) => CompositeGate::ZY(f(p)),
            CompositeGate::PauliEvolution { pauli, time } => CompositeGate::PauliEvolution {
                pauli: pauli.clone(),
                time: f(time),
            },
        }
    }
}

/// Basis change into Z, CNOT ladder onto the last factor, `Rz(2·time)`,
/// then everything undone in reverse.
fn pauli_evolution_rules(
    pauli: &PauliString,
    time: &ParameterExpression,
    qubits: &[QubitId],
) -> Vec<Instruction> {
    let factors: Vec<(QubitId, PauliOp)> = qubits
        .iter()
        .copied()
        .zip(pauli.ops().iter().map(|(_, op)| *op))
        .collect();
    let Some(&(target, _)) = factors.last() else {
        return vec![];
    };

    let mut rules = Vec::with_capacity(4 * factors.len() + 1);
    for &(q, op) in &factors {
        match op {
            PauliOp::X => rules.push(Instruction::gate(StandardGate::H, [q])),
            PauliOp::Y => {
                rules.push(Instruction::gate(StandardGate::Sdg, [q]));
                rules.push(Instruction::gate(StandardGate::H, [q]));
            }
            PauliOp::Z | PauliOp::I => {}
        }
    }
    for w in factors.windows(2) {
        rules.push(Instruction::gate(StandardGate::CX, [w[0].0, w[1].0]));
    }
    rules.push(Instruction::gate(
        StandardGate::Rz(time.clone() * 2.0),
        [target],
    ));
    for w in factors.windows(2).rev() {
        rules.push(Instruction::gate(StandardGate::CX, [w[0].0, w[1].0]));
    }
    for &(q, op) in &factors {
        match op {
            PauliOp::X => rules.push(Instruction::gate(StandardGate::H, [q])),
            PauliOp::Y => {
                rules.push(Instruction::gate(StandardGate::H, [q]));
                rules.push(Instruction::gate(StandardGate::S, [q]));
            }
            PauliOp::Z | PauliOp::I => {}
        }
    }
    rules
}

/// A quantum gate, either primitive or composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// A primitive gate.
    Standard(StandardGate),
    /// A gate defined by decomposition.
    Composite(CompositeGate),
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Standard(g) => g.name(),
            Gate::Composite(g) => g.name(),
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::Standard(g) => g.num_qubits(),
            Gate::Composite(g) => g.num_qubits(),
        }
    }

    /// Get the parameters of this gate.
    pub fn parameters(&self) -> Vec<&ParameterExpression> {
        match self {
            Gate::Standard(g) => g.parameters(),
            Gate::Composite(g) => g.parameters(),
        }
    }

    /// Check if any parameter is still symbolic.
    pub fn is_parameterized(&self) -> bool {
        self.parameters().iter().any(|p| p.is_symbolic())
    }

    /// True for primitive gates.
    pub fn is_standard(&self) -> bool {
        matches!(self, Gate::Standard(_))
    }

    /// Apply `f` to every parameter, returning the rewritten gate.
    #[must_use]
    pub fn map_params(&self, f: impl Fn(&ParameterExpression) -> ParameterExpression) -> Self {
        match self {
            Gate::Standard(g) => Gate::Standard(g.map_params(f)),
            Gate::Composite(g) => Gate::Composite(g.map_params(f)),
        }
    }

    /// Bind one symbol in every parameter.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        self.map_params(|p| p.bind(name, value))
    }

    /// Expand one level onto `qubits`. Primitives expand to themselves.
    pub fn decompose(&self, qubits: &[QubitId]) -> IrResult<Vec<Instruction>> {
        match self {
            Gate::Standard(g) => {
                let expected = g.num_qubits();
                if qubits.len() != expected as usize {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: g.name().to_string(),
                        expected,
                        got: qubits.len() as u32,
                    });
                }
                Ok(vec![Instruction::gate(g.clone(), qubits.iter().copied())])
            }
            Gate::Composite(g) => g.decompose(qubits),
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::Standard(gate)
    }
}

impl From<CompositeGate> for Gate {
    fn from(gate: CompositeGate) -> Self {
        Gate::Composite(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(Gate::from(StandardGate::CX).num_qubits(), 2);
        assert_eq!(Gate::from(CompositeGate::G).num_qubits(), 1);
        assert_eq!(Gate::from(CompositeGate::ZX(0.3.into())).num_qubits(), 2);
        assert_eq!(Gate::from(CompositeGate::ZY(0.3.into())).name(), "zy");
        assert!(Gate::from(CompositeGate::ZX(ParameterExpression::symbol("t"))).is_parameterized());
        assert!(!Gate::from(CompositeGate::G).is_parameterized());
    }

    #[test]
    fn test_bind_symbol() {
        let gate = Gate::from(CompositeGate::ZY(ParameterExpression::symbol("t") * 2.0));
        let bound = gate.bind("t", 0.25);
        assert!(!bound.is_parameterized());
        assert_eq!(bound.parameters()[0].as_f64(), Some(0.5));
        assert!(gate.bind("other", 1.0).is_parameterized());
    }

    #[test]
    fn test_gate_decompose() {
        let qs = [QubitId(2), QubitId(0)];
        let cx = Gate::from(StandardGate::CX).decompose(&qs).unwrap();
        assert_eq!(cx.len(), 1);
        assert_eq!(cx[0].qubits, qs.to_vec());

        let zx = Gate::from(CompositeGate::ZX(0.4.into())).decompose(&qs).unwrap();
        let names: Vec<_> = zx.iter().map(Instruction::name).collect();
        assert_eq!(names, ["h", "cx", "rz", "cx", "h"]);

        assert!(matches!(
            Gate::from(StandardGate::H).decompose(&qs),
            Err(IrError::QubitCountMismatch { expected: 1, got: 2, .. })
        ));
    }

    #[test]
    fn test_g_definition() {
        let rules = CompositeGate::G.decompose(&[QubitId(4)]).unwrap();
        let names: Vec<_> = rules.iter().map(Instruction::name).collect();
        assert_eq!(names, ["rz", "rx"]);
        assert!(rules.iter().all(|r| r.qubits == [QubitId(4)]));
    }

    #[test]
    fn test_zy_definition_conjugates_with_g() {
        let rules = CompositeGate::ZY(0.5.into())
            .decompose(&[QubitId(2), QubitId(3)])
            .unwrap();
        let names: Vec<_> = rules.iter().map(Instruction::name).collect();
        assert_eq!(names, ["g", "cx", "rz", "cx", "g"]);
        assert_eq!(rules[1].qubits, [QubitId(2), QubitId(3)]);
        assert_eq!(rules[2].qubits, [QubitId(3)]);
    }

    #[test]
    fn test_zx_definition_conjugates_with_h() {
        let rules = CompositeGate::ZX(0.5.into())
            .decompose(&[QubitId(0), QubitId(1)])
            .unwrap();
        let names: Vec<_> = rules.iter().map(Instruction::name).collect();
        assert_eq!(names, ["h", "cx", "rz", "cx", "h"]);
    }

    #[test]
    fn test_decompose_checks_arity() {
        assert!(matches!(
            CompositeGate::ZX(0.0.into()).decompose(&[QubitId(0)]),
            Err(IrError::QubitCountMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_pauli_evolution_definition() {
        let pauli: PauliString = "X0 Y1 Z2".parse().unwrap();
        let gate = CompositeGate::PauliEvolution {
            pauli,
            time: 0.25.into(),
        };
        assert_eq!(gate.num_qubits(), 3);
        let rules = gate
            .decompose(&[QubitId(0), QubitId(1), QubitId(2)])
            .unwrap();
        let names: Vec<_> = rules.iter().map(Instruction::name).collect();
        assert_eq!(
            names,
            ["h", "sdg", "h", "cx", "cx", "rz", "cx", "cx", "h", "h", "s"]
        );
        let rz = rules[5].gate.parameters()[0].as_f64().unwrap();
        assert!((rz - 0.5).abs() < 1e-12);
    }
}
