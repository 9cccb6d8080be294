//! Dense unitary matrices for verifying gate decompositions.
//!
//! Matrices use little-endian qubit order: qubit 0 is the least significant
//! bit of the basis-state index. This module is a checking tool for small
//! circuits (see [`MAX_QUBITS`]), not a simulator.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::instruction::Instruction;
use crate::pauli::{PauliOp, PauliString};

/// Widest register a [`Matrix`] may span.
pub const MAX_QUBITS: u32 = 10;

/// Default tolerance for matrix comparisons.
pub const TOLERANCE: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A square complex matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// The identity on `num_qubits` qubits, at most [`MAX_QUBITS`].
    pub fn identity(num_qubits: u32) -> IrResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(IrError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }
        let dim = 1usize << num_qubits;
        let mut data = vec![ZERO; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = ONE;
        }
        Ok(Self { dim, data })
    }

    /// The matrix of a Pauli string embedded in `num_qubits` qubits.
    pub fn pauli(pauli: &PauliString, num_qubits: u32) -> IrResult<Self> {
        let mut m = Self::identity(num_qubits)?;
        for &(q, op) in pauli.ops() {
            if q >= num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: q.into(),
                    num_qubits,
                    gate_name: None,
                });
            }
            let single = match op {
                PauliOp::I => continue,
                PauliOp::X => [ZERO, ONE, ONE, ZERO],
                PauliOp::Y => [ZERO, -I, I, ZERO],
                PauliOp::Z => [ONE, ZERO, ZERO, -ONE],
            };
            m.apply_single(single, q as usize);
        }
        Ok(m)
    }

    /// Matrix dimension (`2^n`).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    fn check_dim(&self, other: &Self) -> IrResult<()> {
        if self.dim != other.dim {
            return Err(IrError::DimensionMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        Ok(())
    }

    /// Matrix product `self · other`.
    pub fn mul(&self, other: &Self) -> IrResult<Self> {
        self.check_dim(other)?;
        let n = self.dim;
        let mut data = vec![ZERO; n * n];
        for r in 0..n {
            for k in 0..n {
                let a = self.data[r * n + k];
                if a == ZERO {
                    continue;
                }
                for c in 0..n {
                    data[r * n + c] += a * other.data[k * n + c];
                }
            }
        }
        Ok(Self { dim: n, data })
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let n = self.dim;
        let mut data = vec![ZERO; n * n];
        for r in 0..n {
            for c in 0..n {
                data[c * n + r] = self.data[r * n + c].conj();
            }
        }
        Self { dim: n, data }
    }

    /// Scale every element by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            dim: self.dim,
            data: self.data.iter().map(|z| z * factor).collect(),
        }
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> IrResult<Self> {
        self.check_dim(other)?;
        Ok(Self {
            dim: self.dim,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Element-wise equality within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() < tol)
    }

    /// Equality up to a global phase, within `tol`.
    pub fn equiv_up_to_phase(&self, other: &Self, tol: f64) -> bool {
        if self.dim != other.dim {
            return false;
        }
        // Fix the phase from the largest element of `other`.
        let Some((idx, pivot)) = other
            .data
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        else {
            return true;
        };
        if pivot.norm() < tol {
            return self.approx_eq(other, tol);
        }
        let phase = self.data[idx] / pivot;
        if (phase.norm() - 1.0).abs() > tol {
            return false;
        }
        self.approx_eq(&other.scale(phase), tol)
    }

    /// True if equal to the identity up to a global phase.
    pub fn is_identity(&self, tol: f64) -> bool {
        let n = self.dim.trailing_zeros();
        Self::identity(n).is_ok_and(|id| self.equiv_up_to_phase(&id, tol))
    }

    /// Left-multiply by a single-qubit gate `[a, b, c, d]` acting on `qubit`.
    fn apply_single(&mut self, m: [Complex64; 4], qubit: usize) {
        let n = self.dim;
        let bit = 1usize << qubit;
        for row in (0..n).filter(|r| r & bit == 0) {
            let partner = row | bit;
            for col in 0..n {
                let a = self.data[row * n + col];
                let b = self.data[partner * n + col];
                self.data[row * n + col] = m[0] * a + m[1] * b;
                self.data[partner * n + col] = m[2] * a + m[3] * b;
            }
        }
    }

    /// Left-multiply by CX(control, target).
    fn apply_cx(&mut self, control: usize, target: usize) {
        let n = self.dim;
        let (cbit, tbit) = (1usize << control, 1usize << target);
        for row in (0..n).filter(|r| r & cbit != 0 && r & tbit == 0) {
            let partner = row | tbit;
            for col in 0..n {
                self.data.swap(row * n + col, partner * n + col);
            }
        }
    }

    fn apply(&mut self, inst: &Instruction) -> IrResult<()> {
        let Gate::Standard(gate) = &inst.gate else {
            for sub in inst.flatten()? {
                self.apply(&sub)?;
            }
            return Ok(());
        };
        let q0 = inst.qubits[0].0 as usize;
        match gate {
            StandardGate::CX => self.apply_cx(q0, inst.qubits[1].0 as usize),
            other => self.apply_single(single_qubit_matrix(other)?, q0),
        }
        Ok(())
    }
}

/// 2×2 matrix of a single-qubit primitive, row-major.
fn single_qubit_matrix(gate: &StandardGate) -> IrResult<[Complex64; 4]> {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let m = match gate {
        StandardGate::H => [s, s, s, -s],
        StandardGate::X => [ZERO, ONE, ONE, ZERO],
        StandardGate::Y => [ZERO, -I, I, ZERO],
        StandardGate::Z => [ONE, ZERO, ZERO, -ONE],
        StandardGate::S => [ONE, ZERO, ZERO, I],
        StandardGate::Sdg => [ONE, ZERO, ZERO, -I],
        StandardGate::Rx(theta) => {
            let (c, s) = half_angle(theta.evaluate()?);
            [c.into(), -I * s, -I * s, c.into()]
        }
        StandardGate::Ry(theta) => {
            let (c, s) = half_angle(theta.evaluate()?);
            [c.into(), (-s).into(), s.into(), c.into()]
        }
        StandardGate::Rz(theta) => {
            let t = theta.evaluate()?;
            [
                Complex64::from_polar(1.0, -t / 2.0),
                ZERO,
                ZERO,
                Complex64::from_polar(1.0, t / 2.0),
            ]
        }
        StandardGate::CX => unreachable!("two-qubit gate handled by caller"),
    };
    Ok(m)
}

fn half_angle(theta: f64) -> (f64, f64) {
    ((theta / 2.0).cos(), (theta / 2.0).sin())
}

/// The unitary implemented by `circuit`, expanding composite gates.
///
/// Every parameter must be bound.
pub fn circuit_unitary(circuit: &Circuit) -> IrResult<Matrix> {
    let num_qubits = u32::try_from(circuit.num_qubits()).unwrap_or(u32::MAX);
    let mut m = Matrix::identity(num_qubits)?;
    for inst in circuit.instructions() {
        m.apply(inst)?;
    }
    Ok(m)
}

/// The unitary of a single instruction embedded in `num_qubits` qubits.
pub fn instruction_unitary(inst: &Instruction, num_qubits: u32) -> IrResult<Matrix> {
    let mut circuit = Circuit::with_size("instruction", num_qubits);
    circuit.apply(inst.clone())?;
    circuit_unitary(&circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterExpression;
    use crate::qubit::QubitId;
    use std::f64::consts::PI;

    #[test]
    fn test_hadamard_squared() {
        let mut c = Circuit::with_size("hh", 1);
        c.h(QubitId(0)).unwrap().h(QubitId(0)).unwrap();
        let u = circuit_unitary(&c).unwrap();
        assert!(u.approx_eq(&Matrix::identity(1).unwrap(), TOLERANCE));
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        let mut c = Circuit::with_size("rx", 1);
        c.rx(PI, QubitId(0)).unwrap();
        let u = circuit_unitary(&c).unwrap();
        let x = Matrix::pauli(&"X0".parse().unwrap(), 1).unwrap();
        assert!(u.equiv_up_to_phase(&x, TOLERANCE));
        assert!(!u.approx_eq(&x, TOLERANCE));
    }

    #[test]
    fn test_little_endian_cx() {
        let mut c = Circuit::with_size("cx", 2);
        c.cx(QubitId(0), QubitId(1)).unwrap();
        let u = circuit_unitary(&c).unwrap();
        // |01> (index 1, qubit 0 set) maps to |11> (index 3).
        assert!((u.get(3, 1) - ONE).norm() < TOLERANCE);
        assert!((u.get(1, 3) - ONE).norm() < TOLERANCE);
        assert!((u.get(0, 0) - ONE).norm() < TOLERANCE);
    }

    #[test]
    fn test_unbound_parameter_is_rejected() {
        let mut c = Circuit::with_size("sym", 1);
        c.rz(ParameterExpression::symbol("t"), QubitId(0)).unwrap();
        assert!(matches!(
            circuit_unitary(&c),
            Err(IrError::UnboundParameter(name)) if name == "t"
        ));
    }

    #[test]
    fn test_too_many_qubits() {
        let c = Circuit::with_size("wide", MAX_QUBITS + 1);
        assert!(matches!(
            circuit_unitary(&c),
            Err(IrError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_dagger_inverts_unitary() {
        let mut c = Circuit::with_size("u", 2);
        c.ry(0.4, QubitId(0))
            .unwrap()
            .zx(1.1, QubitId(0), QubitId(1))
            .unwrap();
        let u = circuit_unitary(&c).unwrap();
        let product = u.mul(&u.dagger()).unwrap();
        assert!(product.approx_eq(&Matrix::identity(2).unwrap(), 1e-9));
    }

    #[test]
    fn test_width_and_dimension_errors() {
        assert!(matches!(
            Matrix::identity(64),
            Err(IrError::TooManyQubits { num_qubits: 64, .. })
        ));
        assert!(matches!(
            Matrix::pauli(&"Z0".parse().unwrap(), MAX_QUBITS + 1),
            Err(IrError::TooManyQubits { .. })
        ));

        let a = Matrix::identity(1).unwrap();
        let b = Matrix::identity(2).unwrap();
        assert!(matches!(
            a.mul(&b),
            Err(IrError::DimensionMismatch { left: 2, right: 4 })
        ));
        assert!(matches!(
            b.add(&a),
            Err(IrError::DimensionMismatch { left: 4, right: 2 })
        ));
    }
}
