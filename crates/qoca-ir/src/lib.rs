//! QOCA Circuit Intermediate Representation
//!
//! This crate provides the circuit data structures the QOCA ansatz is built
//! on: an ordered, validated list of gate applications over a fixed register,
//! symbolic parameters, Pauli strings and the composite two-qubit rotations
//! `zx` and `zy`.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a slot in the circuit register
//! - **Gates**: [`StandardGate`] for primitives and [`CompositeGate`] for
//!   gates with a fixed decomposition (`g`, `zx`, `zy`, Pauli evolutions)
//! - **Parameters**: [`ParameterExpression`] for symbolic rotation angles
//! - **Pauli strings**: [`PauliString`] parsed from text such as `"X0 Z1"`
//! - **Circuit**: [`Circuit`] builder with validated appends
//! - **Unitaries**: [`unitary::circuit_unitary`] for checking small circuits
//! - **OpenQASM**: [`qasm::emit`] for export
//!
//! # Example: A ZX rotation
//!
//! ```rust
//! use qoca_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("zx", 2);
//! circuit.zx(0.3, QubitId(0), QubitId(1)).unwrap();
//!
//! // One level down: h, cx, rz, cx, h
//! let flat = circuit.decompose_all().unwrap();
//! assert_eq!(flat.num_ops(), 5);
//! ```
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use qoca_ir::{Circuit, ParameterExpression, QubitId};
//! use rustc_hash::FxHashMap;
//!
//! let mut circuit = Circuit::with_size("variational", 2);
//! circuit
//!     .zy(ParameterExpression::symbol("theta"), QubitId(0), QubitId(1))
//!     .unwrap();
//! assert!(circuit.is_parameterized());
//!
//! let mut values = FxHashMap::default();
//! values.insert("theta".to_string(), 0.5);
//! assert!(!circuit.bind_parameters(&values).is_parameterized());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `G` | 1 | `Rz(π)` then `Rx(π/2)` |
//! | `ZX(θ)` | 2 | `exp(-iθ/2 · Z⊗X)` |
//! | `ZY(θ)` | 2 | `Z⊗Y` rotation, `exp(iθ/2 · Z⊗Y)` up to phase |
//! | `PauliEvolution` | weight of `P` | `exp(-i·t·P)` |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod pauli;
pub mod qasm;
pub mod qubit;
pub mod unitary;

pub use circuit::{Circuit, DEFAULT_REGISTER};
pub use error::{IrError, IrResult};
pub use gate::{CompositeGate, Gate, StandardGate};
pub use instruction::Instruction;
pub use parameter::ParameterExpression;
pub use pauli::{PauliOp, PauliString};
pub use qubit::{Qubit, QubitId};
