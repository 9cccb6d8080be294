//! `qoca-ansatz`: quantum optimal control inspired variational ansatz.
//!
//! Builds the QOCA circuit family as a [`qoca_ir::Circuit`]: `reps` layers,
//! each an optional Hamiltonian layer (one Pauli evolution per operator
//! term) followed by a drive layer of seed rotations, nearest-neighbour
//! `zy`/`zx` rotations and CNOT cascades.
//!
//! The qubit operator is supplied already mapped to qubits; this crate does
//! not derive operators from molecules, evolve states or optimize
//! parameters.
//!
//! # Quick start
//!
//! ```rust
//! use qoca_ansatz::hamiltonian::QubitOperator;
//! use qoca_ansatz::{HamiltonianMode, QocaAnsatz, VariationalForm};
//!
//! let op = QubitOperator::parse(2, "-1.0 * Z0 Z1; 0.5 * X0").unwrap();
//! let ansatz = QocaAnsatz::new(2, 1)
//!     .unwrap()
//!     .with_hamiltonian(op, HamiltonianMode::Parameterized)
//!     .unwrap();
//!
//! // 2 Hamiltonian parameters + 2·n drive parameters
//! assert_eq!(ansatz.num_parameters(), 6);
//!
//! let circuit = ansatz.construct_circuit(None).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! ```

pub mod ansatz;
pub mod config;
pub mod drive;
pub mod error;
pub mod evolution;
pub mod hamiltonian;
pub mod initial_state;
pub mod mapping;

pub use ansatz::{QocaAnsatz, VariationalForm};
pub use config::AnsatzConfig;
pub use drive::DriveTopology;
pub use error::{AnsatzError, AnsatzResult};
pub use evolution::HamiltonianMode;
pub use hamiltonian::{PauliTerm, QubitOperator};
pub use initial_state::InitialState;
pub use mapping::QubitMapping;
