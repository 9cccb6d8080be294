//! Error types for the ansatz crate.

use thiserror::Error;

/// Errors produced while configuring or assembling a QOCA ansatz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnsatzError {
    /// The qubit operator and the ansatz disagree on the register width.
    #[error("Operator acts on {operator} qubits but the ansatz has {ansatz}")]
    QubitCountMismatch {
        /// Width of the ansatz.
        ansatz: u32,
        /// Width declared by the operator.
        operator: u32,
    },

    /// A parameter vector has the wrong length.
    #[error("Expected {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// Required number of parameters.
        expected: usize,
        /// Number supplied.
        got: usize,
    },

    /// The parameter count does not split into equal layers.
    #[error("{num_parameters} parameters cannot be split into {reps} equal layers")]
    UnevenLayerWidth {
        /// Total number of parameters.
        num_parameters: usize,
        /// Number of layers.
        reps: usize,
    },

    /// Unknown fermion-to-qubit mapping label.
    #[error("Unsupported qubit mapping '{0}' (expected jordan_wigner or parity)")]
    UnsupportedMapping(String),

    /// The ansatz needs at least one qubit.
    #[error("num_qubits must be at least 1, got {0}")]
    InvalidQubitCount(u32),

    /// The initial state does not fit the register.
    #[error("Invalid initial state: {0}")]
    InvalidInitialState(String),

    /// A Hamiltonian term could not be parsed or does not fit the operator.
    #[error("Invalid term '{term}': {reason}")]
    InvalidTerm {
        /// The offending term.
        term: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qoca_ir::IrError),
}

/// Result type for ansatz operations.
pub type AnsatzResult<T> = Result<T, AnsatzError>;
