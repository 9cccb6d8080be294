//! The QOCA ansatz assembler.
//!
//! A QOCA circuit is an optional initial state followed by `reps` layers.
//! Each layer is a Hamiltonian layer (when an operator is configured) and a
//! drive layer. The flat parameter vector is split into `reps` equal blocks,
//! each laid out as `[hamiltonian | drive]`.
//!
//! # Example
//!
//! ```rust
//! use qoca_ansatz::{QocaAnsatz, VariationalForm};
//!
//! let ansatz = QocaAnsatz::new(4, 2).unwrap();
//! assert_eq!(ansatz.num_parameters(), 16);
//!
//! let symbols = ansatz.parameter_symbols("theta");
//! let circuit = ansatz.construct_circuit(Some(&symbols)).unwrap();
//! assert_eq!(circuit.parameters().len(), 16);
//! ```

use std::f64::consts::PI;

use qoca_ir::{Circuit, ParameterExpression, DEFAULT_REGISTER};
use tracing::{debug, trace};

use crate::drive::{DriveTopology, append_drive_layer, drive_parameter_count};
use crate::error::{AnsatzError, AnsatzResult};
use crate::evolution::{HamiltonianMode, append_hamiltonian_layer};
use crate::hamiltonian::QubitOperator;
use crate::initial_state::InitialState;
use crate::mapping::QubitMapping;

/// A parameterized circuit family.
pub trait VariationalForm {
    /// Width of the circuits produced.
    fn num_qubits(&self) -> u32;

    /// Length of the parameter vector.
    fn num_parameters(&self) -> usize;

    /// Register name used by [`construct_circuit`](Self::construct_circuit).
    fn register(&self) -> &str {
        DEFAULT_REGISTER
    }

    /// Build the circuit on a register of the given name.
    ///
    /// `None` stands for the all-zero parameter vector.
    fn construct_circuit_on(
        &self,
        parameters: Option<&[ParameterExpression]>,
        register: &str,
    ) -> AnsatzResult<Circuit>;

    /// Build the circuit on the configured register.
    fn construct_circuit(&self, parameters: Option<&[ParameterExpression]>) -> AnsatzResult<Circuit> {
        self.construct_circuit_on(parameters, self.register())
    }

    /// Optimizer bounds, one `(-π, π)` pair per parameter.
    fn parameter_bounds(&self) -> Vec<(f64, f64)> {
        vec![(-PI, PI); self.num_parameters()]
    }

    /// Symbols `prefix[0]`, `prefix[1]`, ... for a symbolic build.
    fn parameter_symbols(&self, prefix: &str) -> Vec<ParameterExpression> {
        ParameterExpression::vector(prefix, self.num_parameters())
    }
}

/// The quantum optimal control inspired ansatz.
///
/// Immutable once built; the `with_*` methods return modified copies.
#[derive(Debug, Clone, PartialEq)]
pub struct QocaAnsatz {
    num_qubits: u32,
    reps: usize,
    topology: DriveTopology,
    initial_state: Option<InitialState>,
    hamiltonian: Option<QubitOperator>,
    mode: HamiltonianMode,
    mapping: QubitMapping,
    register: String,
}

impl QocaAnsatz {
    /// A drive-only ansatz over `num_qubits` qubits with `reps` layers.
    pub fn new(num_qubits: u32, reps: usize) -> AnsatzResult<Self> {
        if num_qubits == 0 {
            return Err(AnsatzError::InvalidQubitCount(num_qubits));
        }
        Ok(Self {
            num_qubits,
            reps,
            topology: DriveTopology::default(),
            initial_state: None,
            hamiltonian: None,
            mode: HamiltonianMode::default(),
            mapping: QubitMapping::default(),
            register: DEFAULT_REGISTER.to_string(),
        })
    }

    /// Use a different drive topology.
    #[must_use]
    pub fn with_topology(mut self, topology: DriveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Prepend an initial state.
    pub fn with_initial_state(mut self, state: InitialState) -> AnsatzResult<Self> {
        state.validate(self.num_qubits)?;
        self.initial_state = Some(state);
        Ok(self)
    }

    /// Interleave a Hamiltonian layer before every drive layer.
    ///
    /// The operator must be declared over exactly `num_qubits` qubits.
    pub fn with_hamiltonian(
        mut self,
        operator: QubitOperator,
        mode: HamiltonianMode,
    ) -> AnsatzResult<Self> {
        if operator.num_qubits() != self.num_qubits {
            return Err(AnsatzError::QubitCountMismatch {
                ansatz: self.num_qubits,
                operator: operator.num_qubits(),
            });
        }
        self.hamiltonian = Some(operator);
        self.mode = mode;
        Ok(self)
    }

    /// Record the mapping the operator was produced with.
    #[must_use]
    pub fn with_mapping(mut self, mapping: QubitMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Name the qubit register.
    #[must_use]
    pub fn with_register(mut self, register: impl Into<String>) -> Self {
        self.register = register.into();
        self
    }

    /// A copy of this ansatz over `num_qubits` qubits.
    ///
    /// Fails if the configured operator or basis state has another width.
    pub fn with_num_qubits(&self, num_qubits: u32) -> AnsatzResult<Self> {
        let mut resized = Self::new(num_qubits, self.reps)?
            .with_topology(self.topology)
            .with_mapping(self.mapping)
            .with_register(self.register.clone());
        if let Some(state) = &self.initial_state {
            resized = resized.with_initial_state(state.clone())?;
        }
        if let Some(op) = &self.hamiltonian {
            resized = resized.with_hamiltonian(op.clone(), self.mode)?;
        }
        Ok(resized)
    }

    /// Number of layers.
    pub fn reps(&self) -> usize {
        self.reps
    }

    /// Drive topology.
    pub fn topology(&self) -> DriveTopology {
        self.topology
    }

    /// Initial state, if any.
    pub fn initial_state(&self) -> Option<&InitialState> {
        self.initial_state.as_ref()
    }

    /// The qubit operator, if any.
    pub fn hamiltonian(&self) -> Option<&QubitOperator> {
        self.hamiltonian.as_ref()
    }

    /// Hamiltonian layer mode.
    pub fn hamiltonian_mode(&self) -> HamiltonianMode {
        self.mode
    }

    /// Mapping label of the operator.
    pub fn mapping(&self) -> QubitMapping {
        self.mapping
    }

    /// Parameters consumed by one Hamiltonian sub-block.
    pub fn hamiltonian_width(&self) -> usize {
        self.hamiltonian
            .as_ref()
            .map_or(0, |op| self.mode.parameter_count(op))
    }

    /// Parameters consumed by one layer.
    pub fn layer_width(&self) -> usize {
        self.hamiltonian_width() + drive_parameter_count(self.num_qubits)
    }

    /// Build with concrete angles.
    pub fn construct_circuit_with_values(&self, values: &[f64]) -> AnsatzResult<Circuit> {
        let params: Vec<ParameterExpression> = values.iter().copied().map(Into::into).collect();
        self.construct_circuit(Some(&params))
    }
}

impl VariationalForm for QocaAnsatz {
    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn num_parameters(&self) -> usize {
        self.layer_width() * self.reps
    }

    fn register(&self) -> &str {
        &self.register
    }

    fn construct_circuit_on(
        &self,
        parameters: Option<&[ParameterExpression]>,
        register: &str,
    ) -> AnsatzResult<Circuit> {
        let num_parameters = self.num_parameters();
        let zeros;
        let params = match parameters {
            Some(p) => p,
            None => {
                zeros = vec![ParameterExpression::zero(); num_parameters];
                &zeros[..]
            }
        };
        if params.len() != num_parameters {
            return Err(AnsatzError::ParameterCountMismatch {
                expected: num_parameters,
                got: params.len(),
            });
        }

        let mut circuit = Circuit::with_register("qoca", register, self.num_qubits);
        if self.reps == 0 {
            return Ok(circuit);
        }
        if num_parameters % self.reps != 0 {
            return Err(AnsatzError::UnevenLayerWidth {
                num_parameters,
                reps: self.reps,
            });
        }
        let layer_width = num_parameters / self.reps;
        let ham_width = self.hamiltonian_width();

        debug!(
            num_qubits = self.num_qubits,
            reps = self.reps,
            num_parameters,
            topology = %self.topology,
            hamiltonian_terms = self.hamiltonian.as_ref().map_or(0, QubitOperator::num_terms),
            "constructing QOCA circuit"
        );

        if let Some(state) = &self.initial_state {
            state.apply(&mut circuit)?;
        }

        for (layer, block) in params.chunks_exact(layer_width).enumerate() {
            let (ham_params, drive_params) = block.split_at(ham_width);
            trace!(layer, ham = ham_params.len(), drive = drive_params.len(), "layer");
            if let Some(op) = &self.hamiltonian {
                append_hamiltonian_layer(&mut circuit, op, self.mode, ham_params)?;
            }
            append_drive_layer(&mut circuit, self.topology, drive_params)?;
        }

        debug!(
            num_ops = circuit.num_ops(),
            depth = circuit.depth(),
            "QOCA circuit constructed"
        );
        Ok(circuit)
    }
}
