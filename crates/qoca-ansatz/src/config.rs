//! Ansatz configuration files.
//!
//! An [`AnsatzConfig`] is read from YAML (`.yaml`, `.yml`) or JSON (`.json`)
//! and turned into a [`QocaAnsatz`] by [`AnsatzConfig::build`]:
//!
//! ```yaml
//! num_qubits: 4
//! reps: 2
//! topology: chain
//! initial_state: "1100"
//! qubit_mapping: jordan_wigner
//! hamiltonian_mode: parameterized
//! hamiltonian:
//!   - "-0.5 * Z0 Z1"
//!   - "0.25 * X2"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use qoca_ir::DEFAULT_REGISTER;
use tracing::debug;

use crate::ansatz::QocaAnsatz;
use crate::drive::DriveTopology;
use crate::error::{AnsatzError, AnsatzResult};
use crate::evolution::HamiltonianMode;
use crate::hamiltonian::QubitOperator;
use crate::initial_state::InitialState;
use crate::mapping::QubitMapping;

/// Serializable description of a QOCA ansatz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnsatzConfig {
    /// Register width.
    pub num_qubits: u32,

    /// Number of layers.
    #[serde(default = "default_reps")]
    pub reps: usize,

    /// Drive topology.
    #[serde(default)]
    pub topology: DriveTopology,

    /// Optional state preparation: `zero`, `uniform` or a quoted bit
    /// string such as `"1100"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<InitialState>,

    /// Qubit operator terms such as `"-0.5 * Z0 Z1"`. Empty means drive-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hamiltonian: Vec<String>,

    /// How Hamiltonian evolution times are chosen.
    #[serde(default)]
    pub hamiltonian_mode: HamiltonianMode,

    /// Mapping the operator was derived with.
    #[serde(default = "default_qubit_mapping")]
    pub qubit_mapping: String,

    /// Register name.
    #[serde(default = "default_register")]
    pub register: String,
}

fn default_reps() -> usize {
    1
}

fn default_qubit_mapping() -> String {
    QubitMapping::default().to_string()
}

fn default_register() -> String {
    DEFAULT_REGISTER.to_string()
}

impl AnsatzConfig {
    /// A drive-only configuration with default settings.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            reps: default_reps(),
            topology: DriveTopology::default(),
            initial_state: None,
            hamiltonian: vec![],
            hamiltonian_mode: HamiltonianMode::default(),
            qubit_mapping: default_qubit_mapping(),
            register: default_register(),
        }
    }

    /// Load from a file, choosing the format by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> AnsatzResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AnsatzError::Config(format!("{}: {e}", path.display())))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => {
                return Err(AnsatzError::Config(format!(
                    "{}: unknown configuration format (expected .yaml, .yml or .json)",
                    path.display()
                )));
            }
        };
        debug!(path = %path.display(), num_qubits = config.num_qubits, "loaded ansatz config");
        Ok(config)
    }

    /// Parse YAML text.
    pub fn from_yaml_str(text: &str) -> AnsatzResult<Self> {
        serde_yaml_ng::from_str(text).map_err(|e| AnsatzError::Config(e.to_string()))
    }

    /// Parse JSON text.
    pub fn from_json_str(text: &str) -> AnsatzResult<Self> {
        serde_json::from_str(text).map_err(|e| AnsatzError::Config(e.to_string()))
    }

    /// Serialize as YAML.
    pub fn to_yaml(&self) -> AnsatzResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| AnsatzError::Config(e.to_string()))
    }

    /// The parsed qubit operator, if any terms are configured.
    pub fn operator(&self) -> AnsatzResult<Option<QubitOperator>> {
        if self.hamiltonian.is_empty() {
            return Ok(None);
        }
        QubitOperator::from_strs(self.num_qubits, self.hamiltonian.iter().map(String::as_str))
            .map(Some)
    }

    /// Validate and build the ansatz.
    pub fn build(&self) -> AnsatzResult<QocaAnsatz> {
        let mapping: QubitMapping = self.qubit_mapping.parse()?;
        let mut ansatz = QocaAnsatz::new(self.num_qubits, self.reps)?
            .with_topology(self.topology)
            .with_mapping(mapping)
            .with_register(self.register.clone());
        if let Some(state) = &self.initial_state {
            ansatz = ansatz.with_initial_state(state.clone())?;
        }
        if let Some(op) = self.operator()? {
            ansatz = ansatz.with_hamiltonian(op, self.hamiltonian_mode)?;
        }
        Ok(ansatz)
    }
}
