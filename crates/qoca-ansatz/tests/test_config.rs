//! Tests for loading ansatz configuration files.

use std::io::Write;

use qoca_ansatz::{AnsatzConfig, AnsatzError, DriveTopology, VariationalForm};

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_yaml_by_extension() {
    let file = write_config(
        ".yaml",
        "num_qubits: 4\nreps: 2\ntopology: bisected\nhamiltonian:\n  - \"-0.5 * Z0 Z1\"\n",
    );
    let config = AnsatzConfig::from_path(file.path()).unwrap();
    assert_eq!(config.topology, DriveTopology::Bisected);
    let ansatz = config.build().unwrap();
    assert_eq!(ansatz.num_parameters(), (8 + 1) * 2);
}

#[test]
fn loads_json_by_extension() {
    let file = write_config(".json", r#"{"num_qubits": 3, "initial_state": "uniform"}"#);
    let ansatz = AnsatzConfig::from_path(file.path()).unwrap().build().unwrap();
    let circuit = ansatz.construct_circuit(None).unwrap();
    assert_eq!(circuit.count_ops()["h"], 3);
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_config(".toml", "num_qubits = 2");
    assert!(matches!(
        AnsatzConfig::from_path(file.path()),
        Err(AnsatzError::Config(_))
    ));
}

#[test]
fn missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        AnsatzConfig::from_path(dir.path().join("absent.yaml")),
        Err(AnsatzError::Config(_))
    ));
}

#[test]
fn operator_wider_than_ansatz_is_rejected() {
    let file = write_config(".yml", "num_qubits: 2\nhamiltonian: [\"Z0 Z3\"]\n");
    let config = AnsatzConfig::from_path(file.path()).unwrap();
    assert!(matches!(
        config.build(),
        Err(AnsatzError::InvalidTerm { .. })
    ));
}
