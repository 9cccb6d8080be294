//! Tests for QOCA circuit assembly.

use qoca_ansatz::hamiltonian::QubitOperator;
use qoca_ansatz::{
    AnsatzError, DriveTopology, HamiltonianMode, InitialState, QocaAnsatz, VariationalForm,
};
use qoca_ir::unitary::{TOLERANCE, circuit_unitary};
use qoca_ir::{Circuit, CompositeGate, ParameterExpression, QubitId};

fn layout(circuit: &Circuit) -> Vec<(&str, Vec<u32>)> {
    circuit
        .instructions()
        .iter()
        .map(|i| (i.name(), i.qubits.iter().map(|q| q.0).collect()))
        .collect()
}

// ---------------------------------------------------------------------------
// Drive-only layout
// ---------------------------------------------------------------------------

#[test]
fn four_qubit_single_layer_layout() {
    let ansatz = QocaAnsatz::new(4, 1).unwrap();
    assert_eq!(ansatz.num_parameters(), 8);
    let circuit = ansatz.construct_circuit(None).unwrap();

    let expected: Vec<(&str, Vec<u32>)> = vec![
        ("ry", vec![0]),
        ("rx", vec![0]),
        ("zy", vec![0, 1]),
        ("zx", vec![0, 1]),
        ("cx", vec![0, 1]),
        ("zy", vec![1, 2]),
        ("zx", vec![1, 2]),
        ("cx", vec![1, 2]),
        ("zy", vec![2, 3]),
        ("zx", vec![2, 3]),
        ("cx", vec![2, 3]),
        ("cx", vec![1, 2]),
        ("cx", vec![0, 1]),
    ];
    assert_eq!(layout(&circuit), expected);
}

#[test]
fn zero_parameters_are_explicit_zeros() {
    let ansatz = QocaAnsatz::new(3, 2).unwrap();
    let implicit = ansatz.construct_circuit(None).unwrap();
    let zeros = vec![ParameterExpression::zero(); ansatz.num_parameters()];
    let explicit = ansatz.construct_circuit(Some(&zeros)).unwrap();
    assert_eq!(implicit, explicit);
    assert!(!implicit.is_parameterized());
}

#[test]
fn layers_repeat() {
    let one = QocaAnsatz::new(3, 1).unwrap().construct_circuit(None).unwrap();
    let three = QocaAnsatz::new(3, 3).unwrap().construct_circuit(None).unwrap();
    assert_eq!(three.num_ops(), 3 * one.num_ops());
    assert_eq!(&three.instructions()[..one.num_ops()], one.instructions());
}

#[test]
fn zero_reps_is_empty() {
    let ansatz = QocaAnsatz::new(4, 0)
        .unwrap()
        .with_initial_state(InitialState::Uniform)
        .unwrap();
    assert_eq!(ansatz.num_parameters(), 0);
    let circuit = ansatz.construct_circuit(None).unwrap();
    assert_eq!(circuit.num_qubits(), 4);
    assert!(circuit.is_empty());
}

#[test]
fn wrong_length_is_rejected() {
    let ansatz = QocaAnsatz::new(2, 2).unwrap();
    let short = ParameterExpression::vector("t", 7);
    assert!(matches!(
        ansatz.construct_circuit(Some(&short)),
        Err(AnsatzError::ParameterCountMismatch { expected: 8, got: 7 })
    ));
}

#[test]
fn bisected_topology_splits_register() {
    let ansatz = QocaAnsatz::new(4, 1)
        .unwrap()
        .with_topology(DriveTopology::Bisected);
    assert_eq!(ansatz.num_parameters(), 8);
    let circuit = ansatz.construct_circuit(None).unwrap();
    let counts = circuit.count_ops();
    assert_eq!(counts["ry"], 2);
    assert_eq!(counts["zy"], 2);
    assert!(
        circuit
            .instructions()
            .iter()
            .all(|i| !(i.qubits.contains(&QubitId(1)) && i.qubits.contains(&QubitId(2))))
    );
}

// ---------------------------------------------------------------------------
// Hamiltonian layers
// ---------------------------------------------------------------------------

#[test]
fn operator_width_mismatch() {
    let op = QubitOperator::parse(5, "Z0 Z4").unwrap();
    let err = QocaAnsatz::new(4, 1)
        .unwrap()
        .with_hamiltonian(op, HamiltonianMode::Parameterized)
        .unwrap_err();
    assert!(matches!(
        err,
        AnsatzError::QubitCountMismatch { ansatz: 4, operator: 5 }
    ));
}

#[test]
fn hamiltonian_precedes_drive_in_each_layer() {
    let op = QubitOperator::parse(2, "-1.0 * Z0 Z1; 0.5 * X1").unwrap();
    let ansatz = QocaAnsatz::new(2, 2)
        .unwrap()
        .with_hamiltonian(op, HamiltonianMode::Parameterized)
        .unwrap();
    assert_eq!(ansatz.num_parameters(), 12);

    let circuit = ansatz.construct_circuit(None).unwrap();
    let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
    let layer = [
        "pauli_evolution",
        "pauli_evolution",
        "ry",
        "rx",
        "zy",
        "zx",
        "cx",
    ];
    assert_eq!(names, [layer, layer].concat());
}

#[test]
fn hamiltonian_times_scale_coefficients() {
    let op = QubitOperator::parse(2, "-1.0 * Z0 Z1; 0.5 * X1").unwrap();
    let ansatz = QocaAnsatz::new(2, 1)
        .unwrap()
        .with_hamiltonian(op, HamiltonianMode::Parameterized)
        .unwrap();
    let values = [0.3, 0.8, 0.0, 0.0, 0.0, 0.0];
    let circuit = ansatz.construct_circuit_with_values(&values).unwrap();
    let times: Vec<f64> = circuit
        .instructions()
        .iter()
        .filter_map(|i| match i.as_composite() {
            Some(CompositeGate::PauliEvolution { time, .. }) => time.as_f64(),
            _ => None,
        })
        .collect();
    assert_eq!(times.len(), 2);
    assert!((times[0] + 0.3).abs() < 1e-12);
    assert!((times[1] - 0.4).abs() < 1e-12);
}

#[test]
fn fixed_hamiltonian_consumes_no_parameters() {
    let op = QubitOperator::parse(3, "Z0 Z1; Z1 Z2").unwrap();
    let ansatz = QocaAnsatz::new(3, 2)
        .unwrap()
        .with_hamiltonian(op, HamiltonianMode::Fixed)
        .unwrap();
    assert_eq!(ansatz.num_parameters(), 12);
    let symbols = ansatz.parameter_symbols("t");
    let circuit = ansatz.construct_circuit(Some(&symbols)).unwrap();
    assert_eq!(circuit.count_ops()["pauli_evolution"], 4);
    assert_eq!(circuit.parameters().len(), 12);
}

// ---------------------------------------------------------------------------
// Initial states and numerics
// ---------------------------------------------------------------------------

#[test]
fn basis_state_is_prepended() {
    let ansatz = QocaAnsatz::new(3, 1)
        .unwrap()
        .with_initial_state("011".parse().unwrap())
        .unwrap();
    let circuit = ansatz.construct_circuit(None).unwrap();
    assert_eq!(layout(&circuit)[..2], [("x", vec![1]), ("x", vec![2])]);
}

#[test]
fn mismatched_basis_state_is_rejected() {
    let err = QocaAnsatz::new(3, 1)
        .unwrap()
        .with_initial_state("01".parse().unwrap())
        .unwrap_err();
    assert!(matches!(err, AnsatzError::InvalidInitialState(_)));
}

#[test]
fn zero_parameters_leave_only_cnot_action() {
    // With every angle zero the layer reduces to its CNOTs (up to phase).
    let ansatz = QocaAnsatz::new(3, 1).unwrap();
    let circuit = ansatz.construct_circuit(None).unwrap();

    let mut cnots = Circuit::with_size("cnots", 3);
    cnots
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .cx(QubitId(1), QubitId(2))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap();

    let u = circuit_unitary(&circuit).unwrap();
    let v = circuit_unitary(&cnots).unwrap();
    assert!(u.equiv_up_to_phase(&v, TOLERANCE));
}
