//! Info command implementation.

use anyhow::Result;
use console::style;

use qoca_ansatz::VariationalForm;

use super::common::load_ansatz;

/// Execute the info command.
pub fn execute(config: &str) -> Result<()> {
    let ansatz = load_ansatz(config)?;

    println!("{} {}", style("→").cyan().bold(), style(config).green());
    println!("  Qubits:        {}", ansatz.num_qubits());
    println!("  Layers:        {}", ansatz.reps());
    println!("  Topology:      {}", ansatz.topology());
    println!(
        "  Initial state: {}",
        ansatz
            .initial_state()
            .map_or_else(|| "none".to_string(), ToString::to_string)
    );
    println!("  Register:      {}", ansatz.register());

    match ansatz.hamiltonian() {
        Some(op) => {
            println!(
                "  Hamiltonian:   {} terms ({}, {:?})",
                op.num_terms(),
                ansatz.mapping(),
                ansatz.hamiltonian_mode()
            );
            for term in op.terms() {
                println!("    {}", style(term).dim());
            }
        }
        None => println!("  Hamiltonian:   none"),
    }

    println!();
    println!(
        "  Parameters:    {} ({} per layer: {} hamiltonian + {} drive)",
        style(ansatz.num_parameters()).yellow(),
        ansatz.layer_width(),
        ansatz.hamiltonian_width(),
        ansatz.layer_width() - ansatz.hamiltonian_width()
    );

    let circuit = ansatz.construct_circuit(None)?;
    println!(
        "  Circuit:       {} ops, depth {}",
        circuit.num_ops(),
        circuit.depth()
    );
    Ok(())
}
