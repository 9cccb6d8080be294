//! Build command implementation.

use anyhow::Result;
use console::style;
use tracing::info;

use qoca_ansatz::VariationalForm;

use super::common::{OutputFormat, load_ansatz, parse_params, render, write_output};

/// Execute the build command.
pub fn execute(
    config: &str,
    params: Option<&str>,
    symbolic: bool,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let ansatz = load_ansatz(config)?;
    info!(
        num_qubits = ansatz.num_qubits(),
        num_parameters = ansatz.num_parameters(),
        "building ansatz"
    );

    let circuit = if symbolic {
        let symbols = ansatz.parameter_symbols("theta");
        ansatz.construct_circuit(Some(&symbols))?
    } else if let Some(text) = params {
        let values = parse_params(text)?;
        ansatz.construct_circuit_with_values(&values)?
    } else {
        ansatz.construct_circuit(None)?
    };

    let text = render(&circuit, format)?;
    write_output(&text, output)?;

    if let Some(path) = output {
        eprintln!(
            "{} Built {} ops on {} qubits",
            style("✓").green().bold(),
            circuit.num_ops(),
            circuit.num_qubits()
        );
        eprintln!("  Output: {}", style(path).green());
    }
    Ok(())
}
