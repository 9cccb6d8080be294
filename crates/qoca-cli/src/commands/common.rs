//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qoca_ansatz::{AnsatzConfig, QocaAnsatz};
use qoca_ir::Circuit;

/// Output formats understood by `qoca build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Qasm,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "summary" | "text" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "qasm" | "qasm3" => Ok(OutputFormat::Qasm),
            other => anyhow::bail!("Unknown format: '{other}'. Available: summary, json, qasm"),
        }
    }
}

/// Load a configuration file and build its ansatz.
pub fn load_ansatz(path: &str) -> Result<QocaAnsatz> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    let config =
        AnsatzConfig::from_path(path).with_context(|| format!("Failed to load config: {path}"))?;
    config
        .build()
        .with_context(|| format!("Invalid ansatz configuration: {path}"))
}

/// Parse a comma-separated list of angles.
pub fn parse_params(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(k, s)| {
            s.parse::<f64>()
                .with_context(|| format!("Parameter {k} is not a number: '{s}'"))
        })
        .collect()
}

/// Render a circuit in the requested format.
pub fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(summary(circuit)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")
        }
        OutputFormat::Qasm => qoca_ir::qasm::emit(circuit).context("Failed to emit OpenQASM"),
    }
}

fn summary(circuit: &Circuit) -> String {
    let mut counts: Vec<_> = circuit.count_ops().into_iter().collect();
    counts.sort_unstable();
    let mut out = format!(
        "qubits: {}\noperations: {}\ndepth: {}\nunbound parameters: {}\n",
        circuit.num_qubits(),
        circuit.num_ops(),
        circuit.depth(),
        circuit.parameters().len()
    );
    for (name, count) in counts {
        out.push_str(&format!("  {name:<16} {count}\n"));
    }
    out
}

/// Write `text` to `output`, or stdout when `None`.
pub fn write_output(text: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
