//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum optimal control inspired ansatz",
        style("QOCA").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qoca-ir       Circuit representation, zx/zy gates, OpenQASM export");
    println!("  qoca-ansatz   Drive and Hamiltonian layers, ansatz assembly");
    println!("  qoca-cli      Command-line interface");
}
