//! OpenQASM 3 emitter.
//!
//! `g`, `zx` and `zy` are emitted as calls to inline `gate` definitions so
//! the output keeps the ansatz structure readable. Pauli evolutions have no
//! portable counterpart and are expanded into primitives. Unbound symbols
//! become `input float[64]` declarations.

use rustc_hash::{FxHashMap, FxHashSet};
use std::f64::consts::PI;

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::gate::{CompositeGate, Gate};
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::qubit::QubitId;

/// Emit a circuit as OpenQASM 3 source.
pub fn emit(circuit: &Circuit) -> IrResult<String> {
    let mut emitter = Emitter::new(circuit.register());
    emitter.emit_circuit(circuit)?;
    Ok(emitter.output)
}

/// Names a symbol identifier must not shadow.
const RESERVED: &[&str] = &[
    "pi", "g", "zx", "zy", "gate", "input", "float", "qubit", "include", "OPENQASM",
];

struct Emitter<'a> {
    register: &'a str,
    output: String,
    /// Symbol name to emitted identifier.
    idents: FxHashMap<String, String>,
}

impl<'a> Emitter<'a> {
    fn new(register: &'a str) -> Self {
        Self {
            register,
            output: String::new(),
            idents: FxHashMap::default(),
        }
    }

    /// Assign each symbol a distinct identifier, in sorted symbol order.
    fn assign_idents<'s>(&mut self, symbols: impl IntoIterator<Item = &'s String>) {
        let mut taken: FxHashSet<String> = RESERVED.iter().map(|s| (*s).to_string()).collect();
        taken.insert(self.register.to_string());
        for name in symbols {
            let base = sanitize(name);
            let mut ident = base.clone();
            let mut k = 1;
            while taken.contains(&ident) {
                ident = format!("{base}_{k}");
                k += 1;
            }
            taken.insert(ident.clone());
            self.idents.insert(name.clone(), ident);
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> IrResult<()> {
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        // First pass: gate definitions for the composites in use.
        let used = |name: &str| circuit.instructions().iter().any(|i| i.name() == name);
        let needs_g = used("g") || used("zy");
        let needs_zx = used("zx");
        let needs_zy = used("zy");
        if needs_g {
            self.writeln("gate g a { rz(pi) a; rx(pi/2) a; }");
        }
        if needs_zx {
            self.writeln("gate zx(theta) a, b { h b; cx a, b; rz(theta) b; cx a, b; h b; }");
        }
        if needs_zy {
            self.writeln("gate zy(theta) a, b { g b; cx a, b; rz(theta) b; cx a, b; g b; }");
        }
        if needs_g || needs_zx {
            self.writeln("");
        }

        let symbols = circuit.parameters();
        self.assign_idents(&symbols);
        for name in &symbols {
            let line = format!("input float[64] {};", self.ident(name));
            self.writeln(&line);
        }
        if !symbols.is_empty() {
            self.writeln("");
        }

        if circuit.num_qubits() > 0 {
            self.writeln(&format!(
                "qubit[{}] {};",
                circuit.num_qubits(),
                self.register
            ));
            self.writeln("");
        }

        for inst in circuit.instructions() {
            if matches!(
                inst.gate,
                Gate::Composite(CompositeGate::PauliEvolution { .. })
            ) {
                for sub in inst.flatten()? {
                    self.emit_instruction(&sub);
                }
            } else {
                self.emit_instruction(inst);
            }
        }
        Ok(())
    }

    fn emit_instruction(&mut self, inst: &Instruction) {
        let params: Vec<String> = inst
            .gate
            .parameters()
            .into_iter()
            .map(|p| self.emit_param(p))
            .collect();
        let qubits = self.emit_qubits(&inst.qubits);
        let name = inst.name();
        if params.is_empty() {
            self.writeln(&format!("{name} {qubits};"));
        } else {
            self.writeln(&format!("{name}({}) {qubits};", params.join(", ")));
        }
    }

    fn emit_qubits(&self, qubits: &[QubitId]) -> String {
        qubits
            .iter()
            .map(|q| format!("{}[{}]", self.register, q.0))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn ident(&self, name: &str) -> String {
        self.idents
            .get(name)
            .cloned()
            .unwrap_or_else(|| sanitize(name))
    }

    fn emit_param(&self, param: &ParameterExpression) -> String {
        match param {
            ParameterExpression::Constant(v) => {
                let named = [
                    (PI, "pi"),
                    (PI / 2.0, "pi/2"),
                    (PI / 4.0, "pi/4"),
                    (-PI / 2.0, "-pi/2"),
                    (-PI / 4.0, "-pi/4"),
                ];
                named
                    .iter()
                    .find(|(x, _)| (v - x).abs() < 1e-10)
                    .map_or_else(|| format!("{v:.10}"), |(_, s)| (*s).to_string())
            }
            ParameterExpression::Symbol(name) => self.ident(name),
            ParameterExpression::Neg(e) => format!("-({})", self.emit_param(e)),
            ParameterExpression::Add(a, b) => {
                format!("({} + {})", self.emit_param(a), self.emit_param(b))
            }
            ParameterExpression::Mul(a, b) => {
                format!("({} * {})", self.emit_param(a), self.emit_param(b))
            }
        }
    }
}

/// `theta[3]` is not an identifier; emit it as `theta_3`. Names that would
/// not start with a letter get a `p_` prefix.
fn sanitize(name: &str) -> String {
    let ident: String = name
        .chars()
        .filter_map(|c| match c {
            '[' => Some('_'),
            ']' => None,
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => Some('_'),
        })
        .collect();
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => ident,
        _ => format!("p_{ident}"),
    }
}
