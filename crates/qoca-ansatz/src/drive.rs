//! Drive layer.
//!
//! The drive layer mimics the control pulses of a superconducting device:
//! a single-qubit seed rotation followed by nearest-neighbour `zy`/`zx`
//! rotations, each pair closed by a CNOT, and a CNOT back-cascade.
//!
//! For a chain starting at qubit `s` and ending before `e`:
//!
//! ```text
//! ry(p0) s; rx(p1) s;
//! for i in s..e-1:   zy(p[2k+2]) i,i+1; zx(p[2k+3]) i,i+1; cx i,i+1;   (k = i - s)
//! for i in e-2..=s+1 (descending): cx i-1,i;
//! ```
//!
//! A chain of `m` qubits consumes exactly `2m` parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use qoca_ir::{Circuit, ParameterExpression, QubitId};
use tracing::trace;

use crate::error::{AnsatzError, AnsatzResult};

/// Qubit connectivity swept by the drive layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveTopology {
    /// One chain over `0..n`.
    #[default]
    Chain,
    /// Two independent chains over `0..n/2` and `n/2..n`.
    Bisected,
}

impl DriveTopology {
    /// The qubit ranges swept, in order. Empty ranges are omitted.
    pub fn segments(self, num_qubits: u32) -> Vec<Range<u32>> {
        let ranges = match self {
            DriveTopology::Chain => vec![0..num_qubits],
            DriveTopology::Bisected => {
                let mid = num_qubits / 2;
                vec![0..mid, mid..num_qubits]
            }
        };
        ranges.into_iter().filter(|r| !r.is_empty()).collect()
    }
}

impl fmt::Display for DriveTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveTopology::Chain => f.write_str("chain"),
            DriveTopology::Bisected => f.write_str("bisected"),
        }
    }
}

impl FromStr for DriveTopology {
    type Err = AnsatzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chain" => Ok(DriveTopology::Chain),
            "bisected" => Ok(DriveTopology::Bisected),
            other => Err(AnsatzError::Config(format!(
                "unknown drive topology '{other}' (expected chain or bisected)"
            ))),
        }
    }
}

/// Number of parameters one drive layer over `num_qubits` qubits consumes.
pub fn drive_parameter_count(num_qubits: u32) -> usize {
    2 * num_qubits as usize
}

/// Append one drive layer to `circuit`.
///
/// `params` must hold exactly `2n` entries for an `n`-qubit circuit; they
/// are consumed in index order.
pub fn append_drive_layer(
    circuit: &mut Circuit,
    topology: DriveTopology,
    params: &[ParameterExpression],
) -> AnsatzResult<()> {
    let num_qubits = circuit.num_qubits() as u32;
    let expected = drive_parameter_count(num_qubits);
    if params.len() != expected {
        return Err(AnsatzError::ParameterCountMismatch {
            expected,
            got: params.len(),
        });
    }

    let mut offset = 0;
    for segment in topology.segments(num_qubits) {
        let width = drive_parameter_count(segment.len() as u32);
        trace!(start = segment.start, end = segment.end, "drive segment");
        append_chain(circuit, segment, &params[offset..offset + width])?;
        offset += width;
    }
    Ok(())
}

/// One sweep over `qubits`, consuming `2 · len(qubits)` parameters.
fn append_chain(
    circuit: &mut Circuit,
    qubits: Range<u32>,
    params: &[ParameterExpression],
) -> AnsatzResult<()> {
    let (start, end) = (qubits.start, qubits.end);
    circuit
        .ry(params[0].clone(), QubitId(start))?
        .rx(params[1].clone(), QubitId(start))?;

    for i in start..end - 1 {
        let k = (i - start) as usize;
        let (a, b) = (QubitId(i), QubitId(i + 1));
        circuit
            .zy(params[2 * k + 2].clone(), a, b)?
            .zx(params[2 * k + 3].clone(), a, b)?
            .cx(a, b)?;
    }

    for i in (start + 1..end.saturating_sub(1)).rev() {
        circuit.cx(QubitId(i - 1), QubitId(i))?;
    }
    Ok(())
}
