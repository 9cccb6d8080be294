//! Qubit identifiers and register membership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit slot within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// A qubit slot, tagged with the register it was allocated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// The slot index.
    pub id: QubitId,
    /// Name of the owning register.
    pub register: String,
}

impl Qubit {
    /// Create a qubit belonging to `register`.
    pub fn new(id: QubitId, register: impl Into<String>) -> Self {
        Self {
            id,
            register: register.into(),
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.register, self.id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(3)), "q3");
        assert_eq!(format!("{}", Qubit::new(QubitId(1), "qr")), "qr[1]");
    }
}
