//! Reversible gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classical reversible gate set.
///
/// Hierarchical synthesis only ever emits NOT, CNOT and multi-controlled X
/// gates; arbitrary node functions are decomposed into these by the
/// single-target gate callback before they reach the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReversibleGate {
    /// Pauli-X (NOT) gate.
    X,
    /// Controlled-X (CNOT) gate.
    Cx,
    /// Multi-controlled X gate; `controls == 2` is the Toffoli.
    Mcx {
        /// Number of control qubits.
        controls: u32,
    },
}

impl ReversibleGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ReversibleGate::X => "x",
            ReversibleGate::Cx => "cx",
            ReversibleGate::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            ReversibleGate::X => 1,
            ReversibleGate::Cx => 2,
            ReversibleGate::Mcx { controls } => controls + 1,
        }
    }

    /// Get the number of control qubits.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        match self {
            ReversibleGate::X => 0,
            ReversibleGate::Cx => 1,
            ReversibleGate::Mcx { controls } => *controls,
        }
    }

    /// Check if this gate is a Toffoli (two-control MCX).
    pub fn is_toffoli(&self) -> bool {
        matches!(self, ReversibleGate::Mcx { controls: 2 })
    }
}

impl fmt::Display for ReversibleGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(ReversibleGate::X.num_qubits(), 1);
        assert_eq!(ReversibleGate::Cx.num_qubits(), 2);
        assert_eq!(ReversibleGate::Mcx { controls: 2 }.num_qubits(), 3);
        assert_eq!(ReversibleGate::Mcx { controls: 4 }.num_controls(), 4);

        assert!(ReversibleGate::Mcx { controls: 2 }.is_toffoli());
        assert!(!ReversibleGate::Mcx { controls: 3 }.is_toffoli());
        assert!(!ReversibleGate::Cx.is_toffoli());
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(ReversibleGate::X.name(), "x");
        assert_eq!(ReversibleGate::Cx.name(), "cx");
        assert_eq!(ReversibleGate::Mcx { controls: 5 }.name(), "mcx");
    }
}
