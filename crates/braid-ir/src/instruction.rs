//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::ReversibleGate;
use crate::qubit::QubitId;

/// A complete instruction with operands.
///
/// Operands are listed control-first with the target qubit last; downstream
/// consumers (including the single-target gate synthesis callback) rely on
/// the target-last ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate applied.
    pub gate: ReversibleGate,
    /// Qubits this instruction operates on, target last.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create an X instruction.
    pub fn x(target: QubitId) -> Self {
        Self {
            gate: ReversibleGate::X,
            qubits: vec![target],
        }
    }

    /// Create a CX instruction.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self {
            gate: ReversibleGate::Cx,
            qubits: vec![control, target],
        }
    }

    /// Create an MCX instruction.
    pub fn mcx(controls: impl IntoIterator<Item = QubitId>, target: QubitId) -> Self {
        let mut qubits: Vec<_> = controls.into_iter().collect();
        let controls = u32::try_from(qubits.len()).expect("control count exceeds u32::MAX");
        qubits.push(target);
        Self {
            gate: ReversibleGate::Mcx { controls },
            qubits,
        }
    }

    /// The control qubits of this instruction.
    pub fn controls(&self) -> &[QubitId] {
        &self.qubits[..self.qubits.len() - 1]
    }

    /// The target qubit of this instruction.
    pub fn target(&self) -> QubitId {
        self.qubits[self.qubits.len() - 1]
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_instruction() {
        let inst = Instruction::x(QubitId(2));
        assert_eq!(inst.name(), "x");
        assert!(inst.controls().is_empty());
        assert_eq!(inst.target(), QubitId(2));
    }

    #[test]
    fn test_cx_instruction() {
        let inst = Instruction::cx(QubitId(0), QubitId(1));
        assert_eq!(inst.controls(), &[QubitId(0)]);
        assert_eq!(inst.target(), QubitId(1));
    }

    #[test]
    fn test_mcx_instruction() {
        let inst = Instruction::mcx([QubitId(0), QubitId(1)], QubitId(2));
        assert_eq!(inst.gate, ReversibleGate::Mcx { controls: 2 });
        assert_eq!(inst.controls(), &[QubitId(0), QubitId(1)]);
        assert_eq!(inst.target(), QubitId(2));
    }
}
