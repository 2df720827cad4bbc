//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A reversible circuit.
///
/// This provides a high-level API for building reversible circuits as a
/// flat, program-ordered instruction list, with convenient methods for the
/// X/CX/MCX gate set.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the circuit.
    num_qubits: u32,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_qubits(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        circuit
    }

    /// The name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Number of qubits in the circuit.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of gate instructions in the circuit.
    pub fn num_gates(&self) -> usize {
        self.instructions.len()
    }

    /// The instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, target: QubitId) -> IrResult<&mut Self> {
        self.check_qubits(&[target], "x")?;
        self.instructions.push(Instruction::x(target));
        Ok(self)
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.check_qubits(&[control, target], "cx")?;
        self.instructions.push(Instruction::cx(control, target));
        Ok(self)
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.mcx(&[c1, c2], target)
    }

    /// Apply multi-controlled X gate.
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        if controls.is_empty() {
            return Err(IrError::EmptyControls);
        }
        let mut operands = controls.to_vec();
        operands.push(target);
        self.check_qubits(&operands, "mcx")?;
        self.instructions
            .push(Instruction::mcx(controls.iter().copied(), target));
        Ok(self)
    }

    /// Validate that operands exist and are pairwise distinct.
    fn check_qubits(&self, qubits: &[QubitId], gate_name: &str) -> IrResult<()> {
        for (i, &q) in qubits.iter().enumerate() {
            if q.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: q,
                    gate_name: Some(gate_name.to_string()),
                });
            }
            if qubits[..i].contains(&q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::ReversibleGate;

    #[test]
    fn test_builder() {
        let mut circuit = Circuit::with_qubits("test", 3);
        circuit
            .x(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .ccx(QubitId(0), QubitId(1), QubitId(2))
            .unwrap();

        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_gates(), 3);
        assert_eq!(circuit.instructions()[2].gate, ReversibleGate::Mcx { controls: 2 });
    }

    #[test]
    fn test_add_qubit_ids_are_dense() {
        let mut circuit = Circuit::new("dense");
        assert_eq!(circuit.add_qubit(), QubitId(0));
        assert_eq!(circuit.add_qubit(), QubitId(1));
        assert_eq!(circuit.num_qubits(), 2);
    }

    #[test]
    fn test_unknown_qubit_rejected() {
        let mut circuit = Circuit::with_qubits("test", 1);
        let err = circuit.cx(QubitId(0), QubitId(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { qubit: QubitId(5), .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_qubits("test", 2);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { qubit: QubitId(1), .. }));
    }

    #[test]
    fn test_empty_controls_rejected() {
        let mut circuit = Circuit::with_qubits("test", 1);
        let err = circuit.mcx(&[], QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::EmptyControls));
    }
}
