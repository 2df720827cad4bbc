//! The circuit sink abstraction.

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::qubit::QubitId;

/// Capability set a reversible-circuit sink must expose to synthesis.
///
/// The synthesis driver allocates qubits through [`add_qubit`] and emits
/// gates in strict program order; implementations may build an in-memory
/// circuit (see [`Circuit`]), stream gates to a writer, or merely count
/// them.
///
/// [`add_qubit`]: QuantumNetwork::add_qubit
pub trait QuantumNetwork {
    /// Number of qubits currently in the network.
    fn num_qubits(&self) -> u32;

    /// Append a fresh qubit and return its index.
    fn add_qubit(&mut self) -> QubitId;

    /// Emit a Pauli-X gate on `target`.
    fn x(&mut self, target: QubitId) -> IrResult<()>;

    /// Emit a CNOT from `control` into `target`.
    fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<()>;

    /// Emit a multi-controlled X; two controls is the Toffoli.
    fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<()>;
}

impl QuantumNetwork for Circuit {
    fn num_qubits(&self) -> u32 {
        Circuit::num_qubits(self)
    }

    fn add_qubit(&mut self) -> QubitId {
        Circuit::add_qubit(self)
    }

    fn x(&mut self, target: QubitId) -> IrResult<()> {
        Circuit::x(self, target)?;
        Ok(())
    }

    fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<()> {
        Circuit::cx(self, control, target)?;
        Ok(())
    }

    fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<()> {
        Circuit::mcx(self, controls, target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_toffoli<Q: QuantumNetwork>(qnet: &mut Q) -> IrResult<()> {
        let a = qnet.add_qubit();
        let b = qnet.add_qubit();
        let t = qnet.add_qubit();
        qnet.mcx(&[a, b], t)
    }

    #[test]
    fn test_circuit_as_sink() {
        let mut circuit = Circuit::new("sink");
        emit_toffoli(&mut circuit).unwrap();
        assert_eq!(QuantumNetwork::num_qubits(&circuit), 3);
        assert_eq!(circuit.num_gates(), 1);
    }
}
