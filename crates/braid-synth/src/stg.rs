//! Single-target gate synthesis callback.

use braid_ir::{QuantumNetwork, QubitId};
use braid_logic::TruthTable;

use crate::error::{SynthResult, SynthesisError};

/// Synthesizes an arbitrary single-target gate into the circuit sink.
///
/// Invoked by the node expander only for LUT nodes whose truth table is
/// not pure parity. `qubits` lists the control qubits in fan-in order with
/// the target qubit last.
pub trait SingleTargetGateSynthesis<Q: QuantumNetwork> {
    /// Emit gates computing `function` of the controls into the target.
    fn synthesize(
        &self,
        qnet: &mut Q,
        function: &TruthTable,
        qubits: &[QubitId],
    ) -> SynthResult<()>;
}

impl<Q, F> SingleTargetGateSynthesis<Q> for F
where
    Q: QuantumNetwork,
    F: Fn(&mut Q, &TruthTable, &[QubitId]) -> SynthResult<()>,
{
    fn synthesize(
        &self,
        qnet: &mut Q,
        function: &TruthTable,
        qubits: &[QubitId],
    ) -> SynthResult<()> {
        self(qnet, function, qubits)
    }
}

/// Placeholder callback for gate-level networks.
///
/// Fails with [`StgUnavailable`](SynthesisError::StgUnavailable) if a
/// non-parity LUT is ever reached; parity LUTs never consult the callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStgSynthesis;

impl<Q: QuantumNetwork> SingleTargetGateSynthesis<Q> for NoStgSynthesis {
    fn synthesize(
        &self,
        _qnet: &mut Q,
        _function: &TruthTable,
        _qubits: &[QubitId],
    ) -> SynthResult<()> {
        Err(SynthesisError::StgUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_ir::Circuit;

    #[test]
    fn test_closure_callback() {
        let stg = |qnet: &mut Circuit,
                   _tt: &TruthTable,
                   qubits: &[QubitId]|
         -> SynthResult<()> {
            qnet.x(qubits[qubits.len() - 1])?;
            Ok(())
        };
        let mut circuit = Circuit::with_qubits("stg", 2);
        stg.synthesize(&mut circuit, &TruthTable::parity(1), &[QubitId(0), QubitId(1)])
            .unwrap();
        assert_eq!(circuit.num_gates(), 1);
    }

    #[test]
    fn test_no_stg_fails() {
        let mut circuit = Circuit::with_qubits("stg", 1);
        let err = NoStgSynthesis
            .synthesize(&mut circuit, &TruthTable::parity(1), &[QubitId(0)])
            .unwrap_err();
        assert!(matches!(err, SynthesisError::StgUnavailable));
    }
}
