//! Per-node reversible gadget expansion.
//!
//! Every gadget XORs the node's Boolean function into the target qubit, so
//! the same emission serves compute (target starts in |0⟩) and uncompute
//! (applying it again restores |0⟩). Fan-in polarities are read from the
//! signed edges and encoded with X conjugation on the controls.

use braid_ir::{QuantumNetwork, QubitId};
use braid_logic::{LogicNetwork, NodeId, Signal};

use crate::error::{SynthResult, SynthesisError};
use crate::stg::SingleTargetGateSynthesis;
use crate::synthesis::NodeToQubit;

fn fanins<N: LogicNetwork>(ntk: &N, node: NodeId) -> Vec<Signal> {
    let mut result = Vec::new();
    ntk.for_each_fanin(node, |f| result.push(f));
    result
}

/// Resolve fan-ins directly to qubits.
///
/// Used on the LUT paths, where fan-ins must be non-complemented (k-LUT
/// network convention); complemented fan-ins are a precondition violation.
fn fanin_qubits<N: LogicNetwork>(
    ntk: &N,
    map: &NodeToQubit,
    node: NodeId,
) -> SynthResult<Vec<QubitId>> {
    let mut qubits = Vec::new();
    for f in fanins(ntk, node) {
        debug_assert!(
            !ntk.is_complemented(f),
            "LUT fan-ins must be non-complemented",
        );
        qubits.push(map.get(ntk.get_node(f))?);
    }
    Ok(qubits)
}

/// Expand `node` out-of-place onto qubit `t`.
///
/// Dispatches on the gate kind; the branches are probed in a fixed order
/// and the first matching kind wins.
pub(crate) fn compute_node<N, Q, S>(
    ntk: &N,
    qnet: &mut Q,
    map: &NodeToQubit,
    stg_fn: &S,
    node: NodeId,
    t: QubitId,
) -> SynthResult<()>
where
    N: LogicNetwork,
    Q: QuantumNetwork,
    S: SingleTargetGateSynthesis<Q>,
{
    if ntk.is_and(node) {
        let f = fanins(ntk, node);
        let (q1, q2) = (map.get(f[0].node())?, map.get(f[1].node())?);
        return compute_and(qnet, q1, q2, f[0].is_complemented(), f[1].is_complemented(), t);
    }
    if ntk.is_or(node) {
        let f = fanins(ntk, node);
        let (q1, q2) = (map.get(f[0].node())?, map.get(f[1].node())?);
        return compute_or(qnet, q1, q2, f[0].is_complemented(), f[1].is_complemented(), t);
    }
    if ntk.is_xor(node) {
        let f = fanins(ntk, node);
        let inv = f[0].is_complemented() ^ f[1].is_complemented();
        return compute_xor(qnet, map.get(f[0].node())?, map.get(f[1].node())?, inv, t);
    }
    if ntk.is_xor3(node) {
        let f = fanins(ntk, node);
        let inv = f[0].is_complemented() ^ f[1].is_complemented() ^ f[2].is_complemented();
        // An XOR3 with a constant fan-in is an XOR2 in disguise.
        if ntk.is_constant(f[0].node()) {
            let inv = inv ^ ntk.constant_value(f[0].node());
            return compute_xor(qnet, map.get(f[1].node())?, map.get(f[2].node())?, inv, t);
        }
        return compute_xor3(
            qnet,
            map.get(f[0].node())?,
            map.get(f[1].node())?,
            map.get(f[2].node())?,
            inv,
            t,
        );
    }
    if ntk.is_maj(node) {
        let f = fanins(ntk, node);
        // A MAJ with a constant fan-in degenerates to OR or AND.
        if ntk.is_constant(f[0].node()) {
            let value = ntk.constant_value(f[0].node()) ^ f[0].is_complemented();
            let (q1, q2) = (map.get(f[1].node())?, map.get(f[2].node())?);
            let (p1, p2) = (f[1].is_complemented(), f[2].is_complemented());
            return if value {
                compute_or(qnet, q1, q2, p1, p2, t)
            } else {
                compute_and(qnet, q1, q2, p1, p2, t)
            };
        }
        return compute_maj(
            qnet,
            map.get(f[0].node())?,
            map.get(f[1].node())?,
            map.get(f[2].node())?,
            f[0].is_complemented(),
            f[1].is_complemented(),
            f[2].is_complemented(),
            t,
        );
    }
    if let Some(tt) = ntk.node_function(node) {
        let controls = fanin_qubits(ntk, map, node)?;
        if tt.is_parity() {
            return compute_xor_block(qnet, &controls, t);
        }
        return compute_lut(qnet, stg_fn, &tt, &controls, t);
    }
    Err(SynthesisError::UnsupportedNode {
        index: ntk.node_to_index(node),
    })
}

/// Expand `node` in-place onto qubit `t`, which must carry one of its
/// fan-ins.
///
/// Only the XOR family is supported; strategies never schedule other
/// kinds in-place. The gadget is its own inverse, so the same routine
/// serves compute and uncompute.
pub(crate) fn compute_node_inplace<N, Q>(
    ntk: &N,
    qnet: &mut Q,
    map: &NodeToQubit,
    node: NodeId,
    t: QubitId,
) -> SynthResult<()>
where
    N: LogicNetwork,
    Q: QuantumNetwork,
{
    let index = ntk.node_to_index(node);
    if ntk.is_xor(node) {
        let f = fanins(ntk, node);
        let inv = f[0].is_complemented() ^ f[1].is_complemented();
        return compute_xor_inplace(
            qnet,
            map.get(f[0].node())?,
            map.get(f[1].node())?,
            inv,
            t,
            index,
        );
    }
    if ntk.is_xor3(node) {
        let f = fanins(ntk, node);
        let inv = f[0].is_complemented() ^ f[1].is_complemented() ^ f[2].is_complemented();
        if ntk.is_constant(f[0].node()) {
            let inv = inv ^ ntk.constant_value(f[0].node());
            return compute_xor_inplace(
                qnet,
                map.get(f[1].node())?,
                map.get(f[2].node())?,
                inv,
                t,
                index,
            );
        }
        return compute_xor3_inplace(
            qnet,
            map.get(f[0].node())?,
            map.get(f[1].node())?,
            map.get(f[2].node())?,
            inv,
            t,
            index,
        );
    }
    if ntk.node_function(node).is_some() {
        // Parity LUT reused in-place: the CNOT block skips the target.
        let controls = fanin_qubits(ntk, map, node)?;
        return compute_xor_block(qnet, &controls, t);
    }
    Err(SynthesisError::UnsupportedNode { index })
}

fn compute_and<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    p1: bool,
    p2: bool,
    t: QubitId,
) -> SynthResult<()> {
    if p1 {
        qnet.x(c1)?;
    }
    if p2 {
        qnet.x(c2)?;
    }
    qnet.mcx(&[c1, c2], t)?;
    if p2 {
        qnet.x(c2)?;
    }
    if p1 {
        qnet.x(c1)?;
    }
    Ok(())
}

fn compute_or<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    p1: bool,
    p2: bool,
    t: QubitId,
) -> SynthResult<()> {
    if !p1 {
        qnet.x(c1)?;
    }
    if !p2 {
        qnet.x(c2)?;
    }
    qnet.mcx(&[c1, c2], t)?;
    qnet.x(t)?;
    if !p2 {
        qnet.x(c2)?;
    }
    if !p1 {
        qnet.x(c1)?;
    }
    Ok(())
}

fn compute_xor<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    inv: bool,
    t: QubitId,
) -> SynthResult<()> {
    qnet.cx(c1, t)?;
    qnet.cx(c2, t)?;
    if inv {
        qnet.x(t)?;
    }
    Ok(())
}

fn compute_xor3<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    c3: QubitId,
    inv: bool,
    t: QubitId,
) -> SynthResult<()> {
    qnet.cx(c1, t)?;
    qnet.cx(c2, t)?;
    qnet.cx(c3, t)?;
    if inv {
        qnet.x(t)?;
    }
    Ok(())
}

fn compute_maj<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    c3: QubitId,
    p1: bool,
    p2: bool,
    p3: bool,
    t: QubitId,
) -> SynthResult<()> {
    if p1 {
        qnet.x(c1)?;
    }
    if !p2 {
        // control 2 behaves opposite
        qnet.x(c2)?;
    }
    if p3 {
        qnet.x(c3)?;
    }
    qnet.cx(c1, c2)?;
    qnet.cx(c3, c1)?;
    qnet.cx(c3, t)?;
    qnet.mcx(&[c1, c2], t)?;
    qnet.cx(c3, c1)?;
    qnet.cx(c1, c2)?;
    if p3 {
        qnet.x(c3)?;
    }
    if !p2 {
        qnet.x(c2)?;
    }
    if p1 {
        qnet.x(c1)?;
    }
    Ok(())
}

fn compute_xor_block<Q: QuantumNetwork>(
    qnet: &mut Q,
    controls: &[QubitId],
    t: QubitId,
) -> SynthResult<()> {
    for &c in controls {
        if c != t {
            qnet.cx(c, t)?;
        }
    }
    Ok(())
}

fn compute_lut<Q, S>(
    qnet: &mut Q,
    stg_fn: &S,
    function: &braid_logic::TruthTable,
    controls: &[QubitId],
    t: QubitId,
) -> SynthResult<()>
where
    Q: QuantumNetwork,
    S: SingleTargetGateSynthesis<Q>,
{
    let mut qubit_map = controls.to_vec();
    qubit_map.push(t);
    stg_fn.synthesize(qnet, function, &qubit_map)
}

fn compute_xor_inplace<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    inv: bool,
    t: QubitId,
    node_index: u32,
) -> SynthResult<()> {
    let mut mismatch = false;
    if c1 == t {
        qnet.cx(c2, c1)?;
    } else if c2 == t {
        qnet.cx(c1, c2)?;
    } else {
        mismatch = true;
    }
    if inv {
        qnet.x(t)?;
    }
    if mismatch {
        return Err(SynthesisError::InplaceTargetMismatch {
            node: node_index,
            target: t,
        });
    }
    Ok(())
}

fn compute_xor3_inplace<Q: QuantumNetwork>(
    qnet: &mut Q,
    c1: QubitId,
    c2: QubitId,
    c3: QubitId,
    inv: bool,
    t: QubitId,
    node_index: u32,
) -> SynthResult<()> {
    let mut mismatch = false;
    if c1 == t {
        qnet.cx(c2, c1)?;
        qnet.cx(c3, c1)?;
    } else if c2 == t {
        qnet.cx(c1, c2)?;
        qnet.cx(c3, c2)?;
    } else if c3 == t {
        qnet.cx(c1, c3)?;
        qnet.cx(c2, c3)?;
    } else {
        mismatch = true;
    }
    if inv {
        qnet.x(t)?;
    }
    if mismatch {
        return Err(SynthesisError::InplaceTargetMismatch {
            node: node_index,
            target: t,
        });
    }
    Ok(())
}
