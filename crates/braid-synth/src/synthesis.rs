//! The synthesis driver.

use std::time::{Duration, Instant};

use braid_ir::{QuantumNetwork, QubitId};
use braid_logic::{LogicNetwork, NodeId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::ancilla::AncillaPool;
use crate::error::{SynthResult, SynthesisError};
use crate::expand;
use crate::stg::SingleTargetGateSynthesis;
use crate::strategy::MappingStrategy;

/// Synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisParams {
    /// Maximum number of pebbles to use, if supported by the mapping
    /// strategy (0 means no limit).
    pub pebble_limit: u32,
    /// Print a per-step trace and the final report to stdout.
    pub verbose: bool,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            pebble_limit: 0,
            verbose: false,
        }
    }
}

/// Synthesis run statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesisStats {
    /// Total runtime.
    pub time_total: Duration,
    /// Number of ancilla qubits allocated beyond inputs and constants.
    pub required_ancillae: u32,
}

impl SynthesisStats {
    /// Print the run summary to stdout.
    pub fn report(&self) {
        println!("[i] total time = {:>5.2} secs", self.time_total.as_secs_f64());
    }
}

/// Partial mapping from logic nodes to the qubits carrying their values.
///
/// A node is present iff it is currently materialized. Primary inputs and
/// live constants stay mapped for the whole run; gate nodes come and go
/// with their compute/uncompute pairing.
#[derive(Debug, Default)]
pub(crate) struct NodeToQubit {
    map: FxHashMap<NodeId, QubitId>,
}

impl NodeToQubit {
    pub(crate) fn get(&self, node: NodeId) -> SynthResult<QubitId> {
        self.map
            .get(&node)
            .copied()
            .ok_or(SynthesisError::UnmappedNode { index: node.0 })
    }

    pub(crate) fn insert(&mut self, node: NodeId, qubit: QubitId) {
        self.map.insert(node, qubit);
    }

    pub(crate) fn remove(&mut self, node: NodeId) {
        self.map.remove(&node);
    }

    pub(crate) fn contains(&self, node: NodeId) -> bool {
        self.map.contains_key(&node)
    }

    pub(crate) fn maps_to(&self, qubit: QubitId) -> bool {
        self.map.values().any(|&q| q == qubit)
    }
}

struct SynthesisDriver<'a, Q, N, S> {
    qnet: &'a mut Q,
    ntk: &'a N,
    stg_fn: &'a S,
    params: &'a SynthesisParams,
    map: NodeToQubit,
    pool: AncillaPool,
}

impl<Q, N, S> SynthesisDriver<'_, Q, N, S>
where
    Q: QuantumNetwork,
    N: LogicNetwork,
    S: SingleTargetGateSynthesis<Q>,
{
    fn run<M: MappingStrategy<N>>(&mut self, strategy: &mut M) -> SynthResult<()> {
        self.prepare_inputs();
        self.prepare_constant(false)?;
        if self.ntk.get_node(self.ntk.get_constant(false))
            != self.ntk.get_node(self.ntk.get_constant(true))
        {
            self.prepare_constant(true)?;
        }

        if strategy.supports_pebble_limit() {
            strategy.set_pebble_limit(self.params.pebble_limit);
        }
        strategy.plan(self.ntk)?;

        for step in strategy.steps() {
            self.apply_step(step.node, step.action)?;
        }
        Ok(())
    }

    fn prepare_inputs(&mut self) {
        let mut inputs = Vec::new();
        self.ntk.for_each_pi(|n| inputs.push(n));
        for node in inputs {
            let q = self.qnet.add_qubit();
            self.map.insert(node, q);
        }
    }

    fn prepare_constant(&mut self, value: bool) -> SynthResult<()> {
        let signal = self.ntk.get_constant(value);
        let node = self.ntk.get_node(signal);
        if self.ntk.fanout_size(node) == 0 {
            return Ok(());
        }
        let v = self.ntk.constant_value(node) ^ self.ntk.is_complemented(signal);
        let q = self.qnet.add_qubit();
        self.map.insert(node, q);
        if v {
            self.qnet.x(q)?;
        }
        Ok(())
    }

    fn apply_step(&mut self, node: NodeId, action: Action) -> SynthResult<()> {
        let index = self.ntk.node_to_index(node);
        match action {
            Action::Compute => {
                debug_assert!(!self.map.contains(node), "double compute of a live node");
                let t = self.pool.request(self.qnet);
                self.map.insert(node, t);
                if self.params.verbose {
                    println!("[i] compute {index} in qubit {}", t.0);
                }
                expand::compute_node(self.ntk, self.qnet, &self.map, self.stg_fn, node, t)?;
            }
            Action::Uncompute => {
                let t = self.map.get(node)?;
                if self.params.verbose {
                    println!("[i] uncompute {index} from qubit {}", t.0);
                }
                expand::compute_node(self.ntk, self.qnet, &self.map, self.stg_fn, node, t)?;
                self.map.remove(node);
                debug_assert!(!self.map.maps_to(t), "releasing a qubit that is still mapped");
                self.pool.release(t);
            }
            Action::ComputeInplace { target_index } => {
                let target = self.ntk.index_to_node(target_index);
                let t = self.map.get(target)?;
                if self.params.verbose {
                    println!("[i] compute {index} inplace onto {target_index} in qubit {}", t.0);
                }
                self.map.insert(node, t);
                self.expand_inplace(node, t)?;
            }
            Action::UncomputeInplace { target_index } => {
                let t = self.map.get(node)?;
                if self.params.verbose {
                    println!(
                        "[i] uncompute {index} inplace onto {target_index} from qubit {}",
                        t.0,
                    );
                }
                self.expand_inplace(node, t)?;
                // The target's mapping was never removed, so clearing the
                // node's entry reverts the qubit to the target.
                self.map.remove(node);
            }
        }
        Ok(())
    }

    /// In-place expansion with soft mismatch handling: a defective
    /// schedule is reported on the error sink without halting synthesis.
    fn expand_inplace(&mut self, node: NodeId, t: QubitId) -> SynthResult<()> {
        match expand::compute_node_inplace(self.ntk, self.qnet, &self.map, node, t) {
            Err(err @ SynthesisError::InplaceTargetMismatch { .. }) => {
                tracing::error!(error = %err, "in-place expansion failed");
                Ok(())
            }
            other => other,
        }
    }
}

/// Synthesize a reversible circuit for `ntk` into `qnet`.
///
/// Primary-input qubits are allocated first in network order, then live
/// constants; the strategy's schedule is then driven step by step, with
/// intermediate results held on pool-managed ancillae. On return, each
/// primary-output driver node remains materialized on a qubit.
///
/// The configured pebble limit is forwarded to strategies that support
/// it. `stg_fn` is consulted only for LUT nodes whose function is not
/// pure parity.
pub fn synthesize<Q, N, M, S>(
    qnet: &mut Q,
    ntk: &N,
    strategy: &mut M,
    stg_fn: &S,
    params: &SynthesisParams,
) -> SynthResult<SynthesisStats>
where
    Q: QuantumNetwork,
    N: LogicNetwork,
    M: MappingStrategy<N>,
    S: SingleTargetGateSynthesis<Q>,
{
    let start = Instant::now();
    let mut driver = SynthesisDriver {
        qnet,
        ntk,
        stg_fn,
        params,
        map: NodeToQubit::default(),
        pool: AncillaPool::new(),
    };
    driver.run(strategy)?;

    let stats = SynthesisStats {
        time_total: start.elapsed(),
        required_ancillae: driver.pool.required_ancillae(),
    };
    if params.verbose {
        stats.report();
    }
    Ok(stats)
}
