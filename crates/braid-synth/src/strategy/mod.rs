//! Mapping strategies: schedules of compute/uncompute steps.

mod bennett;
mod bennett_inplace;
mod pebbling;

pub use bennett::BennettStrategy;
pub use bennett_inplace::BennettInplaceStrategy;
pub use pebbling::{PebbleSolver, PebblingStrategy};

use braid_logic::{LogicNetwork, NodeId};
use rustc_hash::FxHashSet;

use crate::action::{Action, Step};
use crate::error::SynthResult;

/// A mapping strategy produces an ordered step schedule for a logic
/// network.
///
/// The pebble-limit pair of methods is a capability probe: only the
/// pebbling strategy answers [`supports_pebble_limit`] with `true`, and
/// the driver forwards its configured limit only to strategies that do.
///
/// [`supports_pebble_limit`]: MappingStrategy::supports_pebble_limit
pub trait MappingStrategy<N: LogicNetwork> {
    /// Whether this strategy honors a pebble limit.
    fn supports_pebble_limit(&self) -> bool {
        false
    }

    /// Bound the number of simultaneously live qubits (0 means no limit).
    fn set_pebble_limit(&mut self, _limit: u32) {}

    /// Compute the step schedule for `ntk`. Called once, after
    /// configuration and before iteration.
    fn plan(&mut self, ntk: &N) -> SynthResult<()>;

    /// The planned schedule in execution order.
    fn steps(&self) -> &[Step];

    /// Visit each step in execution order exactly once.
    fn for_each_step<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, Action),
        Self: Sized,
    {
        for step in self.steps() {
            f(step.node, step.action);
        }
    }
}

/// Step-list builder with an insertion cursor.
///
/// [`emit`] inserts at the cursor and advances past the new step;
/// [`emit_cleanup`] inserts at the cursor and leaves it pointing at the
/// new step, so everything emitted later lands *before* it. Emitting each
/// node's uncompute as cleanup yields the nested order the strategies
/// rely on: computes in walk order, cleanups in reverse.
///
/// [`emit`]: StepListBuilder::emit
/// [`emit_cleanup`]: StepListBuilder::emit_cleanup
#[derive(Debug, Default)]
pub(crate) struct StepListBuilder {
    steps: Vec<Step>,
    cursor: usize,
}

impl StepListBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&mut self, node: NodeId, action: Action) {
        self.steps.insert(self.cursor, Step::new(node, action));
        self.cursor += 1;
    }

    pub(crate) fn emit_cleanup(&mut self, node: NodeId, action: Action) {
        self.steps.insert(self.cursor, Step::new(node, action));
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// The primary-output driver nodes of `ntk`.
pub(crate) fn output_drivers<N: LogicNetwork>(ntk: &N) -> FxHashSet<NodeId> {
    let mut drivers = FxHashSet::default();
    ntk.for_each_po(|po| {
        drivers.insert(ntk.get_node(po));
    });
    drivers
}

/// Topological order of the transitive fan-in of the primary outputs.
///
/// Outputs are explored in network order; within one output cone, fan-ins
/// are explored in declaration order. Constants and primary inputs appear
/// in the result (ahead of their readers) and are skipped by the callers.
pub(crate) fn topo_from_outputs<N: LogicNetwork>(ntk: &N) -> Vec<NodeId> {
    let mut roots = Vec::new();
    ntk.for_each_po(|po| roots.push(ntk.get_node(po)));

    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack: Vec<(NodeId, bool)> = Vec::new();

    for root in roots {
        if visited.contains(&root) {
            continue;
        }
        stack.push((root, false));
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
                continue;
            }
            if !visited.insert(node) {
                continue;
            }
            stack.push((node, true));
            let mut fanins = Vec::new();
            ntk.for_each_fanin(node, |f| fanins.push(ntk.get_node(f)));
            for fanin in fanins.into_iter().rev() {
                if !visited.contains(&fanin) {
                    stack.push((fanin, false));
                }
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_logic::GateNetwork;

    #[test]
    fn test_builder_nests_cleanups() {
        let mut builder = StepListBuilder::new();
        builder.emit(NodeId(1), Action::Compute);
        builder.emit_cleanup(NodeId(1), Action::Uncompute);
        builder.emit(NodeId(2), Action::Compute);
        builder.emit_cleanup(NodeId(2), Action::Uncompute);
        builder.emit(NodeId(3), Action::Compute);

        let steps = builder.into_steps();
        let expected = [
            (NodeId(1), Action::Compute),
            (NodeId(2), Action::Compute),
            (NodeId(3), Action::Compute),
            (NodeId(2), Action::Uncompute),
            (NodeId(1), Action::Uncompute),
        ];
        assert_eq!(steps.len(), expected.len());
        for (step, (node, action)) in steps.iter().zip(expected) {
            assert_eq!((step.node, step.action), (node, action));
        }
    }

    #[test]
    fn test_topo_covers_output_cone_only() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let g1 = ntk.add_and(a, b);
        let dead = ntk.add_or(a, b);
        let g2 = ntk.add_xor(g1, a);
        ntk.add_output(g2);

        let order = topo_from_outputs(&ntk);
        assert!(order.contains(&g1.node()));
        assert!(order.contains(&g2.node()));
        assert!(!order.contains(&dead.node()));

        // Children come before their readers.
        let pos = |n| order.iter().position(|&x| x == n).unwrap();
        assert!(pos(g1.node()) < pos(g2.node()));
        assert!(pos(a.node()) < pos(g1.node()));
    }
}
