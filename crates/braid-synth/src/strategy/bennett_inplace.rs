//! The Bennett mapping strategy with in-place collapse.

use braid_logic::LogicNetwork;

use crate::action::{Action, Step};
use crate::error::SynthResult;
use crate::strategy::{output_drivers, MappingStrategy, StepListBuilder};

/// Bennett scheduling with destructive reuse of dead fan-in qubits.
///
/// Walks every gate in network node order, reference-counting the
/// remaining fan-out of each node through the network's value fields.
/// When a gate's fan-in drops to zero remaining readers, the gate may take
/// over that fan-in's qubit instead of requesting an ancilla — valid only
/// for the XOR family (the gadget is linear and self-inverse) and never
/// for primary-output drivers.
///
/// The first fan-in (in fan-in order) whose count reaches zero wins as the
/// in-place target; the tie-break is observable in the schedule.
#[derive(Debug, Clone, Default)]
pub struct BennettInplaceStrategy {
    steps: Vec<Step>,
}

impl BennettInplaceStrategy {
    /// Create an unplanned strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: LogicNetwork> MappingStrategy<N> for BennettInplaceStrategy {
    fn plan(&mut self, ntk: &N) -> SynthResult<()> {
        let drivers = output_drivers(ntk);

        ntk.clear_values();
        ntk.for_each_node(|n| ntk.set_value(n, ntk.fanout_size(n)));

        let mut builder = StepListBuilder::new();
        ntk.for_each_node(|node| {
            if ntk.is_constant(node) || ntk.is_pi(node) {
                return;
            }

            // Decrease reference counts; first fan-in to die becomes the
            // in-place candidate.
            let mut target: Option<u32> = None;
            ntk.for_each_fanin(node, |f| {
                if ntk.decr_value(ntk.get_node(f)) == 0 && target.is_none() {
                    target = Some(ntk.node_to_index(ntk.get_node(f)));
                }
            });

            if let Some(target_index) = target {
                if !drivers.contains(&node) && (ntk.is_xor(node) || ntk.is_xor3(node)) {
                    builder.emit(node, Action::ComputeInplace { target_index });
                    builder.emit_cleanup(node, Action::UncomputeInplace { target_index });
                    return;
                }
            }

            builder.emit(node, Action::Compute);
            if !drivers.contains(&node) {
                builder.emit_cleanup(node, Action::Uncompute);
            }
        });
        self.steps = builder.into_steps();
        tracing::debug!(steps = self.steps.len(), "planned Bennett in-place schedule");
        Ok(())
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_logic::GateNetwork;

    #[test]
    fn test_xor_collapses_onto_dead_fanin() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let c = ntk.add_input();
        let g1 = ntk.add_xor(a, b);
        let g2 = ntk.add_xor(g1, c);
        ntk.add_output(g2);

        let mut strategy = BennettInplaceStrategy::new();
        strategy.plan(&ntk).unwrap();

        let steps: Vec<_> = strategy
            .steps
            .iter()
            .map(|s| (s.node, s.action))
            .collect();
        // g1 collapses onto a (first fan-in to die); g2 drives the output
        // and is computed out-of-place.
        let a_index = a.node().0;
        assert_eq!(
            steps,
            vec![
                (g1.node(), Action::ComputeInplace { target_index: a_index }),
                (g2.node(), Action::Compute),
                (g1.node(), Action::UncomputeInplace { target_index: a_index }),
            ],
        );
    }

    #[test]
    fn test_first_fanin_wins_tie_break() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        // Both fan-ins die at g; the first one is the target.
        let g = ntk.add_xor(a, b);
        let h = ntk.add_and(g, g);
        ntk.add_output(h);

        let mut strategy = BennettInplaceStrategy::new();
        strategy.plan(&ntk).unwrap();

        assert_eq!(
            strategy.steps[0].action,
            Action::ComputeInplace { target_index: a.node().0 },
        );
    }

    #[test]
    fn test_and_never_collapses() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let g1 = ntk.add_and(a, b);
        let g2 = ntk.add_xor(g1, a);
        ntk.add_output(g2);

        let mut strategy = BennettInplaceStrategy::new();
        strategy.plan(&ntk).unwrap();

        // g1 is an AND: out-of-place despite b dying there.
        assert_eq!(strategy.steps[0].action, Action::Compute);
        assert_eq!(strategy.steps[0].node, g1.node());
    }

    #[test]
    fn test_driver_never_collapses() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let g = ntk.add_xor(a, b);
        ntk.add_output(g);

        let mut strategy = BennettInplaceStrategy::new();
        strategy.plan(&ntk).unwrap();

        assert_eq!(
            strategy.steps.iter().map(|s| s.action).collect::<Vec<_>>(),
            vec![Action::Compute],
        );
    }

    #[test]
    fn test_dead_gates_are_still_scheduled() {
        // Unlike the output-cone walk of the plain Bennett strategy, the
        // in-place walk visits every gate in the network.
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let dead = ntk.add_and(a, b);
        let g = ntk.add_xor(a, b);
        ntk.add_output(g);

        let mut strategy = BennettInplaceStrategy::new();
        strategy.plan(&ntk).unwrap();

        assert!(strategy.steps.iter().any(|s| s.node == dead.node()));
    }
}
