//! The Bennett mapping strategy.

use braid_logic::LogicNetwork;

use crate::action::{Action, Step};
use crate::error::SynthResult;
use crate::strategy::{output_drivers, topo_from_outputs, MappingStrategy, StepListBuilder};

/// Compute every gate in topological order, uncompute every non-driver in
/// reverse.
///
/// Nothing is freed until every node in the output cone is materialized,
/// so the schedule needs one ancilla per gate. Simple, and the ancilla
/// ceiling for the other strategies.
#[derive(Debug, Clone, Default)]
pub struct BennettStrategy {
    steps: Vec<Step>,
}

impl BennettStrategy {
    /// Create an unplanned strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: LogicNetwork> MappingStrategy<N> for BennettStrategy {
    fn plan(&mut self, ntk: &N) -> SynthResult<()> {
        let drivers = output_drivers(ntk);

        let mut builder = StepListBuilder::new();
        for node in topo_from_outputs(ntk) {
            if ntk.is_constant(node) || ntk.is_pi(node) {
                continue;
            }
            builder.emit(node, Action::Compute);
            if !drivers.contains(&node) {
                builder.emit_cleanup(node, Action::Uncompute);
            }
        }
        self.steps = builder.into_steps();
        tracing::debug!(steps = self.steps.len(), "planned Bennett schedule");
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
    fn test_chain_nests_uncomputes() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let c = ntk.add_input();
        let g1 = ntk.add_and(a, b);
        let g2 = ntk.add_and(g1, c);
        ntk.add_output(g2);

        let mut strategy = BennettStrategy::new();
        strategy.plan(&ntk).unwrap();

        let steps: Vec<_> = strategy
            .steps
            .iter()
            .map(|s| (s.node, s.action))
            .collect();
        // The driver g2 stays computed; g1 is uncomputed after it.
        assert_eq!(
            steps,
            vec![
                (g1.node(), Action::Compute),
                (g2.node(), Action::Compute),
                (g1.node(), Action::Uncompute),
            ],
        );
    }

    #[test]
    fn test_all_computes_precede_all_uncomputes() {
        let mut ntk = GateNetwork::new();
        let a = ntk.add_input();
        let b = ntk.add_input();
        let mut g = ntk.add_xor(a, b);
        for _ in 0..5 {
            g = ntk.add_xor(g, a);
        }
        ntk.add_output(g);

        let mut strategy = BennettStrategy::new();
        strategy.plan(&ntk).unwrap();

        let first_uncompute = strategy
            .steps
            .iter()
            .position(|s| s.action == Action::Uncompute)
            .unwrap();
        let last_compute = strategy
            .steps
            .iter()
            .rposition(|s| s.action == Action::Compute)
            .unwrap();
        assert!(last_compute < first_uncompute);
    }

    #[test]
    fn test_pebble_limit_not_supported() {
        let strategy = BennettStrategy::new();
        assert!(!MappingStrategy::<GateNetwork>::supports_pebble_limit(&strategy));
    }
}
