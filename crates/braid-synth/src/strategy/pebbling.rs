//! The pebbling mapping strategy.

use braid_logic::LogicNetwork;

use crate::action::Step;
use crate::error::SynthResult;
use crate::strategy::MappingStrategy;

/// Default pebble limit when the caller never configures one.
///
/// Preserved from the reference implementation. The synthesis driver
/// always forwards its configured limit through the capability probe, so
/// the default only matters when the strategy is planned standalone.
const DEFAULT_PEBBLE_LIMIT: u32 = 50;

/// An external pebble-game solver.
///
/// Given a logic network and a pebble limit, the solver returns an ordered
/// step schedule that keeps at most `pebble_limit` nodes simultaneously
/// materialized (0 means unbounded), or a
/// [`SolverFailure`](crate::SynthesisError::SolverFailure) when no
/// feasible schedule exists. Solvers are typically SAT-backed and may
/// time-bound themselves internally; the strategy surfaces their failure
/// as-is and never retries.
pub trait PebbleSolver<N: LogicNetwork> {
    /// Solve the pebble game on `ntk`.
    fn schedule(&self, ntk: &N, pebble_limit: u32) -> SynthResult<Vec<Step>>;
}

impl<N, F> PebbleSolver<N> for F
where
    N: LogicNetwork,
    F: Fn(&N, u32) -> SynthResult<Vec<Step>>,
{
    fn schedule(&self, ntk: &N, pebble_limit: u32) -> SynthResult<Vec<Step>> {
        self(ntk, pebble_limit)
    }
}

/// Delegate scheduling to a [`PebbleSolver`] and replay its steps.
#[derive(Debug, Clone)]
pub struct PebblingStrategy<P> {
    solver: P,
    limit: u32,
    steps: Vec<Step>,
}

impl<P> PebblingStrategy<P> {
    /// Create a strategy backed by `solver` with the default pebble limit.
    pub fn new(solver: P) -> Self {
        Self {
            solver,
            limit: DEFAULT_PEBBLE_LIMIT,
            steps: vec![],
        }
    }

    /// Create a strategy backed by `solver` with an explicit limit.
    pub fn with_pebble_limit(solver: P, limit: u32) -> Self {
        Self {
            solver,
            limit,
            steps: vec![],
        }
    }

    /// The currently configured pebble limit.
    pub fn pebble_limit(&self) -> u32 {
        self.limit
    }
}

impl<N, P> MappingStrategy<N> for PebblingStrategy<P>
where
    N: LogicNetwork,
    P: PebbleSolver<N>,
{
    fn supports_pebble_limit(&self) -> bool {
        true
    }

    fn set_pebble_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    fn plan(&mut self, ntk: &N) -> SynthResult<()> {
        self.steps = self.solver.schedule(ntk, self.limit)?;
        tracing::debug!(
            steps = self.steps.len(),
            limit = self.limit,
            "planned pebbling schedule",
        );
        Ok(())
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}
