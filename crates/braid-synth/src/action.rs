//! The scheduled-step vocabulary mapping strategies emit.

use braid_logic::NodeId;
use serde::{Deserialize, Serialize};

/// What the driver should do with a logic node at one point in the
/// schedule.
///
/// `target_index` carries a *node index* (not a qubit index); the driver
/// resolves it through the node-to-qubit map at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Materialize the node's value on a fresh ancilla.
    Compute,
    /// Reverse a previous compute, restoring the ancilla to |0⟩.
    Uncompute,
    /// Materialize the node by destructively reusing the qubit of the
    /// fan-in node at `target_index`.
    ComputeInplace {
        /// Index of the fan-in node whose qubit is taken over.
        target_index: u32,
    },
    /// Reverse a previous in-place compute, restoring the reused qubit to
    /// the target node's value.
    UncomputeInplace {
        /// Index of the fan-in node whose qubit was taken over.
        target_index: u32,
    },
}

/// One entry of a mapping schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The logic node the action applies to.
    pub node: NodeId,
    /// The action to perform.
    pub action: Action,
}

impl Step {
    /// Create a new step.
    pub fn new(node: NodeId, action: Action) -> Self {
        Self { node, action }
    }
}
