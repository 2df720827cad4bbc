//! Error types for the synthesis crate.

use braid_ir::{IrError, QubitId};
use thiserror::Error;

/// Errors that can occur during synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthesisError {
    /// During in-place expansion, no fan-in control matched the target
    /// qubit. Indicates a defective mapping schedule; the driver reports
    /// it and continues.
    #[error("in-place target qubit {target} matches no control of node {node}")]
    InplaceTargetMismatch {
        /// Index of the node being expanded.
        node: u32,
        /// The qubit that matched no control.
        target: QubitId,
    },

    /// The pebble solver found no feasible schedule within the limit.
    #[error("pebble solver failed: {0}")]
    SolverFailure(String),

    /// A step referenced a node that is not materialized on any qubit.
    #[error("node {index} is not mapped to a qubit")]
    UnmappedNode {
        /// Index of the unmapped node.
        index: u32,
    },

    /// The node matches no gate kind the expander supports.
    #[error("node {index} matches no supported gate kind")]
    UnsupportedNode {
        /// Index of the unsupported node.
        index: u32,
    },

    /// A non-parity LUT was reached with no single-target gate synthesis
    /// callback available.
    #[error("single-target gate synthesis is not available")]
    StgUnavailable,

    /// Gate emission into the circuit sink failed.
    #[error(transparent)]
    Circuit(#[from] IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthesisError>;
