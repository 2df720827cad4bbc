//! Braid Hierarchical Synthesis
//!
//! This crate translates a classical combinational logic network into a
//! reversible circuit: a sequence of X/CX/MCX gates acting on a shared set
//! of qubits, such that a designated qubit carries the Boolean function of
//! each primary output.
//!
//! # Architecture
//!
//! ```text
//! LogicNetwork ──▶ MappingStrategy ──▶ ordered steps
//!                                          │
//!                                          ▼
//!                                   synthesize() ──▶ QuantumNetwork
//!                                      │    │
//!                               AncillaPool └─ node expander
//! ```
//!
//! A [`MappingStrategy`] decides *when* each logic node is materialized
//! onto a qubit (computed), when that qubit is freed (uncomputed), and
//! whether computation happens on a fresh ancilla or in-place on a fan-in
//! qubit whose last reader is the current node. The driver walks the step
//! schedule, threads the node-to-qubit map through an [`AncillaPool`], and
//! expands each node into its reversible gadget.
//!
//! # Example
//!
//! ```rust
//! use braid_ir::Circuit;
//! use braid_logic::GateNetwork;
//! use braid_synth::{synthesize, BennettStrategy, NoStgSynthesis, SynthesisParams};
//!
//! let mut ntk = GateNetwork::new();
//! let a = ntk.add_input();
//! let b = ntk.add_input();
//! let g = ntk.add_and(a, b);
//! ntk.add_output(g);
//!
//! let mut circuit = Circuit::new("and");
//! let mut strategy = BennettStrategy::new();
//! let stats = synthesize(
//!     &mut circuit,
//!     &ntk,
//!     &mut strategy,
//!     &NoStgSynthesis,
//!     &SynthesisParams::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(stats.required_ancillae, 1);
//! assert_eq!(circuit.num_gates(), 1); // a single Toffoli
//! ```

pub mod action;
pub mod ancilla;
pub mod error;
mod expand;
pub mod stg;
pub mod strategy;
pub mod synthesis;

pub use action::{Action, Step};
pub use ancilla::AncillaPool;
pub use error::{SynthResult, SynthesisError};
pub use stg::{NoStgSynthesis, SingleTargetGateSynthesis};
pub use strategy::{
    BennettInplaceStrategy, BennettStrategy, MappingStrategy, PebbleSolver, PebblingStrategy,
};
pub use synthesis::{synthesize, SynthesisParams, SynthesisStats};
