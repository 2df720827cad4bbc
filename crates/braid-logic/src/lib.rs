//! Braid Classical Logic Networks
//!
//! This crate provides the classical side of the braid synthesis stack: a
//! capability trait for combinational logic networks, the signed-edge and
//! truth-table value types it is expressed in, and [`GateNetwork`], a
//! concrete directed-acyclic gate network.
//!
//! # Overview
//!
//! A logic network is a DAG of Boolean nodes: constants, primary inputs,
//! and gates (AND/OR/XOR/XOR3/MAJ or arbitrary k-input LUTs). Edges are
//! *signed*: each fan-in is a [`Signal`] carrying a node plus a complement
//! flag. The [`LogicNetwork`] trait is the capability set the synthesis
//! engine consumes; structural operations are required, while gate-kind
//! classifiers default to "unsupported" so networks only answer for the
//! kinds they contain.
//!
//! # Example: an XOR chain
//!
//! ```rust
//! use braid_logic::{GateNetwork, LogicNetwork};
//!
//! let mut ntk = GateNetwork::new();
//! let a = ntk.add_input();
//! let b = ntk.add_input();
//! let g = ntk.add_xor(a, b);
//! ntk.add_output(g);
//!
//! assert_eq!(ntk.num_pis(), 2);
//! assert_eq!(ntk.num_gates(), 1);
//! assert!(ntk.is_xor(g.node()));
//! ```

pub mod network;
pub mod node;
pub mod traits;
pub mod truth_table;

pub use network::GateNetwork;
pub use node::{NodeId, Signal};
pub use traits::LogicNetwork;
pub use truth_table::TruthTable;
