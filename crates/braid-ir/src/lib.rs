//! Braid Reversible Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing reversible
//! circuits in braid. It forms the output side of the braid synthesis stack.
//!
//! # Overview
//!
//! Reversible circuits produced by hierarchical synthesis are straight-line
//! sequences of self-inverse gates, so the IR is a flat instruction list
//! rather than a DAG. The high-level [`Circuit`] API provides a convenient
//! builder pattern, and the [`QuantumNetwork`] trait abstracts the circuit
//! sink so synthesis can target other backends (gate counters, streaming
//! writers) without changes.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing wires
//! - **Gates**: [`ReversibleGate`] for the classical reversible gate set
//!   (X, CX, multi-controlled X)
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Sink**: [`QuantumNetwork`] capability trait for circuit consumers
//!
//! # Example: Building a Toffoli-based AND
//!
//! ```rust
//! use braid_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_qubits("and", 3);
//!
//! // t ^= a & b
//! circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.num_gates(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X` | 1 | Pauli-X (NOT) |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `MCX` | n+1 | Multi-controlled X; two controls is the Toffoli |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod network;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::ReversibleGate;
pub use instruction::Instruction;
pub use network::QuantumNetwork;
pub use qubit::QubitId;
