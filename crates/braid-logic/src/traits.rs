//! The logic network capability trait.

use crate::node::{NodeId, Signal};
use crate::truth_table::TruthTable;

/// Capability set a combinational logic network must expose to synthesis.
///
/// Structural operations are required; a network type that cannot provide
/// one simply does not implement the trait, which surfaces missing
/// capabilities at compile time. Gate-kind classifiers and
/// [`node_function`] default to "unsupported" and are probed by the node
/// expander in a fixed, non-overlapping order (first match wins).
///
/// Node iteration order contracts:
///
/// - [`for_each_node`] visits every node (constants and primary inputs
///   included) in index order, which implementations must keep
///   topological.
/// - [`for_each_gate`] visits gate nodes only, in the same order.
/// - [`for_each_fanin`] yields signed fan-in edges in declaration order;
///   this order is observable (the in-place mapping strategy breaks ties
///   on the first fan-in).
///
/// The value field attached to each node is scratch storage for
/// algorithms (reference counting during scheduling). The accessors take
/// `&self`; implementations use interior mutability, which is sound under
/// the engine's single-threaded execution model.
///
/// [`node_function`]: LogicNetwork::node_function
/// [`for_each_node`]: LogicNetwork::for_each_node
/// [`for_each_gate`]: LogicNetwork::for_each_gate
/// [`for_each_fanin`]: LogicNetwork::for_each_fanin
pub trait LogicNetwork {
    /// Total number of nodes, constants and primary inputs included.
    fn size(&self) -> u32;

    /// Number of primary inputs.
    fn num_pis(&self) -> u32;

    /// Number of primary outputs.
    fn num_pos(&self) -> u32;

    /// Number of gate nodes.
    fn num_gates(&self) -> u32;

    /// The signal representing the constant `value`.
    fn get_constant(&self, value: bool) -> Signal;

    /// The Boolean value carried by a constant node.
    fn constant_value(&self, node: NodeId) -> bool;

    /// Check whether `node` is a constant.
    fn is_constant(&self, node: NodeId) -> bool;

    /// Check whether `node` is a primary input.
    fn is_pi(&self, node: NodeId) -> bool;

    /// The node a signal points at.
    fn get_node(&self, signal: Signal) -> NodeId {
        signal.node()
    }

    /// Whether a signal is complemented.
    fn is_complemented(&self, signal: Signal) -> bool {
        signal.is_complemented()
    }

    /// Convert a node to its dense index.
    fn node_to_index(&self, node: NodeId) -> u32;

    /// Convert a dense index back to a node.
    fn index_to_node(&self, index: u32) -> NodeId;

    /// Number of fan-outs of `node`, primary-output references included.
    fn fanout_size(&self, node: NodeId) -> u32;

    /// Visit each primary input in network order.
    fn for_each_pi<F: FnMut(NodeId)>(&self, f: F);

    /// Visit each primary output signal in network order.
    fn for_each_po<F: FnMut(Signal)>(&self, f: F);

    /// Visit every node in topological index order.
    fn for_each_node<F: FnMut(NodeId)>(&self, f: F);

    /// Visit every gate node in topological index order.
    fn for_each_gate<F: FnMut(NodeId)>(&self, f: F);

    /// Visit the signed fan-in edges of `node` in declaration order.
    fn for_each_fanin<F: FnMut(Signal)>(&self, node: NodeId, f: F);

    /// Reset every node's value field to zero.
    fn clear_values(&self);

    /// Set `node`'s value field.
    fn set_value(&self, node: NodeId, value: u32);

    /// Decrement `node`'s value field, returning the new value.
    fn decr_value(&self, node: NodeId) -> u32;

    /// Check whether `node` is a two-input AND gate.
    fn is_and(&self, _node: NodeId) -> bool {
        false
    }

    /// Check whether `node` is a two-input OR gate.
    fn is_or(&self, _node: NodeId) -> bool {
        false
    }

    /// Check whether `node` is a two-input XOR gate.
    fn is_xor(&self, _node: NodeId) -> bool {
        false
    }

    /// Check whether `node` is a three-input XOR gate.
    fn is_xor3(&self, _node: NodeId) -> bool {
        false
    }

    /// Check whether `node` is a three-input majority gate.
    fn is_maj(&self, _node: NodeId) -> bool {
        false
    }

    /// The truth table of `node`, if this network carries arbitrary node
    /// functions (k-LUT networks).
    fn node_function(&self, _node: NodeId) -> Option<TruthTable> {
        None
    }
}
