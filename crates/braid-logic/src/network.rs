//! A concrete gate network.

use std::cell::Cell;

use crate::node::{NodeId, Signal};
use crate::traits::LogicNetwork;
use crate::truth_table::TruthTable;

/// The function computed by a gate node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GateKind {
    And,
    Or,
    Xor,
    Xor3,
    Maj,
    Lut(TruthTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Constant(bool),
    Input,
    Gate(GateKind),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    fanins: Vec<Signal>,
    fanout: Cell<u32>,
    value: Cell<u32>,
}

impl NodeData {
    fn new(kind: NodeKind, fanins: Vec<Signal>) -> Self {
        Self {
            kind,
            fanins,
            fanout: Cell::new(0),
            value: Cell::new(0),
        }
    }
}

/// A combinational gate network.
///
/// Nodes are stored densely: the constant-false node at index 0, the
/// constant-true node at index 1, then primary inputs in creation order,
/// then gates in creation order. Fan-ins must already exist when a gate is
/// added, so index order is topological. Fan-out counts are maintained on
/// construction and include primary-output references.
#[derive(Debug, Clone)]
pub struct GateNetwork {
    nodes: Vec<NodeData>,
    inputs: Vec<NodeId>,
    outputs: Vec<Signal>,
}

impl Default for GateNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl GateNetwork {
    /// Create an empty network holding the two constant nodes.
    pub fn new() -> Self {
        let mut ntk = Self {
            nodes: vec![],
            inputs: vec![],
            outputs: vec![],
        };
        ntk.nodes.push(NodeData::new(NodeKind::Constant(false), vec![]));
        ntk.nodes.push(NodeData::new(NodeKind::Constant(true), vec![]));
        ntk
    }

    /// Add a primary input.
    pub fn add_input(&mut self) -> Signal {
        let node = self.push_node(NodeKind::Input, vec![]);
        self.inputs.push(node);
        Signal::from(node)
    }

    /// Add a two-input AND gate.
    pub fn add_and(&mut self, a: Signal, b: Signal) -> Signal {
        Signal::from(self.push_node(NodeKind::Gate(GateKind::And), vec![a, b]))
    }

    /// Add a two-input OR gate.
    pub fn add_or(&mut self, a: Signal, b: Signal) -> Signal {
        Signal::from(self.push_node(NodeKind::Gate(GateKind::Or), vec![a, b]))
    }

    /// Add a two-input XOR gate.
    pub fn add_xor(&mut self, a: Signal, b: Signal) -> Signal {
        Signal::from(self.push_node(NodeKind::Gate(GateKind::Xor), vec![a, b]))
    }

    /// Add a three-input XOR gate.
    pub fn add_xor3(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        Signal::from(self.push_node(NodeKind::Gate(GateKind::Xor3), vec![a, b, c]))
    }

    /// Add a three-input majority gate.
    pub fn add_maj(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        Signal::from(self.push_node(NodeKind::Gate(GateKind::Maj), vec![a, b, c]))
    }

    /// Add a k-input LUT gate computing `function`.
    ///
    /// LUT fan-ins are expected to be non-complemented, matching the k-LUT
    /// network convention the node expander assumes.
    pub fn add_lut(&mut self, function: TruthTable, fanins: &[Signal]) -> Signal {
        assert_eq!(
            function.num_vars() as usize,
            fanins.len(),
            "LUT arity does not match fan-in count",
        );
        Signal::from(self.push_node(NodeKind::Gate(GateKind::Lut(function)), fanins.to_vec()))
    }

    /// Register a primary output driven by `signal`.
    pub fn add_output(&mut self, signal: Signal) {
        let fanout = &self.nodes[signal.node().index()].fanout;
        fanout.set(fanout.get() + 1);
        self.outputs.push(signal);
    }

    fn push_node(&mut self, kind: NodeKind, fanins: Vec<Signal>) -> NodeId {
        for f in &fanins {
            let child = &self.nodes[f.node().index()];
            child.fanout.set(child.fanout.get() + 1);
        }
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node count exceeds u32::MAX"));
        self.nodes.push(NodeData::new(kind, fanins));
        id
    }

    fn gate_kind(&self, node: NodeId) -> Option<&GateKind> {
        match &self.nodes[node.index()].kind {
            NodeKind::Gate(kind) => Some(kind),
            _ => None,
        }
    }
}

impl LogicNetwork for GateNetwork {
    fn size(&self) -> u32 {
        self.nodes.len() as u32
    }

    fn num_pis(&self) -> u32 {
        self.inputs.len() as u32
    }

    fn num_pos(&self) -> u32 {
        self.outputs.len() as u32
    }

    fn num_gates(&self) -> u32 {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Gate(_)))
            .count() as u32
    }

    fn get_constant(&self, value: bool) -> Signal {
        Signal::new(NodeId(u32::from(value)), false)
    }

    fn constant_value(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.index()].kind, NodeKind::Constant(true))
    }

    fn is_constant(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.index()].kind, NodeKind::Constant(_))
    }

    fn is_pi(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.index()].kind, NodeKind::Input)
    }

    fn node_to_index(&self, node: NodeId) -> u32 {
        node.0
    }

    fn index_to_node(&self, index: u32) -> NodeId {
        NodeId(index)
    }

    fn fanout_size(&self, node: NodeId) -> u32 {
        self.nodes[node.index()].fanout.get()
    }

    fn for_each_pi<F: FnMut(NodeId)>(&self, mut f: F) {
        for &pi in &self.inputs {
            f(pi);
        }
    }

    fn for_each_po<F: FnMut(Signal)>(&self, mut f: F) {
        for &po in &self.outputs {
            f(po);
        }
    }

    fn for_each_node<F: FnMut(NodeId)>(&self, mut f: F) {
        for i in 0..self.nodes.len() {
            f(NodeId(i as u32));
        }
    }

    fn for_each_gate<F: FnMut(NodeId)>(&self, mut f: F) {
        for (i, node) in self.nodes.iter().enumerate() {
            if matches!(node.kind, NodeKind::Gate(_)) {
                f(NodeId(i as u32));
            }
        }
    }

    fn for_each_fanin<F: FnMut(Signal)>(&self, node: NodeId, mut f: F) {
        for &fanin in &self.nodes[node.index()].fanins {
            f(fanin);
        }
    }

    fn clear_values(&self) {
        for node in &self.nodes {
            node.value.set(0);
        }
    }

    fn set_value(&self, node: NodeId, value: u32) {
        self.nodes[node.index()].value.set(value);
    }

    fn decr_value(&self, node: NodeId) -> u32 {
        let cell = &self.nodes[node.index()].value;
        debug_assert!(cell.get() > 0, "decrementing a zero value field");
        let value = cell.get() - 1;
        cell.set(value);
        value
    }

    fn is_and(&self, node: NodeId) -> bool {
        matches!(self.gate_kind(node), Some(GateKind::And))
    }

    fn is_or(&self, node: NodeId) -> bool {
        matches!(self.gate_kind(node), Some(GateKind::Or))
    }

    fn is_xor(&self, node: NodeId) -> bool {
        matches!(self.gate_kind(node), Some(GateKind::Xor))
    }

    fn is_xor3(&self, node: NodeId) -> bool {
        matches!(self.gate_kind(node), Some(GateKind::Xor3))
    }

    fn is_maj(&self, node: NodeId) -> bool {
        matches!(self.gate_kind(node), Some(GateKind::Maj))
    }

    fn node_function(&self, node: NodeId) -> Option<TruthTable> {
        match self.gate_kind(node) {
            Some(GateKind::Lut(tt)) => Some(tt.clone()),
            _ => None,
        }
    }
}
