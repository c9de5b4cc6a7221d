// Tunnel Reduction: SAT encoding for bounded pushdown path existence
// Copyright (C) 2024  Tunnel Reduction Contributors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Tunnel network
//!
//! The [`Network`] is the reduction's only input collaborator: a directed graph of nodes, each
//! capable of a fixed subset of the ten stack actions, together with a distinguished start and
//! end node. It knows nothing about formulas or satisfiability; [`crate::reduction`] consumes it
//! read-only.

use super::types::{Action, NodeData, NodeId, TunnelGraph};
use crate::error::NetworkError;
use petgraph::visit::EdgeRef;

/// A directed tunnel network: nodes annotated with the stack actions they may perform, edges
/// giving the adjacency the path must follow.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: TunnelGraph,
    initial: Option<NodeId>,
    terminal: Option<NodeId>,
}

impl Network {
    /// Create an empty network with no nodes, no edges, and no initial/terminal node set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new node named `name`, capable of the given `actions`, and return its id.
    pub fn add_node(&mut self, name: impl Into<String>, actions: impl Into<Vec<Action>>) -> NodeId {
        self.graph.add_node(NodeData { name: name.into(), actions: actions.into() })
    }

    /// Add a directed edge from `src` to `dst`. Panics if either endpoint is unknown to this
    /// network: wiring a path through a node the caller never added is a programmer error, not a
    /// recoverable one.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        assert!(self.graph.contains_node(src), "add_edge: unknown source node {src:?}");
        assert!(self.graph.contains_node(dst), "add_edge: unknown destination node {dst:?}");
        self.graph.update_edge(src, dst, ());
    }

    /// Designate `node` as the path's required start. Returns [`NetworkError::UnknownNode`] if
    /// `node` was not added to this network.
    pub fn set_initial(&mut self, node: NodeId) -> Result<(), NetworkError> {
        self.check_node(node)?;
        self.initial = Some(node);
        Ok(())
    }

    /// Designate `node` as the path's required end. Returns [`NetworkError::UnknownNode`] if
    /// `node` was not added to this network.
    pub fn set_terminal(&mut self, node: NodeId) -> Result<(), NetworkError> {
        self.check_node(node)?;
        self.terminal = Some(node);
        Ok(())
    }

    /// Number of nodes currently in the network.
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Iterate over all node ids, in the order they were added.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// The designated initial node, if one has been set.
    pub fn initial(&self) -> Option<NodeId> {
        self.initial
    }

    /// The designated terminal node, if one has been set.
    pub fn terminal(&self) -> Option<NodeId> {
        self.terminal
    }

    /// Human-readable name given to `node` at creation time.
    pub fn node_name(&self, node: NodeId) -> &str {
        self.graph[node].name.as_str()
    }

    /// Whether there is a directed edge `src -> dst`.
    pub fn is_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.graph.find_edge(src, dst).is_some()
    }

    /// Whether `node` is capable of performing `action`.
    pub fn has_action(&self, node: NodeId, action: Action) -> bool {
        self.graph[node].actions.contains(&action)
    }

    /// All actions `node` is capable of performing.
    pub fn actions_of(&self, node: NodeId) -> &[Action] {
        self.graph[node].actions.as_slice()
    }

    /// Direct successors of `node`, in the order the underlying graph stores them.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.edges(node).map(|e| e.target())
    }

    fn check_node(&self, node: NodeId) -> Result<(), NetworkError> {
        if self.graph.contains_node(node) {
            Ok(())
        } else {
            Err(NetworkError::UnknownNode(format!("{node:?}")))
        }
    }
}
