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

//! Module containing all type definitions for the tunnel network.

use petgraph::stable_graph::StableGraph;
use petgraph::Directed;
use std::fmt;

type IndexType = u32;
/// Node identification (and index into the graph).
pub type NodeId = petgraph::stable_graph::NodeIndex<IndexType>;
/// Directed tunnel graph. Edge weights are unused (edges only encode adjacency).
pub(crate) type TunnelGraph = StableGraph<NodeData, (), Directed, IndexType>;

/// The two stack symbols of the pushdown alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sym {
    /// Symbol `4`.
    Four,
    /// Symbol `6`.
    Six,
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => write!(f, "4"),
            Self::Six => write!(f, "6"),
        }
    }
}

/// A stack action a node may be capable of performing on an outbound transition.
///
/// `Transmit` leaves the stack height unchanged and requires the current top to match the given
/// symbol. `Push` and `Pop` are parameterised by the pre- and post-transition top symbols, per the
/// `push_a_b` / `pop_a_b` naming of the reduction: `a` is read before the operation, `b` is what
/// becomes visible at the top afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Transmit while the top of stack carries `Sym`; height is unchanged.
    Transmit(Sym),
    /// Push: the pre-transition top was `from`; the new top (one cell higher) becomes `to`.
    Push {
        /// Symbol at the top before the push.
        from: Sym,
        /// Symbol at the new top after the push.
        to: Sym,
    },
    /// Pop: the popped top was `from`; the exposed top (one cell lower) becomes `to`.
    Pop {
        /// Symbol that gets popped.
        from: Sym,
        /// Symbol exposed once `from` is popped.
        to: Sym,
    },
}

impl Action {
    /// All ten action tags in a fixed, stable order. Used wherever the reduction needs to
    /// enumerate "every action a node could declare" without hard-coding the list twice.
    pub const ALL: [Action; 10] = [
        Action::Transmit(Sym::Four),
        Action::Transmit(Sym::Six),
        Action::Push { from: Sym::Four, to: Sym::Four },
        Action::Push { from: Sym::Four, to: Sym::Six },
        Action::Push { from: Sym::Six, to: Sym::Four },
        Action::Push { from: Sym::Six, to: Sym::Six },
        Action::Pop { from: Sym::Four, to: Sym::Four },
        Action::Pop { from: Sym::Four, to: Sym::Six },
        Action::Pop { from: Sym::Six, to: Sym::Four },
        Action::Pop { from: Sym::Six, to: Sym::Six },
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Transmit(s) => write!(f, "transmit_{s}"),
            Action::Push { from, to } => write!(f, "push_{from}_{to}"),
            Action::Pop { from, to } => write!(f, "pop_{from}_{to}"),
        }
    }
}

/// A single step of a decoded path: the action taken, the node departed, and the node arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The action justifying this transition.
    pub action: Action,
    /// The node the step departs from.
    pub src: NodeId,
    /// The node the step arrives at.
    pub dst: NodeId,
}

impl Step {
    /// Build a new step. Mirrors the opaque `(action_tag, src_node, dst_node)` triple of the
    /// reduction's public contract.
    pub fn new(action: Action, src: NodeId, dst: NodeId) -> Self {
        Self { action, src, dst }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) actions: Vec<Action>,
}
