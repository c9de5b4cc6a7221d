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

//! Test the simple functionality of the network, without reducing or solving anything.

use crate::network::{Action, Network, NodeId, Sym};

/// # Test network
///
/// ```text
/// A ---- M ---- B
/// ```
fn get_test_net() -> (Network, NodeId, NodeId, NodeId) {
    let mut net = Network::new();
    let a = net.add_node("A", vec![Action::Push { from: Sym::Four, to: Sym::Four }]);
    let m = net.add_node("M", vec![Action::Pop { from: Sym::Four, to: Sym::Four }]);
    let b = net.add_node("B", vec![]);
    net.add_edge(a, m);
    net.add_edge(m, b);
    (net, a, m, b)
}

#[test]
fn node_count_and_names() {
    let (net, a, m, b) = get_test_net();
    assert_eq!(net.num_nodes(), 3);
    assert_eq!(net.node_name(a), "A");
    assert_eq!(net.node_name(m), "M");
    assert_eq!(net.node_name(b), "B");
}

#[test]
fn edges_are_directed() {
    let (net, a, m, b) = get_test_net();
    assert!(net.is_edge(a, m));
    assert!(net.is_edge(m, b));
    assert!(!net.is_edge(a, b));
    assert!(!net.is_edge(m, a));
}

#[test]
fn actions_are_scoped_to_their_node() {
    let (net, a, m, b) = get_test_net();
    assert!(net.has_action(a, Action::Push { from: Sym::Four, to: Sym::Four }));
    assert!(!net.has_action(a, Action::Pop { from: Sym::Four, to: Sym::Four }));
    assert!(net.has_action(m, Action::Pop { from: Sym::Four, to: Sym::Four }));
    assert!(net.actions_of(b).is_empty());
}

#[test]
fn initial_and_terminal_round_trip() {
    let (mut net, a, _m, b) = get_test_net();
    assert!(net.initial().is_none());
    net.set_initial(a).unwrap();
    net.set_terminal(b).unwrap();
    assert_eq!(net.initial(), Some(a));
    assert_eq!(net.terminal(), Some(b));
}

#[test]
fn successors_follow_edges_only() {
    let (net, a, m, b) = get_test_net();
    let succs: Vec<_> = net.successors(a).collect();
    assert_eq!(succs, vec![m]);
    let succs: Vec<_> = net.successors(b).collect();
    assert!(succs.is_empty());
}
