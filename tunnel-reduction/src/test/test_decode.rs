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

//! Decoder behaviour on hand-built models, including malformed ones a real solver would never
//! hand back.

use crate::decode::decode_path;
use crate::error::DecodeError;
use crate::formula::Model;
use crate::network::{Action, Network, Sym};
use crate::reduction::VarTable;

fn simple_net() -> (Network, crate::network::NodeId, crate::network::NodeId) {
    let mut net = Network::new();
    let a = net.add_node("A", vec![Action::Transmit(Sym::Four)]);
    let b = net.add_node("B", vec![Action::Transmit(Sym::Four)]);
    net.add_edge(a, b);
    net.set_initial(a).unwrap();
    net.set_terminal(b).unwrap();
    (net, a, b)
}

#[test]
fn decodes_a_well_formed_model() {
    let (net, a, b) = simple_net();
    let vars = VarTable::new(net.num_nodes(), 1);
    let model = Model::from_true_vars([
        vars.x(a, 0, 0),
        vars.x(b, 1, 0),
        vars.y4(0, 0),
        vars.y4(1, 0),
    ]);

    let steps = decode_path(&net, &vars, &model, 1).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].action, Action::Transmit(Sym::Four));
    assert_eq!(steps[0].src, a);
    assert_eq!(steps[0].dst, b);
}

#[test]
fn rejects_a_position_with_no_occupying_state() {
    let (net, _a, b) = simple_net();
    let vars = VarTable::new(net.num_nodes(), 1);
    // Position 0 has no true x[_, 0, _] at all.
    let model = Model::from_true_vars([vars.x(b, 1, 0), vars.y4(0, 0), vars.y4(1, 0)]);

    let err = decode_path(&net, &vars, &model, 1).unwrap_err();
    assert!(matches!(err, DecodeError::AmbiguousPosition { position: 0, .. }));
}

#[test]
fn rejects_a_position_with_two_occupying_states() {
    let (net, a, b) = simple_net();
    let vars = VarTable::new(net.num_nodes(), 1);
    let model = Model::from_true_vars([
        vars.x(a, 0, 0),
        vars.x(b, 0, 0),
        vars.x(b, 1, 0),
        vars.y4(0, 0),
        vars.y4(1, 0),
    ]);

    let err = decode_path(&net, &vars, &model, 1).unwrap_err();
    assert!(matches!(err, DecodeError::AmbiguousPosition { position: 0, .. }));
}

#[test]
fn rejects_a_transition_no_action_can_explain() {
    let (net, a, b) = simple_net();
    let vars = VarTable::new(net.num_nodes(), 1);
    // Height is unchanged but neither y4 nor y6 holds at the departure cell.
    let model = Model::from_true_vars([vars.x(a, 0, 0), vars.x(b, 1, 0), vars.y4(1, 0)]);

    let err = decode_path(&net, &vars, &model, 1).unwrap_err();
    assert!(matches!(err, DecodeError::UnexplainedTransition { position: 0, next_position: 1 }));
}
