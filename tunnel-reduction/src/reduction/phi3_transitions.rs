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

//! Φ₃: the transition relation, fused with successor existence (Φ₇).
//!
//! This is the densest family in the reduction: for every `(position, source state, candidate
//! target)` triple it rules out illegal height jumps and non-edges, then asserts that whichever
//! transition actually occurs is justified by one of the source node's enabled actions, and that
//! *some* justified transition exists at all (the "must go somewhere" clause that would otherwise
//! be a separate Φ₇ family).

use super::vars::VarTable;
use crate::formula::Formula;
use crate::network::{Action, Network, NodeId, Sym};

fn top_symbol_var(vars: &VarTable, i: usize, h: usize, sym: Sym) -> Formula {
    match sym {
        Sym::Four => Formula::var(vars.y4(i, h)),
        Sym::Six => Formula::var(vars.y6(i, h)),
    }
}

/// Disjuncts justifying a transmit (`δ = 0`) from `u` reading stack height `h` at position `i`.
fn transmit_disjuncts(net: &Network, vars: &VarTable, u: NodeId, i: usize, h: usize) -> Vec<Formula> {
    Action::ALL
        .iter()
        .filter_map(|&action| match action {
            Action::Transmit(s) if net.has_action(u, action) => Some(top_symbol_var(vars, i, h, s)),
            _ => None,
        })
        .collect()
}

/// Disjuncts justifying a push (`δ = +1`) from `u`, top `h` at `i` rising to top `h+1` at `i+1`.
fn push_disjuncts(net: &Network, vars: &VarTable, u: NodeId, i: usize, h: usize) -> Vec<Formula> {
    Action::ALL
        .iter()
        .filter_map(|&action| match action {
            Action::Push { from, to } if net.has_action(u, action) => Some(Formula::and([
                top_symbol_var(vars, i, h, from),
                top_symbol_var(vars, i + 1, h + 1, to),
            ])),
            _ => None,
        })
        .collect()
}

/// Disjuncts justifying a pop (`δ = −1`) from `u`, top `h` at `i` falling to top `h-1`, read from
/// the pre-transition column at `i` (not `i+1`), per the reduction's pop convention.
fn pop_disjuncts(net: &Network, vars: &VarTable, u: NodeId, i: usize, h: usize) -> Vec<Formula> {
    Action::ALL
        .iter()
        .filter_map(|&action| match action {
            Action::Pop { from, to } if net.has_action(u, action) => Some(Formula::and([
                top_symbol_var(vars, i, h, from),
                top_symbol_var(vars, i, h - 1, to),
            ])),
            _ => None,
        })
        .collect()
}

/// Build Φ₃ (fused with Φ₇) for the whole network and path length encoded in `vars`.
pub fn build(net: &Network, vars: &VarTable) -> Formula {
    let positions = vars.positions();
    let height_bound = vars.height_bound();
    let mut clauses = Vec::new();

    for i in 0..(positions - 1) {
        for u in net.node_ids() {
            for h in 0..height_bound {
                let state = Formula::var(vars.x(u, i, h));
                let mut successors = Vec::new();

                for v in net.node_ids() {
                    for h2 in 0..height_bound {
                        let target = Formula::var(vars.x(v, i + 1, h2));
                        let antecedent = Formula::and([state.clone(), target.clone()]);
                        let delta = h2 as i64 - h as i64;

                        if !(-1..=1).contains(&delta) {
                            clauses.push(Formula::not(antecedent));
                            continue;
                        }
                        if !net.is_edge(u, v) {
                            clauses.push(Formula::not(antecedent));
                            continue;
                        }

                        let disjuncts = match delta {
                            0 => transmit_disjuncts(net, vars, u, i, h),
                            1 => push_disjuncts(net, vars, u, i, h),
                            -1 => pop_disjuncts(net, vars, u, i, h),
                            _ => unreachable!("delta filtered to [-1, 1] above"),
                        };

                        if disjuncts.is_empty() {
                            clauses.push(Formula::not(antecedent));
                        } else {
                            clauses.push(Formula::implies(antecedent, Formula::or(disjuncts)));
                            successors.push(target);
                        }
                    }
                }

                clauses.push(Formula::implies(state, Formula::or(successors)));
            }
        }
    }

    Formula::and(clauses)
}
