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

//! Φ₆: stack cells beneath the site of a transition's change keep their symbols.

use super::vars::VarTable;
use crate::formula::Formula;
use crate::network::Network;

fn cell_preserved(vars: &VarTable, i: usize, k: usize) -> Formula {
    Formula::and([
        Formula::eq(Formula::var(vars.y4(i, k)), Formula::var(vars.y4(i + 1, k))),
        Formula::eq(Formula::var(vars.y6(i, k)), Formula::var(vars.y6(i + 1, k))),
    ])
}

/// For every legal transition `(i, u, v, h, δ)`, assert that cells below the change survive:
/// `[0, h]` for transmit/push, `[0, h-1]` for pop (the popped cell `h` has no counterpart).
pub fn build(net: &Network, vars: &VarTable) -> Formula {
    let positions = vars.positions();
    let height_bound = vars.height_bound();
    let mut clauses = Vec::new();

    for i in 0..(positions - 1) {
        for u in net.node_ids() {
            for h in 0..height_bound {
                for v in net.node_ids() {
                    if !net.is_edge(u, v) {
                        continue;
                    }
                    for h2 in 0..height_bound {
                        let delta = h2 as i64 - h as i64;
                        if !(-1..=1).contains(&delta) {
                            continue;
                        }
                        let antecedent = Formula::and([
                            Formula::var(vars.x(u, i, h)),
                            Formula::var(vars.x(v, i + 1, h2)),
                        ]);
                        // delta == -1 implies h2 == h - 1 >= 0, so h >= 1 here; no underflow.
                        let preserved_upto = if delta == -1 { h - 1 } else { h };
                        let preserved = Formula::and((0..=preserved_upto).map(|k| cell_preserved(vars, i, k)));
                        clauses.push(Formula::implies(antecedent, preserved));
                    }
                }
            }
        }
    }

    Formula::and(clauses)
}
