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

//! Φ₈: no `(node, height)` state is revisited.

use super::vars::VarTable;
use crate::formula::Formula;
use crate::network::Network;

/// For every `(n, h)` and every `0 ≤ i < j ≤ L`: `¬(x[n, i, h] ∧ x[n, j, h])`.
pub fn build(net: &Network, vars: &VarTable) -> Formula {
    let positions = vars.positions();
    let clauses = net.node_ids().flat_map(|n| {
        (0..vars.height_bound()).flat_map(move |h| {
            (0..positions).flat_map(move |i| {
                ((i + 1)..positions).map(move |j| {
                    Formula::not(Formula::and([
                        Formula::var(vars.x(n, i, h)),
                        Formula::var(vars.x(n, j, h)),
                    ]))
                })
            })
        })
    });
    Formula::and(clauses)
}
