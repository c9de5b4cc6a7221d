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

//! Φ₄: every cell at or below the current height holds exactly one symbol.

use super::vars::VarTable;
use crate::formula::Formula;
use crate::network::Network;

/// For each position `i` and candidate height `h`: `H_{i=h} → AND_{k=0..=h} (y4[i,k] ⊕ y6[i,k])`,
/// where `H_{i=h}` is the disjunction of `x[n, i, h]` over all nodes `n`.
///
/// The upper bound on `k` is `h` inclusive, not exclusive: this over-constrains the cell one above
/// the logical top, matching the source this reduction is based on.
pub fn build(net: &Network, vars: &VarTable) -> Formula {
    let clauses = (0..vars.positions()).flat_map(|i| {
        (0..vars.height_bound()).map(move |h| {
            let height_is_h = Formula::or(net.node_ids().map(|n| Formula::var(vars.x(n, i, h))));
            let cells_well_formed = Formula::and((0..=h).map(|k| {
                let y4 = Formula::var(vars.y4(i, k));
                let y6 = Formula::var(vars.y6(i, k));
                Formula::or([
                    Formula::and([y4.clone(), Formula::not(y6.clone())]),
                    Formula::and([Formula::not(y4), y6]),
                ])
            }));
            Formula::implies(height_is_h, cells_well_formed)
        })
    });
    Formula::and(clauses)
}
