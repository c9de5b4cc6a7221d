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

//! Φ₂: the path starts at the source with an empty stack and ends at the sink the same way.

use super::vars::VarTable;
use crate::formula::Formula;
use crate::network::NodeId;

/// `x[source, 0, 0] ∧ y4[0, 0] ∧ x[sink, L, 0] ∧ y4[L, 0]`.
pub fn build(vars: &VarTable, source: NodeId, sink: NodeId) -> Formula {
    let last = vars.positions() - 1;
    Formula::and([
        Formula::var(vars.x(source, 0, 0)),
        Formula::var(vars.y4(0, 0)),
        Formula::var(vars.x(sink, last, 0)),
        Formula::var(vars.y4(last, 0)),
    ])
}
