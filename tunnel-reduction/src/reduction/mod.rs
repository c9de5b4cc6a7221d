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

//! # Reduction
//!
//! The core of this crate: builds the propositional formula `Φ(N, L)` whose models correspond to
//! valid stack-constrained paths through a [`Network`](crate::network::Network), then conjoins the
//! constraint families into the top-level formula.
//!
//! `Φ₅` (top-of-stack operation) and `Φ₇` (successor existence) are not built as separate
//! families: `Φ₅` is already entailed by the action preconditions inside [`phi3_transitions`],
//! and `Φ₇` is fused directly into the same pass as its "must go somewhere" clause. Only
//! `Φ₁ ∧ Φ₂ ∧ Φ₃ ∧ Φ₄ ∧ Φ₆ ∧ Φ₈` is ever materialised.

mod phi1_unicity;
mod phi2_endpoints;
mod phi3_transitions;
mod phi4_stack_shape;
mod phi6_evolution;
mod phi8_simple_path;
mod vars;

pub use vars::VarTable;

use crate::error::ReductionError;
use crate::formula::Formula;
use crate::network::Network;

/// Build `Φ(N, L)` for `net`, a path of length `path_len`, from `net.initial()` to
/// `net.terminal()`.
///
/// Returns the formula together with the [`VarTable`] used to build it, since the caller needs
/// the same table to decode a model back into a path.
pub fn reduce(net: &Network, path_len: usize) -> Result<(Formula, VarTable), ReductionError> {
    if net.num_nodes() == 0 {
        return Err(ReductionError::EmptyNetwork);
    }
    let source = net.initial().ok_or(ReductionError::MissingInitial)?;
    let sink = net.terminal().ok_or(ReductionError::MissingTerminal)?;
    assert!(path_len >= 1, "path length must be at least 1");

    let vars = VarTable::new(net.num_nodes(), path_len);

    let formula = Formula::and([
        phi1_unicity::build(net, &vars),
        phi2_endpoints::build(&vars, source, sink),
        phi3_transitions::build(net, &vars),
        phi4_stack_shape::build(net, &vars),
        phi6_evolution::build(net, &vars),
        phi8_simple_path::build(net, &vars),
    ]);

    Ok((formula, vars))
}
