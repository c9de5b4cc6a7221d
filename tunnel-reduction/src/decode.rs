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

//! Model decoding: turns a satisfying assignment back into an ordered sequence of steps.
//!
//! A malformed model (one that does not actually satisfy `Φ`, e.g. hand-built for a test) is
//! reported as a [`crate::error::DecodeError`] rather than silently decoded with a first-witness
//! heuristic: callers that pass a model straight from [`crate::formula::solve`] never hit this
//! path, and a caller who manufactures one deserves a hard error rather than a plausible-looking
//! but wrong path.

use crate::error::DecodeError;
use crate::formula::Model;
use crate::network::{Action, Network, NodeId, Step, Sym};
use crate::reduction::VarTable;

/// Find the unique `(node, height)` pair with `x[node, i, height]` true in `model`.
fn state_at(net: &Network, vars: &VarTable, model: &Model, i: usize) -> Result<(NodeId, usize), DecodeError> {
    let mut found = None;
    for n in net.node_ids() {
        for h in 0..vars.height_bound() {
            if model.value(vars.x(n, i, h)) {
                if found.is_some() {
                    return Err(DecodeError::AmbiguousPosition { position: i, height: h });
                }
                found = Some((n, h));
            }
        }
    }
    found.ok_or(DecodeError::AmbiguousPosition { position: i, height: 0 })
}

fn symbol_at(vars: &VarTable, model: &Model, i: usize, h: usize) -> Option<Sym> {
    if model.value(vars.y4(i, h)) {
        Some(Sym::Four)
    } else if model.value(vars.y6(i, h)) {
        Some(Sym::Six)
    } else {
        None
    }
}

/// Decode the ordered sequence of steps a satisfying `model` encodes for `net` at path length
/// `path_len`, using the same `vars` the formula was built with.
pub fn decode_path(
    net: &Network,
    vars: &VarTable,
    model: &Model,
    path_len: usize,
) -> Result<Vec<Step>, DecodeError> {
    let positions = path_len + 1;
    let states: Vec<(NodeId, usize)> =
        (0..positions).map(|i| state_at(net, vars, model, i)).collect::<Result<_, _>>()?;

    let mut steps = Vec::with_capacity(path_len);
    for i in 0..path_len {
        let (u, h) = states[i];
        let (v, h_next) = states[i + 1];
        let delta = h_next as i64 - h as i64;

        let action = match delta {
            0 => match symbol_at(vars, model, i, h) {
                Some(Sym::Four) => Action::Transmit(Sym::Four),
                Some(Sym::Six) => Action::Transmit(Sym::Six),
                None => return Err(DecodeError::UnexplainedTransition { position: i, next_position: i + 1 }),
            },
            1 => {
                let from = symbol_at(vars, model, i, h);
                let to = symbol_at(vars, model, i + 1, h + 1);
                match (from, to) {
                    (Some(from), Some(to)) => Action::Push { from, to },
                    _ => return Err(DecodeError::UnexplainedTransition { position: i, next_position: i + 1 }),
                }
            }
            -1 => {
                let from = symbol_at(vars, model, i, h);
                let to = symbol_at(vars, model, i, h - 1);
                match (from, to) {
                    (Some(from), Some(to)) => Action::Pop { from, to },
                    _ => return Err(DecodeError::UnexplainedTransition { position: i, next_position: i + 1 }),
                }
            }
            _ => return Err(DecodeError::UnexplainedTransition { position: i, next_position: i + 1 }),
        };

        steps.push(Step::new(action, u, v));
    }

    Ok(steps)
}
