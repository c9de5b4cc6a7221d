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

//! Helper functions to get a formatted, human-readable view of a model. Informational only; the
//! decoder in [`crate::decode`] is the source of truth for correctness.

use crate::formula::Model;
use crate::network::Network;
use crate::reduction::VarTable;

/// Return one formatted line per position, describing the occupying state and the stack
/// contents. Anomalies (no occupying state, more than one, or a stack with a gap) are flagged
/// inline rather than causing a failure, since this function is diagnostic-only.
pub fn print_model(net: &Network, vars: &VarTable, model: &Model, path_len: usize) -> Vec<String> {
    (0..=path_len).map(|i| format_position(net, vars, model, i)).collect()
}

fn format_position(net: &Network, vars: &VarTable, model: &Model, i: usize) -> String {
    let occupants: Vec<String> = net
        .node_ids()
        .flat_map(|n| {
            (0..vars.height_bound()).filter_map(move |h| {
                model.value(vars.x(n, i, h)).then(|| format!("{}@h={}", net.node_name(n), h))
            })
        })
        .collect();

    let state_desc = match occupants.len() {
        0 => "<no node>".to_string(),
        1 => occupants[0].clone(),
        _ => format!("<several pairs: {}>", occupants.join(", ")),
    };

    format!("i={i}: {state_desc}  stack=[{}]", format_stack(vars, model, i))
}

fn format_stack(vars: &VarTable, model: &Model, i: usize) -> String {
    let mut cells = Vec::new();
    let mut top_found = false;
    let mut anomalies = Vec::new();

    for k in 0..vars.height_bound() {
        let has4 = model.value(vars.y4(i, k));
        let has6 = model.value(vars.y6(i, k));
        match (has4, has6, top_found) {
            (false, false, _) => top_found = true,
            (true, false, false) => cells.push("4".to_string()),
            (false, true, false) => cells.push("6".to_string()),
            (true, true, false) => {
                cells.push("4|6?".to_string());
                anomalies.push(format!("cell {k} ill-defined"));
            }
            (_, _, true) => anomalies.push(format!("cell {k} set above top")),
        }
    }

    if anomalies.is_empty() {
        cells.join(",")
    } else {
        format!("{} ({})", cells.join(","), anomalies.join("; "))
    }
}
