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

//! Renders decoded steps to the terminal.

use tunnel_reduction::network::{Network, Step};

/// Print one line per step: `<src> --action--> <dst>`.
pub fn print_steps(net: &Network, steps: &[Step]) {
    for (idx, step) in steps.iter().enumerate() {
        println!(
            "{idx}: {} --{}--> {}",
            net.node_name(step.src),
            step.action,
            net.node_name(step.dst)
        );
    }
}
