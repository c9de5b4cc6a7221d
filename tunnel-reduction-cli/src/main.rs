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

mod error;
mod parser;
mod render;

use clap::Parser;
use error::CliError;
use log::*;
use std::path::PathBuf;
use tunnel_reduction::formula::{CnfBuilder, SolveOutcome};
use tunnel_reduction::{decode, printer, reduction};

/// Decide whether a tunnel network admits a stack-constrained path of a given length, by
/// reducing the question to SAT.
#[derive(Parser, Debug)]
#[command(name = "tunnel-reduction", version, about)]
struct CommandLineArguments {
    /// Path to a network description file (see `parser` module docs for the format).
    network: PathBuf,

    /// Required path length `L` (number of transitions).
    length: usize,

    /// Print the full position-by-position model, even on a satisfiable result.
    #[arg(long)]
    print_model: bool,
}

fn main() -> Result<(), CliError> {
    pretty_env_logger::init();
    let args = CommandLineArguments::parse();

    let text = std::fs::read_to_string(&args.network).map_err(|source| {
        error::ParseError::Io { path: args.network.display().to_string(), source }
    })?;
    let (net, _source, _sink) = parser::parse_network(&text)?;
    info!("parsed network with {} nodes", net.num_nodes());

    let (phi, vars) = reduction::reduce(&net, args.length)?;
    let mut cnf = CnfBuilder::new(vars.total_vars());
    cnf.assert_true(&phi);
    debug!("CNF has {} clauses over {} variables", cnf.len(), vars.total_vars());

    match tunnel_reduction::formula::solve(cnf.into_clauses())? {
        SolveOutcome::Unsat => {
            println!("UNSAT: no path of length {} exists", args.length);
        }
        SolveOutcome::Sat(model) => {
            println!("SAT");
            let steps = decode::decode_path(&net, &vars, &model, args.length)?;
            render::print_steps(&net, &steps);
            if args.print_model {
                for line in printer::print_model(&net, &vars, &model, args.length) {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
