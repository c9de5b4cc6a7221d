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

#![deny(missing_docs)]

//! # Tunnel Reduction
//!
//! A library that decides whether a directed "tunnel network" admits a routing path of a given
//! length between a designated source and sink, under a pushdown stack discipline over the
//! two-symbol alphabet `{4, 6}`. It works by *reducing* the question to propositional
//! satisfiability: it builds a Boolean formula whose models correspond one-to-one with valid
//! paths, hands the formula to a SAT engine, and decodes a returned model back into a concrete
//! sequence of stack actions.
//!
//! ## Structure
//!
//! - **[`network`]**: the input side. [`Network`](network::Network) is a directed graph of nodes,
//!   each capable of a subset of the ten stack actions ([`Action`](network::Action)).
//! - **[`formula`]**: the propositional back end. A small Boolean-formula AST, a Tseitin CNF
//!   encoder, and a [`splr`](https://docs.rs/splr)-backed solver.
//! - **[`reduction`]**: the core. Builds `Φ(N, L)`, the conjunction of the eight constraint
//!   families (two of which are fused into others for efficiency) described in
//!   [`reduction::reduce`].
//! - **[`decode`]**: turns a satisfying model back into an ordered [`Step`](network::Step)
//!   sequence.
//! - **[`printer`]**: a human-readable, position-by-position view of a model, for debugging.
//!
//! ## Usage
//!
//! ```
//! use tunnel_reduction::network::{Action, Network, Sym};
//! use tunnel_reduction::{decode, formula, reduction};
//!
//! let mut net = Network::new();
//! let a = net.add_node("A", vec![Action::Transmit(Sym::Four)]);
//! let b = net.add_node("B", vec![]);
//! net.add_edge(a, b);
//! net.set_initial(a).unwrap();
//! net.set_terminal(b).unwrap();
//!
//! let (phi, vars) = reduction::reduce(&net, 1).unwrap();
//! let mut cnf = formula::CnfBuilder::new(vars.total_vars());
//! cnf.assert_true(&phi);
//!
//! match formula::solve(cnf.into_clauses()).unwrap() {
//!     formula::SolveOutcome::Sat(model) => {
//!         let path = decode::decode_path(&net, &vars, &model, 1).unwrap();
//!         assert_eq!(path.len(), 1);
//!     }
//!     formula::SolveOutcome::Unsat => panic!("expected a satisfying path"),
//! }
//! ```

pub mod decode;
pub mod error;
pub mod formula;
pub mod network;
pub mod printer;
pub mod reduction;
mod test;

pub use error::Error;
