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

//! # Formula engine
//!
//! The propositional back end the reduction targets. [`Formula`] is a small AST with the
//! combinators `Φ1`–`Φ8` are built from; [`cnf`] turns a `Formula` into CNF via Tseitin
//! transformation; [`engine`] hands the CNF to an external SAT solver and turns its verdict back
//! into a [`Model`].
//!
//! This module treats the SAT engine as a black-box collaborator: nothing here cares which solver
//! answers the query, only that it implements the "give me a CNF, get back SAT/UNSAT and a model"
//! contract.

mod cnf;
mod engine;

pub use cnf::{CnfBuilder, Formula};
pub use engine::{solve, Model, SolveOutcome};

/// A propositional variable, identified by the dense integer the reduction's variable table
/// assigns it. Variable `0` is never produced by [`crate::reduction::VarTable`]; CNF literals are
/// `1`-indexed, matching the convention of DIMACS and the solvers that consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub(crate) u32);

impl Var {
    /// Build a variable from its dense 1-based index. Exposed for the variable table; formula
    /// construction elsewhere goes through [`crate::reduction::VarTable`], never raw indices.
    pub(crate) fn new(index: u32) -> Self {
        debug_assert!(index > 0, "variable indices are 1-based");
        Self(index)
    }

    pub(crate) fn index(&self) -> u32 {
        self.0
    }
}
