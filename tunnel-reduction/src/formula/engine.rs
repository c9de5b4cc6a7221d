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

//! The SAT back end. Hands a CNF to [`splr`] and turns its certificate into a [`Model`].

use super::cnf::Clause;
use super::Var;
use crate::error::ReductionError;
use log::debug;
use splr::Certificate;
use std::collections::HashSet;
use std::convert::TryFrom;

/// The outcome of running the SAT engine over a reduction's CNF.
#[derive(Debug)]
pub enum SolveOutcome {
    /// The formula is satisfiable; carries a witnessing model.
    Sat(Model),
    /// The formula is unsatisfiable: no path exists within the stack-height bound used.
    Unsat,
}

/// A satisfying assignment, queryable by the reduction's own [`Var`] handles.
#[derive(Debug, Default)]
pub struct Model {
    true_vars: HashSet<u32>,
}

impl Model {
    /// The truth value `v` takes in this model.
    pub fn value(&self, v: Var) -> bool {
        self.true_vars.contains(&v.index())
    }

    /// Build a model directly from the set of variables that hold true. Used by tests that need
    /// to exercise the decoder against a hand-built (possibly malformed) assignment without going
    /// through the solver.
    #[cfg(test)]
    pub(crate) fn from_true_vars(vars: impl IntoIterator<Item = Var>) -> Self {
        Self { true_vars: vars.into_iter().map(|v| v.index()).collect() }
    }
}

/// Run the SAT engine over `clauses` and report the outcome.
pub fn solve(clauses: Vec<Clause>) -> Result<SolveOutcome, ReductionError> {
    debug!("handing {} clauses to the SAT engine", clauses.len());
    let certificate = Certificate::try_from(clauses).map_err(|e| ReductionError::Solver(e.to_string()))?;
    match certificate {
        Certificate::UNSAT => Ok(SolveOutcome::Unsat),
        Certificate::SAT(lits) => {
            let true_vars = lits.into_iter().filter(|&l| l > 0).map(|l| l as u32).collect();
            Ok(SolveOutcome::Sat(Model { true_vars }))
        }
    }
}
