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

//! Boolean formula AST and its Tseitin CNF encoding.

use super::Var;
use std::rc::Rc;

/// A Boolean formula built from variables and the connectives the reduction needs.
///
/// `Formula` is cheap to clone (internal nodes are `Rc`-shared) since the same sub-formula often
/// recurs across many constraint instances (e.g. the same "must go somewhere" disjunction shape,
/// instantiated once per node/position/height).
#[derive(Debug, Clone)]
pub enum Formula {
    /// A single propositional variable.
    Var(Var),
    /// Negation.
    Not(Rc<Formula>),
    /// Conjunction of zero or more sub-formulas. The empty conjunction is `true`.
    And(Vec<Formula>),
    /// Disjunction of zero or more sub-formulas. The empty disjunction is `false`.
    Or(Vec<Formula>),
    /// Implication `a -> b`.
    Implies(Rc<Formula>, Rc<Formula>),
    /// Equivalence `a <-> b`.
    Eq(Rc<Formula>, Rc<Formula>),
}

impl Formula {
    /// A variable occurrence.
    pub fn var(v: Var) -> Self {
        Formula::Var(v)
    }

    /// Negate a formula.
    pub fn not(f: Formula) -> Self {
        Formula::Not(Rc::new(f))
    }

    /// Conjunction of a list of formulas.
    pub fn and(fs: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(fs.into_iter().collect())
    }

    /// Disjunction of a list of formulas.
    pub fn or(fs: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(fs.into_iter().collect())
    }

    /// Implication `a -> b`.
    pub fn implies(a: Formula, b: Formula) -> Self {
        Formula::Implies(Rc::new(a), Rc::new(b))
    }

    /// Equivalence `a <-> b`.
    pub fn eq(a: Formula, b: Formula) -> Self {
        Formula::Eq(Rc::new(a), Rc::new(b))
    }

    /// "Exactly one of `vars` holds": the standard pairwise-exclusion-plus-at-least-one encoding
    /// used throughout the unicity family (`Φ1`).
    pub fn exactly_one(vars: impl IntoIterator<Item = Var>) -> Self {
        let vars: Vec<Var> = vars.into_iter().collect();
        let at_least_one = Formula::or(vars.iter().map(|&v| Formula::var(v)));
        let mut clauses = vec![at_least_one];
        for i in 0..vars.len() {
            for j in (i + 1)..vars.len() {
                clauses.push(Formula::or([
                    Formula::not(Formula::var(vars[i])),
                    Formula::not(Formula::var(vars[j])),
                ]));
            }
        }
        Formula::and(clauses)
    }
}

/// A single CNF clause: a disjunction of signed literals (positive = variable holds, negative =
/// its negation), in the DIMACS convention the external solver expects.
pub type Clause = Vec<i32>;

/// Accumulates CNF clauses while lowering [`Formula`] trees via Tseitin transformation.
///
/// Every call to [`CnfBuilder::assert_true`]/[`CnfBuilder::assert_false`] adds the clauses needed
/// to force the given formula's truth value, introducing one fresh auxiliary variable per `And`,
/// `Or`, `Implies`, and `Eq` node (never for `Var`/`Not`, which need no auxiliary literal).
#[derive(Debug, Default)]
pub struct CnfBuilder {
    clauses: Vec<Clause>,
    next_var: u32,
}

impl CnfBuilder {
    /// Create a builder whose auxiliary variables start after `num_reduction_vars` (the count of
    /// variables already handed out by [`crate::reduction::VarTable`]).
    pub fn new(num_reduction_vars: u32) -> Self {
        Self { clauses: Vec::new(), next_var: num_reduction_vars + 1 }
    }

    /// Assert that `formula` is true, adding whatever clauses are needed.
    pub fn assert_true(&mut self, formula: &Formula) {
        match formula {
            Formula::And(parts) => {
                for p in parts {
                    self.assert_true(p);
                }
            }
            Formula::Or(parts) => {
                let lits: Vec<i32> = parts.iter().map(|p| self.to_lit(p)).collect();
                self.clauses.push(lits);
            }
            Formula::Var(v) => self.clauses.push(vec![v.index() as i32]),
            Formula::Not(inner) => {
                let lit = self.to_lit(inner);
                self.clauses.push(vec![-lit]);
            }
            other => {
                let lit = self.to_lit(other);
                self.clauses.push(vec![lit]);
            }
        }
    }

    /// Assert that `formula` is false. Equivalent to `self.assert_true(&Formula::not(formula.clone()))`
    /// but avoids the extra `Rc` indirection for the common top-level cases.
    pub fn assert_false(&mut self, formula: &Formula) {
        match formula {
            Formula::And(parts) => {
                let lits: Vec<i32> = parts.iter().map(|p| -self.to_lit(p)).collect();
                self.clauses.push(lits);
            }
            Formula::Or(parts) => {
                for p in parts {
                    self.assert_false(p);
                }
            }
            Formula::Var(v) => self.clauses.push(vec![-(v.index() as i32)]),
            Formula::Not(inner) => {
                let lit = self.to_lit(inner);
                self.clauses.push(vec![lit]);
            }
            other => {
                let lit = self.to_lit(other);
                self.clauses.push(vec![-lit]);
            }
        }
    }

    /// Lower `formula` to a single literal equivalent to its truth value, introducing an
    /// auxiliary Tseitin variable (and its defining clauses) for compound nodes.
    fn to_lit(&mut self, formula: &Formula) -> i32 {
        match formula {
            Formula::Var(v) => v.index() as i32,
            Formula::Not(inner) => -self.to_lit(inner),
            Formula::And(parts) => {
                let lits: Vec<i32> = parts.iter().map(|p| self.to_lit(p)).collect();
                let aux = self.fresh();
                // aux -> each lit
                for &l in &lits {
                    self.clauses.push(vec![-aux, l]);
                }
                // (all lits) -> aux
                let mut clause: Vec<i32> = lits.iter().map(|l| -l).collect();
                clause.push(aux);
                self.clauses.push(clause);
                aux
            }
            Formula::Or(parts) => {
                let lits: Vec<i32> = parts.iter().map(|p| self.to_lit(p)).collect();
                let aux = self.fresh();
                // each lit -> aux
                for &l in &lits {
                    self.clauses.push(vec![-l, aux]);
                }
                // aux -> (some lit)
                let mut clause = lits.clone();
                clause.push(-aux);
                self.clauses.push(clause);
                aux
            }
            Formula::Implies(a, b) => {
                let la = self.to_lit(a);
                let lb = self.to_lit(b);
                let aux = self.fresh();
                // aux -> (!a | b)
                self.clauses.push(vec![-aux, -la, lb]);
                // a -> (b -> aux)   i.e. (!a | aux) and (a | !b ... ) combined below
                self.clauses.push(vec![la, aux]);
                self.clauses.push(vec![-lb, aux]);
                aux
            }
            Formula::Eq(a, b) => {
                let la = self.to_lit(a);
                let lb = self.to_lit(b);
                let aux = self.fresh();
                self.clauses.push(vec![-aux, -la, lb]);
                self.clauses.push(vec![-aux, la, -lb]);
                self.clauses.push(vec![aux, la, lb]);
                self.clauses.push(vec![aux, -la, -lb]);
                aux
            }
        }
    }

    fn fresh(&mut self) -> i32 {
        let v = self.next_var as i32;
        self.next_var += 1;
        v
    }

    /// Consume the builder, returning the accumulated clauses in DIMACS form.
    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    /// Number of clauses accumulated so far.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clauses have been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
