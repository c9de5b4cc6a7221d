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

//! Module containing all error types

use thiserror::Error;

/// Errors raised while building or querying a [`crate::network::Network`].
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A node id was used that does not belong to this network.
    #[error("unknown node: {0}")]
    UnknownNode(String),
}

/// Errors raised by [`crate::reduction::reduce`] and the SAT back end it drives.
#[derive(Debug, Error)]
pub enum ReductionError {
    /// The network has no initial node set.
    #[error("network has no initial node set")]
    MissingInitial,
    /// The network has no terminal node set.
    #[error("network has no terminal node set")]
    MissingTerminal,
    /// The network has zero nodes, so no path (and no stack bound) can be derived.
    #[error("network has no nodes")]
    EmptyNetwork,
    /// The underlying SAT engine reported an internal error.
    #[error("SAT engine error: {0}")]
    Solver(String),
}

/// Errors raised while decoding a satisfying model back into a path.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The model leaves a (position, height) pair without a unique occupying node, violating the
    /// unicity constraint the reduction itself should have enforced.
    #[error("position {position} height {height} has no unique occupying node")]
    AmbiguousPosition {
        /// Offending path position.
        position: usize,
        /// Offending stack height.
        height: usize,
    },
    /// The model declares a transition with no action capable of explaining the height delta.
    #[error("no action at position {position} explains the transition to {next_position}")]
    UnexplainedTransition {
        /// Position the path departs from.
        position: usize,
        /// Position the path arrives at.
        next_position: usize,
    },
}

/// The top-level error type returned by this crate's public API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error propagated from [`crate::network`].
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    /// Error propagated from [`crate::reduction`].
    #[error("reduction error: {0}")]
    Reduction(#[from] ReductionError),
    /// Error propagated from model decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
