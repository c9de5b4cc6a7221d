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

//! Error types local to the command-line front-end.

use thiserror::Error;

/// Errors raised while parsing a network description file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Could not read the input file.
    #[error("could not read {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line did not match any recognised directive.
    #[error("line {line}: unrecognised directive {content:?}")]
    UnrecognisedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line's content.
        content: String,
    },
    /// A line referenced a node name that was never declared with `node`.
    #[error("line {line}: unknown node {name:?}")]
    UnknownNode {
        /// 1-based line number.
        line: usize,
        /// The offending node name.
        name: String,
    },
    /// A line named an action tag this format does not recognise.
    #[error("line {line}: unknown action {tag:?}")]
    UnknownAction {
        /// 1-based line number.
        line: usize,
        /// The offending action tag.
        tag: String,
    },
    /// `source` or `sink` was never declared.
    #[error("network description is missing a `{0}` directive")]
    MissingEndpoint(&'static str),
}

/// Top-level error type for the CLI binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error while parsing the network description file.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error while building or solving the reduction.
    #[error(transparent)]
    Reduction(#[from] tunnel_reduction::error::ReductionError),
    /// Error while decoding a satisfying model into a path.
    #[error(transparent)]
    Decode(#[from] tunnel_reduction::error::DecodeError),
}
