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

//! A line-oriented text format for describing a tunnel network, parsed into the library's
//! [`Network`] type. This is explicitly the file-parser collaborator the core reduction leaves
//! out of scope; it lives here in the CLI crate instead.
//!
//! ```text
//! # comment
//! node A transmit_4 push_4_4
//! node M pop_4_4
//! node B
//! edge A M
//! edge M B
//! source A
//! sink B
//! ```

use crate::error::ParseError;
use std::collections::HashMap;
use tunnel_reduction::network::{Action, Network, NodeId, Sym};

fn parse_action(line: usize, tag: &str) -> Result<Action, ParseError> {
    let parse_sym = |s: &str| match s {
        "4" => Some(Sym::Four),
        "6" => Some(Sym::Six),
        _ => None,
    };
    match tag {
        "transmit_4" => return Ok(Action::Transmit(Sym::Four)),
        "transmit_6" => return Ok(Action::Transmit(Sym::Six)),
        _ => {}
    }
    if let Some(rest) = tag.strip_prefix("push_") {
        if let [a, b] = rest.split('_').collect::<Vec<_>>()[..] {
            if let (Some(from), Some(to)) = (parse_sym(a), parse_sym(b)) {
                return Ok(Action::Push { from, to });
            }
        }
    }
    if let Some(rest) = tag.strip_prefix("pop_") {
        if let [a, b] = rest.split('_').collect::<Vec<_>>()[..] {
            if let (Some(from), Some(to)) = (parse_sym(a), parse_sym(b)) {
                return Ok(Action::Pop { from, to });
            }
        }
    }
    Err(ParseError::UnknownAction { line, tag: tag.to_string() })
}

/// Parse a network description from `text`.
pub fn parse_network(text: &str) -> Result<(Network, NodeId, NodeId), ParseError> {
    let mut net = Network::new();
    let mut names: HashMap<String, NodeId> = HashMap::new();
    let mut source_name = None;
    let mut sink_name = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = line.split_whitespace();
        match words.next() {
            Some("node") => {
                let name = words.next().ok_or(ParseError::UnrecognisedLine {
                    line: line_no,
                    content: raw_line.to_string(),
                })?;
                let actions =
                    words.map(|tag| parse_action(line_no, tag)).collect::<Result<Vec<_>, _>>()?;
                let id = net.add_node(name, actions);
                names.insert(name.to_string(), id);
            }
            Some("edge") => {
                let (src, dst) = (words.next(), words.next());
                let (src, dst) = match (src, dst) {
                    (Some(s), Some(d)) => (s, d),
                    _ => {
                        return Err(ParseError::UnrecognisedLine {
                            line: line_no,
                            content: raw_line.to_string(),
                        })
                    }
                };
                let src = *names.get(src).ok_or(ParseError::UnknownNode { line: line_no, name: src.to_string() })?;
                let dst = *names.get(dst).ok_or(ParseError::UnknownNode { line: line_no, name: dst.to_string() })?;
                net.add_edge(src, dst);
            }
            Some("source") => {
                source_name = Some(words.next().ok_or(ParseError::UnrecognisedLine {
                    line: line_no,
                    content: raw_line.to_string(),
                })?.to_string());
            }
            Some("sink") => {
                sink_name = Some(words.next().ok_or(ParseError::UnrecognisedLine {
                    line: line_no,
                    content: raw_line.to_string(),
                })?.to_string());
            }
            _ => {
                return Err(ParseError::UnrecognisedLine { line: line_no, content: raw_line.to_string() })
            }
        }
    }

    let source_name = source_name.ok_or(ParseError::MissingEndpoint("source"))?;
    let sink_name = sink_name.ok_or(ParseError::MissingEndpoint("sink"))?;
    let source = *names
        .get(&source_name)
        .ok_or(ParseError::UnknownNode { line: 0, name: source_name })?;
    let sink = *names.get(&sink_name).ok_or(ParseError::UnknownNode { line: 0, name: sink_name })?;

    net.set_initial(source).expect("source was just resolved from the node table");
    net.set_terminal(sink).expect("sink was just resolved from the node table");

    Ok((net, source, sink))
}
