//! Line-based graph scripts.
//!
//! ```text
//! # comment
//! vertex a
//! vertex b
//! edge a b 3
//! remove-edge a b
//! remove-vertex a
//! clear
//! ```
use matrix_graph::{DirectedGraph, GraphError, Weight};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Vertex(String),
    Edge(String, String, Weight),
    RemoveVertex(String),
    RemoveEdge(String, String),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected} argument(s), got {found}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("cannot parse `{0}` as an edge weight: {1}")]
    IllegalWeight(String, std::num::ParseIntError),
}

/// A command together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

pub fn parse(input: &str) -> Result<Vec<Statement>, ScriptError> {
    let mut statements = Vec::new();
    for (line, text) in input.lines().enumerate() {
        let line = line + 1;
        let text = text.split('#').next().unwrap_or_default();
        let mut words = text.split_whitespace();
        let Some(head) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        let command =
            parse_command(head, &args).map_err(|kind| ScriptError { line, kind })?;
        statements.push(Statement { line, command });
    }
    Ok(statements)
}

fn parse_command(head: &str, args: &[&str]) -> Result<Command, ErrorKind> {
    let arity = |command: &'static str, expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(ErrorKind::ArgumentCount {
                command,
                expected,
                found: args.len(),
            })
        }
    };
    match head {
        "vertex" => {
            arity("vertex", 1)?;
            Ok(Command::Vertex(args[0].to_string()))
        }
        "edge" => {
            arity("edge", 3)?;
            let weight = args[2]
                .parse()
                .map_err(|e| ErrorKind::IllegalWeight(args[2].to_string(), e))?;
            Ok(Command::Edge(args[0].to_string(), args[1].to_string(), weight))
        }
        "remove-vertex" => {
            arity("remove-vertex", 1)?;
            Ok(Command::RemoveVertex(args[0].to_string()))
        }
        "remove-edge" => {
            arity("remove-edge", 2)?;
            Ok(Command::RemoveEdge(args[0].to_string(), args[1].to_string()))
        }
        "clear" => {
            arity("clear", 0)?;
            Ok(Command::Clear)
        }
        other => Err(ErrorKind::UnknownCommand(other.to_string())),
    }
}

impl Command {
    /// Runs the command; `Ok(false)` means the graph rejected it softly.
    pub fn apply(&self, graph: &mut DirectedGraph<String>) -> Result<bool, GraphError> {
        match self {
            Command::Vertex(v) => Ok(graph.add_vertex(v.clone())),
            Command::Edge(s, d, w) => graph.add_edge(s.as_str(), d.as_str(), *w),
            Command::RemoveVertex(v) => Ok(graph.remove_vertex(v.as_str())),
            Command::RemoveEdge(s, d) => Ok(graph.remove_edge(s.as_str(), d.as_str())),
            Command::Clear => {
                graph.clear();
                Ok(true)
            }
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Vertex(v) => write!(f, "vertex {v}"),
            Command::Edge(s, d, w) => write!(f, "edge {s} {d} {w}"),
            Command::RemoveVertex(v) => write!(f, "remove-vertex {v}"),
            Command::RemoveEdge(s, d) => write!(f, "remove-edge {s} {d}"),
            Command::Clear => write!(f, "clear"),
        }
    }
}
