//! Error types for reading graph files.

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// All errors that can occur when reading a graph from a file.
#[derive(Error, Debug)]
pub enum GraphFileError {
    /// IO error (including a file that can not be opened).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not contain the number of vertices.
    #[error("Missing header: the input does not contain the number of vertices")]
    MissingHeader,

    /// The graph announced by the header can not be allocated.
    #[error("Cannot allocate a graph with {n} vertices")]
    TooManyVertices { n: NumNodes },

    /// A token could not be parsed.
    #[error("Invalid token '{token}' in line {line}: expected {expected}")]
    InvalidToken {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// The input ends within a triple.
    #[error("Input ends with an incomplete triple of {found} token(s)")]
    IncompleteTriple { found: usize },

    /// A vertex id is not in `0..n`.
    #[error("Vertex {node} in line {line} is out of range for a graph with {n} vertices")]
    NodeOutOfRange { line: usize, node: Node, n: NumNodes },

    /// Both endpoints of an edge are equal.
    #[error("Self-loop on vertex {node} in line {line}")]
    SelfLoop { line: usize, node: Node },

    /// An edge is listed twice.
    #[error("Duplicate edge {{{u}, {v}}} in line {line}")]
    DuplicateEdge { line: usize, u: Node, v: Node },

    /// An edge weight is negative or not finite.
    #[error("Invalid weight {weight} of edge {{{u}, {v}}} in line {line}")]
    InvalidWeight {
        line: usize,
        u: Node,
        v: Node,
        weight: Weight,
    },
}

/// Convenience result type for reading graph files.
pub type GraphFileResult<T> = std::result::Result<T, GraphFileError>;
