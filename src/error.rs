//! Error types for graph construction and checked lookups.

use thiserror::Error;

use crate::graphs::multigraph::{Edge, Vertex};

/// Errors raised by [`UndirectedGraph`](crate::graphs::multigraph::UndirectedGraph).
///
/// Algorithms never fail with an error: a graph without an Eulerian path
/// is reported as `None`, not as a `GraphError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex handle created by a different graph was passed in.
    #[error("vertex {} does not belong to this graph", .vertex.index())]
    ForeignVertex { vertex: Vertex },

    /// An edge handle created by a different graph was passed in.
    #[error("edge {} does not belong to this graph", .edge.index())]
    ForeignEdge { edge: Edge },
}

pub type Result<T> = std::result::Result<T, GraphError>;
