//! In-memory undirected multigraphs with connected components and
//! Eulerian paths.
//!
//! ```
//! use undigraph::prelude::*;
//!
//! let mut graph = UndirectedGraph::with_vertices(3);
//! let (a, b, c) = (
//!     graph.vertex(0).unwrap(),
//!     graph.vertex(1).unwrap(),
//!     graph.vertex(2).unwrap(),
//! );
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//!
//! assert_eq!(graph.connected_components_count(), 1);
//!
//! let walk = graph.eulerian_path().expect("a path has an Eulerian path");
//! assert_eq!(walk.len(), 2);
//! assert_eq!(walk.start(), Some(a));
//! assert_eq!(walk.end(), Some(c));
//! # Ok::<(), undigraph::error::GraphError>(())
//! ```

pub mod error;
pub mod graphs;

pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graphs::{
        components::Components,
        edges::{Dense, Edges, InsertEdge, ReadEdges},
        eulerian::{Eulerian, EulerianKind, Obstruction},
        multigraph::{Edge, GraphId, UndirectedGraph, Vertex},
        undirected::{Endpoints, Undirected},
        vertices::{InsertVertex, ReadVertices},
        walk::Walk,
    };
}
