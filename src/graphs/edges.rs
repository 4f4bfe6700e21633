use std::fmt::Debug;

/// Identifiers that map onto a dense position.
///
/// Vertex identifiers of a graph with `n` vertices must map onto `0..n`,
/// and edge identifiers of a graph with `m` edges onto `0..m`.
/// Algorithms use this position to index bitsets and cursor arrays
/// instead of hashing identifiers.
pub trait Dense: Copy {
    /// Position of the identifier in its arena.
    fn index(self) -> usize;
}

impl Dense for usize {
    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// Common vertex and edge identifier types used by the graph traits.
///
/// Types implementing graph traits are expected to use:
/// - [`Edges::Vertex`] to identify vertices, and
/// - [`Edges::Edge`] to identify edges.
pub trait Edges {
    /// Type used to identify vertices.
    ///
    /// Typically a small copyable handle wrapping a `usize`.
    type Vertex: Eq + Debug + Dense;

    /// Type used to identify edges.
    ///
    /// Edges carry their own identity, so two vertices may be connected
    /// by several distinct edges. Each undirected edge can be viewed as
    /// a triple with first endpoint, edge, and second endpoint.
    type Edge: Eq + Debug + Dense;
}

/// A graph that supports read-only access to its edges.
///
/// Edges can be enumerated via [`ReadEdges::edges`], which yields triples
/// of the form `(first, edge, second)`.
pub trait ReadEdges: Edges {
    /// Iterator over all edges in the graph.
    ///
    /// Each item is a triple with first endpoint, edge, and second endpoint.
    /// Edges are yielded in insertion order.
    type Edges<'a>: Iterator<Item = (Self::Vertex, Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// A graph that supports insertion of edges.
pub trait InsertEdge: Edges {
    /// Reason an edge could not be inserted.
    type Error;

    /// Inserts a new undirected edge between the two `endpoints`.
    ///
    /// The order of the endpoints is kept for [`ReadEdges::edges`] but has
    /// no other meaning. Parallel edges and loops are accepted.
    ///
    /// Fails when either endpoint is not a vertex of this graph.
    fn insert_edge(
        &mut self,
        endpoints: (Self::Vertex, Self::Vertex),
    ) -> Result<Self::Edge, Self::Error>;
}
