use crate::graphs::edges::Edges;

/// A graph that supports read-only access to its vertices.
pub trait ReadVertices: Edges {
    /// Iterator over all vertices in the graph.
    ///
    /// Vertices are yielded in ascending [`Dense`](crate::graphs::edges::Dense)
    /// position, so the `i`-th item has position `i`.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// A graph that can grow new isolated vertices.
pub trait InsertVertex: Edges {
    /// Appends a vertex without incident edges and returns it.
    fn insert_vertex(&mut self) -> Self::Vertex;
}
