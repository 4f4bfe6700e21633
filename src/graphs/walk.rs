/// A walk through a graph: a start vertex followed by alternating edges
/// and vertices, where every edge joins the vertices on either side.
///
/// The empty walk has neither vertices nor edges.
/// Otherwise there is exactly one more vertex than there are edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Default for Walk<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: Copy + Eq, E: Copy> Walk<V, E> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a walk from its vertex and edge sequences.
    ///
    /// `edges[i]` must join `vertices[i]` and `vertices[i + 1]`.
    pub(crate) fn from_parts(vertices: Vec<V>, edges: Vec<E>) -> Self {
        debug_assert!(
            vertices.len() == edges.len() + 1 || (vertices.is_empty() && edges.is_empty()),
            "walk with {} vertices and {} edges",
            vertices.len(),
            edges.len()
        );
        Self { vertices, edges }
    }

    /// Edges in walking order.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Vertices in walking order, starting and ending vertex included.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn start(&self) -> Option<V> {
        self.vertices.first().copied()
    }

    pub fn end(&self) -> Option<V> {
        self.vertices.last().copied()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true when the walk ends where it started.
    ///
    /// The empty walk is closed.
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    /// Every step of the walk as `(from, edge, to)`.
    pub fn steps(&self) -> impl Iterator<Item = (V, E, V)> + '_ {
        self.edges
            .iter()
            .zip(self.vertices.windows(2))
            .map(|(&edge, pair)| (pair[0], edge, pair[1]))
    }

    pub fn into_edges(self) -> Vec<E> {
        self.edges
    }
}
