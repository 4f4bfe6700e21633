use crate::graphs::{
    edges::{Dense, ReadEdges},
    undirected::Undirected,
    vertices::ReadVertices,
};

/// Compressed Sparse Row (CSR) snapshot of the incidences of an undirected graph.
///
/// Vertices are addressed by their dense position `0..vertex_count`.
/// The incidences of a vertex `u` are stored in a contiguous segment of the
/// `entries` array, given by the half open range
/// `offsets[u]` up to `offsets[u + 1]`.
///
/// The length of `offsets` is `vertex_count + 1`.
/// `offsets[0]` is always zero.
/// `offsets[vertex_count]` is always equal to `entries.len()`,
/// which is twice the number of edges since every edge has two incidences
/// (a loop edge has both at the same vertex).
pub struct IncidenceCsr<V, E> {
    /// Row offsets for the CSR layout.
    offsets: Box<[usize]>,

    /// Concatenated `(edge, other endpoint)` incidences of all vertices.
    entries: Box<[(E, V)]>,
}

impl<V: Dense, E: Dense> IncidenceCsr<V, E> {
    /// Copies the incidences of `graph`, keeping each vertex's incidence order.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: Undirected<Vertex = V, Edge = E>,
    {
        let vertex_count = graph.vertex_count();

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut entries = Vec::with_capacity(2 * graph.edge_count());

        offsets.push(0);
        for (position, vertex) in graph.vertices().enumerate() {
            debug_assert_eq!(vertex.index(), position, "vertices must be dense");

            entries.extend(graph.incident(vertex).map(|(_, edge, other)| (edge, other)));
            offsets.push(entries.len());
        }

        debug_assert_eq!(offsets.len(), vertex_count + 1);

        Self {
            offsets: offsets.into_boxed_slice(),
            entries: entries.into_boxed_slice(),
        }
    }
}

impl<V: Copy, E: Copy> IncidenceCsr<V, E> {
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of incidences, twice the number of edges.
    pub fn incidence_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the half open range of `entries` holding the incidences of
    /// the vertex at `position`.
    ///
    /// Returns None when `position` is out of range.
    #[inline]
    pub fn neighbor_range(&self, position: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(position)?;
        let end = *self.offsets.get(position + 1)?;
        Some((start, end))
    }

    /// Number of incidences of the vertex at `position`.
    pub fn degree(&self, position: usize) -> usize {
        match self.neighbor_range(position) {
            Some((start, end)) => end - start,
            None => 0,
        }
    }

    /// The incidence stored at `slot`, as `(edge, other endpoint)`.
    #[inline]
    pub fn entry(&self, slot: usize) -> (E, V) {
        self.entries[slot]
    }

    /// One cursor per vertex, each at the start of its segment.
    pub fn cursors(&self) -> Vec<usize> {
        self.offsets[..self.vertex_count()].to_vec()
    }
}
