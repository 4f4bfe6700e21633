use crate::graphs::{edges::ReadEdges, vertices::ReadVertices};

/// The two endpoints of an undirected edge.
///
/// The order records how the edge was inserted and has no further meaning.
/// For a loop edge both endpoints are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoints<V> {
    pub first: V,
    pub second: V,
}

impl<V: Eq + Copy> Endpoints<V> {
    pub fn new(first: V, second: V) -> Self {
        Self { first, second }
    }

    /// Returns true when both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// Returns true when `vertex` is one of the two endpoints.
    #[inline]
    pub fn is_incident_to(&self, vertex: V) -> bool {
        self.first == vertex || self.second == vertex
    }

    /// Returns the endpoint on the other side of `vertex`.
    ///
    /// A loop edge returns `vertex` itself.
    /// Returns `None` when `vertex` is not an endpoint.
    #[inline]
    pub fn opposite(&self, vertex: V) -> Option<V> {
        if self.first == vertex {
            Some(self.second)
        } else if self.second == vertex {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Core abstraction for finite undirected multigraphs.
///
/// Vertices and edges are identified by small copyable values,
/// vertices represent nodes in the graph, and edges represent
/// unordered connections between two (not necessarily distinct)
/// vertices.
///
/// The trait focuses on structural access to vertices, edges, and incidences.
/// Algorithms such as traversal, connectivity, or Eulerian paths
/// are written as generic helpers or extension traits
/// built on top of this interface.
pub trait Undirected: ReadEdges + ReadVertices {
    /// Iterator over the incidences of one vertex.
    ///
    /// Each item is a triple `(vertex, edge, other)` where `vertex` is the
    /// queried vertex and `other` is the opposite endpoint of `edge`.
    type Incident<'a>: Iterator<Item = (Self::Vertex, Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Endpoints of an undirected edge.
    fn endpoints(&self, edge: Self::Edge) -> Endpoints<Self::Vertex>;

    /// Returns every incidence of `vertex`.
    ///
    /// A loop edge is incident twice and is therefore yielded twice.
    fn incident(&self, vertex: Self::Vertex) -> Self::Incident<'_>;

    /// Returns the degree of the given vertex.
    ///
    /// The degree is the number of incidences of the vertex.
    /// Loop edges contribute 2 to the degree, in accordance with
    /// standard graph-theoretic conventions, so loops never change parity.
    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.incident(vertex).count()
    }

    /// Returns the number of loop edges at the given vertex.
    fn loop_degree(&self, vertex: Self::Vertex) -> usize {
        self.incident(vertex)
            .filter(|&(_, _, other)| other == vertex)
            .count()
            / 2
    }

    /// Returns true when `vertex` is an endpoint of `edge`.
    fn is_incident(&self, edge: Self::Edge, vertex: Self::Vertex) -> bool {
        self.endpoints(edge).is_incident_to(vertex)
    }

    /// Returns the endpoint of `edge` opposite to `vertex`,
    /// or `None` when `vertex` is not an endpoint of `edge`.
    fn opposite(&self, edge: Self::Edge, vertex: Self::Vertex) -> Option<Self::Vertex> {
        self.endpoints(edge).opposite(vertex)
    }

    /// Returns the opposite endpoint of every incidence of `vertex`.
    ///
    /// Vertices joined by parallel edges are yielded once per edge.
    fn neighbors(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.incident(vertex).map(|(_, _, other)| other)
    }

    /// Returns true when there exists at least one edge between `a` and `b`.
    ///
    /// This checks for a single-step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_adjacent(&self, a: Self::Vertex, b: Self::Vertex) -> bool {
        self.connections(a, b).next().is_some()
    }

    /// Returns true when `edge` is an undirected edge whose endpoints
    /// are `a` and `b` in some order.
    fn has_edge(&self, a: Self::Vertex, edge: Self::Edge, b: Self::Vertex) -> bool {
        self.connections(a, b).any(|(_, e, _)| e == edge)
    }

    /// Returns an iterator over all edges whose endpoints are `a` and `b`
    /// (in either order).
    ///
    /// Each item is a triple `(a, edge, b)`.
    /// For `a == b`, this returns all loop edges at `a`, each twice.
    fn connections(
        &self,
        a: Self::Vertex,
        b: Self::Vertex,
    ) -> impl Iterator<Item = (Self::Vertex, Self::Edge, Self::Vertex)> + '_ {
        self.incident(a).filter(move |&(_, _, other)| other == b)
    }
}
