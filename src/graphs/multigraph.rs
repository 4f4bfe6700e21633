use std::{
    iter::Enumerate,
    ops::Range,
    slice,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::trace;

use crate::{
    error::{GraphError, Result},
    graphs::{
        edges::{Dense, Edges, InsertEdge, ReadEdges},
        undirected::{Endpoints, Undirected},
        vertices::{InsertVertex, ReadVertices},
    },
};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of an [`UndirectedGraph`].
///
/// Every handle remembers the id of the graph that created it, which lets
/// the graph reject vertices and edges of other graphs.
/// A cloned graph keeps the id of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle of a vertex in an [`UndirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    graph: GraphId,
    index: usize,
}

impl Vertex {
    /// Stable position of the vertex, in `0..vertex_count`.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// Graph that created this vertex.
    #[inline]
    pub fn graph(self) -> GraphId {
        self.graph
    }
}

impl Dense for Vertex {
    #[inline]
    fn index(self) -> usize {
        self.index
    }
}

/// Handle of an edge in an [`UndirectedGraph`].
///
/// Edges are compared by identity: parallel edges between the same two
/// vertices are different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    graph: GraphId,
    index: usize,
}

impl Edge {
    /// Insertion position of the edge, in `0..edge_count`.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// Graph that created this edge.
    #[inline]
    pub fn graph(self) -> GraphId {
        self.graph
    }
}

impl Dense for Edge {
    #[inline]
    fn index(self) -> usize {
        self.index
    }
}

/// Arena backed undirected multigraph.
///
/// Vertices are numbered from zero up to `vertex_count - 1` and edges from
/// zero up to `edge_count - 1` in insertion order. Neither is ever removed,
/// so positions stay stable for the lifetime of the graph.
///
/// Every vertex keeps an incidence list of edge positions.
/// A loop edge is recorded twice in the incidence list of its vertex,
/// which makes the list length equal to the degree.
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    id: GraphId,

    /// Incidence lists, indexed by vertex position.
    incidence: Vec<Vec<usize>>,

    /// Endpoint positions, indexed by edge position.
    endpoints: Vec<(usize, usize)>,
}

impl Default for UndirectedGraph {
    /// Empty graph with no vertices and no edges.
    fn default() -> Self {
        Self::new()
    }
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Creates a graph with `count` isolated vertices.
    pub fn with_vertices(count: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            incidence: vec![Vec::new(); count],
            endpoints: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Returns the vertex at position `index`, if any.
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        (index < self.incidence.len()).then(|| self.vertex_at(index))
    }

    /// Returns the edge inserted at position `index`, if any.
    pub fn edge(&self, index: usize) -> Option<Edge> {
        (index < self.endpoints.len()).then(|| self.edge_at(index))
    }

    /// Returns true when `vertex` was created by this graph.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex.graph == self.id && vertex.index < self.incidence.len()
    }

    /// Returns true when `edge` was created by this graph.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        edge.graph == self.id && edge.index < self.endpoints.len()
    }

    /// Appends an isolated vertex.
    pub fn add_vertex(&mut self) -> Vertex {
        self.insert_vertex()
    }

    /// Connects `u` and `v` with a new edge.
    ///
    /// Parallel edges and loops are accepted.
    /// Fails with [`GraphError::ForeignVertex`] when either vertex belongs
    /// to another graph; the graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<Edge> {
        self.insert_edge((u, v))
    }

    /// Checked variant of [`Undirected::endpoints`].
    pub fn try_endpoints(&self, edge: Edge) -> Result<Endpoints<Vertex>> {
        if !self.contains_edge(edge) {
            return Err(GraphError::ForeignEdge { edge });
        }
        Ok(self.endpoints(edge))
    }

    /// Edges incident to `vertex`, a loop edge twice.
    pub fn incident_edges(&self, vertex: Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.incident(vertex).map(|(_, edge, _)| edge)
    }

    #[inline]
    fn vertex_at(&self, index: usize) -> Vertex {
        Vertex {
            graph: self.id,
            index,
        }
    }

    #[inline]
    fn edge_at(&self, index: usize) -> Edge {
        Edge {
            graph: self.id,
            index,
        }
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<usize> {
        if self.contains_vertex(vertex) {
            Ok(vertex.index)
        } else {
            Err(GraphError::ForeignVertex { vertex })
        }
    }
}

impl Edges for UndirectedGraph {
    type Vertex = Vertex;

    type Edge = Edge;
}

impl ReadEdges for UndirectedGraph {
    type Edges<'a>
        = EdgeIter<'a>
    where
        Self: 'a;

    /// Iterator over all edges in insertion order.
    fn edges(&self) -> Self::Edges<'_> {
        EdgeIter {
            graph: self,
            inner: self.endpoints.iter().enumerate(),
        }
    }

    fn edge_count(&self) -> usize {
        self.endpoints.len()
    }
}

impl ReadVertices for UndirectedGraph {
    type Vertices<'a>
        = VertexIter
    where
        Self: 'a;

    /// Vertices in position order.
    fn vertices(&self) -> Self::Vertices<'_> {
        VertexIter {
            graph: self.id,
            range: 0..self.incidence.len(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.incidence.len()
    }
}

impl InsertVertex for UndirectedGraph {
    fn insert_vertex(&mut self) -> Vertex {
        self.incidence.push(Vec::new());
        self.vertex_at(self.incidence.len() - 1)
    }
}

impl InsertEdge for UndirectedGraph {
    type Error = GraphError;

    fn insert_edge(&mut self, (u, v): (Vertex, Vertex)) -> Result<Edge> {
        let first = self.check_vertex(u)?;
        let second = self.check_vertex(v)?;

        let index = self.endpoints.len();
        self.endpoints.push((first, second));

        // A loop is recorded twice so the list length is the degree.
        self.incidence[first].push(index);
        self.incidence[second].push(index);

        trace!(edge = index, first, second, "inserted edge");
        Ok(self.edge_at(index))
    }
}

impl Undirected for UndirectedGraph {
    type Incident<'a>
        = IncidentIter<'a>
    where
        Self: 'a;

    /// # Panics
    ///
    /// Panics when `edge` is out of range for this graph.
    /// Debug builds also panic on edges of another graph.
    fn endpoints(&self, edge: Edge) -> Endpoints<Vertex> {
        debug_assert_eq!(edge.graph, self.id, "edge of another graph");
        let (first, second) = self.endpoints[edge.index];
        Endpoints::new(self.vertex_at(first), self.vertex_at(second))
    }

    /// # Panics
    ///
    /// Panics when `vertex` is out of range for this graph.
    /// Debug builds also panic on vertices of another graph.
    fn incident(&self, vertex: Vertex) -> Self::Incident<'_> {
        debug_assert_eq!(vertex.graph, self.id, "vertex of another graph");
        IncidentIter {
            graph: self,
            vertex: vertex.index,
            inner: self.incidence[vertex.index].iter(),
        }
    }

    /// Length of the incidence list.
    fn degree(&self, vertex: Vertex) -> usize {
        debug_assert_eq!(vertex.graph, self.id, "vertex of another graph");
        self.incidence[vertex.index].len()
    }
}

/// Iterator over the edges of an [`UndirectedGraph`].
///
/// Yields `(first, edge, second)` in insertion order.
pub struct EdgeIter<'a> {
    graph: &'a UndirectedGraph,
    inner: Enumerate<slice::Iter<'a, (usize, usize)>>,
}

impl Iterator for EdgeIter<'_> {
    type Item = (Vertex, Edge, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, &(first, second)) = self.inner.next()?;
        Some((
            self.graph.vertex_at(first),
            self.graph.edge_at(index),
            self.graph.vertex_at(second),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for EdgeIter<'_> {}

/// Iterator over the vertices of an [`UndirectedGraph`] in position order.
pub struct VertexIter {
    graph: GraphId,
    range: Range<usize>,
}

impl Iterator for VertexIter {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(Vertex {
            graph: self.graph,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for VertexIter {}

/// Iterator over the incidences of one vertex.
///
/// Yields `(vertex, edge, other)` where `other` is the opposite endpoint.
pub struct IncidentIter<'a> {
    graph: &'a UndirectedGraph,
    vertex: usize,
    inner: slice::Iter<'a, usize>,
}

impl Iterator for IncidentIter<'_> {
    type Item = (Vertex, Edge, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.inner.next()?;
        let (first, second) = self.graph.endpoints[edge];
        let other = if first == self.vertex { second } else { first };

        Some((
            self.graph.vertex_at(self.vertex),
            self.graph.edge_at(edge),
            self.graph.vertex_at(other),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IncidentIter<'_> {}
