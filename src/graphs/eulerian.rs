use bit_vec::BitVec;
use tracing::debug;

use crate::graphs::{
    components::Components,
    csr::IncidenceCsr,
    edges::{Dense, ReadEdges},
    undirected::Undirected,
    vertices::ReadVertices,
    walk::Walk,
};

/// Reason a graph has no Eulerian path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// The edges are spread over more than one component.
    Disconnected { components: usize },

    /// More than two vertices have odd degree.
    OddVertices { count: usize },
}

/// Classification of a graph by the Eulerian walks it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerianKind<V> {
    /// The graph has no edges; the empty walk is the answer.
    Trivial,

    /// Every degree is even: there is a closed walk through `start`,
    /// the first vertex with an edge.
    Circuit { start: V },

    /// Exactly `start` and `end` have odd degree: every Eulerian path runs
    /// between them.
    Path { start: V, end: V },

    Impossible(Obstruction),
}

impl<V: Copy> EulerianKind<V> {
    /// Returns true when an Eulerian path exists.
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Impossible(_))
    }

    /// Vertex the constructed walk starts from.
    pub fn start(&self) -> Option<V> {
        match *self {
            Self::Circuit { start } | Self::Path { start, .. } => Some(start),
            Self::Trivial | Self::Impossible(_) => None,
        }
    }
}

/// Eulerian paths and circuits of an undirected multigraph.
///
/// Nothing here mutates the graph. Edge consumption is tracked in a bitset
/// and per-vertex cursors that live only for one call.
pub trait Eulerian: Components {
    /// Checks the existence conditions of an Eulerian path.
    ///
    /// The edges must lie in a single component (isolated vertices do not
    /// matter) and at most two vertices may have odd degree.
    /// Loops count twice towards the degree, so they never change parity.
    fn eulerian_kind(&self) -> EulerianKind<Self::Vertex> {
        let Some((anchor, _, _)) = self.edges().next() else {
            return EulerianKind::Trivial;
        };

        let components = self.edge_component_count();
        if components > 1 {
            debug!(components, "edges span several components");
            return EulerianKind::Impossible(Obstruction::Disconnected { components });
        }

        let mut odd = self.vertices().filter(|&v| self.degree(v) % 2 == 1);
        let first = odd.next();
        let second = odd.next();
        let rest = odd.count();

        let kind = match (first, second) {
            (None, _) => EulerianKind::Circuit { start: anchor },
            (Some(start), Some(end)) if rest == 0 => EulerianKind::Path { start, end },
            _ => {
                let count = usize::from(first.is_some()) + usize::from(second.is_some()) + rest;
                EulerianKind::Impossible(Obstruction::OddVertices { count })
            }
        };

        debug!(?kind, "classified graph");
        kind
    }

    /// Returns a walk that uses every edge exactly once,
    /// or `None` when no such walk exists.
    ///
    /// A graph without edges yields the empty walk.
    /// When two vertices have odd degree the walk runs from the one with
    /// the smaller position to the other.
    fn eulerian_path(&self) -> Option<Walk<Self::Vertex, Self::Edge>> {
        match self.eulerian_kind() {
            EulerianKind::Trivial => Some(Walk::empty()),
            EulerianKind::Circuit { start } | EulerianKind::Path { start, .. } => {
                Some(hierholzer(self, start))
            }
            EulerianKind::Impossible(_) => None,
        }
    }

    /// Returns a closed walk that uses every edge exactly once,
    /// or `None` when no such walk exists.
    fn eulerian_circuit(&self) -> Option<Walk<Self::Vertex, Self::Edge>> {
        match self.eulerian_kind() {
            EulerianKind::Trivial => Some(Walk::empty()),
            EulerianKind::Circuit { start } => Some(hierholzer(self, start)),
            EulerianKind::Path { .. } | EulerianKind::Impossible(_) => None,
        }
    }
}

impl<G: Undirected> Eulerian for G {}

/// Hierholzer's algorithm with an explicit stack.
///
/// The stack holds the current walk as `(vertex, edge used to reach it)`.
/// The top is extended along unused edges until it gets stuck, then popped
/// into the output. Resuming from the new top grows a detour that ends up
/// spliced into the output at that vertex, which replaces the recursive
/// formulation.
///
/// Requires the existence conditions checked by
/// [`Eulerian::eulerian_kind`] and a `start` vertex they permit.
fn hierholzer<G: Undirected>(graph: &G, start: G::Vertex) -> Walk<G::Vertex, G::Edge> {
    let csr = IncidenceCsr::from_graph(graph);
    let edge_count = graph.edge_count();

    let mut used = BitVec::from_elem(edge_count, false);
    let mut cursors = csr.cursors();

    let mut stack: Vec<(G::Vertex, Option<G::Edge>)> = vec![(start, None)];
    let mut vertices = Vec::with_capacity(edge_count + 1);
    let mut edges = Vec::with_capacity(edge_count);

    while let Some(&(vertex, via)) = stack.last() {
        match next_unused(&csr, &used, &mut cursors, vertex.index()) {
            Some((edge, other)) => {
                used.set(edge.index(), true);
                stack.push((other, Some(edge)));
            }
            None => {
                stack.pop();
                vertices.push(vertex);
                edges.extend(via);
            }
        }
    }

    // Popped back to front.
    vertices.reverse();
    edges.reverse();

    assert_eq!(
        edges.len(),
        edge_count,
        "Eulerian construction left edges unused although the graph qualified"
    );
    debug!(edges = edges.len(), "constructed Eulerian walk");

    Walk::from_parts(vertices, edges)
}

/// Advances the cursor of the vertex at `position` past consumed
/// incidences and takes the next unused one.
///
/// Cursors only move forward, so all lookups of a vertex together cost
/// `O(degree)`.
#[inline]
fn next_unused<V: Copy, E: Dense>(
    csr: &IncidenceCsr<V, E>,
    used: &BitVec,
    cursors: &mut [usize],
    position: usize,
) -> Option<(E, V)> {
    let (_, end) = csr.neighbor_range(position)?;
    let cursor = &mut cursors[position];

    while *cursor < end {
        let (edge, other) = csr.entry(*cursor);
        *cursor += 1;
        if !used[edge.index()] {
            return Some((edge, other));
        }
    }

    None
}
