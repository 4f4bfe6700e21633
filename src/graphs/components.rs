use bit_vec::BitVec;
use tracing::trace;

use crate::graphs::{
    bfs::GraphBFS,
    edges::{Dense, ReadEdges},
    undirected::Undirected,
    vertices::ReadVertices,
};

/// Connected components of an undirected graph.
///
/// Components are discovered by sweeping the vertices in position order and
/// starting a breadth-first search from every vertex that no earlier search
/// reached. All searches share one visited bitset, so a full sweep is
/// `O(V + E)`.
pub trait Components: Undirected + Sized {
    /// Number of maximal sets of pairwise reachable vertices.
    ///
    /// Isolated vertices form singleton components,
    /// and the empty graph has no components.
    fn connected_components_count(&self) -> usize {
        sweep(self, |_, _| {})
    }

    /// Component number of every vertex, indexed by vertex position.
    ///
    /// Components are numbered from zero in order of their smallest vertex.
    fn component_labels(&self) -> Vec<usize> {
        let mut labels = vec![0; self.vertex_count()];
        sweep(self, |component, layer| {
            for vertex in layer {
                labels[vertex.index()] = component;
            }
        });
        labels
    }

    /// Returns true when every vertex is reachable from every other vertex.
    ///
    /// The empty graph counts as connected.
    fn is_connected(&self) -> bool {
        self.connected_components_count() <= 1
    }

    /// Number of components that contain at least one edge.
    ///
    /// Isolated vertices are ignored.
    fn edge_component_count(&self) -> usize {
        let labels = self.component_labels();
        let mut seen = BitVec::from_elem(self.vertex_count(), false);

        self.edges()
            .filter(|&(first, _, _)| {
                let component = labels[first.index()];
                let fresh = !seen[component];
                seen.set(component, true);
                fresh
            })
            .count()
    }
}

impl<G: Undirected> Components for G {}

/// Runs one breadth-first search per component and reports every layer of
/// every search to `on_layer` together with the component number.
///
/// Returns the number of components.
fn sweep<G, F>(graph: &G, mut on_layer: F) -> usize
where
    G: Undirected,
    F: FnMut(usize, &[G::Vertex]),
{
    let mut visited = BitVec::from_elem(graph.vertex_count(), false);
    let mut count = 0;

    for vertex in graph.vertices() {
        if visited[vertex.index()] {
            continue;
        }

        let mut bfs: GraphBFS<G, BitVec> = GraphBFS::with_visited(graph, visited, [vertex]);
        for layer in &mut bfs {
            on_layer(count, layer.as_slice());
        }
        visited = bfs.into_visited();

        trace!(component = count, root = vertex.index(), "component discovered");
        count += 1;
    }

    count
}
