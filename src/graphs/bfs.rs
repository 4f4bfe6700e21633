use std::mem;

use crate::graphs::{undirected::Undirected, visited::Visited};

/// Runs a traversal to its fixpoint and hands back the visited set.
pub trait Worklist<T, V: Visited<T>> {
    fn worklist(self) -> V;
}

/// Current and next layer of a breadth-first search.
///
/// Both buffers are reused from step to step.
#[derive(Default)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            next: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    /// Hands the current layer to `expand`, which fills the next one.
    ///
    /// Returns the layer that was expanded, or `None` when the frontier is
    /// exhausted.
    pub fn step<F>(&mut self, expand: F) -> Option<Vec<T>>
    where
        F: FnOnce(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        Some(current)
    }
}

/// Layered breadth-first search over an undirected graph.
///
/// Iterating yields the layers in order of distance from the initial
/// vertices: the first layer holds the (deduplicated) initial vertices,
/// the `k`-th layer the vertices at distance `k`.
/// Vertices already marked in the visited set are never yielded, which
/// lets several searches share one visited set.
pub struct GraphBFS<'g, G, V>
where
    G: Undirected,
    V: Visited<G::Vertex>,
{
    graph: &'g G,
    visited: V,
    frontier: LayeredFrontier<G::Vertex>,
}

impl<'g, G, V> GraphBFS<'g, G, V>
where
    G: Undirected,
    V: Visited<G::Vertex>,
{
    pub fn new(graph: &'g G, initials: impl IntoIterator<Item = G::Vertex>) -> Self {
        Self::with_visited(graph, V::default(), initials)
    }

    /// Starts a search that treats everything in `visited` as already seen.
    pub fn with_visited(
        graph: &'g G,
        mut visited: V,
        initials: impl IntoIterator<Item = G::Vertex>,
    ) -> Self {
        let initial_frontier: Vec<G::Vertex> = initials
            .into_iter()
            .filter(|&vertex| visited.visit(vertex))
            .collect();

        let frontier = LayeredFrontier::new(initial_frontier);

        debug_assert!(frontier.layer().iter().all(|v| visited.is_visited(v)));

        Self {
            graph,
            visited,
            frontier,
        }
    }

    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<G, V> Iterator for GraphBFS<'_, G, V>
where
    G: Undirected,
    V: Visited<G::Vertex>,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let visited = &mut self.visited;

        self.frontier.step(|current, next| {
            for &vertex in current {
                for other in graph.neighbors(vertex) {
                    if visited.visit(other) {
                        next.push(other);
                    }
                }
            }

            // next is a subset of visited
            debug_assert!(next.iter().all(|v| visited.is_visited(v)));
        })
    }
}

impl<G, V> Worklist<G::Vertex, V> for GraphBFS<'_, G, V>
where
    G: Undirected,
    V: Visited<G::Vertex>,
{
    fn worklist(mut self) -> V {
        while self.next().is_some() {}
        self.into_visited()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bit_vec::BitVec;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rustc_hash::FxHashSet;
    use std::collections::VecDeque;

    use crate::graphs::{multigraph::UndirectedGraph, vertices::ReadVertices};

    fn graph_from(vertex_count: usize, pairs: &[(usize, usize)]) -> UndirectedGraph {
        let mut graph = UndirectedGraph::with_vertices(vertex_count);
        for &(a, b) in pairs {
            let (a, b) = (graph.vertex(a).unwrap(), graph.vertex(b).unwrap());
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    fn positions(layer: &[crate::graphs::multigraph::Vertex]) -> Vec<usize> {
        let mut out: Vec<_> = layer.iter().map(|v| v.index()).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn frontier_steps_until_empty() {
        let mut frontier = LayeredFrontier::new([1, 2]);
        assert!(!frontier.is_empty());

        let first = frontier.step(|current, next| next.extend(current.iter().map(|x| x * 10)));
        assert_eq!(first, Some(vec![1, 2]));
        assert_eq!(frontier.layer(), &[10, 20]);

        let second = frontier.step(|_, _| {});
        assert_eq!(second, Some(vec![10, 20]));
        assert!(frontier.is_empty());
        assert_eq!(frontier.step(|_, _| {}), None);
    }

    #[test]
    fn bfs_empty_graph_no_initials() {
        let g = UndirectedGraph::new();

        let mut bfs: GraphBFS<_, BitVec> = GraphBFS::new(&g, std::iter::empty());
        assert!(bfs.next().is_none());
    }

    #[test]
    fn bfs_path_graph_layers() {
        // 0 - 1 - 2 - 3
        let g = graph_from(4, &[(0, 1), (1, 2), (2, 3)]);
        let start = g.vertex(0).unwrap();

        let layers: Vec<_> = GraphBFS::<_, BitVec>::new(&g, [start])
            .map(|layer| positions(&layer))
            .collect();

        assert_eq!(layers, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn bfs_walks_edges_in_both_directions() {
        // 0 - 1 - 2, started from the middle
        let g = graph_from(3, &[(0, 1), (1, 2)]);
        let middle = g.vertex(1).unwrap();

        let layers: Vec<_> = GraphBFS::<_, BitVec>::new(&g, [middle])
            .map(|layer| positions(&layer))
            .collect();

        assert_eq!(layers, vec![vec![1], vec![0, 2]]);
    }

    #[test]
    fn bfs_loops_and_parallel_edges_do_not_duplicate() {
        let g = graph_from(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let start = g.vertex(0).unwrap();

        let layers: Vec<_> = GraphBFS::<_, FxHashSet<_>>::new(&g, [start, start])
            .map(|layer| positions(&layer))
            .collect();

        assert_eq!(layers, vec![vec![0], vec![1]]);
    }

    #[test]
    fn shared_visited_skips_seen_vertices() {
        // Component A: 0 - 1, component B: 2 - 3
        let g = graph_from(4, &[(0, 1), (2, 3)]);
        let (a, c) = (g.vertex(0).unwrap(), g.vertex(2).unwrap());

        let visited = GraphBFS::<_, BitVec>::new(&g, [a]).worklist();
        assert!(visited.is_visited(&g.vertex(1).unwrap()));
        assert!(!visited.is_visited(&c));

        // Restarting inside component A yields nothing new.
        let mut again = GraphBFS::with_visited(&g, visited, [a]);
        assert!(again.next().is_none());

        let visited = again.into_visited();
        let visited = GraphBFS::with_visited(&g, visited, [c]).worklist();
        for v in g.vertices() {
            assert!(visited.is_visited(&v));
        }
    }

    // Random small undirected multigraphs.
    prop_compose! {
        fn random_graph()
            (vertex_count in 1usize..=16)
            (pairs in prop::collection::vec((0..vertex_count, 0..vertex_count), 0..=48),
             start in 0..vertex_count,
             vertex_count in Just(vertex_count))
            -> (usize, Vec<(usize, usize)>, usize)
        {
            (vertex_count, pairs, start)
        }
    }

    proptest! {
        // Layers match shortest path distances from the start vertex.
        #[test]
        fn prop_bfs_layers_match_shortest_paths((vertex_count, pairs, start) in random_graph()) {
            let g = graph_from(vertex_count, &pairs);

            // Reference distances over a plain adjacency list.
            let dist = {
                let mut adjacency = vec![Vec::new(); vertex_count];
                for &(a, b) in &pairs {
                    adjacency[a].push(b);
                    adjacency[b].push(a);
                }

                let mut dist = vec![None::<usize>; vertex_count];
                let mut queue = VecDeque::from([start]);
                dist[start] = Some(0);
                while let Some(u) = queue.pop_front() {
                    let du = dist[u].unwrap();
                    for &v in &adjacency[u] {
                        if dist[v].is_none() {
                            dist[v] = Some(du + 1);
                            queue.push_back(v);
                        }
                    }
                }
                dist
            };

            let mut layer_of = vec![None::<usize>; vertex_count];
            let bfs: GraphBFS<_, BitVec> = GraphBFS::new(&g, [g.vertex(start).unwrap()]);
            for (depth, layer) in bfs.enumerate() {
                prop_assert!(!layer.is_empty());
                for v in layer {
                    prop_assert!(layer_of[v.index()].is_none(), "vertex {} in two layers", v.index());
                    layer_of[v.index()] = Some(depth);
                }
            }

            prop_assert_eq!(layer_of, dist);
        }

        // BitVec and hash set visited sets reach the same vertices.
        #[test]
        fn prop_bitvec_vs_hash_set_reachability((vertex_count, pairs, start) in random_graph()) {
            let g = graph_from(vertex_count, &pairs);
            let start = g.vertex(start).unwrap();

            let bits = GraphBFS::<_, BitVec>::new(&g, [start]).worklist();
            let hashed = GraphBFS::<_, FxHashSet<_>>::new(&g, [start]).worklist();

            for v in g.vertices() {
                prop_assert_eq!(bits.is_visited(&v), hashed.is_visited(&v));
            }
        }
    }

    #[test]
    fn random_stress_reachability_is_symmetric() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4246_535F_5354_5245);

        for _case in 0..50 {
            let vertex_count = rng.random_range(1..=12usize);
            let pairs: Vec<_> = (0..rng.random_range(0..=20usize))
                .map(|_| {
                    (
                        rng.random_range(0..vertex_count),
                        rng.random_range(0..vertex_count),
                    )
                })
                .collect();
            let g = graph_from(vertex_count, &pairs);

            let reach: Vec<BitVec> = g
                .vertices()
                .map(|v| GraphBFS::<_, BitVec>::new(&g, [v]).worklist())
                .collect();

            for a in g.vertices() {
                for b in g.vertices() {
                    assert_eq!(
                        reach[a.index()].is_visited(&b),
                        reach[b.index()].is_visited(&a),
                        "reachability between {} and {} must be symmetric",
                        a.index(),
                        b.index()
                    );
                }
            }
        }
    }
}
