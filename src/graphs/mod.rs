pub mod bfs;
pub mod components;
pub mod csr;
pub mod edges;
pub mod eulerian;
pub mod multigraph;
pub mod undirected;
pub mod vertices;
pub mod visited;
pub mod walk;
