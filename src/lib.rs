/*!
`wgraphs` is a graph data structure & algorithms library for graphs whose
- vertices carry caller-supplied **labels** (any `Eq + Hash + Clone + Debug` identifier),
- edges carry integral **weights** (or weight one if the graph is unweighted),
- edges are either **directed** or **undirected**, decided at runtime.

# Representation

Internally, **nodes** are `u32` handles in the range `0..n` where `n` is the number of vertices:
the handle of a vertex is its position in insertion order. A [`Graph`](crate::repr::Graph) maps
labels to handles and stores one ordered list of [`WeightedEdge`]s per vertex. Self-loops and
parallel edges are allowed. An undirected edge `{u, v}` is stored in both lists.

Deleting a vertex removes every incident edge and compacts the handles: all handles above the
deleted one shift down by one.

A dense [`WeightMatrix`](crate::repr::WeightMatrix), in which zero encodes "no edge", is provided
as a second representation.

# Design

All algorithms are provided as traits that are implemented on every graph representation, so the
common case reads `graph.shortest_path(s, d)`. Algorithms with options are additionally available
as configurable structs using the *Builder* / *Setter* pattern.

Algorithms work on handles; use [`Graph::index_of`](crate::repr::Graph::index_of) to resolve a
label and [`Graph::labels_of`](crate::repr::Graph::labels_of) to map results back.
Conditions such as unknown vertices, unreachable destinations, disconnected graphs and negative
cycles are reported as [`GraphError`]s.

The library emits [`tracing`] events but never installs a subscriber.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations, and all representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as shortest paths, spanning trees, topological sorting, cycle detection and BFS/DFS,
- [`gens`] includes random generators for weighted graphs,
- [`io`] includes a writer for the GraphViz DOT format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut g: Graph<&str> = Graph::new(false, true);
g.add_weighted_edge("A", "B", 4);
g.add_weighted_edge("B", "C", 1);
g.add_weighted_edge("A", "C", 7);

let (a, c) = (g.index_of(&"A").unwrap(), g.index_of(&"C").unwrap());
let sp = g.shortest_path(a, c).unwrap();

assert_eq!(sp.distance, 5);
assert_eq!(g.labels_of(sp.path).unwrap(), vec![&"A", &"B", &"C"]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, the error type, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}
