/*!
# Graph Representations

This module provides the storage backends of the crate:

- [`Graph`] is the main labelled representation: a [`VertexIndex`] mapping caller-supplied
  identifiers to dense node handles, combined with an [`AdjacencyStore`] holding one ordered
  [`EdgeList`] of weighted edges per node. It supports directed and undirected, weighted and
  unweighted graphs, self-loops as well as parallel edges.
- [`WeightMatrix`] is a dense `n x n` matrix of weights in which zero means "no edge".

Both implement the traits of [`crate::ops`] and can thus be passed to every algorithm in
[`crate::algo`].
*/

use crate::{ops::*, *};

mod adjacency;
mod graph;
mod matrix;
mod vertex_index;

pub use adjacency::*;
pub use graph::*;
pub use matrix::*;
pub use vertex_index::*;
