/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, topological sorting, shortest paths, spanning trees and cycle detection.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
Algorithms that may fail on the given input return a [`Result`](crate::Result).
*/

mod cycle;
mod mst;
mod shortest_path;
pub mod traversal;

use crate::{prelude::*, utils::*};

pub use cycle::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
