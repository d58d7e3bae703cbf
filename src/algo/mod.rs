/*!
# Graph Algorithms

Algorithms are provided as traits implemented directly on
[`AdjacencyList`](crate::repr::AdjacencyList), labeled or not. Everything is re-exported at
the top level of this module, so
```rust
use arcgraph::{prelude::*, algo::*};
```
gives access to traversals, path trees, validation and the remaining utilities.
*/

mod floyd_warshall;
mod from_list;
mod permute;
mod stats;
mod traversal;
mod validate;

use crate::{error::*, prelude::*};

pub use floyd_warshall::*;
pub use from_list::*;
pub use permute::*;
pub use stats::*;
pub use traversal::*;
pub use validate::*;
