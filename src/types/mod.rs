//! All data types for the labelgraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};
