//! Step-timeline engine: the graph store, Kruskal's and Prim's runners and
//! the player that replays their recorded steps.
//!
//! Nothing in here touches the browser. The canvas component drives a
//! [`Session`] and draws its [`Scene`].

mod error;
pub mod graph;
pub mod heap;
pub mod input;
pub mod player;
pub mod runner;
pub mod sample;
pub mod scene;
pub mod session;
pub mod step;
pub mod union_find;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeKey, Graph, VertexId};
pub use player::{PlaybackState, Player};
pub use scene::{RenderSink, Scene};
pub use session::Session;
pub use step::{Algorithm, EdgeColor, NodeColor, Step};
