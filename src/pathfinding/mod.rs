//! A* search on a [`Grid`][crate::geometry::Grid].
//!
//! [`PathFinder`] is the entry point. [`Node`], [`NodeArena`] and the
//! [`Frontier`] implementations are exposed for callers who want to inspect or
//! reuse the building blocks.

mod frontier;
mod node;
mod path;
mod path_finder;

pub use frontier::{Frontier, FrontierKind, HeapFrontier, LinearFrontier};
pub use node::{Node, NodeArena, NodeId};
pub use path::{Path, Waypoint};
pub use path_finder::{
    Outcome, PathFinder, SearchOptions, SearchStats, DEFAULT_MAX_ITERATIONS,
};
