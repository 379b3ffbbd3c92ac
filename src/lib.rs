//! A* pathfinding on grids loaded from text maps, with console rendering.
//!
//! - [`geometry`] holds [`Point`][geometry::Point] and the [`Grid`][geometry::Grid] tile matrix.
//! - [`pathfinding`] is the search itself.
//! - [`level`] reads text maps and finds the actors on them.
//! - [`render`] draws levels and paths.
//! - [`config`] is the on-disk configuration.

pub mod config;
pub mod geometry;
pub mod level;
pub mod pathfinding;
pub mod render;

pub use geometry::{Grid, Point, TileType};
pub use level::Level;
pub use pathfinding::{Path, PathFinder, SearchOptions};
