// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod grid;
mod traversable;

pub mod tile;

pub use grid::{Grid, GridConversionErr};
pub use tile::TileType;
pub use traversable::Traversable;
