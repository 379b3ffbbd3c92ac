pub mod grid;
pub mod point;

pub use grid::{tile, Grid, GridConversionErr, TileType, Traversable};
pub use point::Point;
