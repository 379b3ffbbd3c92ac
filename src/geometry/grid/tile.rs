use smallstr::SmallString;
use std::marker::PhantomData;

use super::Traversable;

/// Number of characters below which the [`Chunks`] iterator does not allocate.
pub const CHUNK_WIDTH: usize = 4;

/// A type implementing `DisplayWidth` has a constant width for display and parsing.
///
/// This makes it suitable for 2d cartesian grids.
pub trait DisplayWidth {
    const DISPLAY_WIDTH: usize;

    /// Split a string into an iterator of chunks of characters of length `DISPLAY_WIDTH`
    fn chunks(s: &str) -> Chunks<Self> {
        Chunks(s.chars(), PhantomData)
    }
}

/// Iterator of chunks of equal width from a string.
///
/// Created with [`DisplayWidth::chunks`]. Never heap-allocates if `T::DISPLAY_WIDTH <= CHUNK_WIDTH`.
pub struct Chunks<'a, T: ?Sized>(std::str::Chars<'a>, PhantomData<T>);

impl<T: DisplayWidth> Iterator for Chunks<'_, T> {
    // 4 bytes in a max-width char
    type Item = SmallString<[u8; 4 * CHUNK_WIDTH]>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut s = SmallString::new();
        for _ in 0..T::DISPLAY_WIDTH {
            s.push(self.0.next()?);
        }
        Some(s)
    }
}

/// Classification of a single grid cell.
///
/// Only walls block movement; every other kind of tile can be walked through.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum TileType {
    #[display(" ")]
    #[default]
    Floor,
    #[display("W")]
    Wall,
    #[display("e")]
    Exit,
    #[display("@")]
    EnemySpawn,
}

impl DisplayWidth for TileType {
    const DISPLAY_WIDTH: usize = 1;
}

impl From<TileType> for Traversable {
    fn from(tile: TileType) -> Self {
        match tile {
            TileType::Wall => Traversable::Obstructed,
            TileType::Floor | TileType::Exit | TileType::EnemySpawn => Traversable::Free,
        }
    }
}
