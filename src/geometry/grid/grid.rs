use super::tile::DisplayWidth;
use crate::geometry::Point;
use std::{convert::TryFrom, fmt, hash, ops::Index, str::FromStr};

/// Offsets of the 8 neighbors of a tile, in the order [`Grid::adjacencies`] yields them.
///
/// `dx` varies slowest; the center `(0, 0)` is excluded.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A Grid keeps track of a rectangular tile matrix.
///
/// Its coordinate system puts the origin in the top left, with `y` growing
/// downward: the first line of a text map is row `0`.
///
/// A grid is immutable once built. Searches borrow it, so one grid can back any
/// number of concurrent searches.
///
/// ## Entry Points
///
/// - [`Grid::procedural`] builds a grid from a function of position.
/// - When a grid is provided as text, use [`Grid::try_from`] or [`Grid::from_reader`].
///
/// ## Panics
///
/// Several internal methods assume that the width and height of the grid can be
/// represented in an `i32`. Very large grids may panic if that assumption is violated.
#[derive(Clone, Default)]
pub struct Grid<Tile> {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl<Tile> Grid<Tile> {
    /// Procedurally create a new `Grid` from a function.
    pub fn procedural(width: usize, height: usize, procedure: impl Fn(Point) -> Tile) -> Grid<Tile> {
        let area = width * height;
        let mut grid = Grid {
            tiles: Vec::with_capacity(area),
            width,
            height,
        };
        for idx in 0..area {
            let point = grid.index2point(idx);
            grid.tiles.push(procedure(point));
        }
        grid
    }

    /// Width of this grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of this grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tiles in this grid.
    #[inline]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// `true` when this grid contains no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the points and tiles of this grid, row by row from the top.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile)> {
        let index2point = self.make_index2point();
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, tile)| (index2point(idx), tile))
    }

    /// Iterate over the points of this grid without depending on the lifetime of `self`.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let index2point = self.make_index2point();
        (0..self.tiles.len()).map(index2point)
    }

    /// `true` when a point is legal within the bounds of this grid.
    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Make a function which returns `true` when the parameter is within the bounds of this grid,
    /// without depending on the lifetime of `self`.
    pub fn make_in_bounds(&self) -> impl Fn(Point) -> bool {
        let width = self.width as i32;
        let height = self.height as i32;

        move |point| point.x >= 0 && point.y >= 0 && point.x < width && point.y < height
    }

    /// Position of a point within the row-major tile storage, or `None` if it is out of bounds.
    ///
    /// Useful for sizing per-tile side tables such as visited bitsets.
    #[inline]
    pub fn linear_index(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.x as usize + point.y as usize * self.width)
    }

    /// The tile at `point`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, point: Point) -> Option<&Tile> {
        self.linear_index(point).map(|idx| &self.tiles[idx])
    }

    /// convert a 1d index in the tiles into a 2d point
    fn index2point(&self, idx: usize) -> Point {
        (idx % self.width, idx / self.width).into()
    }

    /// make a function which converts a 1d index in the tiles into a 2d point without borrowing self
    fn make_index2point(&self) -> impl Fn(usize) -> Point {
        let width = self.width;
        move |idx| (idx % width, idx / width).into()
    }

    /// Return an iterator of all legal points adjacent to the given point.
    ///
    /// This iterator will return up to 8 elements; it includes diagonals.
    /// Points are emitted column by column: all neighbors at `x - 1` first,
    /// each column from top to bottom.
    pub fn adjacencies(&self, point: Point) -> impl Iterator<Item = Point> {
        let in_bounds = self.make_in_bounds();
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| point.checked_add(offset))
            .filter(move |&neighbor| in_bounds(neighbor))
    }

    /// Convert the underlying tile type of a grid.
    ///
    /// This produces a new grid whose tiles are of a new underlying type.
    pub fn convert_tile_type<NewTile>(self) -> Grid<NewTile>
    where
        Tile: Into<NewTile>,
    {
        self.map_tiles(Into::into)
    }

    /// Produce a new grid of the same dimensions by applying `f` to every tile.
    pub fn map_tiles<NewTile>(self, f: impl FnMut(Tile) -> NewTile) -> Grid<NewTile> {
        let mut tiles = Vec::with_capacity(self.tiles.len());
        tiles.extend(self.tiles.into_iter().map(f));
        Grid {
            tiles,
            width: self.width,
            height: self.height,
        }
    }
}

impl<Tile> fmt::Debug for Grid<Tile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Grid<{}>", std::any::type_name::<Tile>()))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &format_args!("[...; {}]", self.tiles.len()))
            .finish()
    }
}

impl<Tile: hash::Hash> hash::Hash for Grid<Tile> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl<Tile: PartialEq> PartialEq for Grid<Tile> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles == other.tiles
    }
}

impl<Tile: Eq> Eq for Grid<Tile> {}

impl<Tile, Row> From<&[Row]> for Grid<Tile>
where
    Tile: Clone,
    Row: AsRef<[Tile]>,
{
    /// Convert an input 2d array into a grid.
    ///
    /// The input array must be arranged with the y axis as the outer array,
    /// so that `source[0][0]` is the top left corner of the grid.
    ///
    /// Panics if the input array is not rectangular.
    fn from(source: &[Row]) -> Grid<Tile> {
        let height = source.len();
        if height == 0 {
            return Grid {
                tiles: Vec::new(),
                width: 0,
                height: 0,
            };
        }

        let width = source[0].as_ref().len();
        assert!(
            source.iter().all(|row| row.as_ref().len() == width),
            "input must be rectangular"
        );

        let mut tiles = Vec::with_capacity(width * height);
        for row in source.iter() {
            tiles.extend(row.as_ref().iter().cloned());
        }

        Grid {
            tiles,
            width,
            height,
        }
    }
}

impl<Tile> Grid<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    /// Try to convert the contents of a reader into a grid.
    ///
    /// The input should be in natural graphical order: its first characters are the top left.
    /// Blank lines are skipped; every other line must hold the same number of tiles.
    pub fn from_reader<R>(input: R) -> Result<Self, GridConversionErr>
    where
        R: std::io::BufRead,
    {
        let mut arr = Vec::new();

        for line in input.lines() {
            let line = line?;

            let mut row = Vec::with_capacity(line.len() / Tile::DISPLAY_WIDTH);
            for chunk in Tile::chunks(&line) {
                row.push(Tile::from_str(&chunk).map_err(|err| {
                    GridConversionErr::TileConversion(Box::new(err), chunk.to_string())
                })?);
            }
            if !row.is_empty() {
                arr.push(row);
            }
        }

        let Some(first) = arr.first() else {
            return Err(GridConversionErr::Empty);
        };
        let width = first.len();
        if let Some(row) = arr.iter().position(|row| row.len() != width) {
            return Err(GridConversionErr::NotRectangular {
                row,
                expect: width,
                got: arr[row].len(),
            });
        }

        Ok(Grid::from(arr.as_slice()))
    }
}

impl<Tile> TryFrom<&str> for Grid<Tile>
where
    Tile: Clone + DisplayWidth + FromStr,
    <Tile as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    type Error = GridConversionErr;

    /// the input should be in natural graphical order:
    /// its first characters are the top left.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::from_reader(input.as_bytes())
    }
}

impl<Tile> Index<Point> for Grid<Tile> {
    type Output = Tile;

    /// Panics if `point` is out of bounds.
    #[track_caller]
    fn index(&self, point: Point) -> &Tile {
        match self.linear_index(point) {
            Some(idx) => &self.tiles[idx],
            None => panic!(
                "point {} out of bounds of {}x{} grid",
                point, self.width, self.height
            ),
        }
    }
}

impl<Tile> fmt::Display for Grid<Tile>
where
    Tile: fmt::Display + DisplayWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            for tile in row {
                write!(f, "{:width$}", tile, width = Tile::DISPLAY_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GridConversionErr {
    #[error("converting tile from {1:?}")]
    TileConversion(
        #[source] Box<dyn 'static + std::error::Error + Send + Sync>,
        String,
    ),
    #[error("grid must be rectangular: row {row} has {got} tiles, expected {expect}")]
    NotRectangular {
        row: usize,
        expect: usize,
        got: usize,
    },
    #[error("grid contains no tiles")]
    Empty,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TileType;
    use std::collections::HashSet;

    #[test]
    fn test_procedural() {
        let grid = Grid::procedural(3, 2, |point| point.x + 10 * point.y);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.tiles, vec![0, 1, 2, 10, 11, 12]);
        assert!(grid.iter().all(|(point, &tile)| point.x + 10 * point.y == tile));
    }

    #[test]
    fn test_point_index_conversion() {
        const EDGE: usize = 64;

        let grid = Grid::procedural(EDGE, EDGE, |_| ());
        let mut emitted_points = HashSet::new();
        for idx in 0..grid.area() {
            let point = grid.index2point(idx);
            assert!(
                emitted_points.insert(point),
                "no duplicate point should ever be emitted"
            );
            assert_eq!(grid.linear_index(point), Some(idx));
        }
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::procedural(4, 3, |_| ());
        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(3, 2)));
        assert!(!grid.in_bounds(Point::new(4, 2)));
        assert!(!grid.in_bounds(Point::new(3, 3)));
        assert!(!grid.in_bounds(Point::new(-1, 0)));
        assert!(grid.get(Point::new(0, -1)).is_none());
        assert_eq!(grid.linear_index(Point::new(9, 9)), None);
    }

    #[test]
    fn test_adjacencies() {
        let grid = Grid::procedural(3, 3, |_| ());

        let center: Vec<_> = grid.adjacencies(Point::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );

        let corner: Vec<_> = grid.adjacencies(Point::new(0, 0)).collect();
        assert_eq!(
            corner,
            vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
        );

        // a point outside the grid may still border it
        let outside: Vec<_> = grid.adjacencies(Point::new(-1, 1)).collect();
        assert_eq!(
            outside,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );

        // no neighbor of a point at the edge of the coordinate space wraps around
        assert_eq!(grid.adjacencies(Point::new(i32::MAX, i32::MAX)).count(), 0);
        assert_eq!(grid.adjacencies(Point::new(i32::MIN, 1)).count(), 0);
    }

    #[test]
    fn test_parse_and_display() {
        let text = "W  W\n e@ \nWWWW\n";
        let grid = Grid::<TileType>::try_from(text).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Point::new(0, 0)], TileType::Wall);
        assert_eq!(grid[Point::new(1, 0)], TileType::Floor);
        assert_eq!(grid[Point::new(1, 1)], TileType::Exit);
        assert_eq!(grid[Point::new(2, 1)], TileType::EnemySpawn);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::<TileType>::try_from("\nWW\n\nWW\n\n").unwrap();
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Grid::<TileType>::try_from("WW\nW\n"),
            Err(GridConversionErr::NotRectangular {
                row: 1,
                expect: 2,
                got: 1
            })
        ));
        assert!(matches!(
            Grid::<TileType>::try_from("\n\n"),
            Err(GridConversionErr::Empty)
        ));
        match Grid::<TileType>::try_from("W?") {
            Err(GridConversionErr::TileConversion(_, chunk)) => assert_eq!(chunk, "?"),
            other => panic!("expected tile conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_tiles() {
        let grid = Grid::<TileType>::try_from("W \n@e").unwrap();
        let walls = grid.map_tiles(|tile| tile == TileType::Wall);
        assert_eq!(walls.tiles, vec![true, false, false, false]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let grid = Grid::procedural(2, 2, |_| 0);
        let _ = grid[Point::new(2, 0)];
    }
}
