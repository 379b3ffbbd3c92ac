//! Console rendering: the path consumer for the console program.

use crate::{
    geometry::{Point, TileType},
    level::Level,
    pathfinding::Path,
};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::{collections::HashSet, fmt, io::Write};

/// What is drawn at a single position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Tile(TileType),
    Path,
    Enemy,
    Player,
}

impl Cell {
    fn color(self) -> Option<Color> {
        match self {
            Cell::Tile(TileType::Wall) => Some(Color::Blue),
            Cell::Tile(TileType::Exit) => Some(Color::Yellow),
            Cell::Tile(TileType::EnemySpawn) | Cell::Enemy => Some(Color::Red),
            Cell::Tile(TileType::Floor) => None,
            Cell::Path => Some(Color::DarkYellow),
            Cell::Player => Some(Color::Green),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Tile(tile) => write!(f, "{}", tile),
            Cell::Path => f.write_str("#"),
            Cell::Enemy => f.write_str("@"),
            Cell::Player => f.write_str("P"),
        }
    }
}

/// Draws levels and paths as text.
///
/// With colour enabled, tiles are coloured with ANSI escape sequences; without
/// it, the output is plain text suitable for files and tests.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Renderer { color }
    }

    /// Renderer which emits no escape sequences.
    pub fn plain() -> Self {
        Renderer::new(false)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Draw `level` with every path in `paths` overlaid.
    ///
    /// Path cells are drawn as `#`. Actors are drawn on top of paths, so the
    /// endpoints of each path still show who is standing there.
    pub fn draw<'a, W: Write>(
        &self,
        out: &mut W,
        level: &Level,
        paths: impl IntoIterator<Item = &'a Path>,
    ) -> std::io::Result<()> {
        let on_path: HashSet<Point> = paths.into_iter().flat_map(|path| path.points()).collect();
        let enemies: HashSet<Point> = level.enemies().iter().copied().collect();

        let grid = level.grid();
        let mut current_color = None;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let point = Point::new(x, y);
                let cell = if point == level.player() {
                    Cell::Player
                } else if enemies.contains(&point) {
                    Cell::Enemy
                } else if on_path.contains(&point) {
                    Cell::Path
                } else {
                    Cell::Tile(grid[point])
                };

                // floor is blank, so whatever colour is active will do
                if self.color && cell.color().is_some() && cell.color() != current_color {
                    current_color = cell.color();
                    if let Some(color) = current_color {
                        queue!(out, SetForegroundColor(color))?;
                    }
                }
                queue!(out, Print(cell))?;
            }
            if self.color && current_color.take().is_some() {
                queue!(out, ResetColor)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }

    /// Draw `level` without any paths.
    pub fn draw_level<W: Write>(&self, out: &mut W, level: &Level) -> std::io::Result<()> {
        self.draw(out, level, std::iter::empty::<&Path>())
    }
}
