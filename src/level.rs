//! Text maps: the grid supplier for the console program.
//!
//! A level is drawn one row per line, top row first:
//!
//! | glyph | meaning |
//! |---|---|
//! | `W` | wall |
//! | ` ` | floor |
//! | `e` | exit |
//! | `@` | enemy spawn |
//! | `P` | the player, standing on floor |
//!
//! Any other character is rejected with [`GridConversionErr::TileConversion`];
//! it is not read as floor. Blank lines are skipped.

use crate::{
    geometry::{tile::DisplayWidth, Grid, GridConversionErr, Point, TileType},
    pathfinding::{PathFinder, SearchOptions},
};
use log::info;
use std::{
    convert::TryFrom,
    io::BufRead,
    path::{Path, PathBuf},
};

/// A single character of a text map.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Glyph {
    #[display(" ")]
    Floor,
    #[display("W")]
    Wall,
    #[display("e")]
    Exit,
    #[display("@")]
    Enemy,
    #[display("P")]
    Player,
}

impl DisplayWidth for Glyph {
    const DISPLAY_WIDTH: usize = 1;
}

impl From<Glyph> for TileType {
    fn from(glyph: Glyph) -> Self {
        match glyph {
            Glyph::Floor | Glyph::Player => TileType::Floor,
            Glyph::Wall => TileType::Wall,
            Glyph::Exit => TileType::Exit,
            Glyph::Enemy => TileType::EnemySpawn,
        }
    }
}

/// A parsed map together with the actors marked on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    grid: Grid<TileType>,
    player: Point,
    enemies: Vec<Point>,
}

impl Level {
    /// Parse a level from its text form.
    pub fn parse(input: &str) -> Result<Level, LevelError> {
        Self::from_glyphs(Grid::<Glyph>::try_from(input)?)
    }

    /// Parse a level from a reader.
    pub fn from_reader(input: impl BufRead) -> Result<Level, LevelError> {
        Self::from_glyphs(Grid::<Glyph>::from_reader(input)?)
    }

    /// Load a level from a file.
    pub fn load(path: &Path) -> Result<Level, LevelError> {
        let read_err = |source| LevelError::Read {
            path: path.to_owned(),
            source,
        };
        let file = std::fs::File::open(path).map_err(read_err)?;
        let level = Self::from_reader(std::io::BufReader::new(file)).map_err(|err| match err {
            LevelError::Grid(GridConversionErr::Io(source)) => read_err(source),
            err => err,
        })?;
        info!(
            "loaded {}x{} level from {}: player at {}, {} enemies",
            level.grid.width(),
            level.grid.height(),
            path.display(),
            level.player,
            level.enemies.len()
        );
        Ok(level)
    }

    fn from_glyphs(glyphs: Grid<Glyph>) -> Result<Level, LevelError> {
        let mut player = None;
        let mut enemies = Vec::new();

        for (point, glyph) in glyphs.iter() {
            match glyph {
                Glyph::Player => {
                    if let Some(first) = player {
                        return Err(LevelError::MultiplePlayers(first, point));
                    }
                    player = Some(point);
                }
                Glyph::Enemy => enemies.push(point),
                Glyph::Floor | Glyph::Wall | Glyph::Exit => {}
            }
        }

        let player = player.ok_or(LevelError::NoPlayer)?;
        if enemies.is_empty() {
            return Err(LevelError::NoEnemy);
        }

        Ok(Level {
            grid: glyphs.convert_tile_type(),
            player,
            enemies,
        })
    }

    pub fn grid(&self) -> &Grid<TileType> {
        &self.grid
    }

    /// Where the `P` marker was found.
    pub fn player(&self) -> Point {
        self.player
    }

    /// Where the `@` markers were found, in reading order.
    pub fn enemies(&self) -> &[Point] {
        &self.enemies
    }

    /// A path finder over this level's grid.
    pub fn path_finder(&self, options: SearchOptions) -> PathFinder<'_, TileType> {
        PathFinder::with_options(&self.grid, options)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("reading level from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed level")]
    Grid(#[from] GridConversionErr),
    #[error("level has no player marker `P`")]
    NoPlayer,
    #[error("level has more than one player marker `P`: at {0} and {1}")]
    MultiplePlayers(Point, Point),
    #[error("level has no enemy marker `@`")]
    NoEnemy,
}
