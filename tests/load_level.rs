//! Run with: `cargo test --test load_level`

use astar_console::{
    level::{Level, LevelError},
    pathfinding::{FrontierKind, SearchOptions},
    render::Renderer,
    Point, TileType,
};
use std::path::{Path, PathBuf};

fn map_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("maps")
        .join("mapdata.txt")
}

#[test]
fn test_sample_map_markers() {
    let level = Level::load(&map_path()).unwrap();
    assert_eq!(level.grid().width(), 40);
    assert_eq!(level.grid().height(), 13);
    assert_eq!(level.player(), Point::new(23, 8));
    assert_eq!(level.enemies(), &[Point::new(3, 2)]);
    assert_eq!(level.grid()[Point::new(30, 2)], TileType::Exit);
}

#[test]
fn test_sample_map_enemy_reaches_player() {
    let level = Level::load(&map_path()).unwrap();
    for frontier in [FrontierKind::Linear, FrontierKind::Heap] {
        let finder = level.path_finder(SearchOptions {
            frontier,
            ..SearchOptions::default()
        });
        let (path, stats) = finder.find_path_with_stats(level.enemies()[0], level.player());
        assert_eq!(path.start(), Some(level.enemies()[0]));
        assert_eq!(path.goal(), Some(level.player()));
        assert!(path.is_contiguous());
        assert!(stats.iterations <= 500);
        for point in path.points() {
            assert_ne!(level.grid()[point], TileType::Wall, "{} is a wall", point);
        }
        // the player's room only opens to the south
        assert!(path.points().any(|point| point.y == 11));
    }
}

#[test]
fn test_sample_map_renders() {
    let level = Level::load(&map_path()).unwrap();
    let path = level
        .path_finder(SearchOptions::default())
        .find_path(level.enemies()[0], level.player());

    let mut out = Vec::new();
    Renderer::plain().draw(&mut out, &level, &[path]).unwrap();
    let drawn = String::from_utf8(out).unwrap();

    let source = std::fs::read_to_string(map_path()).unwrap();
    assert_eq!(drawn.lines().count(), source.lines().count());
    assert!(drawn.contains('#'));
    for (drawn, source) in drawn.lines().zip(source.lines()) {
        assert_eq!(drawn.len(), source.len());
    }
}

#[test]
fn test_missing_file() {
    let err = Level::load(Path::new("/nonexistent/level.txt")).unwrap_err();
    assert!(matches!(err, LevelError::Read { .. }));
}
