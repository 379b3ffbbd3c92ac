use astar_console::{
    config::{self, Config},
    level::{Level, LevelError},
    pathfinding::FrontierKind,
    render::Renderer,
};
use clap::Parser;
use std::{
    error::Error as StdError,
    io::{IsTerminal, Write},
    path::PathBuf,
};

/// Find a path from every enemy to the player on a text map, and draw it.
#[derive(Parser, Debug)]
#[command(name = "astar-console")]
#[command(about = "A* pathfinding on a text map", long_about = None)]
struct Args {
    /// Map file: `W` wall, space floor, `e` exit, `@` enemy, `P` player
    map: PathBuf,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up on a search after selecting this many nodes
    #[arg(short, long)]
    max_iterations: Option<usize>,

    /// Frontier implementation: linear or heap
    #[arg(short, long)]
    frontier: Option<FrontierKind>,

    /// Never emit terminal colours
    #[arg(long)]
    no_color: bool,

    /// Write the effective configuration back to the configuration file
    #[arg(long)]
    save_config: bool,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("writing output")]
    Io(#[from] std::io::Error),
}

fn run(args: Args) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(frontier) = args.frontier {
        config.frontier = frontier;
    }
    if args.no_color {
        config.color = false;
    }
    if args.save_config {
        match &args.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
    }

    let level = Level::load(&args.map)?;
    let finder = level.path_finder(config.search_options());

    let stdout = std::io::stdout();
    let renderer = Renderer::new(config.color && stdout.is_terminal());
    let mut out = stdout.lock();

    renderer.draw_level(&mut out, &level)?;

    let mut paths = Vec::with_capacity(level.enemies().len());
    for &enemy in level.enemies() {
        writeln!(out, "Path finding: E{} -> P{}", enemy, level.player())?;
        let path = finder.find_path(enemy, level.player());
        if path.is_empty() {
            writeln!(out, "NO PATH FOUND")?;
        } else {
            writeln!(out, "{} steps, length {:.3}", path.len(), path.cost())?;
            paths.push(path);
        }
    }

    if !paths.is_empty() {
        writeln!(out)?;
        renderer.draw(&mut out, &level, &paths)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
