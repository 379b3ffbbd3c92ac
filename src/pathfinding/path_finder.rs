use super::{
    frontier::{Frontier, FrontierKind, HeapFrontier, LinearFrontier},
    Node, NodeArena, Path,
};
use crate::geometry::{Grid, Point, Traversable};
use bitvec::bitvec;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Iteration ceiling used unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Tunables for a [`PathFinder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Upper bound on the number of nodes selected from the frontier.
    ///
    /// A search which has not reached its target after this many selections
    /// gives up and reports no path.
    pub max_iterations: usize,
    pub frontier: FrontierKind,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            frontier: FrontierKind::default(),
        }
    }
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, parse_display::Display)]
#[display(style = "kebab-case")]
pub enum Outcome {
    /// The target was reached.
    Found,
    /// Every reachable node was expanded without reaching the target.
    FrontierExhausted,
    /// The iteration ceiling was hit first.
    IterationLimit,
}

/// Diagnostics about a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes selected from the frontier.
    pub iterations: usize,
    /// Number of nodes whose neighbors were examined.
    pub expanded: usize,
    pub outcome: Outcome,
}

/// A* search over a borrowed grid.
///
/// The finder keeps no state between searches; it may be reused for any
/// number of queries against the same grid, and several finders may share a
/// grid across threads.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a, Tile> {
    grid: &'a Grid<Tile>,
    options: SearchOptions,
}

impl<'a, Tile> PathFinder<'a, Tile>
where
    Tile: Copy + Into<Traversable>,
{
    pub fn new(grid: &'a Grid<Tile>) -> Self {
        Self::with_options(grid, SearchOptions::default())
    }

    pub fn with_options(grid: &'a Grid<Tile>, options: SearchOptions) -> Self {
        PathFinder { grid, options }
    }

    pub fn grid(&self) -> &'a Grid<Tile> {
        self.grid
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find a shortest path from `start` to `target`.
    ///
    /// Movement is 8-directional; a diagonal step costs `√2`. The result runs
    /// from `start` to `target` inclusive, or is empty if no path was found.
    ///
    /// Neither endpoint is validated. The start tile is used even when it is a
    /// wall or outside the grid, but a target which cannot be entered is simply
    /// never reached. The one exception is `start == target`, which always
    /// produces the single-point path.
    pub fn find_path(&self, start: Point, target: Point) -> Path {
        self.find_path_with_stats(start, target).0
    }

    /// As [`find_path`][Self::find_path], also reporting how the search went.
    pub fn find_path_with_stats(&self, start: Point, target: Point) -> (Path, SearchStats) {
        match self.options.frontier {
            FrontierKind::Linear => self.search(LinearFrontier::default(), start, target),
            FrontierKind::Heap => self.search(HeapFrontier::default(), start, target),
        }
    }

    fn is_traversable(&self, point: Point) -> bool {
        self.grid
            .get(point)
            .map_or(false, |&tile| Into::<Traversable>::into(tile).is_free())
    }

    // https://en.wikipedia.org/wiki/A*_search_algorithm#Pseudocode
    fn search<F: Frontier>(&self, mut frontier: F, start: Point, target: Point) -> (Path, SearchStats) {
        debug!(
            "searching {} -> {} ({} frontier, at most {} iterations)",
            start, target, self.options.frontier, self.options.max_iterations
        );

        let mut nodes = NodeArena::new();
        let mut visited = bitvec![0; self.grid.area()];
        let mut iterations = 0;
        let mut expanded = 0;
        let mut goal = None;

        let origin = Node::start(start);
        let score = origin.estimated_total_cost(target);
        let origin = nodes.push(origin);
        frontier.insert(origin, start, score);

        let outcome = loop {
            if iterations == self.options.max_iterations {
                break Outcome::IterationLimit;
            }
            iterations += 1;

            let Some(current) = frontier.pop_cheapest() else {
                break Outcome::FrontierExhausted;
            };
            let position = nodes[current].position();
            if position == target {
                goal = Some(current);
                break Outcome::Found;
            }

            expanded += 1;
            trace!(
                "expanding {} (g = {:.3}, {} open)",
                position,
                nodes[current].cost_so_far(),
                frontier.len()
            );

            for neighbor in self.grid.adjacencies(position) {
                if !self.is_traversable(neighbor) {
                    continue;
                }
                // adjacencies are always in bounds
                let Some(neighbor_idx) = self.grid.linear_index(neighbor) else {
                    continue;
                };
                if visited[neighbor_idx] {
                    continue;
                }

                let candidate = Node::new(neighbor, Some((current, &nodes[current])));
                let score = candidate.estimated_total_cost(target);
                match frontier.get(neighbor) {
                    None => {
                        let id = nodes.push(candidate);
                        frontier.insert(id, neighbor, score);
                    }
                    Some((_, existing_score)) if score < existing_score => {
                        let id = nodes.push(candidate);
                        frontier.replace(id, neighbor, score);
                    }
                    Some(_) => {}
                }
            }

            // an out-of-bounds start can never be re-entered, so it needs no mark
            if let Some(idx) = self.grid.linear_index(position) {
                visited.set(idx, true);
            }
        };

        let stats = SearchStats {
            iterations,
            expanded,
            outcome,
        };

        let path = goal.map_or_else(Path::default, |goal| Path::from_chain(nodes.chain(goal)));

        debug!(
            "search {} -> {} ended: {} after {} iterations ({} expanded, {} nodes), path of {} steps",
            start,
            target,
            stats.outcome,
            stats.iterations,
            stats.expanded,
            nodes.len(),
            path.len()
        );

        (path, stats)
    }
}
