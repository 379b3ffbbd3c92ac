use super::Node;
use crate::geometry::Point;
use itertools::Itertools;

/// One step of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub position: Point,
    /// Length of the path from its start up to and including this step.
    pub cost_so_far: f64,
}

impl From<&Node> for Waypoint {
    fn from(node: &Node) -> Self {
        Waypoint {
            position: node.position(),
            cost_so_far: node.cost_so_far(),
        }
    }
}

/// The result of a search: waypoints ordered from start to target.
///
/// An empty path means no path was found. It owns copies of the node data, so
/// it stays valid after the search which produced it has been discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    /// Build a path from a predecessor chain which runs from the target back to the start.
    pub(crate) fn from_chain<'a>(chain: impl Iterator<Item = &'a Node>) -> Path {
        let mut waypoints: Vec<Waypoint> = chain.map(Waypoint::from).collect();
        waypoints.reverse();
        Path { waypoints }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of waypoints, including both endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn start(&self) -> Option<Point> {
        self.waypoints.first().map(|waypoint| waypoint.position)
    }

    pub fn goal(&self) -> Option<Point> {
        self.waypoints.last().map(|waypoint| waypoint.position)
    }

    /// Total length of the path; `0.0` when empty.
    pub fn cost(&self) -> f64 {
        self.waypoints
            .last()
            .map_or(0.0, |waypoint| waypoint.cost_so_far)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// Iterate over the positions along this path.
    pub fn points(&self) -> impl '_ + DoubleEndedIterator<Item = Point> {
        self.waypoints.iter().map(|waypoint| waypoint.position)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points().any(|position| position == point)
    }

    /// `true` when every consecutive pair of positions is 8-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.points()
            .tuple_windows()
            .all(|(a, b)| (b - a).chebyshev() == 1)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = Waypoint;
    type IntoIter = std::vec::IntoIter<Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points().collect()
    }
}
