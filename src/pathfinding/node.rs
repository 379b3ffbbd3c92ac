use crate::geometry::Point;
use std::ops::Index;

/// Handle to a [`Node`] stored in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A grid cell visited during a search.
///
/// A node knows how far it is from the start along the path that discovered it,
/// and which node it was reached from. Both are fixed at construction: a node
/// which should be reached some other way is replaced, never edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    position: Point,
    cost_so_far: f64,
    predecessor: Option<NodeId>,
}

impl Node {
    /// Create a node at `position`.
    ///
    /// Without a predecessor the node is a search origin and costs nothing.
    /// Otherwise its cost is the predecessor's cost plus the straight-line
    /// distance between the two positions. Positions are not bounds-checked.
    pub fn new(position: Point, predecessor: Option<(NodeId, &Node)>) -> Node {
        let (predecessor, cost_so_far) = match predecessor {
            None => (None, 0.0),
            Some((id, previous)) => (
                Some(id),
                previous.cost_so_far + previous.position.distance(position),
            ),
        };
        Node {
            position,
            cost_so_far,
            predecessor,
        }
    }

    /// Create a search origin at `position`.
    #[inline]
    pub fn start(position: Point) -> Node {
        Node::new(position, None)
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Length of the path from the search origin to this node.
    #[inline]
    pub fn cost_so_far(&self) -> f64 {
        self.cost_so_far
    }

    #[inline]
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// Straight-line distance from this node to `target`.
    ///
    /// This never overestimates the remaining cost of 8-directional movement
    /// with euclidean step costs.
    #[inline]
    pub fn heuristic(&self, target: Point) -> f64 {
        self.position.distance(target)
    }

    /// `f = g + h`: the ranking key for frontier selection.
    #[inline]
    pub fn estimated_total_cost(&self, target: Point) -> f64 {
        self.cost_so_far + self.heuristic(target)
    }
}

/// Append-only storage for the nodes of a single search.
///
/// Predecessor links are indices into the arena, so a chain of nodes never
/// outlives the arena that owns it.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the predecessor chain from `id` back to its search origin.
    ///
    /// The node `id` itself is the first item.
    pub fn chain(&self, id: NodeId) -> impl '_ + Iterator<Item = &Node> {
        std::iter::successors(Some(&self[id]), move |node| {
            node.predecessor.map(|previous| &self[previous])
        })
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[track_caller]
    fn index(&self, NodeId(idx): NodeId) -> &Node {
        &self.nodes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_start_node_is_free() {
        let node = Node::start(Point::new(3, 4));
        assert_eq!(node.cost_so_far(), 0.0);
        assert_eq!(node.predecessor(), None);
        assert_relative_eq!(node.heuristic(Point::new(0, 0)), 5.0);
        assert_relative_eq!(node.estimated_total_cost(Point::new(0, 0)), 5.0);
    }

    #[test]
    fn test_cost_accumulates_along_chain() {
        let mut arena = NodeArena::new();
        let a = arena.push(Node::start(Point::new(0, 0)));
        let node = Node::new(Point::new(1, 1), Some((a, &arena[a])));
        let b = arena.push(node);
        let node = Node::new(Point::new(2, 1), Some((b, &arena[b])));
        let c = arena.push(node);

        assert_relative_eq!(arena[b].cost_so_far(), SQRT_2);
        assert_relative_eq!(arena[c].cost_so_far(), SQRT_2 + 1.0);
        assert_relative_eq!(
            arena[c].estimated_total_cost(Point::new(5, 5)),
            SQRT_2 + 1.0 + 5.0
        );

        let chain: Vec<_> = arena.chain(c).map(Node::position).collect();
        assert_eq!(
            chain,
            vec![Point::new(2, 1), Point::new(1, 1), Point::new(0, 0)]
        );
    }

    #[test]
    fn test_position_is_not_bounds_checked() {
        let origin = Node::start(Point::new(-5, -5));
        let next = Node::new(Point::new(-5, -7), Some((NodeId(0), &origin)));
        assert_relative_eq!(next.cost_so_far(), 2.0);
    }
}
