use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// Capabilities a graph node must provide to be searched by `AStar`
///
/// `Eq + Hash` is the bookkeeping identity: two nodes that compare equal share one search record.
/// `equivalent` is the goal test and may be looser than `==` (e.g. "any tile in this room").
/// Keep the two consistent, a goal that is never `equivalent` to any reachable node is never found.
///
/// Nodes are cloned into the search: once when first reached, and the expanded node once more
/// on every expansion. Large node types should be searched through `&T`, `Rc<T>` or a lightweight id.
pub trait SearchNode: Eq + Hash + Clone + Debug {
    /// Numeric cost - floats and integers both work
    /// NaN is never valid: it compares equal to every cost and scrambles the open list order
    type Cost: Zero + PartialOrd + Copy + Debug;

    /// Cost to move from `source` into this node
    /// Must be finite, non-negative and not NaN
    fn traversal_cost(&self, source: &Self) -> Self::Cost;

    /// Estimated remaining cost from this node to `goal`
    /// Must never overestimate for the returned path to be optimal, and must not be NaN
    fn heuristic(&self, goal: &Self) -> Self::Cost;

    /// Outgoing edges, `None` entries are skipped
    fn neighbors(&self) -> impl IntoIterator<Item = Option<Self>>;

    /// Goal test
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}
