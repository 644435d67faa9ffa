//! Dijkstra's and A* search driven by the indexed priority queue
//!
//! The open set is an [`IndexedPriorityQueue`] keyed by a lightweight node
//! index. When a shorter route to an open node is found, its priority is
//! lowered in place with [`update_key`](IndexedPriorityQueue::update_key), so
//! every node is queued at most once and the queue never holds stale entries.
//!
//! # Design
//!
//! Node states live in a table indexed by `NodeIndex`; a fast hash map (using
//! FxHash) maps each state to its index. Only the indices and their f-scores
//! go through the heap.
//!
//! Dijkstra is A* with h(n) = 0. The heuristic given to A* must be consistent
//! (h(n) <= cost(n, m) + h(m) for every edge): a node is closed the first time
//! it is popped and never reopened.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::pathfinding::{SearchNode, dijkstra};
//!
//! // Node carries its goal coordinates
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, ..self.clone() }, 1),
//!             (GridPos { x: self.x - 1, y: self.y, ..self.clone() }, 1),
//!             (GridPos { x: self.x, y: self.y + 1, ..self.clone() }, 1),
//!             (GridPos { x: self.x, y: self.y - 1, ..self.clone() }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//!
//! let (path, cost) = dijkstra(&start).unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use crate::indexed::IndexedPriorityQueue;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Branching factor of the open set
///
/// Searches push and decrease far more often than they pop, which favors a
/// shallower heap than the binary one.
pub const SEARCH_ARITY: usize = 4;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` must be the zero cost.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate its successors and to
/// decide whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
pub trait AStarNode: SearchNode {
    /// Returns an estimate of the cost from this node to the nearest goal.
    ///
    /// Must never overestimate and must be consistent across edges.
    fn heuristic(&self) -> Self::Cost;
}

/// Internal index type; the heap orders these instead of full node states.
type NodeIndex = usize;

/// Metadata stored for each discovered node during search.
struct NodeEntry<N: SearchNode> {
    node: N,
    /// Best known cost from start (g-score)
    g_score: N::Cost,
    /// Previous node in the path (for reconstruction)
    came_from: Option<NodeIndex>,
    /// Whether this node has been popped from the open set
    closed: bool,
}

/// Search limits set through [`PathFinderBuilder`]
struct Limits<C> {
    max_cost: Option<C>,
    max_nodes: Option<usize>,
}

/// Open set, closed set and node table of one search.
struct PathFinder<N: SearchNode> {
    entries: Vec<NodeEntry<N>>,
    state_to_index: FxHashMap<N, NodeIndex>,
    open: IndexedPriorityQueue<NodeIndex, N::Cost>,
}

impl<N: SearchNode> PathFinder<N> {
    fn new(arity: usize) -> Option<Self> {
        Some(PathFinder {
            entries: Vec::new(),
            state_to_index: FxHashMap::default(),
            open: IndexedPriorityQueue::min(arity).ok()?,
        })
    }

    /// Gets or creates an index for a node state.
    fn get_or_create_index(&mut self, node: N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.state_to_index.get(&node) {
            return (index, false);
        }

        let index = self.entries.len();
        self.state_to_index.insert(node.clone(), index);
        self.entries.push(NodeEntry {
            node,
            g_score,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    /// Reconstructs the path from start to the given node index.
    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.entries[current].node.clone()];
        while let Some(prev) = self.entries[current].came_from {
            path.push(self.entries[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }

    /// Records `start` and opens it with priority h(start).
    fn open_start(&mut self, start: &N, heuristic: &impl Fn(&N) -> N::Cost) -> NodeIndex {
        let (index, _) = self.get_or_create_index(start.clone(), N::Cost::default());
        self.open.push_unchecked(index, heuristic(start));
        index
    }

    /// Adds or improves `neighbor` after reaching it from `current` with cost `tentative_g`.
    fn relax(
        &mut self,
        current: NodeIndex,
        neighbor: N,
        tentative_g: N::Cost,
        heuristic: &impl Fn(&N) -> N::Cost,
    ) {
        let (index, is_new) = self.get_or_create_index(neighbor, tentative_g);
        let entry = &mut self.entries[index];

        if entry.closed {
            return;
        }

        if is_new {
            entry.came_from = Some(current);
            let f = tentative_g + heuristic(&entry.node);
            // A fresh index cannot be in the open set yet.
            self.open.push_unchecked(index, f);
        } else if tentative_g < entry.g_score {
            entry.g_score = tentative_g;
            entry.came_from = Some(current);
            let f = tentative_g + heuristic(&entry.node);
            let updated = self.open.update_key(&index, f);
            debug_assert!(updated.is_ok(), "open node {} not improved: {:?}", index, updated);
        }
    }

    /// Runs the search loop until a goal is popped or the open set drains.
    fn run(
        mut self,
        start: &N,
        heuristic: impl Fn(&N) -> N::Cost,
        limits: Limits<N::Cost>,
    ) -> Option<(Vec<N>, N::Cost)> {
        self.open_start(start, &heuristic);
        let mut nodes_explored = 0usize;

        while let Ok((current, _)) = self.open.pop_and_return() {
            if let Some(max) = limits.max_nodes {
                if nodes_explored >= max {
                    return None;
                }
            }
            nodes_explored += 1;

            let entry = &mut self.entries[current];
            entry.closed = true;
            let current_g = entry.g_score;
            let current_node = entry.node.clone();

            if current_node.is_goal() {
                return Some((self.reconstruct_path(current), current_g));
            }

            for (neighbor, edge_cost) in current_node.successors() {
                let tentative_g = current_g + edge_cost;

                if let Some(max) = limits.max_cost {
                    if tentative_g > max {
                        continue;
                    }
                }

                self.relax(current, neighbor, tentative_g, &heuristic);
            }
        }

        None
    }
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// # Returns
/// - `Some((path, cost))` if a path is found, `path` running from `start` to the goal
/// - `None` if no path exists
///
/// # Example
/// ```rust
/// use rust_dary_heaps::pathfinding::{SearchNode, dijkstra};
///
/// // Node that carries its own goal
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Node {
///     value: i32,
///     goal: i32,
/// }
///
/// impl SearchNode for Node {
///     type Cost = u32;
///
///     fn successors(&self) -> Vec<(Self, u32)> {
///         if self.value < 100 {
///             vec![(Node { value: self.value + 1, goal: self.goal }, 1)]
///         } else {
///             vec![]
///         }
///     }
///
///     fn is_goal(&self) -> bool {
///         self.value == self.goal
///     }
/// }
///
/// let start = Node { value: 0, goal: 5 };
/// let (_, cost) = dijkstra(&start).unwrap();
/// assert_eq!(cost, 5);
/// ```
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    PathFinderBuilder::new(start.clone()).dijkstra()
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search.
pub fn astar<N: AStarNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    PathFinderBuilder::new(start.clone()).astar()
}

/// Builder for pathfinding queries with more configuration options.
///
/// The node type's `is_goal()` method determines when to stop.
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    arity: usize,
    max_cost: Option<N::Cost>,
    max_nodes: Option<usize>,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            arity: SEARCH_ARITY,
            max_cost: None,
            max_nodes: None,
        }
    }

    /// Sets the branching factor of the open set.
    ///
    /// Values below 2 make every search return `None`.
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Sets the maximum path cost to explore.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Sets the maximum number of nodes to expand.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured settings.
    pub fn dijkstra(self) -> Option<(Vec<N>, N::Cost)> {
        self.search_with_heuristic(|_| N::Cost::default())
    }

    /// Runs A* search with the configured settings.
    pub fn astar(self) -> Option<(Vec<N>, N::Cost)>
    where
        N: AStarNode,
    {
        self.search_with_heuristic(|n| n.heuristic())
    }

    fn search_with_heuristic(
        self,
        heuristic: impl Fn(&N) -> N::Cost,
    ) -> Option<(Vec<N>, N::Cost)> {
        let limits = Limits {
            max_cost: self.max_cost,
            max_nodes: self.max_nodes,
        };
        PathFinder::new(self.arity)?.run(&self.start, heuristic, limits)
    }
}

/// Returns all nodes reachable from the start within a given cost budget.
///
/// Nodes come out in non-decreasing order of their shortest distance.
pub fn reachable_within<N: SearchNode>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)> {
    let mut result = Vec::new();
    let Some(mut finder) = PathFinder::new(SEARCH_ARITY) else {
        return result;
    };
    let no_heuristic = |_: &N| N::Cost::default();
    finder.open_start(start, &no_heuristic);

    while let Ok((current, _)) = finder.open.pop_and_return() {
        let entry = &mut finder.entries[current];
        entry.closed = true;
        let current_g = entry.g_score;
        let current_node = entry.node.clone();

        if current_g > max_cost {
            continue;
        }
        result.push((current_node.clone(), current_g));

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if tentative_g <= max_cost {
                finder.relax(current, neighbor, tentative_g, &no_heuristic);
            }
        }
    }

    result
}
