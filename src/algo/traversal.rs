/*!
Tree-building graph traversals.

Both traversals start from a single vertex, report every vertex they visit (in visit
order) to a [`VisitSink`], label each visited vertex with a parent and a level, and
insert the edge `{vertex, parent}` for every non-start vertex into a spanning-tree graph
that uses the same representation as the traversed graph.

- **DFS** uses a [`BoundedStack`]. A vertex is marked visited when it is *popped*, so it
  may sit in the stack several times; stale entries are discarded lazily. Parent and level
  are written when a neighbor is *pushed*, so a later push from another frontier vertex
  overwrites an earlier one (last write before the first pop wins). On a matrix the
  neighbors are pushed in descending id order, which makes the smallest unvisited neighbor
  the next one popped. Levels are depths in the DFS tree, not distances.
- **BFS** uses a [`BoundedQueue`]. A vertex is marked visited when it is *enqueued*, so
  it enters the queue at most once. On a matrix the neighbors are scanned in ascending
  id order. Levels are shortest-path hop distances from the start.

On an adjacency list both traversals follow the natural most-recent-first order.

Both produce identical visited sets on either representation; orders and DFS labels may
differ where the representations order neighbors differently.
*/

use std::{fmt::Display, str::FromStr};

use fixedbitset::FixedBitSet;
use tracing::{debug, warn};

use super::*;
use crate::utils::{BoundedQueue, BoundedStack, Frontier};

/// Level value of a vertex that was never labelled
pub const INVALID_LEVEL: Level = Level::MAX;

/// Selects the traversal algorithm
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TraversalKind {
    /// Stack-based depth-first search
    Dfs,
    /// Queue-based breadth-first search
    #[default]
    Bfs,
}

impl FromStr for TraversalKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(TraversalKind::Dfs),
            "bfs" | "breadth-first" => Ok(TraversalKind::Bfs),
            _ => Err(GraphError::UnknownTraversal(s.to_string())),
        }
    }
}

impl Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalKind::Dfs => write!(f, "dfs"),
            TraversalKind::Bfs => write!(f, "bfs"),
        }
    }
}

/// A single visit event: `vertex` was visited through `parent` at `level`.
/// The start vertex is its own parent at level `0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VisitRecord {
    pub vertex: Node,
    pub parent: Node,
    pub level: Level,
}

/// Consumer of visit events, called once per visited vertex in visit order
pub trait VisitSink {
    fn visit(&mut self, record: VisitRecord);
}

impl VisitSink for Vec<VisitRecord> {
    fn visit(&mut self, record: VisitRecord) {
        self.push(record);
    }
}

impl<S: VisitSink + ?Sized> VisitSink for &mut S {
    fn visit(&mut self, record: VisitRecord) {
        (**self).visit(record);
    }
}

/// Per-vertex state of a traversal: visited flags, parents and levels.
///
/// The engine never clears these arrays. To run independent traversals with the same
/// labels, call [`TraversalLabels::reset`] in between; vertices still marked visited are
/// treated as already explored. This includes a DFS start vertex, which then yields an
/// empty run, whereas BFS always seeds and reports its start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalLabels {
    visited: FixedBitSet,
    parents: Vec<Node>,
    levels: Vec<Level>,
}

impl TraversalLabels {
    /// Creates unlabelled state for a graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(n as usize),
            parents: vec![INVALID_NODE; n as usize],
            levels: vec![INVALID_LEVEL; n as usize],
        }
    }

    /// Returns the number of nodes covered by the labels
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns *true* if the labels cover no nodes
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Clears every label
    pub fn reset(&mut self) {
        self.visited.clear();
        self.parents.fill(INVALID_NODE);
        self.levels.fill(INVALID_LEVEL);
    }

    /// Returns *true* if `u` was visited
    pub fn is_visited(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }

    /// Returns the parent recorded for `u` (`INVALID_NODE` if none)
    pub fn parent(&self, u: Node) -> Node {
        self.parents[u as usize]
    }

    /// Returns the level recorded for `u` (`INVALID_LEVEL` if none)
    pub fn level(&self, u: Node) -> Level {
        self.levels[u as usize]
    }

    /// Returns the parent of `u` if `u` was visited
    pub fn parent_of_visited(&self, u: Node) -> Option<Node> {
        self.is_visited(u).then(|| self.parent(u))
    }

    /// Returns the level of `u` if `u` was visited
    pub fn level_of_visited(&self, u: Node) -> Option<Level> {
        self.is_visited(u).then(|| self.level(u))
    }

    /// Returns all parents, indexed by node
    pub fn parents(&self) -> &[Node] {
        &self.parents
    }

    /// Returns all levels, indexed by node
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns an iterator over all visited nodes in ascending order
    pub fn visited_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.visited.ones().map(|u| u as Node)
    }

    /// Returns the number of visited nodes
    pub fn number_of_visited(&self) -> NumNodes {
        self.visited.count_ones(..) as NumNodes
    }

    fn mark_visited(&mut self, u: Node) {
        self.visited.insert(u as usize);
    }

    fn assign(&mut self, u: Node, parent: Node, level: Level) {
        self.parents[u as usize] = parent;
        self.levels[u as usize] = level;
    }

    fn record(&self, u: Node) -> VisitRecord {
        VisitRecord {
            vertex: u,
            parent: self.parent(u),
            level: self.level(u),
        }
    }
}

/// Bookkeeping of a single traversal run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TraversalStats {
    pub kind: TraversalKind,
    pub start: Node,
    /// Number of vertices visited in this run
    pub visited: NumNodes,
    /// Number of edges inserted into the tree
    pub tree_edges: NumEdges,
    /// Largest number of entries held by the frontier
    pub max_frontier: usize,
    /// Capacity the frontier was created with
    pub frontier_capacity: usize,
    /// Insertions rejected because the frontier was full
    pub dropped: usize,
}

/// Tree and statistics produced by a run with caller-supplied labels
#[derive(Debug, Clone)]
pub struct TraversalOutcome<G> {
    pub tree: G,
    pub stats: TraversalStats,
}

/// Everything produced by a self-contained traversal run
#[derive(Debug, Clone)]
pub struct SpanningTraversal<G> {
    /// Visit events in visit order
    pub order: Vec<VisitRecord>,
    pub labels: TraversalLabels,
    /// Spanning tree of the component of the start vertex
    pub tree: G,
    pub stats: TraversalStats,
}

impl<G> SpanningTraversal<G> {
    /// Returns the visited vertices in visit order
    pub fn visit_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().map(|r| r.vertex)
    }
}

/// Validates the preconditions shared by both traversals
fn check_preconditions<G: GraphNodeOrder>(
    graph: &G,
    start: Node,
    labels: &TraversalLabels,
) -> Result<()> {
    if !graph.contains_node(start) {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            n: graph.number_of_nodes(),
        });
    }

    if labels.len() != graph.len() {
        return Err(GraphError::LabelSizeMismatch {
            expected: graph.len(),
            actual: labels.len(),
        });
    }

    Ok(())
}

impl TraversalKind {
    /// Direction in which a matrix row is scanned. Descending for DFS, so that the smallest
    /// unvisited neighbor ends up on top of the stack.
    pub fn scan_order(self) -> ScanOrder {
        match self {
            TraversalKind::Dfs => ScanOrder::Descending,
            TraversalKind::Bfs => ScanOrder::Ascending,
        }
    }

    /// Returns *true* if vertices are marked visited when inserted into the frontier
    /// (BFS) rather than when removed from it (DFS)
    pub fn marks_on_discovery(self) -> bool {
        matches!(self, TraversalKind::Bfs)
    }
}

/// Shared traversal loop; the frontier type `F` decides the visit order.
///
/// DFS leaves stale duplicates in the frontier and drops them on removal, BFS marks on
/// discovery so every vertex is inserted at most once.
fn explore<G, F, S>(
    graph: &G,
    kind: TraversalKind,
    start: Node,
    capacity: usize,
    labels: &mut TraversalLabels,
    sink: &mut S,
) -> Result<TraversalOutcome<G>>
where
    G: AdjacencyList + GraphEdgeOrder + GraphEmptyLike + GraphEdgeEditing,
    F: Frontier,
    S: VisitSink + ?Sized,
{
    let mut frontier = F::with_capacity(capacity);
    let mut tree = graph.empty_like();
    let mut visited = 0;
    let mut dropped = 0;

    let on_discovery = kind.marks_on_discovery();
    let order = kind.scan_order();

    frontier.insert(start)?;
    // a visited DFS start keeps its labels and is dropped on removal
    if on_discovery || !labels.is_visited(start) {
        labels.assign(start, start, 0);
    }
    if on_discovery {
        labels.mark_visited(start);
    }

    while !frontier.is_empty() {
        let u = frontier.remove()?;
        if !on_discovery {
            if labels.is_visited(u) {
                continue;
            }
            labels.mark_visited(u);
        }

        visited += 1;
        sink.visit(labels.record(u));

        if u != start {
            tree.add_edge(u, labels.parent(u));
        }

        let level = labels.level(u) + 1;
        for v in graph.neighbors_scan(u, order) {
            if labels.is_visited(v) {
                continue;
            }

            if on_discovery {
                labels.mark_visited(v);
            }
            if let Err(err) = frontier.insert(v) {
                warn!(vertex = v, %kind, %err, "frontier full; insertion dropped");
                dropped += 1;
            }
            labels.assign(v, u, level);
        }
    }

    Ok(TraversalOutcome {
        stats: TraversalStats {
            kind,
            start,
            visited,
            tree_edges: tree.number_of_edges(),
            max_frontier: frontier.high_water_mark(),
            frontier_capacity: frontier.capacity(),
            dropped,
        },
        tree,
    })
}

/// Provides the tree-building traversals as methods on every graph representation
pub trait Traversal:
    AdjacencyList + GraphEdgeOrder + GraphEmptyLike + GraphEdgeEditing + Sized
{
    /// Runs the traversal of the given `kind` from `start` on fresh labels.
    ///
    /// # Examples
    /// ```
    /// use spangraph::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrixUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// let run = g.spanning_tree(TraversalKind::Bfs, 0).unwrap();
    ///
    /// assert_eq!(run.labels.levels(), &[0, 1, 2, 1]);
    /// assert_eq!(run.tree.number_of_edges(), 3);
    /// ```
    fn spanning_tree(&self, kind: TraversalKind, start: Node) -> Result<SpanningTraversal<Self>> {
        let mut labels = TraversalLabels::new(self.number_of_nodes());
        let mut order = Vec::new();
        let TraversalOutcome { tree, stats } =
            self.spanning_tree_with(kind, start, &mut labels, &mut order)?;

        Ok(SpanningTraversal {
            order,
            labels,
            tree,
            stats,
        })
    }

    /// Runs the traversal of the given `kind` from `start`, writing into caller-supplied
    /// `labels` and streaming visit events into `sink`.
    ///
    /// # Errors
    /// Fails if `start` is not a vertex of the graph or if `labels` was created for a
    /// different number of nodes.
    fn spanning_tree_with<S: VisitSink + ?Sized>(
        &self,
        kind: TraversalKind,
        start: Node,
        labels: &mut TraversalLabels,
        sink: &mut S,
    ) -> Result<TraversalOutcome<Self>> {
        let span = tracing::debug_span!("traversal", %kind, start);
        let _guard = span.enter();

        check_preconditions(self, start, labels)?;

        let outcome = match kind {
            // every adjacency entry is followed at most once, plus the seed
            TraversalKind::Dfs => {
                let capacity = 1 + self.sum_of_degrees() as usize;
                explore::<_, BoundedStack, _>(self, kind, start, capacity, labels, sink)?
            }
            TraversalKind::Bfs => {
                explore::<_, BoundedQueue, _>(self, kind, start, self.len(), labels, sink)?
            }
        };

        debug!(
            visited = outcome.stats.visited,
            tree_edges = outcome.stats.tree_edges,
            max_frontier = outcome.stats.max_frontier,
            "traversal finished"
        );
        Ok(outcome)
    }

    /// Stack-based depth-first traversal from `start`
    ///
    /// # Examples
    /// ```
    /// use spangraph::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrixUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// let run = g.dfs_tree(0).unwrap();
    ///
    /// assert_eq!(run.visit_order().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// assert_eq!(run.labels.levels(), &[0, 1, 2, 3]);
    /// ```
    fn dfs_tree(&self, start: Node) -> Result<SpanningTraversal<Self>> {
        self.spanning_tree(TraversalKind::Dfs, start)
    }

    /// Queue-based breadth-first traversal from `start`
    fn bfs_tree(&self, start: Node) -> Result<SpanningTraversal<Self>> {
        self.spanning_tree(TraversalKind::Bfs, start)
    }

    /// Depth-first traversal with caller-supplied labels and sink
    fn dfs_tree_with<S: VisitSink + ?Sized>(
        &self,
        start: Node,
        labels: &mut TraversalLabels,
        sink: &mut S,
    ) -> Result<TraversalOutcome<Self>> {
        self.spanning_tree_with(TraversalKind::Dfs, start, labels, sink)
    }

    /// Breadth-first traversal with caller-supplied labels and sink
    fn bfs_tree_with<S: VisitSink + ?Sized>(
        &self,
        start: Node,
        labels: &mut TraversalLabels,
        sink: &mut S,
    ) -> Result<TraversalOutcome<Self>> {
        self.spanning_tree_with(TraversalKind::Bfs, start, labels, sink)
    }
}

impl<G> Traversal for G
where
    G: AdjacencyList + GraphEdgeOrder + GraphEmptyLike + GraphEdgeEditing + Sized
{
}
