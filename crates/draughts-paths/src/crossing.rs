//! The crossing search: fewest moves from a start square to the crownhead.

use std::collections::BinaryHeap;

use draughts_core::{Board, Direction, Point};

use crate::traits::Occupancy;

// ---------------------------------------------------------------------------
// Internal search nodes
// ---------------------------------------------------------------------------

/// Per-state cache entry for the search.
#[derive(Clone)]
struct Node {
    dist: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `dist` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Crossing
// ---------------------------------------------------------------------------

/// Minimum-move crossing search engine for one board extent.
///
/// The search state space is every square paired with a chain flag: a man
/// about to take a fresh move, or one that just landed a capture hop and
/// may extend the chain. `Crossing` owns the node cache over that space so
/// repeated queries incur no allocations after the first use; stale entries
/// are invalidated lazily by a generation counter.
///
/// Move costs form a small weighted graph: a plain step costs one move, an
/// intermediate capture hop costs nothing, and whichever move ends a chain
/// (a following step, or arrival on the crownhead) pays the chain's single
/// move. The minimum is found with a Dijkstra pass over at most
/// `2 * width * height` states.
pub struct Crossing {
    board: Board,
    nodes: Vec<Node>,
    generation: u32,
}

impl Crossing {
    /// Create a new `Crossing` engine for the given board extent.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            nodes: vec![Node::default(); board.len() * 2],
            generation: 0,
        }
    }

    /// The board extent being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    // -----------------------------------------------------------------------
    // State indexing
    // -----------------------------------------------------------------------

    /// Flat index of the (square, chain flag) state. `None` if `p` is off
    /// the board.
    #[inline]
    fn state(&self, p: Point, mid_chain: bool) -> Option<usize> {
        if !self.board.contains(p) {
            return None;
        }
        let cell = (p.y as usize) * (self.board.width as usize) + p.x as usize;
        Some(cell * 2 + mid_chain as usize)
    }

    /// Convert a flat state index back to its square and chain flag.
    #[inline]
    fn square(&self, idx: usize) -> (Point, bool) {
        let cell = idx / 2;
        let w = self.board.width as usize;
        let p = Point::new((cell % w) as i32, (cell / w) as i32);
        (p, idx % 2 == 1)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Fewest moves for a man on `start` to reach the crownhead, moving by
    /// diagonal forward steps and capture hops over the men in `occ`.
    ///
    /// Returns `None` when no sequence of legal moves reaches the far row.
    ///
    /// The man on `start` itself and any men behind it are irrelevant to
    /// the search; `occ` squares off the board are never consulted.
    ///
    /// # Panics
    ///
    /// Panics if `start` is off the board.
    pub fn min_moves<O: Occupancy>(&mut self, occ: &O, start: Point) -> Option<i32> {
        self.search(occ, start).map(|(moves, _)| moves)
    }

    /// The squares visited by one cheapest crossing from `start`: the start
    /// square, then the square reached by each step or capture hop in
    /// order, ending on the crownhead.
    ///
    /// Returns `None` when the crownhead is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `start` is off the board.
    pub fn best_path<O: Occupancy>(&mut self, occ: &O, start: Point) -> Option<Vec<Point>> {
        let (_, goal) = self.search(occ, start)?;

        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.square(ci).0);
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Dijkstra over the (square, chain flag) states. Returns the minimum
    /// move count and the terminal state index, or `None` when no route
    /// reaches the crownhead.
    fn search<O: Occupancy>(&mut self, occ: &O, start: Point) -> Option<(i32, usize)> {
        let Some(si) = self.state(start, false) else {
            panic!("start square {start} is off the {} board", self.board);
        };

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let n = &mut self.nodes[si];
            n.dist = 0;
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef { idx: si, dist: 0 });

        let crownhead = self.board.crownhead();
        let mut best: Option<(i32, usize)> = None;

        while let Some(cur) = open.pop() {
            let ci = cur.idx;
            let cn = &self.nodes[ci];
            // Skip stale entries.
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let dist = cn.dist;
            self.nodes[ci].open = false;

            // Pops come out in cost order; nothing from here on can beat
            // an already recorded arrival.
            if let Some((b, _)) = best {
                if dist >= b {
                    break;
                }
            }

            let (p, mid_chain) = self.square(ci);

            if p.y == crownhead {
                // Arrived. A chain still in progress pays its one move
                // here, at the point it ends.
                let moves = dist + i32::from(mid_chain);
                if best.is_none_or(|(b, _)| moves < b) {
                    best = Some((moves, ci));
                }
                continue;
            }

            for dir in Direction::BOTH {
                let ahead = p.step(dir);
                let (next, ndist) = if !occ.occupied(ahead) {
                    // Plain step: one move, plus one for the chain it ends.
                    (self.state(ahead, false), dist + 1 + i32::from(mid_chain))
                } else {
                    // Capture hop: leap to the square beyond, free until
                    // the chain ends. A second man there blocks the hop.
                    let landing = p.leap(dir);
                    if occ.occupied(landing) {
                        continue;
                    }
                    (self.state(landing, true), dist)
                };
                // Off the board: this way is infeasible.
                let Some(ni) = next else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && ndist >= n.dist {
                    continue;
                }
                n.generation = cur_gen;
                n.dist = ndist;
                n.parent = ci;
                n.open = true;
                open.push(NodeRef { idx: ni, dist: ndist });
            }
        }

        best
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Crossing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.board.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Crossing {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let board = Board::deserialize(deserializer)?;
        Ok(Crossing::new(board))
    }
}
