//! Baseline A* over an 8-connected grid.

use std::collections::HashMap;

use jumpgrid_core::Point;

use crate::distance::{octile, step_cost};
use crate::env::GridEnv;
use crate::error::NotFound;
use crate::mark::{Mark, Trace};
use crate::queue::PriorityQueue;
use crate::step::{self, Engine, Progress, Steps};

/// Arena node for one grid position.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    /// Arena index of the node this one was reached from.
    pub(crate) parent: Option<usize>,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) closed: bool,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Reusable A* search.
///
/// The open queue is keyed by `(f, h)`: among equal `f`, the node closer to
/// the goal is expanded first. A neighbor is only queued when it improves
/// the cost recorded for its position; entries made stale by a later
/// improvement are skipped when popped.
///
/// ```
/// use jumpgrid_core::{Point, Range};
/// use jumpgrid_paths::{AStar, FnGrid, path_cost};
///
/// let grid = FnGrid::new(Range::with_size(5, 5), |_: Point| true);
/// let mut astar = AStar::new();
/// let path = astar.find(&grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path_cost(&path), 56);
/// ```
#[derive(Default)]
pub struct AStar {
    nodes: Vec<SearchNode>,
    lookup: HashMap<Point, usize>,
    open: PriorityQueue<usize, (i32, i32)>,
    nbuf: Vec<Point>,
    from: Point,
    to: Point,
    expanded: usize,
    trace: Trace,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest path from `from` to `to`, both endpoints included.
    pub fn find<E: GridEnv>(&mut self, env: &E, from: Point, to: Point) -> Result<Vec<Point>, NotFound> {
        self.begin(env, from, to, false);
        step::run(self, env)
    }

    /// Stepped variant of [`find`](Self::find): one node expansion per
    /// item, then one item per path segment.
    pub fn steps<'a, E: GridEnv>(&'a mut self, env: &'a E, from: Point, to: Point) -> AstarSteps<'a, E> {
        self.begin(env, from, to, true);
        AstarSteps {
            inner: Steps::new(self, env),
        }
    }

    /// Nodes popped and closed by the last query.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn begin<E: GridEnv>(&mut self, env: &E, from: Point, to: Point, record: bool) {
        self.nodes.clear();
        self.lookup.clear();
        self.open.clear();
        self.from = from;
        self.to = to;
        self.expanded = 0;
        self.trace.reset(record);
        if env.is_moveable(from) && env.is_moveable(to) {
            self.relax(from, None, 0);
        }
    }

    /// Record `g` for `pos` if it beats the known cost, and queue it.
    fn relax(&mut self, pos: Point, parent: Option<usize>, g: i32) {
        let idx = match self.lookup.get(&pos) {
            Some(&i) => {
                let node = &mut self.nodes[i];
                if node.closed || g >= node.g {
                    return;
                }
                node.g = g;
                node.parent = parent;
                i
            }
            None => {
                let i = self.nodes.len();
                self.nodes.push(SearchNode {
                    pos,
                    parent,
                    g,
                    h: octile(pos, self.to),
                    closed: false,
                });
                self.lookup.insert(pos, i);
                i
            }
        };
        let node = &self.nodes[idx];
        self.open.enqueue(idx, (node.f(), node.h));
        self.trace.push(Mark::Opened(pos));
    }

    /// Pop the best open node, discarding entries for closed positions.
    fn pop_open(&mut self) -> Option<usize> {
        while let Ok(idx) = self.open.dequeue() {
            if !self.nodes[idx].closed {
                return Some(idx);
            }
        }
        None
    }
}

impl Engine for AStar {
    const NAME: &'static str = "astar";

    fn advance<E: GridEnv>(&mut self, env: &E) -> Progress {
        let Some(ci) = self.pop_open() else {
            return Progress::Exhausted;
        };
        self.nodes[ci].closed = true;
        self.expanded += 1;
        let pos = self.nodes[ci].pos;
        self.trace.push(Mark::Closed(pos));
        if pos == self.to {
            return Progress::Found(ci);
        }
        self.trace.push(Mark::Current(pos));

        let g = self.nodes[ci].g;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        env.neighbors(pos, &mut nbuf);
        for &np in nbuf.iter() {
            if env.can_step(pos, np) {
                self.relax(np, Some(ci), g + step_cost(pos, np));
            }
        }
        self.nbuf = nbuf;
        Progress::Working
    }

    fn waypoints(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(i) = cur {
            path.push(self.nodes[i].pos);
            cur = self.nodes[i].parent;
        }
        path.reverse();
        path
    }

    fn endpoints(&self) -> (Point, Point) {
        (self.from, self.to)
    }

    fn expanded(&self) -> usize {
        self.expanded
    }

    fn trace(&self) -> &Trace {
        &self.trace
    }

    fn trace_mut(&mut self) -> &mut Trace {
        &mut self.trace
    }
}

/// A stepped A* query, created by [`AStar::steps`].
///
/// Yields `false` after each unit of work and `true` after the last one.
/// Once exhausted, [`result`](Self::result) holds the path or the failure.
pub struct AstarSteps<'a, E: GridEnv> {
    inner: Steps<'a, AStar, E>,
}

impl<E: GridEnv> AstarSteps<'_, E> {
    /// Marks produced by the most recent step.
    pub fn marks(&self) -> &[Mark] {
        self.inner.marks()
    }

    /// The query outcome, or `None` while steps remain.
    pub fn result(&self) -> Option<Result<&[Point], NotFound>> {
        self.inner.result()
    }

    /// Nodes expanded so far.
    pub fn expanded(&self) -> usize {
        self.inner.search().expanded
    }
}

impl<E: GridEnv> Iterator for AstarSteps<'_, E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.inner.step()
    }
}
