//! Jump Point Search (JPS) on 8-connected grids with 10/14 step costs.
//!
//! JPS is an A* variant that "jumps" along straight and diagonal runs and
//! only adds nodes to the open queue at *jump points*: the goal, and cells
//! with forced neighbours that an optimal path might have to turn into.
//! Each jump point carries the directions still worth scanning from it.

use std::collections::HashMap;

use jumpgrid_core::Point;

use crate::dirs::{self, perpendicular};
use crate::distance::{DIAGONAL_COST, STRAIGHT_COST, is_straight, octile};
use crate::env::GridEnv;
use crate::error::NotFound;
use crate::mark::{Mark, Trace};
use crate::queue::PriorityQueue;
use crate::step::{self, Engine, Progress, Steps};

#[derive(Debug, Clone)]
pub(crate) struct JumpNode {
    pub(crate) pos: Point,
    pub(crate) parent: Option<usize>,
    /// Directions to scan when this node is expanded.
    pub(crate) dirs: Vec<Point>,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) closed: bool,
}

impl JumpNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// A jump point found by a scan, not yet recorded.
#[derive(Debug, PartialEq)]
struct Candidate {
    pos: Point,
    dirs: Vec<Point>,
    g: i32,
}

#[inline]
fn walkable<E: GridEnv>(env: &E, p: Point) -> bool {
    env.in_bounds(p) && env.is_moveable(p)
}

/// Forced-neighbour directions at `cur` while travelling straight along
/// `dir`: a perpendicular side is blocked but the cell past it is open.
fn forced_in_line<E: GridEnv>(env: &E, cur: Point, dir: Point) -> Vec<Point> {
    perpendicular(dir)
        .into_iter()
        .filter(|&side| env.is_obstacle(cur + side) && walkable(env, cur + side + dir))
        .map(|side| side + dir)
        .collect()
}

/// Reusable jump point search.
///
/// Returns paths densified to one cell per step, so results are directly
/// comparable with [`AStar`](crate::AStar).
///
/// ```
/// use jumpgrid_core::{Point, Range};
/// use jumpgrid_paths::{FnGrid, Jps, path_cost};
///
/// let grid = FnGrid::new(Range::with_size(5, 5), |_: Point| true);
/// let mut jps = Jps::new();
/// let path = jps.find(&grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path_cost(&path), 56);
/// ```
#[derive(Default)]
pub struct Jps {
    nodes: Vec<JumpNode>,
    lookup: HashMap<Point, usize>,
    open: PriorityQueue<usize, (i32, i32)>,
    from: Point,
    to: Point,
    /// Node being expanded and the index of its next direction.
    current: Option<usize>,
    next_dir: usize,
    expanded: usize,
    trace: Trace,
}

impl Jps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest path from `from` to `to`, both endpoints included, one cell
    /// per step.
    pub fn find<E: GridEnv>(&mut self, env: &E, from: Point, to: Point) -> Result<Vec<Point>, NotFound> {
        self.begin(env, from, to, false);
        step::run(self, env)
    }

    /// Stepped variant of [`find`](Self::find): one direction scan per item,
    /// then one item per jump-point segment of the result.
    pub fn steps<'a, E: GridEnv>(&'a mut self, env: &'a E, from: Point, to: Point) -> JpsSteps<'a, E> {
        self.begin(env, from, to, true);
        JpsSteps {
            inner: Steps::new(self, env),
        }
    }

    /// Jump points popped and closed by the last query.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Jump points recorded by the last query, the start excluded.
    pub fn jump_points(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    fn begin<E: GridEnv>(&mut self, env: &E, from: Point, to: Point, record: bool) {
        self.nodes.clear();
        self.lookup.clear();
        self.open.clear();
        self.from = from;
        self.to = to;
        self.current = None;
        self.next_dir = 0;
        self.expanded = 0;
        self.trace.reset(record);
        if walkable(env, from) && walkable(env, to) {
            let h = octile(from, to);
            self.nodes.push(JumpNode {
                pos: from,
                parent: None,
                dirs: dirs::ALL.to_vec(),
                g: 0,
                h,
                closed: false,
            });
            self.lookup.insert(from, 0);
            self.open.enqueue(0, (h, h));
        }
    }

    /// Record a jump point, or improve a known one. Closed positions are
    /// left untouched. Returns the arena index tracking the position.
    fn add_jump_node(&mut self, parent: Option<usize>, c: Candidate) -> usize {
        if let Some(&i) = self.lookup.get(&c.pos) {
            let node = &mut self.nodes[i];
            if !node.closed && c.g < node.g {
                log::trace!("jps: jump point {} improved {} -> {}", c.pos, node.g, c.g);
                node.g = c.g;
                node.parent = parent;
                node.dirs = c.dirs;
                let key = (node.f(), node.h);
                self.open.enqueue(i, key);
            }
            return i;
        }
        let i = self.nodes.len();
        let h = octile(c.pos, self.to);
        log::trace!("jps: jump point {} g={} h={}", c.pos, c.g, h);
        self.trace.push(Mark::Jump(c.pos));
        self.nodes.push(JumpNode {
            pos: c.pos,
            parent,
            dirs: c.dirs,
            g: c.g,
            h,
            closed: false,
        });
        self.lookup.insert(c.pos, i);
        self.open.enqueue(i, (c.g + h, h));
        i
    }

    fn pop_open(&mut self) -> Option<usize> {
        while let Ok(idx) = self.open.dequeue() {
            if !self.nodes[idx].closed {
                return Some(idx);
            }
        }
        None
    }

    /// Scan straight from `from` along `dir`, `g` being the cost at `from`.
    fn check_line<E: GridEnv>(&mut self, env: &E, from: Point, dir: Point, mut g: i32) -> Option<Candidate> {
        let mut cur = from + dir;
        while walkable(env, cur) {
            g += STRAIGHT_COST;
            if cur == self.to {
                return Some(Candidate {
                    pos: cur,
                    dirs: Vec::new(),
                    g,
                });
            }
            self.trace.push(Mark::Scanned(cur));
            let mut forced = forced_in_line(env, cur, dir);
            if !forced.is_empty() {
                forced.push(dir);
                return Some(Candidate {
                    pos: cur,
                    dirs: forced,
                    g,
                });
            }
            cur += dir;
        }
        None
    }

    /// Scan diagonally from node `origin` at `from`, recording at most one
    /// diagonal jump point plus whatever its straight components found.
    fn check_diagonal<E: GridEnv>(&mut self, env: &E, origin: usize, from: Point, dir: Point, mut g: i32) {
        let mut cur = from;
        loop {
            let next = cur + dir;
            let corner_x = cur.shift(dir.x, 0);
            let corner_y = cur.shift(0, dir.y);
            g += DIAGONAL_COST;
            if !walkable(env, next) {
                return;
            }
            let open_x = walkable(env, corner_x);
            let open_y = walkable(env, corner_y);
            if !open_x && !open_y {
                return;
            }
            if next == self.to {
                let goal = Candidate {
                    pos: next,
                    dirs: Vec::new(),
                    g,
                };
                self.add_jump_node(Some(origin), goal);
                return;
            }
            self.trace.push(Mark::Scanned(next));

            // A blocked corner exposes the cell beyond it.
            let mut forced = Vec::with_capacity(2);
            if !open_y {
                let beyond = corner_y + dir.scale(dirs::UP);
                if walkable(env, beyond) {
                    forced.push(beyond - next);
                }
            } else if !open_x {
                let beyond = corner_x + dir.scale(dirs::RIGHT);
                if walkable(env, beyond) {
                    forced.push(beyond - next);
                }
            }

            let horizontal = self.check_line(env, next, Point::new(dir.x, 0), g);
            let vertical = self.check_line(env, next, Point::new(0, dir.y), g);
            if horizontal.is_none() && vertical.is_none() && forced.is_empty() {
                cur = next;
                continue;
            }

            forced.push(dir);
            let jump = Candidate {
                pos: next,
                dirs: forced,
                g,
            };
            let at = self.add_jump_node(Some(origin), jump);
            for c in [horizontal, vertical].into_iter().flatten() {
                self.add_jump_node(Some(at), c);
            }
            return;
        }
    }
}

impl Engine for Jps {
    const NAME: &'static str = "jps";

    fn advance<E: GridEnv>(&mut self, env: &E) -> Progress {
        let ci = match self.current {
            Some(ci) if self.next_dir < self.nodes[ci].dirs.len() => ci,
            _ => {
                let Some(ci) = self.pop_open() else {
                    self.current = None;
                    return Progress::Exhausted;
                };
                self.nodes[ci].closed = true;
                self.expanded += 1;
                let pos = self.nodes[ci].pos;
                self.trace.push(Mark::Closed(pos));
                if pos == self.to {
                    self.current = None;
                    return Progress::Found(ci);
                }
                self.trace.push(Mark::Current(pos));
                self.current = Some(ci);
                self.next_dir = 0;
                ci
            }
        };

        let node = &self.nodes[ci];
        let Some(&dir) = node.dirs.get(self.next_dir) else {
            self.current = None;
            return Progress::Working;
        };
        let (pos, g) = (node.pos, node.g);
        self.next_dir += 1;

        if is_straight(dir) {
            if let Some(c) = self.check_line(env, pos, dir, g) {
                self.add_jump_node(Some(ci), c);
            }
        } else {
            self.check_diagonal(env, ci, pos, dir, g);
        }
        Progress::Working
    }

    fn waypoints(&self, goal: usize) -> Vec<Point> {
        let mut points = Vec::new();
        let mut cur = Some(goal);
        while let Some(i) = cur {
            points.push(self.nodes[i].pos);
            cur = self.nodes[i].parent;
        }
        points.reverse();
        points
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

/// A stepped JPS query, created by [`Jps::steps`].
///
/// Yields `false` after each unit of work and `true` after the last one.
/// Once exhausted, [`result`](Self::result) holds the densified path or the
/// failure.
pub struct JpsSteps<'a, E: GridEnv> {
    inner: Steps<'a, Jps, E>,
}

impl<E: GridEnv> JpsSteps<'_, E> {
    /// Marks produced by the most recent step.
    pub fn marks(&self) -> &[Mark] {
        self.inner.marks()
    }

    /// The query outcome, or `None` while steps remain.
    pub fn result(&self) -> Option<Result<&[Point], NotFound>> {
        self.inner.result()
    }

    /// Jump points expanded so far.
    pub fn expanded(&self) -> usize {
        self.inner.search().expanded
    }
}

impl<E: GridEnv> Iterator for JpsSteps<'_, E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.inner.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::AStar;
    use crate::env::FnGrid;
    use crate::path::{is_contiguous, path_cost};
    use jumpgrid_core::Range;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn grid(w: i32, h: i32, walls: &[(i32, i32)]) -> FnGrid<impl Fn(Point) -> bool + '_> {
        FnGrid::new(Range::with_size(w, h), move |p: Point| !walls.contains(&(p.x, p.y)))
    }

    #[test]
    fn open_grid_diagonal() {
        let g = grid(5, 5, &[]);
        let mut j = Jps::new();
        let path = j.find(&g, Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path_cost(&path), 56);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 4)));
    }

    #[test]
    fn straight_corridor() {
        let g = grid(5, 1, &[]);
        let mut j = Jps::new();
        let path = j.find(&g, Point::new(0, 0), Point::new(4, 0)).unwrap();
        assert_eq!(path_cost(&path), 40);
        assert_eq!(path.len(), 5);
        assert_eq!(j.expanded(), 2);
    }

    #[test]
    fn start_equals_goal() {
        let g = grid(3, 3, &[]);
        let mut j = Jps::new();
        let p = Point::new(2, 0);
        assert_eq!(j.find(&g, p, p), Ok(vec![p]));
    }

    #[test]
    fn routes_through_gap() {
        let g = grid(5, 5, &[(0, 2), (1, 2), (3, 2), (4, 2)]);
        let mut j = Jps::new();
        let path = j.find(&g, Point::new(0, 0), Point::new(0, 4)).unwrap();
        assert!(path.contains(&Point::new(2, 2)));
        assert!(is_contiguous(&path));
        assert_eq!(path_cost(&path), 56);
    }

    #[test]
    fn detours_around_a_wall() {
        let walls = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let g = grid(5, 5, &walls);
        let (s, e) = (Point::new(0, 0), Point::new(4, 0));
        let path = Jps::new().find(&g, s, e).unwrap();
        let reference = AStar::new().find(&g, s, e).unwrap();
        assert!(path.contains(&Point::new(2, 4)));
        assert!(is_contiguous(&path));
        assert_eq!(path_cost(&path), 96);
        assert_eq!(path_cost(&reference), 96);
    }

    #[test]
    fn enclosed_goal_is_not_found() {
        let g = grid(5, 5, &[(3, 3), (3, 4), (4, 3)]);
        let mut j = Jps::new();
        let err = j.find(&g, Point::new(0, 0), Point::new(4, 4)).unwrap_err();
        assert_eq!(err.to, Point::new(4, 4));
    }

    #[test]
    fn does_not_squeeze_between_blocked_corners() {
        let g = grid(2, 2, &[(1, 0), (0, 1)]);
        assert!(Jps::new().find(&g, Point::new(0, 0), Point::new(1, 1)).is_err());
    }

    #[test]
    fn line_scan_stops_at_forced_neighbor() {
        let g = grid(5, 3, &[(2, 2)]);
        let mut j = Jps::new();
        j.begin(&g, Point::new(0, 1), Point::new(4, 0), false);
        let c = j.check_line(&g, Point::new(0, 1), dirs::RIGHT, 0);
        assert_eq!(
            c,
            Some(Candidate {
                pos: Point::new(2, 1),
                dirs: vec![dirs::RIGHT_UP, dirs::RIGHT],
                g: 20,
            })
        );
    }

    #[test]
    fn line_scan_runs_off_the_grid() {
        let g = grid(5, 3, &[]);
        let mut j = Jps::new();
        j.begin(&g, Point::new(0, 1), Point::new(0, 0), false);
        assert_eq!(j.check_line(&g, Point::new(0, 1), dirs::RIGHT, 0), None);
    }

    #[test]
    fn diagonal_scan_records_forced_neighbor() {
        let g = grid(5, 5, &[(0, 1)]);
        let mut j = Jps::new();
        j.begin(&g, Point::new(0, 0), Point::new(4, 4), false);
        j.check_diagonal(&g, 0, Point::new(0, 0), dirs::RIGHT_UP, 0);
        let i = j.lookup[&Point::new(1, 1)];
        let node = &j.nodes[i];
        assert_eq!(node.dirs, vec![dirs::LEFT_UP, dirs::RIGHT_UP]);
        assert_eq!(node.g, 14);
        assert_eq!(node.parent, Some(0));
    }

    #[test]
    fn diagonal_scan_pruned_by_two_blocked_corners() {
        let g = grid(3, 3, &[(1, 0), (0, 1)]);
        let mut j = Jps::new();
        j.begin(&g, Point::new(0, 0), Point::new(2, 2), false);
        j.check_diagonal(&g, 0, Point::new(0, 0), dirs::RIGHT_UP, 0);
        assert_eq!(j.jump_points(), 0);
    }

    #[test]
    fn expands_fewer_nodes_than_astar() {
        let g = grid(20, 20, &[]);
        let (s, e) = (Point::new(0, 0), Point::new(19, 10));
        let mut a = AStar::new();
        let mut j = Jps::new();
        let pa = a.find(&g, s, e).unwrap();
        let pj = j.find(&g, s, e).unwrap();
        assert_eq!(path_cost(&pa), path_cost(&pj));
        assert!(j.expanded() < a.expanded());
    }

    #[test]
    fn open_grids_match_astar_cost() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut a = AStar::new();
        let mut j = Jps::new();
        for _ in 0..200 {
            let (w, h) = (rng.random_range(1..16), rng.random_range(1..16));
            let g = grid(w, h, &[]);
            let s = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let e = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let pa = a.find(&g, s, e).unwrap();
            let pj = j.find(&g, s, e).unwrap();
            assert_eq!(path_cost(&pa), octile(s, e));
            assert_eq!(path_cost(&pj), path_cost(&pa), "{s} -> {e} on {w}x{h}");
            assert!(is_contiguous(&pj));
            assert_eq!(pj.first(), Some(&s));
            assert_eq!(pj.last(), Some(&e));
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let g = grid(8, 8, &[(3, 1), (3, 2), (3, 3), (3, 4), (6, 6), (5, 6)]);
        let mut j = Jps::new();
        let first = j.find(&g, Point::new(0, 2), Point::new(7, 7)).unwrap();
        let second = j.find(&g, Point::new(0, 2), Point::new(7, 7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn steps_match_find() {
        let walls = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let g = grid(5, 5, &walls);
        let (s, e) = (Point::new(0, 0), Point::new(4, 0));
        let mut j = Jps::new();
        let expected = j.find(&g, s, e).unwrap();

        let mut steps = j.steps(&g, s, e);
        let mut jumps = Vec::new();
        let mut drawn = Vec::new();
        let mut last = None;
        while let Some(done) = steps.next() {
            last = Some(done);
            for m in steps.marks() {
                match *m {
                    Mark::Jump(p) => jumps.push(p),
                    Mark::Path(p) => drawn.push(p),
                    _ => {}
                }
            }
        }
        assert_eq!(last, Some(true));
        assert_eq!(steps.result(), Some(Ok(expected.as_slice())));
        assert!(jumps.contains(&Point::new(1, 3)));
        assert!(jumps.contains(&Point::new(2, 4)));
        for p in &expected {
            assert!(drawn.contains(p));
        }
    }

    #[test]
    fn steps_for_trivial_query() {
        let g = grid(2, 2, &[]);
        let mut j = Jps::new();
        let p = Point::new(1, 1);
        let mut steps = j.steps(&g, p, p);
        assert_eq!(steps.next(), Some(true));
        assert_eq!(steps.marks(), &[Mark::Closed(p), Mark::Path(p)]);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.result(), Some(Ok(&[p][..])));
    }
}
