//! Shared driver for run-to-completion and stepped searches.
//!
//! Both searches expose a single unit of work through [`Engine::advance`].
//! [`run`] loops it until the goal is popped or the open queue runs dry;
//! [`Steps`] advances it once per call, then spends one more call per path
//! segment so a visualizer can draw the result incrementally.

use jumpgrid_core::Point;

use crate::env::GridEnv;
use crate::error::NotFound;
use crate::mark::{Mark, Trace};
use crate::path::{Walk, densify};

/// Outcome of one unit of search work.
pub(crate) enum Progress {
    /// Work was done; the search is not over.
    Working,
    /// The goal node (arena index) was popped.
    Found(usize),
    /// The open queue is exhausted.
    Exhausted,
}

pub(crate) trait Engine {
    const NAME: &'static str;

    fn advance<E: GridEnv>(&mut self, env: &E) -> Progress;

    /// Waypoints from start to the goal node, each pair on a common row,
    /// column or diagonal.
    fn waypoints(&self, goal: usize) -> Vec<Point>;

    /// Start and goal of the current query.
    fn endpoints(&self) -> (Point, Point);

    fn expanded(&self) -> usize;

    fn trace(&self) -> &Trace;

    fn trace_mut(&mut self) -> &mut Trace;
}

/// Drive `search` until the query is decided.
pub(crate) fn run<S: Engine, E: GridEnv>(search: &mut S, env: &E) -> Result<Vec<Point>, NotFound> {
    loop {
        match search.advance(env) {
            Progress::Working => {}
            Progress::Found(goal) => return Ok(found(search, &search.waypoints(goal))),
            Progress::Exhausted => return Err(exhausted(search)),
        }
    }
}

fn found<S: Engine>(search: &S, waypoints: &[Point]) -> Vec<Point> {
    let path = densify(waypoints);
    let (from, to) = search.endpoints();
    log::debug!(
        "{}: {} -> {} found, {} cells via {} waypoints, {} expansions",
        S::NAME,
        from,
        to,
        path.len(),
        waypoints.len(),
        search.expanded()
    );
    path
}

fn exhausted<S: Engine>(search: &S) -> NotFound {
    let (from, to) = search.endpoints();
    log::debug!(
        "{}: {} -> {} unreachable after {} expansions",
        S::NAME,
        from,
        to,
        search.expanded()
    );
    NotFound { from, to }
}

enum Phase {
    Search,
    Trace {
        waypoints: Vec<Point>,
        next: usize,
        path: Vec<Point>,
    },
    Finished(Result<Vec<Point>, NotFound>),
}

/// State machine behind [`AstarSteps`](crate::AstarSteps) and
/// [`JpsSteps`](crate::JpsSteps).
pub(crate) struct Steps<'a, S, E> {
    search: &'a mut S,
    env: &'a E,
    phase: Phase,
}

impl<'a, S: Engine, E: GridEnv> Steps<'a, S, E> {
    /// `search` must already be primed for the query.
    pub(crate) fn new(search: &'a mut S, env: &'a E) -> Self {
        Self {
            search,
            env,
            phase: Phase::Search,
        }
    }

    /// Perform one unit of work. Yields `true` for the last one and `None`
    /// once the query is over.
    pub(crate) fn step(&mut self) -> Option<bool> {
        self.search.trace_mut().clear();
        let (next, finished) = match &mut self.phase {
            Phase::Finished(_) => return None,
            Phase::Search => match self.search.advance(self.env) {
                Progress::Working => return Some(false),
                Progress::Found(goal) => {
                    let waypoints = self.search.waypoints(goal);
                    let path = found(&*self.search, &waypoints);
                    if waypoints.len() < 2 {
                        self.search.trace_mut().push(Mark::Path(path[0]));
                        (Phase::Finished(Ok(path)), true)
                    } else {
                        (
                            Phase::Trace {
                                waypoints,
                                next: 0,
                                path,
                            },
                            false,
                        )
                    }
                }
                Progress::Exhausted => (Phase::Finished(Err(exhausted(&*self.search))), true),
            },
            Phase::Trace {
                waypoints,
                next,
                path,
            } => {
                let (a, b) = (waypoints[*next], waypoints[*next + 1]);
                let trace = self.search.trace_mut();
                trace.push(Mark::Path(a));
                for p in Walk::new(a, b) {
                    trace.push(Mark::Path(p));
                }
                *next += 1;
                if *next + 1 < waypoints.len() {
                    return Some(false);
                }
                (Phase::Finished(Ok(std::mem::take(path))), true)
            }
        };
        self.phase = next;
        Some(finished)
    }

    pub(crate) fn marks(&self) -> &[Mark] {
        self.search.trace().marks()
    }

    pub(crate) fn result(&self) -> Option<Result<&[Point], NotFound>> {
        match &self.phase {
            Phase::Finished(Ok(path)) => Some(Ok(path.as_slice())),
            Phase::Finished(Err(e)) => Some(Err(*e)),
            _ => None,
        }
    }

    pub(crate) fn search(&self) -> &S {
        &*self.search
    }
}
