use std::fmt;

use jumpgrid_core::Point;

/// The goal cannot be reached from the start.
///
/// This is an ordinary outcome for disconnected regions, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound {
    pub from: Point,
    pub to: Point,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for NotFound {}

/// [`PriorityQueue::dequeue`](crate::PriorityQueue::dequeue) or
/// [`PriorityQueue::peek`](crate::PriorityQueue::peek) was called on an
/// empty queue. Callers are expected to check emptiness first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority queue is empty")
    }
}

impl std::error::Error for EmptyQueue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = NotFound {
            from: Point::new(0, 0),
            to: Point::new(4, 2),
        };
        assert_eq!(e.to_string(), "no path from (0, 0) to (4, 2)");
        assert_eq!(EmptyQueue.to_string(), "priority queue is empty");
    }
}
