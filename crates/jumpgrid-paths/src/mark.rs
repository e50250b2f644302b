//! Visualization marks emitted by stepped searches.

use jumpgrid_core::Point;

/// Something a stepped search did to a cell during the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// The node being expanded.
    Current(Point),
    /// A node pushed onto the open queue (A*).
    Opened(Point),
    /// A node finalized and moved to the closed set.
    Closed(Point),
    /// A newly discovered jump point (JPS).
    Jump(Point),
    /// A cell walked over by a straight or diagonal scan (JPS).
    Scanned(Point),
    /// A cell of the final path.
    Path(Point),
}

impl Mark {
    /// The cell this mark refers to.
    pub fn pos(self) -> Point {
        match self {
            Mark::Current(p)
            | Mark::Opened(p)
            | Mark::Closed(p)
            | Mark::Jump(p)
            | Mark::Scanned(p)
            | Mark::Path(p) => p,
        }
    }
}

/// Per-step mark buffer. Recording is off for plain `find` queries.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    enabled: bool,
    marks: Vec<Mark>,
}

impl Trace {
    pub(crate) fn reset(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.marks.clear();
    }

    pub(crate) fn clear(&mut self) {
        self.marks.clear();
    }

    #[inline]
    pub(crate) fn push(&mut self, mark: Mark) {
        if self.enabled {
            self.marks.push(mark);
        }
    }

    pub(crate) fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trace_records_nothing() {
        let mut t = Trace::default();
        t.push(Mark::Jump(Point::new(1, 1)));
        assert!(t.marks().is_empty());
        t.reset(true);
        t.push(Mark::Jump(Point::new(1, 1)));
        assert_eq!(t.marks(), &[Mark::Jump(Point::new(1, 1))]);
        assert_eq!(t.marks()[0].pos(), Point::new(1, 1));
        t.clear();
        assert!(t.marks().is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn mark_round_trip() {
        let m = Mark::Scanned(Point::new(3, 7));
        let json = serde_json::to_string(&m).unwrap();
        let back: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
