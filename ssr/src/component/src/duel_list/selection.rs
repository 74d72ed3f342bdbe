/// Single-selection cursor over the rendered duel list.
///
/// The selected position is owned here outright instead of being queried
/// back from the DOM, so it can never dangle past the collection it was
/// moved against. Every method returns the newly selected index when the
/// caller should notify, or `None` when nothing should be reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<usize>,
}

impl Selection {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Select `idx` outright (the pointer path). Re-picking the row that is
    /// already selected reports again; out-of-range targets are ignored.
    pub fn select(&mut self, idx: usize, len: usize) -> Option<usize> {
        if idx >= len {
            return None;
        }
        self.current = Some(idx);
        self.current
    }

    /// Move one entry down. With no selection yet, starts at the first
    /// entry. Clamps at the end: no wraparound, nothing to report.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let idx = match self.current {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(_) => return None,
        };
        self.current = Some(idx);
        self.current
    }

    /// Move one entry up. With no selection yet, starts at the last entry.
    /// Clamps at the start.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let idx = match self.current {
            None => len - 1,
            Some(i) if i > 0 => i - 1,
            Some(_) => return None,
        };
        self.current = Some(idx);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn click_selects_and_repicking_reports_again() {
        let mut s = Selection::default();
        assert_eq!(s.select(1, 3), Some(1));
        assert_eq!(s.select(1, 3), Some(1));
        assert_eq!(s.select(3, 3), None);
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn next_walks_down_and_clamps_at_the_end() {
        let mut s = Selection::default();
        // nothing selected yet: ArrowDown starts at the top
        assert_eq!(s.next(3), Some(0));
        assert_eq!(s.next(3), Some(1));
        assert_eq!(s.next(3), Some(2));
        // last entry: no wraparound and nothing reported
        assert_eq!(s.next(3), None);
        assert_eq!(s.current(), Some(2));
    }

    #[test]
    fn prev_walks_up_and_clamps_at_the_start() {
        let mut s = Selection::default();
        // nothing selected yet: ArrowUp starts at the bottom
        assert_eq!(s.prev(3), Some(2));
        assert_eq!(s.prev(3), Some(1));
        assert_eq!(s.prev(3), Some(0));
        assert_eq!(s.prev(3), None);
        assert_eq!(s.current(), Some(0));
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let mut s = Selection::default();
        assert_eq!(s.next(0), None);
        assert_eq!(s.prev(0), None);
        assert_eq!(s.current(), None);
    }
}
