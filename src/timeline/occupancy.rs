//! Per-column occupancy tracking
//!
//! Each column keeps the integer y-ranges already claimed by bars as a
//! sorted list of disjoint closed intervals. A new span collides when any
//! integer point in it is already claimed, the same answer a set of
//! individual y-units would give, without materializing every unit.

/// A closed integer range `[start, end]` of layout units
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    /// Integer span covering `[floor(top), ceil(bottom)]`, or `None` when
    /// the range holds no integer point (bottom above top)
    pub fn covering(top: f64, bottom: f64) -> Option<Self> {
        let start = top.floor() as i64;
        let end = bottom.ceil() as i64;
        (end >= start).then_some(Self { start, end })
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Claimed spans of one column, sorted by start and pairwise disjoint
#[derive(Clone, Debug, Default)]
pub struct ColumnOccupancy {
    spans: Vec<Span>,
}

impl ColumnOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first claimed span that ends at or after `span.start`
    fn first_candidate(&self, span: &Span) -> usize {
        // Disjoint spans sorted by start are also sorted by end
        self.spans.partition_point(|s| s.end < span.start)
    }

    #[cfg(test)]
    fn is_free(&self, span: &Span) -> bool {
        match self.spans.get(self.first_candidate(span)) {
            Some(existing) => !existing.intersects(span),
            None => true,
        }
    }

    /// Claim `span` if it is free. Returns whether the claim succeeded.
    pub fn try_claim(&mut self, span: Span) -> bool {
        let idx = self.first_candidate(&span);
        if let Some(existing) = self.spans.get(idx) {
            if existing.intersects(&span) {
                return false;
            }
        }
        self.spans.insert(idx, span);
        true
    }

    #[cfg(test)]
    fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// Occupancy for all columns, created lazily as columns are probed
#[derive(Clone, Debug, Default)]
pub struct ColumnSet {
    columns: Vec<ColumnOccupancy>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `span` in the lowest-indexed column where it is free and
    /// return that column
    pub fn place(&mut self, span: Span) -> usize {
        let mut column = 0;
        loop {
            if column == self.columns.len() {
                self.columns.push(ColumnOccupancy::new());
            }
            if self.columns[column].try_claim(span) {
                return column;
            }
            column += 1;
        }
    }

    #[cfg(test)]
    fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: i64, end: i64) -> Span {
        Span { start, end }
    }

    #[test]
    fn test_covering_rounds_outward() {
        assert_eq!(Span::covering(1.5, 10.2), Some(span(1, 11)));
        assert_eq!(Span::covering(3.0, 3.0), Some(span(3, 3)));
        assert_eq!(Span::covering(10.0, 2.0), None);
    }

    #[test]
    fn test_touching_endpoints_collide() {
        let mut column = ColumnOccupancy::new();
        assert!(column.try_claim(span(0, 10)));
        assert!(!column.is_free(&span(10, 20)));
        assert!(column.is_free(&span(11, 20)));
    }

    #[test]
    fn test_claims_stay_sorted_and_disjoint() {
        let mut column = ColumnOccupancy::new();
        assert!(column.try_claim(span(50, 60)));
        assert!(column.try_claim(span(0, 10)));
        assert!(column.try_claim(span(20, 30)));
        assert!(!column.try_claim(span(25, 55)));

        assert_eq!(column.spans(), &[span(0, 10), span(20, 30), span(50, 60)]);
    }

    #[test]
    fn test_span_enclosing_existing_claim_collides() {
        let mut column = ColumnOccupancy::new();
        assert!(column.try_claim(span(40, 45)));
        assert!(!column.is_free(&span(0, 100)));
    }

    #[test]
    fn test_place_uses_first_free_column() {
        let mut set = ColumnSet::new();
        assert_eq!(set.place(span(0, 100)), 0);
        assert_eq!(set.place(span(50, 150)), 1);
        assert_eq!(set.place(span(120, 200)), 0);
        assert_eq!(set.place(span(90, 130)), 2);
        assert_eq!(set.column_count(), 3);
    }
}
