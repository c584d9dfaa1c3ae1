use std::ops::Range;

/// One stored interval together with its payload
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<T> {
    pub start: usize,
    pub end: usize,
    pub value: T,
}

/// An immutable interval index over offsets.
///
/// Intervals are kept sorted by `(start, end)` alongside a running maximum of their end
/// offsets. Because that running maximum never decreases, both ends of a query window can be
/// found by binary search, and only the intervals in between need to be checked.
#[derive(Debug, Clone)]
pub struct IntervalIndex<T> {
    entries: Vec<Interval<T>>,
    max_end: Vec<usize>,
}

impl<T> Default for IntervalIndex<T> {
    fn default() -> Self {
        IntervalIndex {
            entries: Vec::new(),
            max_end: Vec::new(),
        }
    }
}

impl<T> IntervalIndex<T> {
    /// Build the index. Intervals sharing the same range keep their insertion order
    pub fn new<I: IntoIterator<Item = (Range<usize>, T)>>(intervals: I) -> IntervalIndex<T> {
        let mut entries: Vec<Interval<T>> = intervals
            .into_iter()
            .map(|(range, value)| Interval {
                start: range.start,
                end: range.end,
                value,
            })
            .collect();
        entries.sort_by_key(|e| (e.start, e.end));

        let mut max_end = Vec::with_capacity(entries.len());
        let mut running = 0;
        for entry in entries.iter() {
            running = running.max(entry.end);
            max_end.push(running);
        }

        IntervalIndex { entries, max_end }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored intervals, ordered by start then end
    pub fn iter(&self) -> impl Iterator<Item = &Interval<T>> {
        self.entries.iter()
    }

    /// Every interval that touches the closed window `[start, end]`, i.e. every interval
    /// with `interval.start <= end && interval.end >= start`
    pub fn search(&self, start: usize, end: usize) -> impl Iterator<Item = &Interval<T>> {
        let upper = self.entries.partition_point(|e| e.start <= end);
        let lower = self.max_end[..upper].partition_point(|&m| m < start);
        self.entries[lower..upper].iter().filter(move |e| e.end >= start)
    }

    /// Every interval whose start is exactly `offset`
    pub fn starting_at(&self, offset: usize) -> &[Interval<T>] {
        let lower = self.entries.partition_point(|e| e.start < offset);
        let upper = self.entries.partition_point(|e| e.start <= offset);
        &self.entries[lower..upper]
    }
}

impl<T> FromIterator<(Range<usize>, T)> for IntervalIndex<T> {
    fn from_iter<I: IntoIterator<Item = (Range<usize>, T)>>(iter: I) -> Self {
        IntervalIndex::new(iter)
    }
}
