use crate::entity::Entity;
use crate::units::*;

/// A horizontal, half-open pixel range `[x1, x2)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PxRange {
    /// The left edge, included
    pub x1: Px,
    /// The right edge, excluded
    pub x2: Px,
}

impl PxRange {
    pub fn new(x1: Px, x2: Px) -> PxRange {
        PxRange { x1, x2 }
    }

    /// A range starting at `x1` that is `width` wide
    pub fn with_width(x1: Px, width: Px) -> PxRange {
        PxRange { x1, x2: x1 + width }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2
    }

    pub fn center(&self) -> Px {
        (self.x1 + self.x2) / 2.0
    }

    /// Whether the two ranges share at least one point. Ranges that merely touch don't, and
    /// an empty range never intersects anything
    pub fn intersects(&self, other: &PxRange) -> bool {
        !self.is_empty() && !other.is_empty() && self.x1 < other.x2 && other.x1 < self.x2
    }

    /// The smallest range covering both
    pub fn hull(&self, other: &PxRange) -> PxRange {
        PxRange {
            x1: self.x1.min(other.x1),
            x2: self.x2.max(other.x2),
        }
    }
}

/// The ranges an entity covers on one display line, left to right. An entity usually covers
/// a single range but may be drawn in pieces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanRanges(pub Vec<PxRange>);

impl SpanRanges {
    /// Horizontal middle of everything covered, `None` if nothing is
    pub fn center(&self) -> Option<Px> {
        let first = self.0.first()?;
        let last = self.0.last()?;
        Some((first.x1 + last.x2) / 2.0)
    }
}

impl From<PxRange> for SpanRanges {
    fn from(range: PxRange) -> Self {
        SpanRanges(vec![range])
    }
}

/// An entity that has been placed on a display line
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricEntity {
    pub entity: Entity,
    pub ranges: SpanRanges,
}

impl GeometricEntity {
    pub fn new<R: Into<SpanRanges>>(entity: Entity, ranges: R) -> GeometricEntity {
        GeometricEntity {
            entity,
            ranges: ranges.into(),
        }
    }
}

/// A set of pairwise disjoint, non-empty ranges kept sorted by their left edge
#[derive(Debug, Clone, Default)]
pub struct RangeSet {
    ranges: Vec<PxRange>,
}

impl RangeSet {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn intersects(&self, range: &PxRange) -> bool {
        if range.is_empty() {
            return false;
        }
        let i = self.ranges.partition_point(|r| r.x2 <= range.x1);
        self.ranges.get(i).is_some_and(|r| r.intersects(range))
    }

    /// Add a range, merging it with every stored range it overlaps or touches so the set
    /// stays sorted and disjoint
    pub fn insert(&mut self, range: PxRange) {
        if range.is_empty() {
            return;
        }
        let first = self.ranges.partition_point(|r| r.x2 < range.x1);
        let last = self.ranges.partition_point(|r| r.x1 <= range.x2);
        let merged = self.ranges[first..last]
            .iter()
            .fold(range, |acc, r| acc.hull(r));
        self.ranges.drain(first..last);
        self.ranges.insert(first, merged);
    }

    /// The right edge of the rightmost range
    pub fn extent(&self) -> Option<Px> {
        self.ranges.last().map(|r| r.x2)
    }
}
