use crate::interval::IntervalIndex;
use crate::line::TextLine;
use crate::offsets::OffsetConverter;
use crate::LayoutError;
use std::collections::HashMap;

pub type EntityId = usize;
pub type LabelId = usize;
pub type UserId = usize;

/// An annotated span of text. Offsets are code points and the span is half-open,
/// `[start_offset, end_offset)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    pub label: LabelId,
    pub user: UserId,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Entity {
    pub fn new(
        id: EntityId,
        label: LabelId,
        user: UserId,
        start_offset: usize,
        end_offset: usize,
    ) -> Entity {
        Entity {
            id,
            label,
            user,
            start_offset,
            end_offset,
        }
    }

    /// Whether the entity touches the window `[start, end)`: it starts inside `[start, end)`,
    /// ends inside `(start, end]`, or spans the whole window. This is intentionally looser
    /// than containment
    pub fn is_in(&self, start: usize, end: usize) -> bool {
        (start <= self.start_offset && self.start_offset < end)
            || (start < self.end_offset && self.end_offset <= end)
            || (self.start_offset < start && end < self.end_offset)
    }
}

/// The entities of one document, indexed by offset and by id. Built once; never mutated
#[derive(Debug, Clone, Default)]
pub struct Entities {
    index: IntervalIndex<Entity>,
    by_id: HashMap<EntityId, Entity>,
}

impl Entities {
    /// Index entities whose offsets are already code points
    pub fn new<I: IntoIterator<Item = Entity>>(entities: I) -> Entities {
        let entities: Vec<Entity> = entities.into_iter().collect();
        let by_id = entities.iter().map(|e| (e.id, *e)).collect();
        let index = entities
            .into_iter()
            .map(|e| (e.start_offset..e.end_offset, e))
            .collect();
        let entities = Entities { index, by_id };
        log::debug!("indexed {} entities", entities.len());
        entities
    }

    /// Index entities whose offsets are in some other unit (UTF-16 code units for example),
    /// translating both ends through `converter` first
    pub fn with_offsets<I, C>(entities: I, converter: &C) -> Entities
    where
        I: IntoIterator<Item = Entity>,
        C: OffsetConverter + ?Sized,
    {
        Entities::new(entities.into_iter().map(|e| Entity {
            start_offset: converter.to_code_point_offset(e.start_offset),
            end_offset: converter.to_code_point_offset(e.end_offset),
            ..e
        }))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All entities ordered by start offset
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.index.iter().map(|i| &i.value)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.by_id.get(&id)
    }

    pub fn find_by_id(&self, id: EntityId) -> Result<&Entity, LayoutError> {
        self.get(id).ok_or(LayoutError::EntityNotFound(id))
    }

    /// Entities overlapping `[start, end)` according to [Entity::is_in]
    pub fn overlapping(&self, start: usize, end: usize) -> impl Iterator<Item = &Entity> {
        self.index
            .search(start, end)
            .map(|i| &i.value)
            .filter(move |e| e.is_in(start, end))
    }

    /// Entities that have to be drawn on `line`
    pub fn in_line<'a>(&'a self, line: &TextLine) -> impl Iterator<Item = &'a Entity> {
        self.overlapping(line.start_offset, line.end_offset)
    }

    /// Entities whose first character is at `offset`
    pub fn starting_at(&self, offset: usize) -> impl Iterator<Item = &Entity> {
        self.index.starting_at(offset).iter().map(|i| &i.value)
    }

    pub fn starts_at(&self, offset: usize) -> bool {
        !self.index.starting_at(offset).is_empty()
    }
}
