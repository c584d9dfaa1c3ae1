use crate::geometry::{GeometricEntity, PxRange};
use crate::label::LabelList;
use crate::level::LevelManager;
use crate::line::TextLine;
use crate::{EntityId, LabelId, LayoutError, Px};
use std::collections::HashMap;

pub type RelationId = usize;

/// A directed, labelled link from one entity to another
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub id: RelationId,
    pub from_id: EntityId,
    pub to_id: EntityId,
    pub label_id: LabelId,
}

impl Relation {
    pub fn new(id: RelationId, from_id: EntityId, to_id: EntityId, label_id: LabelId) -> Relation {
        Relation {
            id,
            from_id,
            to_id,
            label_id,
        }
    }
}

/// A relation connector to draw on one display line. A missing end means the connector
/// runs off that side of the line
#[derive(Debug, Clone, PartialEq)]
pub struct LineRelation<'r> {
    pub x1: Option<Px>,
    pub x2: Option<Px>,
    pub label: String,
    pub label_width: Px,
    pub level: usize,
    pub relation: &'r Relation,
}

impl LineRelation<'_> {
    /// Everything the connector and its label cover on the line. An open start runs to the
    /// left edge and an open end runs off to the right
    fn footprint(x1: Option<Px>, x2: Option<Px>, label_width: Px) -> PxRange {
        let (left, right) = match (x1, x2) {
            (Some(a), Some(b)) => (a.min(b), a.max(b)),
            (Some(a), None) => (a, Px::INFINITY),
            (None, Some(b)) => (Px::ZERO, b),
            (None, None) => (Px::ZERO, Px::ZERO),
        };
        // the label sits on the middle of the connector, or on the end we can see
        let anchor = match (x1, x2) {
            (Some(a), Some(b)) => (a + b) / 2.0,
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Px::ZERO,
        };
        let label = PxRange::with_width(anchor - label_width / 2.0, label_width);
        PxRange::new(left, right).hull(&label)
    }
}

/// Lays out the relation connectors of one display line
#[derive(Debug)]
pub struct RelationLine<'r> {
    relations: &'r [Relation],
    labels: &'r LabelList,
    line: TextLine,
    levels: LevelManager<RelationId>,
}

impl<'r> RelationLine<'r> {
    pub fn new(
        relations: &'r [Relation],
        labels: &'r LabelList,
        line: TextLine,
    ) -> RelationLine<'r> {
        RelationLine {
            relations,
            labels,
            line,
            levels: LevelManager::new(),
        }
    }

    /// Connectors for the relations touching `entities`, the entities already placed on this
    /// line.
    ///
    /// A relation only starts here if its source entity starts on this line, and is left
    /// out entirely when its target started on an earlier line, since it was drawn there.
    /// Overlapping connectors are spread over levels the same way entity labels are.
    pub fn render(
        &mut self,
        entities: &[GeometricEntity],
    ) -> Result<Vec<LineRelation<'r>>, LayoutError> {
        self.levels.reset();
        let placed: HashMap<EntityId, &GeometricEntity> =
            entities.iter().map(|e| (e.entity.id, e)).collect();

        let mut line_relations = Vec::new();
        for relation in self.relations {
            let from = placed.get(&relation.from_id);
            let to = placed.get(&relation.to_id);

            let x1 = from
                .filter(|e| self.line.start_offset <= e.entity.start_offset)
                .and_then(|e| e.ranges.center());

            if to.is_some_and(|e| e.entity.start_offset < self.line.start_offset) {
                log::trace!("relation {} belongs to an earlier line", relation.id);
                continue;
            }
            let x2 = to.and_then(|e| e.ranges.center());

            if x1.is_none() && x2.is_none() {
                continue;
            }

            let label = self.labels.get_by_id(relation.label_id)?;
            let footprint = LineRelation::footprint(x1, x2, label.width);
            self.levels.assign(relation.id, &[footprint]);
            let level = self.levels.level_of(relation.id).unwrap_or_default();

            line_relations.push(LineRelation {
                x1,
                x2,
                label: label.text.clone(),
                label_width: label.width,
                level,
                relation,
            });
        }

        Ok(line_relations)
    }

    /// Levels used by the last [RelationLine::render]
    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }
}
