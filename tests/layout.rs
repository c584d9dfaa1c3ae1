use annotation_layout::*;
use proptest::prelude::*;

fn cells() -> CellMetrics {
    CellMetrics::new(Px(1.0))
}

/// Place every entity visible on `line` where a renderer would draw it
fn place(
    text: &str,
    line: &TextLine,
    entities: &Entities,
    metrics: &CellMetrics,
) -> Vec<GeometricEntity> {
    let chars: Vec<char> = text.chars().collect();
    let x = |offset: usize| -> Px {
        chars[line.start_offset..offset]
            .iter()
            .map(|&ch| metrics.char_width(ch))
            .sum()
    };
    entities
        .in_line(line)
        .map(|entity| {
            let start = entity.start_offset.max(line.start_offset);
            let end = entity.end_offset.min(line.end_offset);
            GeometricEntity::new(*entity, PxRange::new(x(start), x(end)))
        })
        .collect()
}

#[test]
fn two_line_relations() {
    let text = "ab cd\nef gh";
    let metrics = cells();
    let labels = LabelList::measured([(1, "A"), (2, "B")], &metrics);
    let relation_labels = LabelList::measured([(5, "to"), (6, "back")], &metrics);
    let entities = Entities::new([
        // runs over the newline onto the second line
        Entity::new(1, 1, 0, 3, 8),
        Entity::new(2, 2, 0, 9, 11),
    ]);
    let relations = [Relation::new(10, 1, 2, 5), Relation::new(11, 2, 1, 6)];

    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(40.0)));
    let lines: Vec<TextLine> = splitter
        .split(text, 0, &entities)
        .expect("labels are known")
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[1].start_offset, lines[1].end_offset), (6, 11));

    let mut first = RelationLine::new(&relations, &relation_labels, lines[0]);
    let rendered = first
        .render(&place(text, &lines[0], &entities, &metrics))
        .expect("relation labels are known");
    // 10 starts here and runs off the right edge, 11 ends here coming from the next line
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].relation.id, 10);
    assert_eq!(rendered[0].x1, Some(Px(4.0)));
    assert_eq!(rendered[0].x2, None);
    assert_eq!(rendered[1].relation.id, 11);
    assert_eq!(rendered[1].x1, None);
    assert_eq!(rendered[1].x2, Some(Px(4.0)));
    // 10 covers [3, inf) and 11 covers [0, 6), so they can't share a level
    assert_eq!(rendered[0].level, 0);
    assert_eq!(rendered[1].level, 1);
    assert_eq!(first.max_level(), 2);

    let mut second = RelationLine::new(&relations, &relation_labels, lines[1]);
    let rendered = second
        .render(&place(text, &lines[1], &entities, &metrics))
        .expect("relation labels are known");
    // 11 points at an entity that started on the first line, so it was drawn there
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].relation.id, 10);
    assert_eq!(rendered[0].x1, None);
    assert_eq!(rendered[0].x2, Some(Px(4.0)));
    assert_eq!(rendered[0].label, "to");
    assert_eq!(rendered[0].label_width, Px(2.0));
}

#[test]
fn utf16_annotations_line_up_with_characters() {
    // "🦀" is two UTF-16 code units but a single character
    let text = "🦀 crab";
    let metrics = cells();
    let labels = LabelList::measured([(1, "ANIMAL")], &metrics);
    let entities = Entities::with_offsets(
        [Entity::new(1, 1, 0, 3, 7)],
        &CodePointOffsets::utf16(text),
    );
    let entity = entities.find_by_id(1).expect("entity exists");
    assert_eq!((entity.start_offset, entity.end_offset), (2, 6));

    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(80.0)));
    let lines: Vec<TextLine> = splitter
        .split(text, 0, &entities)
        .expect("labels are known")
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content(text), text);
    assert_eq!(lines[0].levels, 1);
}

#[test]
fn lorem_ipsum_fits() {
    let text = lipsum::lipsum(300);
    let metrics = cells();
    let labels = LabelList::default();
    let entities = Entities::default();
    let max_width = Px(60.0);

    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(max_width));
    let lines: Vec<TextLine> = splitter
        .split(&text, 0, &entities)
        .expect("no labels needed")
        .collect();

    assert!(lines.len() > 1);
    assert_eq!(lines.first().map(|l| l.start_offset), Some(0));
    assert_eq!(lines.last().map(|l| l.end_offset), Some(text.chars().count()));
    for pair in lines.windows(2) {
        assert_eq!(pair[0].end_offset, pair[1].start_offset);
    }
    for line in lines.iter() {
        let content = line.content(&text);
        assert!(!content.is_empty());
        assert!(width_of_text(&content, &metrics) <= max_width, "{content:?} overflows");
    }
}

#[test]
fn oversized_word_still_progresses() {
    let metrics = cells();
    let labels = LabelList::default();
    let entities = Entities::default();
    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(5.0)));
    let lines: Vec<TextLine> = splitter
        .split("x abcdefghij y", 0, &entities)
        .expect("no labels needed")
        .collect();
    let spans: Vec<(usize, usize)> = lines.iter().map(|l| (l.start_offset, l.end_offset)).collect();
    assert_eq!(spans, vec![(0, 2), (2, 7), (7, 12), (12, 14)]);
}

#[test]
fn label_wider_than_the_line_stays_put() {
    let metrics = cells();
    let labels = LabelList::new([Label::new(1, "HUGE", Px(50.0))]);
    let entities = Entities::new([Entity::new(1, 1, 0, 0, 2)]);
    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(10.0)));
    let lines: Vec<TextLine> = splitter
        .split("ab", 0, &entities)
        .expect("labels are known")
        .collect();
    // nothing precedes the label, so breaking would not help
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].label_extent, Px(50.0));
}

#[test]
fn restarting_gives_the_same_lines() {
    let metrics = cells();
    let labels = LabelList::measured([(1, "L")], &metrics);
    let entities = Entities::new([Entity::new(1, 1, 0, 4, 6), Entity::new(2, 1, 0, 4, 9)]);
    let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(7.0)));
    let text = "one two three four";

    let mut partial = splitter.split(text, 0, &entities).expect("labels are known");
    let first = partial.next();
    drop(partial);

    let all: Vec<TextLine> = splitter
        .split(text, 0, &entities)
        .expect("labels are known")
        .collect();
    assert_eq!(first.as_ref(), all.first());
    // both labels hang from "two" on the first line
    assert_eq!(all[0].levels, 2);
}

proptest! {
    #[test]
    fn lines_tile_the_text(
        text in "[ab \n]{0,60}",
        budget in 1u8..12,
        spans in proptest::collection::vec((0usize..60, 0usize..8, 0u8..12), 0..8),
    ) {
        let metrics = cells();
        let max_width = Px(budget as f32);
        // every label fits on a line of its own
        let labels = LabelList::new(spans.iter().enumerate().map(|(id, &(_, _, w))| {
            Label::new(id, "L", Px((w % budget) as f32))
        }));
        let entities = Entities::new(
            spans
                .iter()
                .enumerate()
                .map(|(id, &(start, len, _))| Entity::new(id, id, 0, start, start + len)),
        );
        let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(max_width));
        let lines: Vec<TextLine> = splitter
            .split(&text, 0, &entities)
            .expect("labels are known")
            .collect();
        let chars: Vec<char> = text.chars().collect();

        let mut expected_start = 0;
        for line in lines.iter() {
            prop_assert_eq!(line.start_offset, expected_start);
            prop_assert!(width_of_text(&line.content(&text), &metrics) <= max_width);
            prop_assert!(line.label_extent <= max_width);
            prop_assert!(!line.content(&text).contains('\n'));
            expected_start = match chars.get(line.end_offset) {
                Some('\n') => line.end_offset + 1,
                _ => line.end_offset,
            };
            // only a newline may end an empty line
            prop_assert!(!line.is_empty() || chars.get(line.end_offset) == Some(&'\n'));
        }
        prop_assert_eq!(expected_start, chars.len());
    }
}
