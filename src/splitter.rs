use crate::entity::{Entities, EntityId};
use crate::geometry::PxRange;
use crate::label::LabelList;
use crate::level::LevelManager;
use crate::line::TextLine;
use crate::metrics::CharWidth;
use crate::options::LayoutOptions;
use crate::width::WidthCalculator;
use crate::{LayoutError, Px};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Wraps annotated text into display lines that fit a width budget, labels included.
///
/// Lines break at spaces where possible. A word is only broken in the middle when it can't
/// fit on a line of its own, and an entity whose label would stick out past the budget
/// moves to the next line together with its first character.
#[derive(Debug)]
pub struct TextLineSplitter<'a, M: ?Sized> {
    metrics: &'a M,
    labels: &'a LabelList,
    max_width: Px,
}

impl<'a, M: CharWidth + ?Sized> TextLineSplitter<'a, M> {
    pub fn new(metrics: &'a M, labels: &'a LabelList, options: LayoutOptions) -> Self {
        TextLineSplitter {
            metrics,
            labels,
            max_width: options.max_width(),
        }
    }

    /// Start splitting `text` at the code point `start_offset`.
    ///
    /// Every label needed along the way is looked up here, so a missing label is reported
    /// before any line is produced and the returned [Lines] never fails.
    pub fn split<'e>(
        &self,
        text: &str,
        start_offset: usize,
        entities: &'e Entities,
    ) -> Result<Lines<'e, M>, LayoutError>
    where
        'a: 'e,
    {
        let chars: Vec<char> = text.chars().collect();
        let mut calculator = WidthCalculator::new(self.metrics, self.max_width);
        let word_widths = word_widths(&chars, &mut calculator);
        calculator.reset();

        let mut label_widths = HashMap::new();
        let mut widest_label_at = HashMap::new();
        for entity in entities
            .iter()
            .filter(|e| (start_offset..chars.len()).contains(&e.start_offset))
        {
            label_widths.insert(entity.id, self.labels.get_by_id(entity.label)?.width);
            if let Entry::Vacant(slot) = widest_label_at.entry(entity.start_offset) {
                let ids = entities.starting_at(entity.start_offset).map(|e| e.label);
                slot.insert(self.labels.max_label_width(ids)?);
            }
        }

        log::debug!(
            "splitting {} characters from offset {} at {}",
            chars.len(),
            start_offset,
            self.max_width
        );

        Ok(Lines {
            chars,
            entities,
            word_widths,
            label_widths,
            widest_label_at,
            calculator,
            levels: LevelManager::new(),
            line_start: start_offset,
            position: start_offset,
            finished: false,
        })
    }
}

/// Width of every space-delimited word, keyed by the offset of its first character
fn word_widths<M: CharWidth + ?Sized>(
    chars: &[char],
    calculator: &mut WidthCalculator<'_, M>,
) -> HashMap<usize, Px> {
    let mut widths = HashMap::new();
    let mut word_start: Option<usize> = None;
    calculator.reset();

    for (i, &ch) in chars.iter().enumerate() {
        match (word_start, ch == ' ') {
            (None, false) => {
                word_start = Some(i);
                calculator.add(ch);
            }
            (Some(_), false) => calculator.add(ch),
            (Some(start), true) => {
                widths.insert(start, calculator.width());
                calculator.reset();
                word_start = None;
            }
            (None, true) => {}
        }
    }

    if let Some(start) = word_start {
        widths.insert(start, calculator.width());
    }
    widths
}

/// The display lines of one text, produced one at a time.
///
/// Each call to [Iterator::next] scans forward until the current line has to end. The scan
/// state (position, width so far, label levels of the current line) lives here, so a
/// `Lines` can only be driven by one reader; call [TextLineSplitter::split] again to start
/// over.
#[derive(Debug)]
pub struct Lines<'e, M: ?Sized> {
    chars: Vec<char>,
    entities: &'e Entities,
    word_widths: HashMap<usize, Px>,
    label_widths: HashMap<EntityId, Px>,
    widest_label_at: HashMap<usize, Px>,
    calculator: WidthCalculator<'e, M>,
    levels: LevelManager<EntityId>,
    line_start: usize,
    position: usize,
    finished: bool,
}

impl<'e, M: CharWidth + ?Sized> Lines<'e, M> {
    fn needs_newline(&self, i: usize, ch: char) -> bool {
        if ch == '\n' {
            return true;
        }
        // breaking an empty line would never make progress
        if i == self.line_start {
            return false;
        }

        let char_width = self.calculator.char_width(ch);
        let beyond = |width: Option<&Px>| {
            width.map_or(Px::ZERO, |&w| (w - char_width).max(Px::ZERO))
        };

        if self.calculator.needs_newline(ch, beyond(self.word_widths.get(&i))) {
            return true;
        }
        if self.calculator.needs_newline(ch, beyond(self.widest_label_at.get(&i))) {
            log::trace!("label at offset {} forces a break", i);
            return true;
        }
        false
    }

    /// Give every entity starting at `i` a level for its label, which hangs from the
    /// current x position
    fn place_labels(&mut self, i: usize) {
        let x = self.calculator.width();
        let entities = self.entities;
        for entity in entities.starting_at(i) {
            if let Some(&width) = self.label_widths.get(&entity.id) {
                self.levels.assign(entity.id, &[PxRange::with_width(x, width)]);
            }
        }
    }

    fn finish_line(&mut self, end_offset: usize) -> TextLine {
        let line = TextLine {
            start_offset: self.line_start,
            end_offset,
            levels: self.levels.max_level(),
            label_extent: self.levels.extent(),
        };
        log::trace!(
            "line [{}, {}) is {} wide with {} label levels",
            line.start_offset,
            line.end_offset,
            self.calculator.width(),
            line.levels
        );

        self.calculator.reset();
        self.levels.reset();
        line
    }
}

impl<'e, M: CharWidth + ?Sized> Iterator for Lines<'e, M> {
    type Item = TextLine;

    fn next(&mut self) -> Option<TextLine> {
        while self.position < self.chars.len() {
            let i = self.position;
            let ch = self.chars[i];
            self.position += 1;

            let mut line = None;
            if self.needs_newline(i, ch) {
                line = Some(self.finish_line(i));
                self.line_start = if ch == '\n' { i + 1 } else { i };
            }

            self.place_labels(i);
            if ch != '\n' {
                self.calculator.add(ch);
            }

            if line.is_some() {
                return line;
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;

        let end = self.chars.len();
        if self.calculator.remains() || self.line_start < end {
            Some(self.finish_line(end))
        } else {
            None
        }
    }
}
