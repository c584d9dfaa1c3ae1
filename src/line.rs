use crate::Px;

/// One wrapped row of the source text, `[start_offset, end_offset)` in code points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextLine {
    pub start_offset: usize,
    pub end_offset: usize,
    /// How many label levels the line needs so that no two labels collide
    pub levels: usize,
    /// Right edge of the rightmost label hanging on this line
    pub label_extent: Px,
}

impl TextLine {
    pub fn new(start_offset: usize, end_offset: usize) -> TextLine {
        TextLine {
            start_offset,
            end_offset,
            levels: 0,
            label_extent: Px::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset >= self.end_offset
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start_offset <= offset && offset < self.end_offset
    }

    /// The characters of `text` this line covers
    pub fn content(&self, text: &str) -> String {
        text.chars()
            .skip(self.start_offset)
            .take(self.len())
            .collect()
    }
}
