use crate::{LayoutError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use unicode_width::UnicodeWidthChar;

/// Something that knows how wide a single character renders. Layout never looks at fonts
/// directly; it only asks this
pub trait CharWidth {
    fn char_width(&self, ch: char) -> Px;
}

impl<F: Fn(char) -> Px> CharWidth for F {
    fn char_width(&self, ch: char) -> Px {
        self(ch)
    }
}

/// Calculate the width of a given string of text
pub fn width_of_text<M: CharWidth + ?Sized>(text: &str, metrics: &M) -> Px {
    text.chars().map(|ch| metrics.char_width(ch)).sum()
}

/// Fixed-cell metrics, as in a terminal grid. Wide (CJK, most emoji) characters take two
/// cells; control characters take none
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellMetrics {
    pub cell_width: Px,
}

impl CellMetrics {
    pub fn new(cell_width: Px) -> CellMetrics {
        CellMetrics { cell_width }
    }
}

impl CharWidth for CellMetrics {
    fn char_width(&self, ch: char) -> Px {
        if ch.is_control() {
            return Px::ZERO;
        }
        let cells = ch.width().unwrap_or(0);
        self.cell_width * cells as f32
    }
}

/// Proportional metrics read from a parsed TrueType / OpenType face at a given size
pub struct FontMetrics {
    pub face: OwnedFace,
    pub size: Px,
}

impl FontMetrics {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>, size: Px) -> Result<FontMetrics, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(FontMetrics { face, size })
    }

    fn scaling(&self) -> Px {
        self.size / self.face.as_face_ref().units_per_em() as f32
    }

    /// The glyph to draw `ch` with, falling back to the replacement character and then to
    /// a question mark if the font doesn't cover it
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }
}

impl CharWidth for FontMetrics {
    fn char_width(&self, ch: char) -> Px {
        if ch.is_control() {
            return Px::ZERO;
        }

        self.glyph_id(ch)
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(gid))
            .map(|advance| self.scaling() * advance as f32)
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics")
            .field("glyphs", &self.face.as_face_ref().number_of_glyphs())
            .field("size", &self.size)
            .finish()
    }
}
