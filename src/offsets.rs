/// Maps an offset measured in some storage unit onto a code point offset
pub trait OffsetConverter {
    fn to_code_point_offset(&self, raw: usize) -> usize;
}

impl<F: Fn(usize) -> usize> OffsetConverter for F {
    fn to_code_point_offset(&self, raw: usize) -> usize {
        self(raw)
    }
}

/// A lookup table from storage-unit offsets to code point offsets for one text.
///
/// Annotations coming from a browser are usually counted in UTF-16 code units while the
/// layout code counts characters, so anything outside the BMP shifts every later offset.
#[derive(Debug, Clone, Default)]
pub struct CodePointOffsets {
    /// storage offset of the start of each code point
    starts: Vec<usize>,
    /// storage length of the whole text
    end: usize,
}

impl CodePointOffsets {
    /// Table for offsets counted in UTF-16 code units
    pub fn utf16(text: &str) -> CodePointOffsets {
        CodePointOffsets::from_unit_lengths(text.chars().map(char::len_utf16))
    }

    /// Table for offsets counted in UTF-8 bytes
    pub fn utf8(text: &str) -> CodePointOffsets {
        CodePointOffsets::from_unit_lengths(text.chars().map(char::len_utf8))
    }

    fn from_unit_lengths<I: Iterator<Item = usize>>(lengths: I) -> CodePointOffsets {
        let mut starts = Vec::with_capacity(lengths.size_hint().0);
        let mut end = 0;
        for len in lengths {
            starts.push(end);
            end += len;
        }
        CodePointOffsets { starts, end }
    }

    /// Number of code points in the text
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

impl OffsetConverter for CodePointOffsets {
    /// Offsets inside a multi-unit character resolve to that character; offsets at or past
    /// the end resolve to the code point length
    fn to_code_point_offset(&self, raw: usize) -> usize {
        if raw >= self.end {
            return self.starts.len();
        }
        self.starts.partition_point(|&s| s <= raw) - 1
    }
}
