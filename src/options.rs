use crate::units::Px;

/// Horizontal padding inside the area text is laid out in. Nothing stops content from
/// spilling into the padding; it only narrows the width budget handed to the line splitter
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Padding {
    pub left: Px,
    pub right: Px,
}

impl Padding {
    pub fn new(left: Px, right: Px) -> Padding {
        Padding { left, right }
    }

    /// Create padding where both sides are equal
    pub fn all<D: Into<Px>>(value: D) -> Padding {
        let value: Px = value.into();
        Padding {
            left: value,
            right: value,
        }
    }

    /// Create padding of zero on both sides
    pub fn empty() -> Padding {
        Padding::default()
    }

    /// Add a gutter to the left side, e.g. to leave room for line numbers
    pub fn with_gutter_left(&self, gutter: Px) -> Padding {
        Padding {
            left: self.left + gutter,
            right: self.right,
        }
    }

    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }
}

/// Settings for splitting text into display lines
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Total width available, padding included
    pub width: Px,
    pub padding: Padding,
}

impl LayoutOptions {
    pub fn new<D: Into<Px>>(width: D) -> LayoutOptions {
        LayoutOptions {
            width: width.into(),
            padding: Padding::empty(),
        }
    }

    pub fn padding(mut self, padding: Padding) -> LayoutOptions {
        self.padding = padding;
        self
    }

    /// The width a line's text and labels must fit in
    pub fn max_width(&self) -> Px {
        (self.width - self.padding.horizontal()).max(Px::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_narrows_the_budget() {
        let options = LayoutOptions::new(Px(100.0)).padding(Padding::all(Px(10.0)));
        assert_eq!(options.max_width(), Px(80.0));

        let options = options.padding(Padding::all(Px(10.0)).with_gutter_left(Px(30.0)));
        assert_eq!(options.max_width(), Px(50.0));

        let options = LayoutOptions::new(Px(10.0)).padding(Padding::new(Px(8.0), Px(8.0)));
        assert_eq!(options.max_width(), Px::ZERO);
    }
}
