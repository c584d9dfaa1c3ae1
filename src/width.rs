use crate::metrics::CharWidth;
use crate::Px;

/// Accumulates the rendered width of the line being built and decides when it is full
#[derive(Debug)]
pub struct WidthCalculator<'m, M: ?Sized> {
    metrics: &'m M,
    max_width: Px,
    width: Px,
}

impl<'m, M: CharWidth + ?Sized> WidthCalculator<'m, M> {
    pub fn new(metrics: &'m M, max_width: Px) -> WidthCalculator<'m, M> {
        WidthCalculator {
            metrics,
            max_width,
            width: Px::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.width = Px::ZERO;
    }

    pub fn add(&mut self, ch: char) {
        self.width += self.metrics.char_width(ch);
    }

    pub fn width(&self) -> Px {
        self.width
    }

    pub fn max_width(&self) -> Px {
        self.max_width
    }

    pub fn char_width(&self, ch: char) -> Px {
        self.metrics.char_width(ch)
    }

    /// Whether `ch` has to start a new line: it is a newline, or it plus `extra` more
    /// pixels would overflow the line
    pub fn needs_newline(&self, ch: char, extra: Px) -> bool {
        ch == '\n' || self.width + self.metrics.char_width(ch) + extra > self.max_width
    }

    /// Whether anything has been added since the last reset
    pub fn remains(&self) -> bool {
        self.width > Px::ZERO
    }
}
