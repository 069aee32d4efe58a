use crate::{Font, Pt};

/// Measures the rendered width of text under a fixed font, size, and style.
///
/// Layout assumes a measurer is pure for the duration of a pass: the same word
/// always measures the same width. Any `Fn(&str) -> Pt` is a measurer, which
/// makes it easy to plug in host font engines or fixed widths for testing:
///
/// ```
/// use justified_text::{Pt, TextMeasurer};
///
/// let monospace = |text: &str| Pt(text.chars().count() as f32 * 6.0);
/// assert_eq!(monospace.measure("word"), Pt(24.0));
/// ```
pub trait TextMeasurer {
    /// The width of `text` when rendered on a single line
    fn measure(&self, text: &str) -> Pt;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> Pt,
{
    fn measure(&self, text: &str) -> Pt {
        self(text)
    }
}

/// Measures text using the horizontal advances of a [Font] at a given size
#[derive(Debug, Copy, Clone)]
pub struct FontMeasurer<'f> {
    pub font: &'f Font,
    pub size: Pt,
}

impl<'f> FontMeasurer<'f> {
    pub fn new(font: &'f Font, size: Pt) -> FontMeasurer<'f> {
        FontMeasurer { font, size }
    }
}

impl TextMeasurer for FontMeasurer<'_> {
    fn measure(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.size)
    }
}
