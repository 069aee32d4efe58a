use crate::layout::{Direction, Layout, LayoutConfig};
use crate::{Pt, TextMeasurer};

/// A word positioned within the layout box. Coordinates are measured from the
/// top-left corner of the box, `y` being the baseline the word sits on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub coords: (Pt, Pt),
}

/// Where the baseline of the first line sits: below the top margin, half of the
/// extra line spacing, and the text size
pub fn baseline_start(config: &LayoutConfig) -> Pt {
    config.margins().top + config.line_spacing_above() + config.text_size()
}

/// Position every word of every line.
///
/// Each line, empty or not, moves the baseline down by one line height. Left to
/// right lines start at the left margin; right to left lines start at the right
/// margin and run leftwards, keeping the characters of each word in their
/// original order.
pub fn place_lines<M: TextMeasurer>(
    layout: &Layout,
    config: &LayoutConfig,
    measurer: &M,
) -> Vec<PlacedWord> {
    let mut placed = Vec::with_capacity(layout.lines.iter().map(|l| l.word_count()).sum());
    let mut y = baseline_start(config);

    for line in layout.lines.iter() {
        match config.direction() {
            Direction::LeftToRight => {
                let mut x = config.margins().left;
                for word in line.words() {
                    placed.push(PlacedWord {
                        text: word.clone(),
                        coords: (x, y),
                    });
                    x += measurer.measure(word) + line.spacing();
                }
            }
            Direction::RightToLeft => {
                let mut x = config.width() - config.margins().right;
                for word in line.words() {
                    x -= measurer.measure(word);
                    placed.push(PlacedWord {
                        text: word.clone(),
                        coords: (x, y),
                    });
                    x -= line.spacing();
                }
            }
        }

        y += layout.line_height;
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_text, LayoutSettings, Margins};
    use crate::DisplayMetrics;

    fn measurer(text: &str) -> Pt {
        match text {
            "The" => Pt(30.0),
            "quick" => Pt(40.0),
            "brown" => Pt(35.0),
            "fox" => Pt(20.0),
            _ => Pt(10.0),
        }
    }

    fn place(direction: Direction, text: &str) -> Vec<PlacedWord> {
        let settings = LayoutSettings::new(Pt(110.0))
            .with_margins(Margins::trbl(Pt(2.0), Pt(4.0), Pt(0.0), Pt(6.0)))
            .with_minimum_word_spacing(Pt(5.0))
            .with_text_size(Pt(10.0))
            .with_line_spacing_multiplier(2.0)
            .with_direction(direction);
        let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default()).unwrap();
        let layout = layout_text(text, &config, &measurer).unwrap();
        place_lines(&layout, &config, &measurer)
    }

    fn word(text: &str, x: f32, y: f32) -> PlacedWord {
        PlacedWord {
            text: text.to_string(),
            coords: (Pt(x), Pt(y)),
        }
    }

    #[test]
    fn left_to_right() {
        assert_eq!(
            place(Direction::LeftToRight, "The quick brown fox"),
            vec![
                word("The", 6.0, 17.0),
                word("quick", 66.0, 17.0),
                word("brown", 6.0, 37.0),
                word("fox", 46.0, 37.0),
            ]
        );
    }

    #[test]
    fn right_to_left() {
        assert_eq!(
            place(Direction::RightToLeft, "The quick brown fox"),
            vec![
                word("The", 76.0, 17.0),
                word("quick", 6.0, 17.0),
                word("brown", 71.0, 37.0),
                word("fox", 46.0, 37.0),
            ]
        );
    }

    #[test]
    fn blank_lines_still_advance() {
        let placed = place(Direction::LeftToRight, "The\n\nfox");
        assert_eq!(placed, vec![word("The", 6.0, 17.0), word("fox", 6.0, 57.0)]);
    }
}
