//! Greedy, fully justified text layout.
//!
//! Given text, a [TextMeasurer] and a [LayoutConfig], [layout::layout_text] breaks
//! the text into lines whose word spacing stretches each line to the full
//! available width, never letting that spacing drop below a minimum.

mod dimension;
pub use dimension::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Line breaking, justification, and word placement
pub mod layout;
pub use layout::{BlankParagraphs, Direction, Layout, LayoutConfig, LayoutSettings, Line, Margins};

mod measure;
pub use measure::*;

mod units;
pub use units::*;
