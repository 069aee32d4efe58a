//! Fully justified line breaking.
//!
//! Text is split into paragraphs on line breaks and paragraphs into words on
//! whitespace. Each paragraph is then broken greedily: a word stays on the
//! current line while the line is narrower than the available width and the
//! word spacing needed to stretch it edge to edge is no smaller than the
//! configured minimum. Every closed line except a paragraph's last is stretched
//! to exactly fill the available width.
//!
//! # Example
//!
//! ```
//! use justified_text::{DisplayMetrics, LayoutConfig, LayoutSettings, Margins, Pt};
//! use justified_text::layout::{layout_text, place_lines};
//!
//! // any `Fn(&str) -> Pt` can measure words; a `FontMeasurer` measures with a real font
//! let measurer = |word: &str| Pt(word.chars().count() as f32 * 6.0);
//!
//! let settings = LayoutSettings::new(Pt(240.0))
//!     .with_margins(Margins::symmetric(Pt(12.0), Pt(20.0)))
//!     .with_text_size_dimension("12sp");
//! let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())?;
//!
//! let layout = layout_text("Hello, justified world!\nSecond paragraph.", &config, &measurer)?;
//! for word in place_lines(&layout, &config, &measurer) {
//!     println!("{} at {:?}", word.text, word.coords);
//! }
//! assert_eq!(layout.line_count(), 2);
//! # Ok::<(), justified_text::JustifyError>(())
//! ```

mod breaker;
mod config;
mod line;
mod margins;
mod place;
mod text;

pub use breaker::*;
pub use config::*;
pub use line::*;
pub use margins::*;
pub use place::*;
pub use text::*;
