use justified_text::layout::{layout_text, place_lines};
use justified_text::{
    DisplayMetrics, Font, FontMeasurer, JustifyError, LayoutConfig, LayoutSettings, Margins, Pt,
};

/// Lays out some lorem ipsum text. With no arguments, a monospace measurer is used
/// and the result is drawn as a character grid; given the path to a TTF/OTF font,
/// words are measured with that font and their positions are printed instead.
fn main() -> Result<(), JustifyError> {
    let text = format!("{}\n\n{}", lipsum::lipsum(60), lipsum::lipsum(90));
    let settings = LayoutSettings::new(Pt(72.0))
        .with_margins(Margins::symmetric(Pt(0.0), Pt(2.0)))
        .with_text_size(Pt(1.0))
        .with_line_spacing_multiplier(1.0);

    match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).expect("can read font file");
            let font = Font::load(bytes)?;
            let size = Pt(12.0);
            let measurer = FontMeasurer::new(&font, size);
            let settings = LayoutSettings::new(Pt(320.0))
                .with_text_size(size)
                .with_line_spacing_extra(font.leading(size));
            let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())?;
            let layout = layout_text(&text, &config, &measurer)?;
            for word in place_lines(&layout, &config, &measurer) {
                println!("{:>8.2} {:>8.2}  {}", word.coords.0 .0, word.coords.1 .0, word.text);
            }
            println!("height: {}", layout.measured_height());
        }
        None => {
            // every character is one column wide
            let measurer = |text: &str| Pt(text.chars().count() as f32);
            let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())?;
            let layout = layout_text(&text, &config, &measurer)?;

            let columns = config.width().0 as usize;
            let mut grid = vec![vec![' '; columns]; layout.line_count()];
            for word in place_lines(&layout, &config, &measurer) {
                let row = (word.coords.1 .0 - 1.0) as usize;
                let column = word.coords.0 .0.round() as usize;
                for (i, ch) in word.text.chars().enumerate() {
                    if let Some(cell) = grid[row].get_mut(column + i) {
                        *cell = ch;
                    }
                }
            }

            println!("+{}+", "-".repeat(columns));
            for row in grid {
                println!("|{}|", row.into_iter().collect::<String>());
            }
            println!("+{}+", "-".repeat(columns));
        }
    }

    Ok(())
}
