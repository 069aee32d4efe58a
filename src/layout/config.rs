use crate::dimension::{Dimension, DimensionUnit, DisplayMetrics};
use crate::layout::Margins;
use crate::{JustifyError, Pt, TextMeasurer};

/// Fraction of the basis character's width used as the minimum word spacing when
/// no explicit percentage is given
pub const DEFAULT_WORD_SPACING_BASE_PERCENTAGE: f32 = 0.8;

/// Character whose width the minimum word spacing is derived from by default
pub const DEFAULT_WORD_SPACING_BASE_CHARACTER: char = ' ';

/// Text size used when none is configured
pub const DEFAULT_TEXT_SIZE: Dimension = Dimension {
    value: 14.0,
    unit: DimensionUnit::Sp,
};

/// Line spacing multiplier used when none is configured
pub const DEFAULT_LINE_SPACING_MULTIPLIER: f32 = 1.15;

/// Which edge lines start from when words are placed
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Words start at the left margin and advance rightwards
    #[default]
    LeftToRight,
    /// Words start at the right margin and advance leftwards
    RightToLeft,
}

/// What happens to paragraphs that contain no words, such as the gap left by two
/// consecutive line breaks
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BlankParagraphs {
    /// Emit an empty line for each empty paragraph so it keeps its vertical
    /// space. Paragraphs holding only whitespace, and empty paragraphs after the
    /// last word of the text, are still dropped.
    #[default]
    Preserve,
    /// Emit nothing for blank paragraphs
    Collapse,
}

/// Everything a caller can configure about a layout pass, before validation.
///
/// Several settings come in pairs that are mutually exclusive, such as a text size
/// given in points versus one given as a dimension string. Nothing is checked until
/// the settings are [resolved](LayoutConfig::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    /// Total width of the layout box, margins included
    pub width: Pt,
    pub margins: Margins,
    pub text_size: Option<Pt>,
    pub text_size_dimension: Option<String>,
    /// Multiplies the text size to give the base line height; must be at least 1.0
    pub line_spacing_multiplier: f32,
    /// Added to the line height after the multiplier is applied
    pub line_spacing_extra: Option<Pt>,
    pub line_spacing_extra_dimension: Option<String>,
    pub minimum_word_spacing: Option<Pt>,
    pub minimum_word_spacing_basis: Option<char>,
    pub minimum_word_spacing_percentage: Option<f32>,
    pub force_last_line_justification: bool,
    pub direction: Direction,
    pub blank_paragraphs: BlankParagraphs,
}

impl LayoutSettings {
    pub fn new<W: Into<Pt>>(width: W) -> LayoutSettings {
        LayoutSettings {
            width: width.into(),
            margins: Margins::empty(),
            text_size: None,
            text_size_dimension: None,
            line_spacing_multiplier: DEFAULT_LINE_SPACING_MULTIPLIER,
            line_spacing_extra: None,
            line_spacing_extra_dimension: None,
            minimum_word_spacing: None,
            minimum_word_spacing_basis: None,
            minimum_word_spacing_percentage: None,
            force_last_line_justification: false,
            direction: Direction::default(),
            blank_paragraphs: BlankParagraphs::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_text_size<S: Into<Pt>>(mut self, size: S) -> Self {
        self.text_size = Some(size.into());
        self
    }

    pub fn with_text_size_dimension<S: Into<String>>(mut self, size: S) -> Self {
        self.text_size_dimension = Some(size.into());
        self
    }

    pub fn with_line_spacing_multiplier(mut self, multiplier: f32) -> Self {
        self.line_spacing_multiplier = multiplier;
        self
    }

    pub fn with_line_spacing_extra<S: Into<Pt>>(mut self, extra: S) -> Self {
        self.line_spacing_extra = Some(extra.into());
        self
    }

    pub fn with_line_spacing_extra_dimension<S: Into<String>>(mut self, extra: S) -> Self {
        self.line_spacing_extra_dimension = Some(extra.into());
        self
    }

    pub fn with_minimum_word_spacing<S: Into<Pt>>(mut self, spacing: S) -> Self {
        self.minimum_word_spacing = Some(spacing.into());
        self
    }

    /// Derive the minimum word spacing from the width of `basis`, scaled by
    /// [DEFAULT_WORD_SPACING_BASE_PERCENTAGE] unless a percentage is also given
    pub fn with_minimum_word_spacing_basis(mut self, basis: char) -> Self {
        self.minimum_word_spacing_basis = Some(basis);
        self
    }

    pub fn with_minimum_word_spacing_percentage(mut self, percentage: f32) -> Self {
        self.minimum_word_spacing_percentage = Some(percentage);
        self
    }

    pub fn with_force_last_line_justification(mut self, force: bool) -> Self {
        self.force_last_line_justification = force;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_blank_paragraphs(mut self, blank_paragraphs: BlankParagraphs) -> Self {
        self.blank_paragraphs = blank_paragraphs;
        self
    }
}

/// A validated layout configuration, read-only to the line breaker.
///
/// Built with [LayoutConfig::resolve], which checks every cross-field constraint up
/// front so a layout pass never starts from an inconsistent configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    width: Pt,
    margins: Margins,
    minimum_word_spacing: Pt,
    force_last_line_justification: bool,
    text_size: Pt,
    line_spacing_multiplier: f32,
    line_spacing_extra: Pt,
    direction: Direction,
    blank_paragraphs: BlankParagraphs,
}

impl LayoutConfig {
    /// Validate `settings` and resolve every derived value.
    ///
    /// The minimum word spacing is resolved in priority order: the explicit value;
    /// else the measured width of the basis character (a space by default) times the
    /// percentage (0.8 by default); else, if that comes out as zero, the plain width
    /// of a space.
    ///
    /// ```
    /// use justified_text::{DisplayMetrics, LayoutConfig, LayoutSettings, Pt};
    ///
    /// let measurer = |text: &str| Pt(text.chars().count() as f32 * 10.0);
    /// let settings = LayoutSettings::new(Pt(200.0)).with_text_size_dimension("12pt");
    /// let config = LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())?;
    ///
    /// assert_eq!(config.minimum_word_spacing(), Pt(8.0));
    /// assert_eq!(config.text_size(), Pt(12.0));
    /// # Ok::<(), justified_text::JustifyError>(())
    /// ```
    pub fn resolve<M: TextMeasurer>(
        settings: &LayoutSettings,
        measurer: &M,
        metrics: &DisplayMetrics,
    ) -> Result<LayoutConfig, JustifyError> {
        exclusive(
            settings.text_size.is_some(),
            settings.text_size_dimension.is_some(),
            "text_size",
            "text_size_dimension",
        )?;
        exclusive(
            settings.line_spacing_extra.is_some(),
            settings.line_spacing_extra_dimension.is_some(),
            "line_spacing_extra",
            "line_spacing_extra_dimension",
        )?;
        exclusive(
            settings.minimum_word_spacing.is_some(),
            settings.minimum_word_spacing_basis.is_some(),
            "minimum_word_spacing",
            "minimum_word_spacing_basis",
        )?;
        exclusive(
            settings.minimum_word_spacing.is_some(),
            settings.minimum_word_spacing_percentage.is_some(),
            "minimum_word_spacing",
            "minimum_word_spacing_percentage",
        )?;
        if settings.minimum_word_spacing_percentage.is_some()
            && settings.minimum_word_spacing_basis.is_none()
        {
            return Err(JustifyError::MissingConfiguration {
                present: "minimum_word_spacing_percentage",
                missing: "minimum_word_spacing_basis",
            });
        }

        require(settings.width.is_positive(), "width", settings.width.0)?;
        let Margins {
            top,
            right,
            bottom,
            left,
        } = settings.margins;
        for (name, margin) in [
            ("margins.top", top),
            ("margins.right", right),
            ("margins.bottom", bottom),
            ("margins.left", left),
        ] {
            require(margin.0 >= 0.0, name, margin.0)?;
        }
        require(
            left + right < settings.width,
            "margins.horizontal",
            (left + right).0,
        )?;
        require(
            settings.line_spacing_multiplier >= 1.0,
            "line_spacing_multiplier",
            settings.line_spacing_multiplier,
        )?;

        let DisplayMetrics {
            density,
            scaled_density,
            dpi,
        } = *metrics;
        for (name, value) in [
            ("metrics.density", density),
            ("metrics.scaled_density", scaled_density),
            ("metrics.dpi", dpi),
        ] {
            require(value.is_finite() && value > 0.0, name, value)?;
        }

        let text_size = match (&settings.text_size, &settings.text_size_dimension) {
            (Some(size), _) => *size,
            (None, Some(dimension)) => Dimension::parse(dimension)?.to_pt(metrics),
            (None, None) => DEFAULT_TEXT_SIZE.to_pt(metrics),
        };
        require(text_size.is_positive(), "text_size", text_size.0)?;

        let line_spacing_extra = match (
            &settings.line_spacing_extra,
            &settings.line_spacing_extra_dimension,
        ) {
            (Some(extra), _) => *extra,
            (None, Some(dimension)) => Dimension::parse(dimension)?.to_pt(metrics),
            (None, None) => Pt(0.0),
        };
        require(
            line_spacing_extra.0 >= 0.0,
            "line_spacing_extra",
            line_spacing_extra.0,
        )?;

        let minimum_word_spacing = resolve_minimum_word_spacing(settings, measurer)?;

        let config = LayoutConfig {
            width: settings.width,
            margins: settings.margins,
            minimum_word_spacing,
            force_last_line_justification: settings.force_last_line_justification,
            text_size,
            line_spacing_multiplier: settings.line_spacing_multiplier,
            line_spacing_extra,
            direction: settings.direction,
            blank_paragraphs: settings.blank_paragraphs,
        };
        log::debug!(
            "resolved layout config: width {}, minimum word spacing {}, line height {}",
            config.width,
            config.minimum_word_spacing,
            config.line_height()
        );
        Ok(config)
    }

    /// Total width of the layout box, margins included
    pub fn width(&self) -> Pt {
        self.width
    }

    /// The width a line may occupy once the left and right margins are removed
    pub fn available_width(&self) -> Pt {
        self.width - self.margins.left - self.margins.right
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn minimum_word_spacing(&self) -> Pt {
        self.minimum_word_spacing
    }

    pub fn force_last_line_justification(&self) -> bool {
        self.force_last_line_justification
    }

    pub fn text_size(&self) -> Pt {
        self.text_size
    }

    pub fn line_spacing_multiplier(&self) -> f32 {
        self.line_spacing_multiplier
    }

    pub fn line_spacing_extra(&self) -> Pt {
        self.line_spacing_extra
    }

    /// Vertical distance between the baselines of consecutive lines
    pub fn line_height(&self) -> Pt {
        self.text_size * self.line_spacing_multiplier + self.line_spacing_extra
    }

    /// Half of the space the line height adds on top of the text size; placed
    /// above each line, with the other half below it
    pub fn line_spacing_above(&self) -> Pt {
        (self.text_size * (self.line_spacing_multiplier - 1.0) + self.line_spacing_extra) / 2.0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn blank_paragraphs(&self) -> BlankParagraphs {
        self.blank_paragraphs
    }
}

fn exclusive(
    first_set: bool,
    second_set: bool,
    first: &'static str,
    second: &'static str,
) -> Result<(), JustifyError> {
    if first_set && second_set {
        Err(JustifyError::ConflictingConfiguration { first, second })
    } else {
        Ok(())
    }
}

fn require(ok: bool, name: &'static str, value: f32) -> Result<(), JustifyError> {
    if ok {
        Ok(())
    } else {
        Err(JustifyError::OutOfRange { name, value })
    }
}

fn resolve_minimum_word_spacing<M: TextMeasurer>(
    settings: &LayoutSettings,
    measurer: &M,
) -> Result<Pt, JustifyError> {
    if let Some(spacing) = settings.minimum_word_spacing {
        if !spacing.is_positive() {
            return Err(JustifyError::InvalidSpacing(spacing.0));
        }
        return Ok(spacing);
    }

    let percentage = settings
        .minimum_word_spacing_percentage
        .unwrap_or(DEFAULT_WORD_SPACING_BASE_PERCENTAGE);
    require(
        percentage > 0.0 && percentage <= 1.0,
        "minimum_word_spacing_percentage",
        percentage,
    )?;

    let basis = settings
        .minimum_word_spacing_basis
        .unwrap_or(DEFAULT_WORD_SPACING_BASE_CHARACTER);
    let mut buf = [0u8; 4];
    let spacing = measurer.measure(basis.encode_utf8(&mut buf)) * percentage;
    if spacing.is_positive() {
        return Ok(spacing);
    }

    log::debug!("basis {basis:?} has no width, falling back to the width of a space");
    let space = measurer.measure(" ");
    if space.is_positive() {
        Ok(space)
    } else {
        Err(JustifyError::InvalidSpacing(space.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurer(text: &str) -> Pt {
        text.chars()
            .map(|ch| match ch {
                ' ' => Pt(10.0),
                'm' => Pt(20.0),
                '\u{200B}' => Pt(0.0),
                _ => Pt(8.0),
            })
            .sum()
    }

    fn resolve(settings: LayoutSettings) -> Result<LayoutConfig, JustifyError> {
        LayoutConfig::resolve(&settings, &measurer, &DisplayMetrics::default())
    }

    #[test]
    fn defaults() {
        let config = resolve(LayoutSettings::new(Pt(300.0))).expect("valid settings");
        assert_eq!(config.width(), Pt(300.0));
        assert_eq!(config.minimum_word_spacing(), Pt(8.0));
        assert_eq!(config.text_size(), Pt(14.0));
        assert_eq!(config.line_spacing_multiplier(), 1.15);
        assert!(!config.force_last_line_justification());
        assert_eq!(config.direction(), Direction::LeftToRight);
        assert_eq!(config.blank_paragraphs(), BlankParagraphs::Preserve);
    }

    #[test]
    fn explicit_minimum_spacing_wins() {
        let config = resolve(LayoutSettings::new(Pt(300.0)).with_minimum_word_spacing(Pt(3.5))).unwrap();
        assert_eq!(config.minimum_word_spacing(), Pt(3.5));

        assert_eq!(
            resolve(LayoutSettings::new(Pt(300.0)).with_minimum_word_spacing(Pt(0.0))),
            Err(JustifyError::InvalidSpacing(0.0))
        );
    }

    #[test]
    fn basis_character_and_percentage() {
        let config = resolve(LayoutSettings::new(Pt(300.0)).with_minimum_word_spacing_basis('m')).unwrap();
        assert_eq!(config.minimum_word_spacing(), Pt(16.0));

        let config = resolve(
            LayoutSettings::new(Pt(300.0))
                .with_minimum_word_spacing_basis('m')
                .with_minimum_word_spacing_percentage(0.5),
        )
        .unwrap();
        assert_eq!(config.minimum_word_spacing(), Pt(10.0));
    }

    #[test]
    fn zero_width_basis_falls_back_to_a_space() {
        let config = resolve(LayoutSettings::new(Pt(300.0)).with_minimum_word_spacing_basis('\u{200B}')).unwrap();
        assert_eq!(config.minimum_word_spacing(), Pt(10.0));

        let nothing = |_: &str| Pt(0.0);
        assert_eq!(
            LayoutConfig::resolve(&LayoutSettings::new(Pt(300.0)), &nothing, &DisplayMetrics::default()),
            Err(JustifyError::InvalidSpacing(0.0))
        );
    }

    #[test]
    fn conflicting_settings() {
        assert_eq!(
            resolve(
                LayoutSettings::new(Pt(300.0))
                    .with_minimum_word_spacing(Pt(4.0))
                    .with_minimum_word_spacing_basis('m')
            ),
            Err(JustifyError::ConflictingConfiguration {
                first: "minimum_word_spacing",
                second: "minimum_word_spacing_basis",
            })
        );
        assert_eq!(
            resolve(
                LayoutSettings::new(Pt(300.0))
                    .with_text_size(Pt(12.0))
                    .with_text_size_dimension("12sp")
            ),
            Err(JustifyError::ConflictingConfiguration {
                first: "text_size",
                second: "text_size_dimension",
            })
        );
        assert!(matches!(
            resolve(
                LayoutSettings::new(Pt(300.0))
                    .with_line_spacing_extra(Pt(1.0))
                    .with_line_spacing_extra_dimension("1dp")
            ),
            Err(JustifyError::ConflictingConfiguration { .. })
        ));
    }

    #[test]
    fn percentage_needs_a_basis() {
        assert_eq!(
            resolve(LayoutSettings::new(Pt(300.0)).with_minimum_word_spacing_percentage(0.5)),
            Err(JustifyError::MissingConfiguration {
                present: "minimum_word_spacing_percentage",
                missing: "minimum_word_spacing_basis",
            })
        );
    }

    #[test]
    fn ranges_are_checked() {
        assert_eq!(
            resolve(LayoutSettings::new(Pt(0.0))),
            Err(JustifyError::OutOfRange {
                name: "width",
                value: 0.0
            })
        );
        assert!(matches!(
            resolve(LayoutSettings::new(Pt(300.0)).with_line_spacing_multiplier(0.9)),
            Err(JustifyError::OutOfRange {
                name: "line_spacing_multiplier",
                ..
            })
        ));
        assert!(matches!(
            resolve(
                LayoutSettings::new(Pt(300.0))
                    .with_minimum_word_spacing_basis('m')
                    .with_minimum_word_spacing_percentage(1.5)
            ),
            Err(JustifyError::OutOfRange { .. })
        ));
        assert!(matches!(
            resolve(LayoutSettings::new(Pt(300.0)).with_margins(Margins::trbl(
                Pt(0.0),
                Pt(-1.0),
                Pt(0.0),
                Pt(0.0)
            ))),
            Err(JustifyError::OutOfRange {
                name: "margins.right",
                ..
            })
        ));
        assert_eq!(
            resolve(LayoutSettings::new(Pt(100.0)).with_margins(Margins::symmetric(Pt(0.0), Pt(50.0)))),
            Err(JustifyError::OutOfRange {
                name: "margins.horizontal",
                value: 100.0
            })
        );
        assert!(resolve(
            LayoutSettings::new(Pt(100.0)).with_margins(Margins::symmetric(Pt(0.0), Pt(49.0)))
        )
        .is_ok());
    }

    #[test]
    fn display_metrics_are_checked() {
        let settings = LayoutSettings::new(Pt(300.0)).with_text_size_dimension("12sp");
        let metrics = DisplayMetrics {
            dpi: 0.0,
            ..DisplayMetrics::default()
        };
        assert_eq!(
            LayoutConfig::resolve(&settings, &measurer, &metrics),
            Err(JustifyError::OutOfRange {
                name: "metrics.dpi",
                value: 0.0
            })
        );

        let metrics = DisplayMetrics {
            density: f32::INFINITY,
            ..DisplayMetrics::default()
        };
        assert!(matches!(
            LayoutConfig::resolve(&settings, &measurer, &metrics),
            Err(JustifyError::OutOfRange {
                name: "metrics.density",
                ..
            })
        ));

        let metrics = DisplayMetrics {
            scaled_density: -1.0,
            ..DisplayMetrics::default()
        };
        assert!(matches!(
            LayoutConfig::resolve(&settings, &measurer, &metrics),
            Err(JustifyError::OutOfRange {
                name: "metrics.scaled_density",
                ..
            })
        ));
    }

    #[test]
    fn dimensions_are_converted() {
        let metrics = DisplayMetrics {
            density: 2.0,
            scaled_density: 2.0,
            dpi: 72.0,
        };
        let settings = LayoutSettings::new(Pt(300.0))
            .with_text_size_dimension("10sp")
            .with_line_spacing_multiplier(1.5)
            .with_line_spacing_extra_dimension("2dp");
        let config = LayoutConfig::resolve(&settings, &measurer, &metrics).unwrap();
        assert_eq!(config.text_size(), Pt(20.0));
        assert_eq!(config.line_spacing_extra(), Pt(4.0));
        assert_eq!(config.line_height(), Pt(34.0));
        assert_eq!(config.line_spacing_above(), Pt(7.0));

        assert_eq!(
            resolve(LayoutSettings::new(Pt(300.0)).with_text_size_dimension("twelve")),
            Err(JustifyError::MalformedDimension("twelve".into()))
        );
    }
}
