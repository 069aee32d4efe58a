use thiserror::Error;

/// All errors that the crate can generate
///
/// Every variant is a precondition violation: it is raised while configuring or
/// accumulating a line, before any line list is handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JustifyError {
    #[error("word {0:?} must be a single word without whitespace")]
    /// A string given to a [Line](crate::layout::Line) contained whitespace
    InvalidWord(String),

    #[error("word spacing must be more than 0, got {0}")]
    /// A spacing that must be positive was zero, negative, or `NaN`
    InvalidSpacing(f32),

    #[error("{first} and {second} cannot be used together")]
    /// Two mutually exclusive settings were both supplied
    ConflictingConfiguration {
        first: &'static str,
        second: &'static str,
    },

    #[error("{missing} must be set when {present} is set")]
    /// A setting was supplied without the companion it depends on
    MissingConfiguration {
        present: &'static str,
        missing: &'static str,
    },

    #[error("malformed dimension {0:?}, expected a number followed by one of px, dp, dip, sp, pt, in, mm")]
    /// A dimension string did not match `<number><unit>`
    MalformedDimension(String),

    #[error("{name} is out of range: {value}")]
    /// A numeric setting fell outside its permitted range
    OutOfRange { name: &'static str, value: f32 },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
