//! Error type shared by the reader, the writer and the configuration loader

use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An index line is missing or is not a plain number
    #[error("line {line}: index not found in {content:?}")]
    IndexFormat { line: usize, content: String },

    /// Only raised when the reader runs with `strict_index`
    #[error("line {line}: inconsistent index {index} (previous was {previous})")]
    IndexSequence {
        line: usize,
        index: u64,
        previous: u64,
    },

    /// A timing line holds zero or several `-->` separators
    #[error("line {line}: expected one timing separator, found {found}")]
    Separator { line: usize, found: usize },

    #[error("failed to parse timing {value:?}")]
    TimingFormat { value: String },

    /// [`Error::TimingFormat`] raised while reading a stream, with its position
    ///
    /// The reader never yields a bare `TimingFormat`, match on this variant or
    /// use [`Error::is_timing_format`].
    #[error("line {line}: invalid timing line")]
    Timing {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("timing {duration:?} is beyond 99:59:59,999")]
    TimingRange { duration: Duration },

    #[error("unknown tag <{tag}>")]
    UnknownMarkup { tag: String },

    #[error("font size {value:?} is not an integer")]
    FontSize { value: String },

    /// A text block has no content, `line` is 0 when raised by the writer
    #[error("line {line}: cue has no text")]
    EmptyCue { line: usize },

    /// The stream ended between an index line and its timings
    #[error("line {line}: stream ended before the cue timings")]
    Truncated { line: usize },

    #[error("failed to read config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for a timing that failed to decode, bare or wrapped in
    /// [`Error::Timing`]
    pub fn is_timing_format(&self) -> bool {
        match self {
            Self::TimingFormat { .. } => true,
            Self::Timing { source, .. } => source.is_timing_format(),
            _ => false,
        }
    }

    /// Input line the error was detected on, if it came from a stream
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::IndexFormat { line, .. }
            | Self::IndexSequence { line, .. }
            | Self::Separator { line, .. }
            | Self::Timing { line, .. }
            | Self::Truncated { line } => Some(*line),
            Self::EmptyCue { line } if *line > 0 => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing;
    use crate::token::Timings;

    #[test]
    fn test_is_timing_format() {
        let err = timing::decode("1:2:3").unwrap_err();
        assert!(err.is_timing_format());
        assert_eq!(err.line(), None);

        let err = Timings::new("00:00:01,000 --> 1:2:3", 7).unwrap_err();
        assert!(err.is_timing_format());
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.to_string(), "line 7: invalid timing line");

        let err = Timings::new("00:00:01,000 00:00:02,000", 7).unwrap_err();
        assert!(!err.is_timing_format());
        assert!(!Error::EmptyCue { line: 0 }.is_timing_format());
    }
}
