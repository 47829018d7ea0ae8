//! # subrip - read and write SubRip subtitles with styled text
//!
//! ## Usage
//!
//!     use subrip::Subtitle;
//!
//!     let content = "1\n00:01:43,438 --> 00:01:47,150\n<i>Something</i> is coming.\n";
//!     let subtitle = Subtitle::parse(content).unwrap();
//!     assert_eq!(subtitle.cues[0].text().to_string(), "Something is coming.");
//!     let srt = subtitle.render().unwrap();
//!
//! The output will be
//!
//! ```text
//! 1
//! 00:01:43,438 --> 00:01:47,150
//! <i>Something</i> is coming.
//!
//! ```
//!
//! ## Streaming
//!
//! [`Subtitle::parse`] collects every cue in memory. Large inputs can be
//! read one cue at a time with [`CueReader`], and written one line at a time
//! with [`CueWriter`]:
//!
//!     use std::io::Cursor;
//!     use subrip::{CueReader, CueWriter};
//!
//!     let input = Cursor::new("3\n0:0:1,000 --> 0:0:2,000\nhello\n");
//!     let cues = CueReader::from_reader(input).collect::<Result<Vec<_>, _>>().unwrap();
//!     let lines = CueWriter::new(&cues).collect::<Result<Vec<_>, _>>().unwrap();
//!     assert_eq!(lines, ["1", "00:00:01,000 --> 00:00:02,000", "hello", ""]);
//!
pub mod config;
pub mod cue;
pub mod error;
pub mod markup;
pub mod node;
pub mod render;
pub mod style;
pub mod timing;
pub mod token;
mod parser;
mod utils;

use std::io::BufRead;

use serde::{Deserialize, Serialize};

pub use config::Options;
pub use cue::Cue;
pub use error::{Error, Result};
pub use node::{CueNode, CueText};
pub use parser::CueReader;
pub use render::CueWriter;
pub use style::{Style, StyleKey, Styles};

/// A whole subtitle file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    /// File level default styles, carried along but not applied by the writer
    pub styles: Styles,
    pub cues: Vec<Cue>,
}

impl Subtitle {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self {
            styles: Styles::new(),
            cues,
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Parse a whole SubRip document, failing on the first malformed cue
    pub fn parse<S: AsRef<str>>(content: S) -> Result<Self> {
        Self::parse_with(content, &Options::default())
    }

    pub fn parse_with<S: AsRef<str>>(content: S, options: &Options) -> Result<Self> {
        let reader =
            CueReader::new(content.as_ref().lines()).with_options(options.reader.clone());
        Ok(Self::new(reader.collect::<Result<Vec<_>>>()?))
    }

    pub fn from_reader<R: BufRead>(reader: R, options: &Options) -> Result<Self> {
        let reader = CueReader::from_reader(reader).with_options(options.reader.clone());
        Ok(Self::new(reader.collect::<Result<Vec<_>>>()?))
    }

    /// Render every cue as a SubRip document
    pub fn render(&self) -> Result<String> {
        self.render_with(&Options::default())
    }

    pub fn render_with(&self, options: &Options) -> Result<String> {
        let mut srt = String::new();
        for line in CueWriter::new(&self.cues).with_options(options.writer.clone()) {
            srt.push_str(&line?);
            srt.push('\n');
        }
        Ok(srt)
    }
}
