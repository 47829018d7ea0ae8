use std::time::Duration;

use crate::error::{Error, Result};
use crate::timing;

/// The `start --> end` line of a cue block
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Timings {
    pub start: Duration,
    pub end: Duration,
}

impl Timings {
    pub const SEPARATOR: &'static str = "-->";

    /// Parse a timing line, `lineno` is only used to locate errors
    pub fn new<S: AsRef<str>>(line: S, lineno: usize) -> Result<Self> {
        let line = line.as_ref();
        let parts = line.split(Self::SEPARATOR).collect::<Vec<&str>>();
        if parts.len() != 2 {
            return Err(Error::Separator {
                line: lineno,
                found: parts.len() - 1,
            });
        }
        let decode = |text: &str| {
            timing::decode(text).map_err(|e| Error::Timing {
                line: lineno,
                source: Box::new(e),
            })
        };
        Ok(Self {
            start: decode(parts[0])?,
            end: decode(parts[1])?,
        })
    }
}
