use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::node::CueText;
use crate::timing::serde_timing;

/// One timed caption
///
/// The reader does not check that `end_time` comes after `start_time`, use
/// [`Cue::is_valid`] when that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<u64>,
    #[serde(with = "serde_timing")]
    start_time: Duration,
    #[serde(with = "serde_timing")]
    end_time: Duration,
    text: CueText,
}

impl Cue {
    pub fn new<T: Into<CueText>>(start_time: Duration, end_time: Duration, text: T) -> Self {
        Self {
            index: None,
            start_time,
            end_time,
            text: text.into(),
        }
    }

    pub(crate) fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Index found in the source stream, informational only
    pub fn index(&self) -> Option<u64> {
        self.index
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    pub fn end_time(&self) -> Duration {
        self.end_time
    }

    pub fn text(&self) -> &CueText {
        &self.text
    }

    pub fn is_valid(&self) -> bool {
        self.end_time >= self.start_time
    }

    /// Time the cue stays on screen, `None` if it ends before it starts
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.checked_sub(self.start_time)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?} -> {:?}] {}",
            self.start_time, self.end_time, self.text
        )
    }
}
