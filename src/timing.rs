//! SubRip timings
//!
//! A timing is an offset from the start of the stream written as
//! `HH:MM:SS,mmm`. Hours, minutes and seconds may be written with one or two
//! digits when reading, milliseconds always take three digits and are
//! separated by a comma. [`encode`] always writes the zero-padded form.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{1,2}):(\d{1,2}),(\d{3})$").unwrap()
});

/// Largest timing the format can hold, `99:59:59,999`
pub const MAX_TIMING: Duration = Duration::from_millis(
    99 * 3_600_000 + 59 * 60_000 + 59 * 1_000 + 999,
);

pub fn decode<S: AsRef<str>>(text: S) -> Result<Duration> {
    let text = text.as_ref().trim();
    let caps = TIMING_REGEX.captures(text).ok_or_else(|| Error::TimingFormat {
        value: text.to_owned(),
    })?;
    // every group is at most three ASCII digits so parsing cannot overflow
    let field = |i: usize| caps[i].parse::<u64>().unwrap_or_default();
    let millis =
        field(1) * 3_600_000 + field(2) * 60_000 + field(3) * 1_000 + field(4);
    Ok(Duration::from_millis(millis))
}

/// Write `duration` as `HH:MM:SS,mmm`, anything below a millisecond is dropped
pub fn encode(duration: Duration) -> Result<String> {
    if duration > MAX_TIMING {
        return Err(Error::TimingRange { duration });
    }
    let ms = duration.as_millis();
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    Ok(format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}"))
}

/// Serde adapter storing a [`Duration`] as a SubRip timing string
pub(crate) mod serde_timing {
    use std::time::Duration;

    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = super::encode(*duration).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::decode(s).map_err(serde::de::Error::custom)
    }
}
