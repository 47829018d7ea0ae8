use once_cell::sync::Lazy;
use regex::Regex;

static INDEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// The sequence number opening a cue block
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Index {
    pub value: u64,
}

impl Index {
    pub fn new<S: AsRef<str>>(line: S) -> Option<Self> {
        let line = line.as_ref().trim();
        if !INDEX_REGEX.is_match(line) {
            return None;
        }
        // digits only, so parsing can only fail on overflow
        let value = line.parse::<u64>().unwrap_or_else(|_| {
            log::warn!("index {line} is out of range, recorded as {}", u64::MAX);
            u64::MAX
        });
        Some(Self { value })
    }

    /// Whether this index directly follows `previous`
    pub fn follows(&self, previous: u64) -> bool {
        previous.checked_add(1) == Some(self.value)
    }
}
