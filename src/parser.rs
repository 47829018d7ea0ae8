//! Pull-based SubRip reader
//!
//! [`CueReader`] walks the input one line at a time and yields a [`Cue`] as
//! soon as the blank line closing its block, or the end of the input, is
//! seen. It only buffers the text of the cue being read.
//!
//! ```text
//!            blank                  non-blank
//!            +---+                  +---+
//!            |   v                  |   v
//!          +-------+  digits  +---------+ timings +------+
//!  start ->| Index |--------->| Timings |-------->| Text |
//!          +-------+          +---------+         +------+
//!              ^                                     |
//!              +-------------- blank / emit ---------+
//! ```
//!
//! Any malformed line ends the sequence: the error is yielded once and the
//! reader returns `None` afterwards.

use std::io::{self, BufRead};

use crate::config::ReaderOptions;
use crate::cue::Cue;
use crate::error::{Error, Result};
use crate::markup::{HtmlMarkup, MarkupParser};
use crate::node::CueText;
use crate::token::{self, Index, Timings};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Index,
    Timings,
    Text(Timings),
}

type Lines<'a> = std::iter::Fuse<Box<dyn Iterator<Item = io::Result<String>> + 'a>>;

pub struct CueReader<'a, P = HtmlMarkup> {
    lines: Lines<'a>,
    markup: P,
    options: ReaderOptions,
    state: State,
    lineno: usize,
    index: u64,
    previous_index: u64,
    text: String,
    done: bool,
}

impl<'a> CueReader<'a, HtmlMarkup> {
    /// Read cues from lines already in memory
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str> + 'a,
    {
        let lines = lines.into_iter().map(|line| Ok::<_, io::Error>(line.as_ref().to_owned()));
        Self::with_lines(Box::new(lines))
    }

    /// Read cues from a buffered reader, I/O errors end the sequence
    pub fn from_reader<R: BufRead + 'a>(reader: R) -> Self {
        Self::with_lines(Box::new(reader.lines()))
    }

    fn with_lines(lines: Box<dyn Iterator<Item = io::Result<String>> + 'a>) -> Self {
        Self {
            lines: lines.fuse(),
            markup: HtmlMarkup,
            options: ReaderOptions::default(),
            state: State::Index,
            lineno: 0,
            index: 0,
            previous_index: 0,
            text: String::new(),
            done: false,
        }
    }
}

impl<'a, P: MarkupParser> CueReader<'a, P> {
    /// Use another markup parser for cue text
    pub fn with_markup<Q: MarkupParser>(self, markup: Q) -> CueReader<'a, Q> {
        CueReader {
            lines: self.lines,
            markup,
            options: self.options,
            state: self.state,
            lineno: self.lineno,
            index: self.index,
            previous_index: self.previous_index,
            text: self.text,
            done: self.done,
        }
    }

    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of input lines consumed so far
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    fn advance(&mut self) -> Result<Option<Cue>> {
        while let Some(line) = self.lines.next() {
            let line = line?;
            self.lineno += 1;
            let line: &str = if self.lineno == 1 {
                utils::strip_bom(&line)
            } else {
                &line
            };
            let line = line.trim();

            match self.state {
                State::Index => {
                    if token::is_blank(line) {
                        continue;
                    }
                    let index = Index::new(line).ok_or_else(|| Error::IndexFormat {
                        line: self.lineno,
                        content: line.to_owned(),
                    })?;
                    self.check_index(index)?;
                    self.state = State::Timings;
                }
                State::Timings => {
                    let timings = Timings::new(line, self.lineno)?;
                    self.text.clear();
                    self.state = State::Text(timings);
                }
                State::Text(timings) => {
                    if !token::is_blank(line) {
                        self.text.push_str(line);
                        self.text.push('\n');
                        continue;
                    }
                    self.state = State::Index;
                    return self.finish_cue(timings).map(Some);
                }
            }
        }

        match self.state {
            State::Index => Ok(None),
            State::Timings => Err(Error::Truncated { line: self.lineno }),
            State::Text(timings) => {
                self.state = State::Index;
                self.finish_cue(timings).map(Some)
            }
        }
    }

    fn check_index(&mut self, index: Index) -> Result<()> {
        if !index.follows(self.previous_index) {
            if self.options.strict_index {
                return Err(Error::IndexSequence {
                    line: self.lineno,
                    index: index.value,
                    previous: self.previous_index,
                });
            }
            log::warn!(
                "line {}: inconsistent index {} (previous was {})",
                self.lineno,
                index.value,
                self.previous_index
            );
        }
        self.previous_index = index.value;
        self.index = index.value;
        Ok(())
    }

    fn finish_cue(&mut self, timings: Timings) -> Result<Cue> {
        let text = std::mem::take(&mut self.text);
        let text = CueText::parse(text.trim(), &self.markup)?;
        // whitespace only text would not survive being written back
        if text.to_string().trim().is_empty() {
            return Err(Error::EmptyCue { line: self.lineno });
        }
        let cue = Cue::new(timings.start, timings.end, text).with_index(self.index);
        log::debug!("parsed cue {} {cue}", self.index);
        Ok(cue)
    }
}

impl<'a, P: MarkupParser> Iterator for CueReader<'a, P> {
    type Item = Result<Cue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(cue)) => Some(Ok(cue)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
