//! SubRip writer
//!
//! [`CueWriter`] turns cues back into lines. Each cue gives four of them:
//!
//! ```text
//! 1                               <- position in the output, from 1
//! 00:01:43,438 --> 00:01:47,150   <- timings
//! Something is coming.            <- cue text as markup, line breaks kept
//! Something hungry for blood.
//!                                 <- separator
//! ```
pub mod markup;

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::io::Write;

use crate::config::WriterOptions;
use crate::cue::Cue;
use crate::error::{Error, Result};
use crate::timing;
use crate::token::Timings;

pub struct CueWriter<I> {
    cues: I,
    options: WriterOptions,
    number: usize,
    pending: VecDeque<String>,
    done: bool,
}

impl<I, C> CueWriter<I>
where
    I: Iterator<Item = C>,
    C: Borrow<Cue>,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(cues: T) -> Self {
        Self {
            cues: cues.into_iter(),
            options: WriterOptions::default(),
            number: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    fn render(&self, cue: &Cue) -> Result<[String; 4]> {
        let timings = format!(
            "{} {} {}",
            timing::encode(cue.start_time())?,
            Timings::SEPARATOR,
            timing::encode(cue.end_time())?
        );
        if cue.text().to_string().trim().is_empty() {
            return Err(Error::EmptyCue { line: 0 });
        }
        let text = markup::text_block(cue.text(), self.options.escape_text);
        Ok([self.number.to_string(), timings, text, String::new()])
    }
}

impl<I, C> Iterator for CueWriter<I>
where
    I: Iterator<Item = C>,
    C: Borrow<Cue>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        if self.done {
            return None;
        }
        let Some(cue) = self.cues.next() else {
            self.done = true;
            return None;
        };
        self.number += 1;
        match self.render(cue.borrow()) {
            Ok(lines) => {
                self.pending.extend(lines);
                self.pending.pop_front().map(Ok)
            }
            Err(e) => {
                log::debug!("failed to write cue {}: {e}", self.number);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Write every cue to `writer`, one `\n` terminated line at a time
///
/// Lines produced before an error are already written when it is returned.
pub fn write_to<T, C, W>(cues: T, options: WriterOptions, mut writer: W) -> Result<()>
where
    T: IntoIterator<Item = C>,
    C: Borrow<Cue>,
    W: Write,
{
    for line in CueWriter::new(cues).with_options(options) {
        writeln!(writer, "{}", line?)?;
    }
    writer.flush()?;
    Ok(())
}
