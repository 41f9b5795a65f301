//! Line-based console shared by the interactive commands

use std::io::{self, BufRead, Write};

/// A prompt/answer channel over any reader and writer
///
/// Interactive commands take this instead of touching stdin/stdout, so
/// they can be driven from tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    /// Returns any I/O error from reading or writing.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Writer for free-form output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
