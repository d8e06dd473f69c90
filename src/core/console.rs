use crate::utils::error::{InventoryError, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompt/print wrapper around an input and an output stream.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Prints `label` and reads one line, without its line terminator.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Keeps prompting until `parse` accepts the input, printing `retry_message` after every rejection.
    pub fn prompt_until<T>(
        &mut self,
        label: &str,
        retry_message: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let line = self.prompt(label)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected input: {}", e);
                    self.say(retry_message)?;
                }
            }
        }
    }
}
