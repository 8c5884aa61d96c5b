use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::error::{LibraryError, Result};
use bookshelf::validation::ValidationError;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Line-oriented terminal: prompts on `output`, answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `label` and reads one trimmed line. End of input is
    /// [`LibraryError::InputClosed`].
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(LibraryError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until `parse` accepts the answer, printing each rejection.
    pub fn prompt_until<T, F>(&mut self, label: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.warning(&e.to_string())?,
            }
        }
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.line(text.yellow())
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.line(text.red())
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "\n{}", text.bold())?;
        Ok(())
    }

    pub fn messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            match message.level {
                MessageLevel::Info => self.line(&message.content)?,
                MessageLevel::Success => self.line(message.content.green())?,
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
