use std::io::{BufRead, Write};

use log::debug;

use crate::errors::{ResolutionError, Result};

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).map_err(ResolutionError::console)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one answer. End of input is an error since nothing can be re-prompted.
    pub fn ask_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).map_err(ResolutionError::console)?;
        self.output.flush().map_err(ResolutionError::console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ResolutionError::InputError(format!("cannot read input: {}", e)))?;
        if read == 0 {
            return Err(ResolutionError::InputError(format!(
                "input ended while waiting for '{}'",
                prompt.trim()
            )));
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!("{} -> {:?}", prompt.trim(), answer);
        Ok(answer)
    }

    /// Repeats `prompt` until `parse` accepts the answer.
    pub fn ask_until<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.ask_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(ResolutionError::InputError(message)) => {
                    self.say(&format!("***{}, please try again\n", message))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Like [`Prompter::ask_until`], but an empty answer yields `None`.
    pub fn ask_optional<T, F>(&mut self, prompt: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Result<T>,
    {
        self.ask_until(prompt, |answer| {
            if answer.trim().is_empty() {
                Ok(None)
            } else {
                parse(answer).map(Some)
            }
        })
    }
}
