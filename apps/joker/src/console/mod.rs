//! Line-oriented terminal front-end.
//!
//! All four seats share one [`Console`]: prompts go to its writer, answers
//! come from its reader. End of input counts as the user leaving.

mod agent;
mod names;


use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

pub use agent::ConsoleAgent;
pub use names::ConsoleNamePrompt;

use crate::game_flow::AgentError;

/// Reader and writer of the terminal session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Handle shared by every console seat.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn shared(input: R, output: W) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), AgentError> {
        writeln!(self.output, "{}", line.as_ref()).map_err(closed)
    }

    /// Print `prompt` without a newline and read the trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AgentError> {
        write!(self.output, "{prompt}").map_err(closed)?;
        self.output.flush().map_err(closed)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(closed)?;
        if read == 0 {
            return Err(AgentError::Interrupted);
        }
        Ok(line.trim().to_string())
    }
}

fn closed(err: std::io::Error) -> AgentError {
    tracing::debug!(error = %err, "Console I/O failed");
    AgentError::Interrupted
}
