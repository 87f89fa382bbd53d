use std::io::{BufRead, Write};

use super::SharedConsole;
use crate::game_flow::{validate_names, AgentError, NamePrompt};

/// Asks for each player's name in turn, re-asking on blanks and duplicates.
pub struct ConsoleNamePrompt<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleNamePrompt<R, W> {
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> NamePrompt for ConsoleNamePrompt<R, W> {
    fn names(&mut self, players: usize) -> Result<Vec<String>, AgentError> {
        let mut console = self.console.borrow_mut();
        let mut names: Vec<String> = Vec::with_capacity(players);

        while names.len() < players {
            let name = console.ask(&format!("Enter the name of player {}: ", names.len() + 1))?;
            if name.is_empty() {
                console.say("The name cannot be empty. Try again!")?;
                continue;
            }
            if names.iter().any(|n| n.to_lowercase() == name.to_lowercase()) {
                console.say(format!("{name} is already taken. Choose another name!"))?;
                continue;
            }
            names.push(name);
        }

        Ok(validate_names(&names, players)?)
    }
}
