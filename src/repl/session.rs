//! REPL Session
//!
//! Reads command lines, dispatches them to the API client and renders the
//! results. Command failures are printed and never end the session.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::{PokedexError, Result};
use crate::models::DISPLAY_STATS;
use crate::pokeapi::{ApiClient, CatchOutcome};
use crate::repl::commands::{Command, COMMANDS};
use crate::repl::input::clean_input;

pub const PROMPT: &str = "Pokedex > ";

/// Whether the session should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive session writing to `out`.
pub struct Repl<W> {
    client: ApiClient,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(client: ApiClient, out: W) -> Self {
        Self { client, out }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (ApiClient, W) {
        (self.client, self.out)
    }

    // == Run ==
    /// Prompts and executes lines from `input` until `exit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out)?;
                break;
            };

            if self.execute(&line).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    // == Execute ==
    /// Runs one input line.
    ///
    /// Only failures to write output are returned; everything else is
    /// printed as `error occurred: ...`.
    pub async fn execute(&mut self, line: &str) -> std::io::Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let result = match Command::parse(name, args) {
            Ok(Some(command)) => self.dispatch(command).await,
            Ok(None) => {
                writeln!(self.out, "Unknown command")?;
                return Ok(Flow::Continue);
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(err)) => Err(err),
            Err(err) => {
                warn!(command = %name, error = %err, "command failed");
                writeln!(self.out, "error occurred: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn dispatch(&mut self, command: Command<'_>) -> Result<Flow> {
        debug!(?command, "dispatching");
        match command {
            Command::Help => self.help()?,
            Command::Exit => {
                writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => match self.client.next_page().await? {
                Some(names) => self.print_lines(&names)?,
                None => writeln!(self.out, "you're on the last page")?,
            },
            Command::MapBack => match self.client.previous_page().await? {
                Some(names) => self.print_lines(&names)?,
                None => writeln!(self.out, "you're on the first page")?,
            },
            Command::Explore(location) => self.explore(location).await?,
            Command::Catch(pokemon) => self.catch(pokemon).await?,
            Command::Inspect(pokemon) => self.inspect(pokemon)?,
            Command::Pokedex => {
                let names = self.client.check_pokedex()?;
                writeln!(self.out, "Your Pokedex:")?;
                for name in names {
                    writeln!(self.out, "{name}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Pokedex!")?;
        writeln!(self.out, "Usage:")?;
        writeln!(self.out)?;
        for spec in COMMANDS {
            writeln!(self.out, "{}: {}", spec.name, spec.description)?;
        }
        Ok(())
    }

    fn print_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    async fn explore(&mut self, location: &str) -> Result<()> {
        writeln!(self.out, "Exploring {location}...")?;
        let found = self.client.explore_location(location).await?;

        if !found.is_empty() {
            writeln!(self.out, "Found Pokemon:")?;
        }
        for name in &found {
            writeln!(self.out, "- {name}")?;
        }
        Ok(())
    }

    async fn catch(&mut self, pokemon: &str) -> Result<()> {
        writeln!(self.out, "Throwing a Pokeball at {pokemon}...")?;

        match self.client.catch_pokemon(pokemon).await? {
            CatchOutcome::Caught { newly_added } => {
                writeln!(self.out, "Caught {pokemon}!")?;
                if newly_added {
                    writeln!(self.out, "Adding to Pokedex...")?;
                    writeln!(
                        self.out,
                        "Complete! You may now inspect {pokemon} with the inspect command."
                    )?;
                }
            }
            CatchOutcome::Escaped => writeln!(self.out, "{pokemon} escaped!")?,
        }
        Ok(())
    }

    fn inspect(&mut self, pokemon: &str) -> Result<()> {
        let found = self.client.inspect_pokemon(pokemon)?;

        writeln!(self.out, "Name: {}", found.name)?;
        writeln!(self.out, "Height: {}", found.height)?;
        writeln!(self.out, "Weight: {}", found.weight)?;
        writeln!(self.out, "Stats:")?;
        for stat in DISPLAY_STATS {
            writeln!(self.out, "  -{stat}: {}", found.stat(stat))?;
        }
        writeln!(self.out, "Types:")?;
        for kind in &found.types {
            writeln!(self.out, "  - {kind}")?;
        }
        Ok(())
    }
}
