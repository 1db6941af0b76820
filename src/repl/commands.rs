//! Command Registry
//!
//! The commands the REPL understands and how their arguments are parsed.

use crate::error::{PokedexError, Result};

/// Name and help text for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// All commands, in the order `help` lists them.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the pokedex",
    },
    CommandSpec {
        name: "map",
        description: "displays the next 20 location areas in the pokemon world",
    },
    CommandSpec {
        name: "mapb",
        description: "displays the previous 20 location areas in the pokemon world",
    },
    CommandSpec {
        name: "explore",
        description: "displays all of the pokemon in a specific location",
    },
    CommandSpec {
        name: "catch",
        description: "tries to catch a pokemon and adds it to your pokedex",
    },
    CommandSpec {
        name: "inspect",
        description: "shows info about a caught pokemon",
    },
    CommandSpec {
        name: "pokedex",
        description: "lists all of the pokemon that the user has caught",
    },
];

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(&'a str),
    Catch(&'a str),
    Inspect(&'a str),
    Pokedex,
}

impl<'a> Command<'a> {
    /// Parses a command name and its arguments.
    ///
    /// Returns `Ok(None)` for an unknown name. Extra arguments are ignored.
    pub fn parse(name: &str, args: &'a [String]) -> Result<Option<Self>> {
        let first = move |command: &'static str, expected: &'static str| {
            args.first()
                .map(String::as_str)
                .ok_or(PokedexError::MissingArgument { command, expected })
        };

        let command = match name {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(first("explore", "a valid location")?),
            "catch" => Self::Catch(first("catch", "a valid pokemon name")?),
            "inspect" => Self::Inspect(first("inspect", "a valid pokemon name")?),
            "pokedex" => Self::Pokedex,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}
