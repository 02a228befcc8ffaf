//! Command-line parsing for the text front end.
//!
//! One command per line. Tokens are separated by whitespace; the name and
//! gear commands take the rest of the line, minus surrounding whitespace, and
//! leave validation to the controller.

use power_counter_types::{PlayerId, Step};

/// Usage text printed by `help` and after a parse error.
pub const USAGE: &str = "\
commands:
  add                      add a player
  reset                    back to a single player
  del <id>                 remove a player
  level <id> + | - | <n>   step or set level (1-10)
  gear <id> + | - | <n>    step or set gear
  name <id> <text>         rename
  color <id> <index>       pick card colour (see `colors`)
  colors                   show the palette
  list                     show the table
  help                     this text
  quit                     save and exit";

/// How to change the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelInput {
    /// `+` or `-`.
    Step(Step),
    /// An explicit value.
    Set(i32),
}

/// How to change the gear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GearInput {
    /// `+` or `-`.
    Step(Step),
    /// Free text, validated by the controller.
    Text(String),
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a player.
    Add,
    /// Reset to a single player.
    Reset,
    /// Remove a player.
    Delete(PlayerId),
    /// Change a level.
    Level(PlayerId, LevelInput),
    /// Change gear.
    Gear(PlayerId, GearInput),
    /// Rename.
    Name(PlayerId, String),
    /// Pick a colour.
    Color(PlayerId, usize),
    /// Print the palette.
    Colors,
    /// Print the table.
    List,
    /// Print usage.
    Help,
    /// Exit.
    Quit,
}

/// Reasons a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line was blank.
    #[error("empty command")]
    Empty,

    /// The first word is not a command.
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    /// A required argument is missing.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// The player id is not a number.
    #[error("invalid player id {0:?}")]
    InvalidId(String),

    /// The level argument is neither `+`, `-`, nor an integer.
    #[error("invalid level {0:?}")]
    InvalidLevel(String),

    /// The colour index is not a non-negative integer.
    #[error("invalid colour index {0:?}")]
    InvalidColor(String),
}

/// Parse one input line.
///
/// # Errors
///
/// Returns [`ParseError`] describing the first problem found.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let Some((word, rest)) = next_token(line) else {
        return Err(ParseError::Empty);
    };

    match word.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Add),
        "reset" => Ok(Command::Reset),
        "colors" | "colours" => Ok(Command::Colors),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "del" | "delete" | "rm" => {
            let (id, _) = player_id("del", rest)?;
            Ok(Command::Delete(id))
        }
        "level" | "lvl" => {
            let (id, rest) = player_id("level", rest)?;
            let (arg, _) = next_token(rest).ok_or(ParseError::MissingArgument {
                command: "level",
                argument: "`+`, `-`, or a number",
            })?;
            let input = match Step::from_token(arg) {
                Some(step) => LevelInput::Step(step),
                None => LevelInput::Set(
                    arg.parse()
                        .ok()
                        .ok_or_else(|| ParseError::InvalidLevel(arg.to_owned()))?,
                ),
            };
            Ok(Command::Level(id, input))
        }
        "gear" => {
            let (id, rest) = player_id("gear", rest)?;
            let text = rest.trim();
            let input = Step::from_token(text)
                .map_or_else(|| GearInput::Text(text.to_owned()), GearInput::Step);
            Ok(Command::Gear(id, input))
        }
        "name" => {
            let (id, rest) = player_id("name", rest)?;
            Ok(Command::Name(id, rest.trim().to_owned()))
        }
        "color" | "colour" => {
            let (id, rest) = player_id("color", rest)?;
            let (arg, _) = next_token(rest).ok_or(ParseError::MissingArgument {
                command: "color",
                argument: "a palette index",
            })?;
            let index = arg
                .parse()
                .ok()
                .ok_or_else(|| ParseError::InvalidColor(arg.to_owned()))?;
            Ok(Command::Color(id, index))
        }
        other => Err(ParseError::Unknown(other.to_owned())),
    }
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}

fn player_id<'a>(command: &'static str, rest: &'a str) -> Result<(PlayerId, &'a str), ParseError> {
    let (token, rest) = next_token(rest).ok_or(ParseError::MissingArgument {
        command,
        argument: "a player id",
    })?;
    let id = token
        .trim_start_matches('#')
        .parse::<u32>()
        .ok()
        .ok_or_else(|| ParseError::InvalidId(token.to_owned()))?;
    Ok((PlayerId(id), rest))
}
