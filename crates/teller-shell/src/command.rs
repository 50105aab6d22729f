//! Operator command parsing.
//!
//! The shell's input language is four commands:
//!
//! ```text
//! RQ <customer> <r0> <r1> ... <rN>    request units
//! RL <customer> <r0> <r1> ... <rN>    release units
//! *                                   print the full state
//! exit                                quit
//! ```
//!
//! Lines are decoded into a [`Command`] before anything touches the
//! arbiter, so the core never sees text and a malformed line never
//! reaches a typed operation.

use std::error::Error;
use std::fmt;

use teller::prelude::CustomerId;

/// A decoded operator command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `RQ` — request units for a customer.
    Request {
        customer: CustomerId,
        amounts: Vec<u32>,
    },
    /// `RL` — release units held by a customer.
    Release {
        customer: CustomerId,
        amounts: Vec<u32>,
    },
    /// `*` — render the full state.
    Print,
    /// `exit` — leave the shell.
    Exit,
}

/// Why a line failed to decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line contained no tokens.
    Empty,
    /// The first token is not a known command.
    UnknownCommand(String),
    /// `RQ`/`RL` need a customer index plus one count per resource
    /// type.
    WrongArgumentCount { expected: usize, got: usize },
    /// A token is not a non-negative integer.
    BadNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(cmd) => write!(f, "invalid command '{cmd}'"),
            Self::WrongArgumentCount { expected, got } => {
                write!(f, "expected {expected} arguments, got {got}")
            }
            Self::BadNumber(token) => {
                write!(f, "'{token}' is not a non-negative integer")
            }
        }
    }
}

impl Error for ParseError {}

/// Decode one input line. `resources` is the fixed resource-type
/// count R; `RQ`/`RL` take exactly `1 + R` numeric arguments.
pub fn parse_line(line: &str, resources: usize) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().ok_or(ParseError::Empty)?;
    let rest: Vec<&str> = tokens.collect();

    match head {
        "RQ" | "RL" => {
            if rest.len() != 1 + resources {
                return Err(ParseError::WrongArgumentCount {
                    expected: 1 + resources,
                    got: rest.len(),
                });
            }
            let customer = CustomerId(parse_count(rest[0])?);
            let amounts = rest[1..]
                .iter()
                .map(|t| parse_count(t))
                .collect::<Result<Vec<u32>, _>>()?;
            if head == "RQ" {
                Ok(Command::Request { customer, amounts })
            } else {
                Ok(Command::Release { customer, amounts })
            }
        }
        "*" => expect_bare(head, &rest, Command::Print),
        "exit" => expect_bare(head, &rest, Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn expect_bare(head: &str, rest: &[&str], cmd: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(cmd)
    } else {
        Err(ParseError::UnknownCommand(format!(
            "{head} takes no arguments"
        )))
    }
}

fn parse_count(token: &str) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ParseError::BadNumber(token.to_string()))
}
