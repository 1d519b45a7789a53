//! Shell command parsing.
//!
//! Each input line is one command word followed by its arguments, separated by
//! whitespace. Parsing never touches the simulator; the shell executes the
//! resulting [`Command`].

use std::path::PathBuf;
use std::str::FromStr;

use pipesim_core::Stage;
use thiserror::Error;

/// Words shown per row by `sm` when no length is given.
pub const DEFAULT_MEMORY_WINDOW: usize = 16;

/// One shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `fr <path>`: read and load a program file.
    FileRead(PathBuf),
    /// `n`: advance one clock cycle.
    Step,
    /// `b <pc> <stage>`: run until the instruction at `pc` is about to run `stage`.
    Breakpoint {
        /// Program counter of the target instruction.
        pc: i64,
        /// Stage the instruction must be waiting to run.
        stage: Stage,
    },
    /// `e`: run to completion.
    RunToEnd,
    /// `sr`: show registers.
    ShowRegisters,
    /// `sd`: show the cycle diagram.
    ShowDiagram,
    /// `ss [section...]`: show statistics.
    ShowStats(Vec<String>),
    /// `sm [start] [len]`: show data memory.
    ShowMemory {
        /// First word shown.
        start: usize,
        /// Number of words shown.
        len: usize,
    },
    /// `f`: toggle forwarding (resets the program).
    ToggleForwarding,
    /// `reset`: restart the loaded program.
    Reset,
    /// `h`: print help.
    Help,
    /// `q`: leave the shell.
    Quit,
}

/// A line that is not a valid command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input.
    #[error("empty command")]
    Empty,
    /// Unrecognized command word.
    #[error("invalid command {0:?}, type h for help")]
    Unknown(String),
    /// A required argument is absent.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// Command word.
        command: &'static str,
        /// Description of the argument.
        what: &'static str,
    },
    /// An argument does not parse.
    #[error("{command}: {message}")]
    BadArgument {
        /// Command word.
        command: &'static str,
        /// What went wrong.
        message: String,
    },
    /// More arguments than the command takes.
    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),
}

/// The help text printed by `h`.
pub const HELP: &str = "\
fr <path>          Read a program file (one 32-bit binary word per line)
n                  Single step one clock cycle
b <pc> <stage>     Run to breakpoint; stage is 0-4 or IF/ID/EX/MEM/WB
e                  Execute to end
sr                 Show registers (* marks a pending write)
sd                 Show cycle diagram
ss [section...]    Show statistics (summary, instruction_mix, hazards)
sm [start] [len]   Show data memory
f                  Toggle forwarding (resets the program)
reset              Restart the loaded program
h                  Help
q                  Quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let cmd = match word {
            "fr" => {
                let path = args.first().ok_or(CommandError::MissingArgument {
                    command: "fr",
                    what: "file path",
                })?;
                no_more(&args, 1, "fr")?;
                Self::FileRead(PathBuf::from(path))
            }
            "n" => bare(&args, "n", Self::Step)?,
            "b" => {
                let (Some(pc), Some(stage)) = (args.first(), args.get(1)) else {
                    return Err(CommandError::MissingArgument {
                        command: "b",
                        what: "pc and stage",
                    });
                };
                no_more(&args, 2, "b")?;
                let pc = pc.parse().map_err(|_| CommandError::BadArgument {
                    command: "b",
                    message: format!("pc {pc:?} is not an integer"),
                })?;
                let stage = stage.parse().map_err(|err| CommandError::BadArgument {
                    command: "b",
                    message: format!("{err}"),
                })?;
                Self::Breakpoint { pc, stage }
            }
            "e" => bare(&args, "e", Self::RunToEnd)?,
            "sr" => bare(&args, "sr", Self::ShowRegisters)?,
            "sd" => bare(&args, "sd", Self::ShowDiagram)?,
            "ss" => Self::ShowStats(args.iter().map(ToString::to_string).collect()),
            "sm" => {
                no_more(&args, 2, "sm")?;
                let start = number(args.first(), "sm", "start", 0)?;
                let len = number(args.get(1), "sm", "length", DEFAULT_MEMORY_WINDOW)?;
                Self::ShowMemory { start, len }
            }
            "f" => bare(&args, "f", Self::ToggleForwarding)?,
            "reset" => bare(&args, "reset", Self::Reset)?,
            "h" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

fn bare(args: &[&str], command: &'static str, cmd: Command) -> Result<Command, CommandError> {
    no_more(args, 0, command)?;
    Ok(cmd)
}

fn no_more(args: &[&str], max: usize, command: &'static str) -> Result<(), CommandError> {
    if args.len() > max {
        Err(CommandError::TooManyArguments(command))
    } else {
        Ok(())
    }
}

fn number(
    arg: Option<&&str>,
    command: &'static str,
    what: &str,
    default: usize,
) -> Result<usize, CommandError> {
    arg.map_or(Ok(default), |text| {
        text.parse().map_err(|_| CommandError::BadArgument {
            command,
            message: format!("{what} {text:?} is not a non-negative integer"),
        })
    })
}
