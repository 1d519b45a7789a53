//! Interactive shell.
//!
//! Reads one command per line, executes it against a single [`Simulator`]
//! session, and writes the result. Errors are printed and the shell keeps
//! reading; only `q` or end of input stops it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use pipesim_core::{SimError, Simulator, Stage};
use tracing::debug;

use crate::commands::{Command, HELP};

const PROMPT: &str = "[pipesim] ";

/// Words per row of the memory dump.
const MEMORY_ROW: usize = 8;

/// Whether the shell keeps reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Leave the shell.
    Quit,
}

/// A shell bound to one simulation session.
#[derive(Debug)]
pub struct Shell {
    sim: Simulator,
}

impl Shell {
    /// Wraps an existing session.
    pub const fn new(sim: Simulator) -> Self {
        Self { sim }
    }

    /// The session being driven.
    pub const fn simulator(&self) -> &Simulator {
        &self.sim
    }

    /// Reads commands from `input` until `q` or end of input.
    ///
    /// # Arguments
    ///
    /// * `input` - Command source, one command per line.
    /// * `out` - Destination for prompts and results.
    /// * `prompt` - Whether to print a prompt before each command.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.execute_line(&line, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Parses and executes one line, printing parse errors.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(cmd) => self.execute(cmd, out),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes one command.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?cmd, "shell command");
        match cmd {
            Command::FileRead(path) => self.read_file(&path, out)?,
            Command::Step => match self.sim.step() {
                Ok(true) => writeln!(
                    out,
                    "This program has completed execution ({} cycles).",
                    self.sim.stats().cycles
                )?,
                Ok(false) => writeln!(out, "Cycle {}.", self.sim.stats().cycles)?,
                Err(err) => report(out, &err)?,
            },
            Command::Breakpoint { pc, stage } => self.breakpoint(pc, stage, out)?,
            Command::RunToEnd => match self.sim.run_to_end() {
                Ok(ticks) => writeln!(
                    out,
                    "This program has completed execution ({ticks} cycles run, {} total).",
                    self.sim.stats().cycles
                )?,
                Err(err) => report(out, &err)?,
            },
            Command::ShowRegisters => write!(out, "{}", self.sim.registers())?,
            Command::ShowDiagram => write!(out, "{}", self.sim.diagram())?,
            Command::ShowStats(sections) => {
                write!(out, "{}", self.sim.stats().render_sections(&sections))?;
            }
            Command::ShowMemory { start, len } => self.show_memory(start, len, out)?,
            Command::ToggleForwarding => {
                let state = if self.sim.toggle_forwarding() {
                    "Enable"
                } else {
                    "Disable"
                };
                writeln!(
                    out,
                    "{state} forwarding. The program will stop running and reinitialize."
                )?;
            }
            Command::Reset => {
                self.sim.reset();
                writeln!(out, "Program reset.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn read_file<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<()> {
        match self.sim.load_file(path) {
            Ok(rejected) => {
                for line in &rejected {
                    writeln!(out, "line {}: skipped {:?}", line.line, line.text)?;
                }
                writeln!(
                    out,
                    "Loaded {} instructions from {}.",
                    self.sim.cpu.program.len(),
                    path.display()
                )?;
                if !self.sim.is_loaded() {
                    writeln!(out, "Please load the program.")?;
                }
                Ok(())
            }
            Err(err) => report(out, &err),
        }
    }

    fn breakpoint<W: Write>(&mut self, pc: i64, stage: Stage, out: &mut W) -> io::Result<()> {
        match self.sim.run_to_breakpoint(pc, stage) {
            Ok(ticks) => writeln!(
                out,
                "{stage}-Stage: Reached at the breakpoint pc={pc} after {ticks} cycles."
            ),
            Err(err) => report(out, &err),
        }
    }

    fn show_memory<W: Write>(&self, start: usize, len: usize, out: &mut W) -> io::Result<()> {
        let words = self.sim.memory().words();
        let end = start.saturating_add(len).min(words.len());
        if start >= end {
            return writeln!(out, "No data memory in that range ({} words).", words.len());
        }
        for row_start in (start..end).step_by(MEMORY_ROW) {
            write!(out, "[{row_start:>4}]")?;
            for val in &words[row_start..end.min(row_start + MEMORY_ROW)] {
                write!(out, " {val:>8}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn report<W: Write>(out: &mut W, err: &SimError) -> io::Result<()> {
    match err {
        SimError::ProgramNotLoaded => writeln!(out, "Please load the program."),
        SimError::ProgramAlreadyComplete => {
            writeln!(out, "This program has completed execution.")
        }
        other => writeln!(out, "error: {other}"),
    }
}
