//! Five-stage pipeline simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Interactive shell:** Reads commands (`fr`, `n`, `b`, `e`, `sr`, `sd`, `ss`, `f`, ...)
//!    from stdin against one simulation session.
//! 2. **Batch run:** With `--run`, loads `--file`, runs it to completion, and prints the
//!    cycle diagram and statistics.
//!
//! Logging goes to stderr through `tracing-subscriber`; `RUST_LOG` overrides the default
//! `warn` filter and `--trace` shows every stage of every instruction.

mod commands;
mod shell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use pipesim_core::{Config, Simulator};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-level five-stage pipeline simulator",
    long_about = "Simulates lw, sw, add, beqz and nop through IF, ID, EX, MEM and WB, showing stalls and the effect of forwarding.\n\nPrograms are text files with one 32-bit binary instruction per line.\n\nExamples:\n  pipesim -f demo.txt\n  pipesim -f demo.txt --forwarding --run\n  RUST_LOG=pipesim_core=debug pipesim -f demo.txt"
)]
struct Cli {
    /// Program to load before the shell starts.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with forwarding enabled.
    #[arg(long)]
    forwarding: bool,

    /// Log every stage of every instruction.
    #[arg(long)]
    trace: bool,

    /// Run the program to completion, print the diagram and statistics, and exit.
    #[arg(long, requires = "file")]
    run: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.pipeline.forwarding |= cli.forwarding;
    config.general.trace_instructions |= cli.trace;

    init_logging(config.general.trace_instructions);

    let mut shell = Shell::new(Simulator::new(&config));
    let mut stdout = io::stdout().lock();

    if let Some(path) = cli.file {
        if let Err(e) = shell.execute(Command::FileRead(path), &mut stdout) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let result = if cli.run {
        batch(&mut shell, &mut stdout)
    } else {
        let interactive = io::stdin().is_terminal();
        if interactive {
            println!("Pipeline simulator. Type h for help.");
        }
        shell.run(io::stdin().lock(), &mut stdout, interactive)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if cli.run && !shell.simulator().is_complete() {
        process::exit(1);
    }
}

/// Runs the loaded program to the end and prints the diagram and statistics.
fn batch(shell: &mut Shell, out: &mut impl io::Write) -> io::Result<()> {
    for cmd in [
        Command::RunToEnd,
        Command::ShowDiagram,
        Command::ShowRegisters,
        Command::ShowStats(Vec::new()),
    ] {
        let _ = shell.execute(cmd, out)?;
    }
    Ok(())
}

/// Installs the stderr subscriber: `RUST_LOG` if set, else `warn`, raised to
/// `trace` for the core when tracing is requested.
fn init_logging(trace: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if trace {
            EnvFilter::new("warn,pipesim_core=trace")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
