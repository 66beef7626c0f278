//! LS-8 simulator CLI.
//!
//! This binary loads an `.ls8` program listing and runs it to completion. It
//! performs:
//! 1. **Setup:** Installs logging and builds the configuration from defaults,
//!    an optional JSON file, and command-line overrides.
//! 2. **Load:** Parses the program listing into memory.
//! 3. **Run:** Executes until HLT (exit 0) or a fault (exit 1).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 instruction-set simulator",
    long_about = "Load an LS-8 program listing (one binary byte per line, `#` comments) and run it.\n\nExamples:\n  ls8 demos/mult.ls8\n  ls8 --trace demos/call.ls8\n  ls8 --config sim.json --stats demos/stack.ls8"
)]
struct Cli {
    /// Program listing to execute.
    file: PathBuf,

    /// Print a trace line before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr when the run ends.
    #[arg(short, long)]
    stats: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fault after this many instructions.
    #[arg(long)]
    max_instructions: Option<u64>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging();
    process::exit(run(&cli));
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Builds the configuration, loads the program, and runs it.
///
/// # Returns
///
/// The process exit code.
fn run(cli: &Cli) -> i32 {
    let mut config = match &cli.config {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                report(&e);
                return 1;
            }
        },
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    if cli.max_instructions.is_some() {
        config.general.max_instructions = cli.max_instructions;
    }

    let program = match loader::load_program(&cli.file) {
        Ok(program) => program,
        Err(e) => {
            report(&e);
            return 1;
        }
    };

    let mut cpu = Cpu::new(&config);
    if let Err(e) = cpu.load(&program) {
        report(&e);
        return 1;
    }
    info!(file = %cli.file.display(), bytes = program.len(), "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = cpu.run(&mut out);
    let _ = out.flush();

    let code = match result {
        Ok(status) => {
            info!(
                pc = status.pc,
                retired = status.instructions_retired,
                "halted"
            );
            0
        }
        Err(trap) => {
            eprintln!("\n[!] FATAL TRAP: {trap}");
            cpu.dump_state();
            1
        }
    };

    if cli.stats {
        cpu.stats.print();
    }
    code
}

/// Prints an error and its source chain to stderr.
fn report(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
