//! LS-8 emulator CLI.
//!
//! This binary provides a single entry point for the emulator. It performs:
//! 1. **Run:** Load a program listing and execute it until `HLT`.
//! 2. **Disassemble:** Print the instructions of a program listing.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 emulator",
    long_about = "Run or disassemble an LS-8 program listing.\n\nA listing holds one binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --max-cycles 1000 programs/call.ls8\n  ls8 disasm programs/stack.ls8\n\nSet RUST_LOG=ls8_core=debug for execution logs."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program listing and run it until HLT.
    Run {
        /// Program listing to execute.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a trace line to stderr before every instruction.
        #[arg(short, long)]
        trace: bool,

        /// Abort after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print run statistics to stderr on exit.
        #[arg(long)]
        stats: bool,
    },

    /// Disassemble a program listing.
    Disasm {
        /// Program listing to disassemble.
        program: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            max_cycles,
            stats,
        } => cmd_run(&program, config.as_deref(), trace, max_cycles, stats),
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Builds the run configuration from an optional JSON file plus CLI overrides.
///
/// Exits with code 1 if the file cannot be read or parsed.
fn load_config(path: Option<&Path>, trace: bool, max_cycles: Option<u64>) -> Config {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", path.display(), e);
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {}: {}", path.display(), e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    config
}

/// Loads the program and runs it until `HLT`.
///
/// On a load error or a fatal CPU error, reports it, dumps CPU state and
/// exits with code 1.
fn cmd_run(
    program: &Path,
    config_path: Option<&Path>,
    trace: bool,
    max_cycles: Option<u64>,
    stats: bool,
) {
    let config = load_config(config_path, trace, max_cycles);
    let mut cpu = Cpu::new(&config);

    match loader::load_into(&mut cpu, program) {
        Ok(bytes) => tracing::info!(program = %program.display(), bytes, "starting run"),
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = cpu.run() {
        eprintln!("\n[!] FATAL: {e}");
        cpu.dump_state();
        if stats {
            cpu.stats.print();
        }
        process::exit(1);
    }

    if stats {
        cpu.stats.print();
    }
}

/// Prints one disassembled instruction per line.
///
/// A closed stdout (e.g. piping into `head`) ends the listing quietly.
fn cmd_disasm(program: &Path) {
    let image = loader::load_program_file(program).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });
    let stdout = io::stdout();
    let written = write_listing(&mut stdout.lock(), &image);
    if let Err(e) = ignore_broken_pipe(written) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Writes an `address  mnemonic` line for each instruction in `image`.
fn write_listing(out: &mut impl Write, image: &[u8]) -> io::Result<()> {
    for (addr, text) in disasm::disassemble_program(image) {
        writeln!(out, "{addr:#04x}  {text}")?;
    }
    out.flush()
}

/// Treats a reader hanging up as a normal end of output.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
