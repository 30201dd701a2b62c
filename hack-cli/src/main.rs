//! Hack CLI: assemble, disassemble, and execute Hack programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input, decode or assembly error
//! - 2: Invalid command line

mod commands;
mod logger;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hack",
    version,
    about = "Assembler and emulator for the Hack computer",
    long_about = None,
    after_help = "Examples:\n  hack assemble Max.asm\n  hack execute Max.hack --cycles 100\n  hack disassemble Max.hack"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log to stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Assemble a .asm file into .hack binary text.
    Assemble {
        /// Input source file (.asm).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output file. Defaults to the input with a .hack extension.
        #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Turn .hack binary text back into assembly.
    Disassemble {
        /// Input binary file (.hack).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Output file. Prints to stdout when omitted.
        #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Run a .hack or .asm program and write its memory image as .json.
    Execute {
        /// Program to run (.hack, or .asm to assemble first).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Maximum number of cycles; -1 runs until the program ends.
        #[arg(
            long,
            value_name = "N",
            default_value_t = hack_vm::UNLIMITED_CYCLES,
            allow_negative_numbers = true
        )]
        cycles: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Assemble { input, output } => commands::assemble(&input, output.as_deref()),
        Commands::Disassemble { input, output } => {
            commands::disassemble(&input, output.as_deref())
        }
        Commands::Execute { input, cycles } => commands::execute(&input, cycles),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
