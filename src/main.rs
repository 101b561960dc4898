use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use log::LevelFilter;
use varcalc::{run_batch, run_interactive};

/// varcalc evaluates integer assignments line by line, keeping a store of
/// named variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to evaluate in batch mode. Starts an interactive session when
    /// omitted.
    file: Option<PathBuf>,

    /// Logs evaluation steps to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|e| {
                                                 eprintln!("Failed to read file: {e}");
                                                 std::process::exit(1);
                                             });
        run_batch(&script, &mut output)
    } else {
        run_interactive(io::stdin().lock(), &mut output)
    };

    if let Err(e) = result.and_then(|_| output.flush()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
