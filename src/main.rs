use std::{
    env,
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use checklongnames::cli::{self, program_name, Args};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("checklongnames=warn")),
        )
        .init();

    let args = Args::parse();
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let program = env::args()
        .next()
        .map(|a| program_name(&a))
        .unwrap_or_else(|| program_name(""));
    let options = args.scan_options();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(args.path.as_slice(), &program, &options, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            writeln!(out, "{} {}", "Error :".red().bold(), e).ok();
            ExitCode::from(e.exit_code())
        }
    }
}
