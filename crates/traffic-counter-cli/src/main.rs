use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod analyze_cmd;
mod cli;
mod error;
mod render;
mod shared;

use analyze_cmd::run_analyze;
use cli::Cli;
use error::{output_format_hint, parse_output_format, render_error};

fn init_logging(verbose: bool) {
    // RUST_LOG applies unless --verbose asks for debug output.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    let fallback = output_format_hint(&cli.output_format);
    let output_format = match parse_output_format(&cli.output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run_analyze(cli, output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
