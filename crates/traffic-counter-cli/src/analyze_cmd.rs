use std::process::ExitCode;

use tracing::{debug, info};
use traffic_counter_core::{AnalysisOptions, analyze_reader};

use crate::cli::Cli;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::render::{render_json, render_text};
use crate::shared::open_input;

pub fn run_analyze(cli: Cli, output_format: OutputFormat) -> CliResult<ExitCode> {
    let options = AnalysisOptions {
        top_limit: cli.top,
        window_size: cli.window,
    };

    let reader = open_input(&cli.input)?;
    let report = analyze_reader(reader, options)?;
    debug!(input = %cli.input, ?options, "Analysed traffic data");

    if report.quiet_window.is_none() {
        info!(
            window_size = options.window_size,
            "No contiguous window available"
        );
    }

    match output_format {
        OutputFormat::Json => {
            let json = render_json(&report).map_err(|e| CliError::runtime(format!("{e:#}")))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&report, &options));
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
