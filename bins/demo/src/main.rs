//! Demo binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{ShowInput, run_info, run_scenarios, run_show};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use logging::init_logging;
use std::io::{self, Write};

#[derive(Debug, Parser)]
#[command(
    name = "lrd",
    version,
    about = "Render and exercise linear-result carriers",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build one carrier and print it (defaults to `ok(10)`).
    Show {
        /// Success payload.
        #[arg(long = "ok", allow_negative_numbers = true)]
        ok_value: Option<i64>,
        /// Failure payload.
        #[arg(long = "err", conflicts_with = "ok_value", allow_negative_numbers = true)]
        err_value: Option<i64>,
    },
    /// Run the reference combinator scenarios.
    Scenarios,
    /// Show build and version details.
    Info,
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);

    if let Err(error) = init_logging(cli.output.log_format) {
        return exit_with_error(&error);
    }

    match run(cli.command.as_ref(), mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::error!(exit_code = error.exit_code().as_u8(), "{error}");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: Option<&Commands>, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        None => run_show(mode, ShowInput::from_flags(None, None)),
        Some(Commands::Show {
            ok_value,
            err_value,
        }) => run_show(mode, ShowInput::from_flags(*ok_value, *err_value)),
        Some(Commands::Scenarios) => run_scenarios(mode),
        Some(Commands::Info) => run_info(mode),
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
