//! Info command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use crate::logging::ENV_LOG_FILTER;
use linear_result::crate_version;

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let library_version = crate_version();

    let stdout = if mode.is_json() {
        format_info_json(name, version, library_version)?
    } else {
        format_info_text(name, version, library_version)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

fn format_info_text(name: &str, version: &str, library_version: &str) -> String {
    format!(
        "status: ok\nname: {name}\nversion: {version}\nlibrary: {library_version}\nlog filter env: {ENV_LOG_FILTER}\n"
    )
}

fn format_info_json(name: &str, version: &str, library_version: &str) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "build": {
            "name": name,
            "version": version,
            "libraryVersion": library_version,
        },
        "logFilterEnv": ENV_LOG_FILTER,
    });
    let mut output = serde_json::to_string_pretty(&payload)?;
    output.push('\n');
    Ok(output)
}
