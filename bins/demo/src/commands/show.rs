//! Show command handler: build one carrier and render it.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use linear_result::{err, ok};

/// Which tag to build the carrier from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowInput {
    /// Success payload.
    Ok(i64),
    /// Failure payload.
    Err(i64),
}

impl ShowInput {
    /// Resolve the `--ok` / `--err` flags, defaulting to `ok(10)`.
    #[must_use]
    pub const fn from_flags(ok_value: Option<i64>, err_value: Option<i64>) -> Self {
        match (ok_value, err_value) {
            (_, Some(value)) => Self::Err(value),
            (Some(value), None) => Self::Ok(value),
            (None, None) => Self::Ok(10),
        }
    }
}

/// Run the show command.
pub fn run_show(mode: OutputMode, input: ShowInput) -> Result<CliOutput, CliError> {
    let result: linear_result::Result<i64, i64> = match input {
        ShowInput::Ok(value) => ok(value).into(),
        ShowInput::Err(value) => err(value).into(),
    };
    tracing::debug!(side = %result.side(), "built result");

    let stdout = if mode.is_json() {
        let mut output = serde_json::to_string(&result)?;
        output.push('\n');
        output
    } else {
        format!("{result}\n")
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
