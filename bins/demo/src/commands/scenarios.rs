//! Scenarios command handler: run the reference chains and report outcomes.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use linear_result::{Side, Void, err, err_void, ok};
use serde::Serialize;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Stable scenario name.
    pub name: &'static str,
    /// Live side of the carrier the chain ended with.
    pub side: Side,
    /// What the chain produced, rendered as text.
    pub observed: String,
    /// Whether the observation matched the expectation.
    pub passed: bool,
}

/// Run every scenario in order.
#[must_use]
pub fn run_all() -> Vec<ScenarioReport> {
    vec![
        ok_is_observable(),
        err_falls_back_and_hashes(),
        and_then_skips_on_failure(),
        or_else_recovers_failure(),
        transform_forwards_failure(),
    ]
}

/// Run the scenarios command.
pub fn run_scenarios(mode: OutputMode) -> Result<CliOutput, CliError> {
    let reports = run_all();
    for report in &reports {
        tracing::info!(
            scenario = report.name,
            side = %report.side,
            passed = report.passed,
            observed = %report.observed,
            "scenario finished"
        );
    }
    render_reports(mode, &reports)
}

/// Render reports; failures keep the full report on stdout and name the
/// failed scenarios on stderr.
fn render_reports(mode: OutputMode, reports: &[ScenarioReport]) -> Result<CliOutput, CliError> {
    let failed: Vec<&'static str> = reports
        .iter()
        .filter(|report| !report.passed)
        .map(|report| report.name)
        .collect();

    let stdout = if mode.is_json() {
        let payload = serde_json::json!({
            "status": if failed.is_empty() { "ok" } else { "failed" },
            "scenarios": reports,
        });
        let mut output = serde_json::to_string_pretty(&payload)?;
        output.push('\n');
        output
    } else {
        format_text(reports)
    };

    if failed.is_empty() {
        return Ok(CliOutput {
            stdout,
            stderr: String::new(),
            exit_code: ExitCode::Ok,
        });
    }

    tracing::warn!(failed = failed.len(), "scenarios failed");
    Ok(CliOutput {
        stdout,
        stderr: format!("scenarios failed: {}\n", failed.join(", ")),
        exit_code: ExitCode::ScenarioFailed,
    })
}

fn format_text(reports: &[ScenarioReport]) -> String {
    reports
        .iter()
        .map(|report| {
            let status = if report.passed { "pass" } else { "FAIL" };
            format!("{status} {}: {}\n", report.name, report.observed)
        })
        .collect::<Vec<_>>()
        .concat()
}

fn default_hash<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn ok_is_observable() -> ScenarioReport {
    let result: linear_result::Result<i32, i32> = ok(10).into();
    let observed = result.to_string();

    ScenarioReport {
        name: "ok_is_observable",
        side: result.side(),
        passed: result.is_ok() && *result.ok() == 10 && observed == "ok{10}",
        observed,
    }
}

fn err_falls_back_and_hashes() -> ScenarioReport {
    let result: linear_result::Result<i32, i32> = err(20).into();
    let hashes_match = default_hash(&result) == default_hash(&20_i32);
    let side = result.side();
    let fallback = result.ok_or(10);

    ScenarioReport {
        name: "err_falls_back_and_hashes",
        side,
        observed: format!("ok_or(10) = {fallback}, hash matches payload = {hashes_match}"),
        passed: fallback == 10 && hashes_match,
    }
}

fn and_then_skips_on_failure() -> ScenarioReport {
    let mut invoked = false;
    let result: linear_result::Result<i32, Void> = err_void().into();
    let chained = result.and_then(|_value| {
        invoked = true;
        ok(10.0_f32).into()
    });
    let side = chained.side();
    let value = chained.ok_or(0.0_f32);

    ScenarioReport {
        name: "and_then_skips_on_failure",
        side,
        observed: format!("ok_or(0) = {value}, callback invoked = {invoked}"),
        passed: !invoked && side == Side::Err && value.abs() < f32::EPSILON,
    }
}

fn or_else_recovers_failure() -> ScenarioReport {
    let mut invoked = false;
    let result: linear_result::Result<i32, Void> = err_void().into();
    let recovered = result.or_else(|Void| -> linear_result::Result<i32, Void> {
        invoked = true;
        ok(10).into()
    });
    let side = recovered.side();
    let value = recovered.ok_or(0);

    ScenarioReport {
        name: "or_else_recovers_failure",
        side,
        observed: format!("ok_or(0) = {value}, callback invoked = {invoked}"),
        passed: invoked && side == Side::Ok && value == 10,
    }
}

fn transform_forwards_failure() -> ScenarioReport {
    let result: linear_result::Result<i32, Void> = err_void().into();
    let mapped = result.transform(|value| f64::from(value) * 2.0);

    match mapped.try_ok() {
        Ok(value) => ScenarioReport {
            name: "transform_forwards_failure",
            side: mapped.side(),
            observed: format!("unexpected payload {value}"),
            passed: false,
        },
        Err(violation) => ScenarioReport {
            name: "transform_forwards_failure",
            side: mapped.side(),
            observed: format!("{mapped}, ok() rejected: {violation}"),
            passed: mapped.is_err(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    #[test]
    fn every_scenario_passes() {
        let reports = run_all();
        assert_eq!(reports.len(), 5);
        for report in &reports {
            assert!(report.passed, "{} failed: {}", report.name, report.observed);
        }
    }

    #[test]
    fn transform_scenario_reports_the_violation() {
        let report = transform_forwards_failure();
        assert_eq!(
            report.observed,
            "err{}, ok() rejected: requested the ok payload of a result holding err"
        );
    }

    #[test]
    fn text_output_lists_each_scenario() -> Result<(), CliError> {
        let mode = OutputMode {
            format: OutputFormat::Text,
        };
        let output = run_scenarios(mode)?;

        assert_eq!(output.stdout.lines().count(), 5);
        assert!(output.stdout.starts_with("pass ok_is_observable: ok{10}\n"));
        Ok(())
    }

    #[test]
    fn json_output_carries_the_live_side() -> Result<(), CliError> {
        let mode = OutputMode {
            format: OutputFormat::Json,
        };
        let output = run_scenarios(mode)?;
        let value: serde_json::Value = serde_json::from_str(&output.stdout)?;

        assert_eq!(value["status"], "ok");
        assert_eq!(value["scenarios"][0]["side"], "ok");
        assert_eq!(value["scenarios"][1]["side"], "err");
        assert_eq!(value["scenarios"][4]["side"], "err");
        Ok(())
    }

    #[test]
    fn failed_scenarios_keep_their_report() -> Result<(), CliError> {
        let reports = vec![
            ScenarioReport {
                name: "holds",
                side: Side::Ok,
                observed: String::from("ok{1}"),
                passed: true,
            },
            ScenarioReport {
                name: "breaks",
                side: Side::Err,
                observed: String::from("err{2}"),
                passed: false,
            },
        ];
        let mode = OutputMode {
            format: OutputFormat::Text,
        };
        let output = render_reports(mode, &reports)?;

        assert_eq!(output.exit_code, ExitCode::ScenarioFailed);
        assert_eq!(output.stdout, "pass holds: ok{1}\nFAIL breaks: err{2}\n");
        assert_eq!(output.stderr, "scenarios failed: breaks\n");

        let json = render_reports(
            OutputMode {
                format: OutputFormat::Json,
            },
            &reports,
        )?;
        let value: serde_json::Value = serde_json::from_str(&json.stdout)?;
        assert_eq!(value["status"], "failed");
        assert_eq!(value["scenarios"][1]["observed"], "err{2}");
        Ok(())
    }
}
