//! Output rendering for validation results.
//!
//! Supports `human` (default) and `json` outputs. Human output goes to
//! stderr, one line per diagnostic; JSON goes to stdout as a single document
//! with a top-level summary.

use crate::error::CheckError;
use crate::models::rules::RuleTable;
use crate::models::ValidationOutcome;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

pub const STRUCTURE_PREFIX: &str = "STRUCTURE VIOLATION";
pub const CONFIGURATION_PREFIX: &str = "CONFIGURATION ERROR";
pub const INFO_PREFIX: &str = "INFO";

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Render one required-entry diagnostic as a single line.
pub fn render_violation(diag: &CheckError, color: bool) -> String {
    match diag {
        CheckError::Structure { message, .. } => {
            let prefix = if color {
                STRUCTURE_PREFIX.red().bold().to_string()
            } else {
                STRUCTURE_PREFIX.to_string()
            };
            format!("{}: {}", prefix, message)
        }
        CheckError::Configuration { message, .. } => {
            let prefix = if color {
                CONFIGURATION_PREFIX.magenta().bold().to_string()
            } else {
                CONFIGURATION_PREFIX.to_string()
            };
            format!("{} (script/config error): {}", prefix, message)
        }
    }
}

/// Render a failed optional entry. Never counts against the run.
pub fn render_info(diag: &CheckError, color: bool) -> String {
    let prefix = if color {
        INFO_PREFIX.blue().bold().to_string()
    } else {
        INFO_PREFIX.to_string()
    };
    let note = if diag.is_configuration() {
        " (script/config error)"
    } else {
        ""
    };
    format!("{}: optional {}{}: {}", prefix, diag.target(), note, diag.message())
}

/// Print the leading banner announcing which root and rules are checked.
pub fn print_banner(root: &Path, rules_source: &str, output: &str) {
    if output == "json" {
        return;
    }
    let line = format!(
        "Verifying repository structure in {} (rules: {})",
        root.to_string_lossy(),
        rules_source
    );
    if use_colors(output) {
        eprintln!("{}", line.bold());
    } else {
        eprintln!("{}", line);
    }
}

/// Print a failure that prevented validation from starting.
pub fn print_setup_error(message: &str, output: &str) {
    match output {
        "json" => {
            let out = json!({
                "passed": false,
                "violations": [{"kind": "configuration", "target": "", "message": message}],
                "infos": [],
            });
            println!("{}", to_pretty(&out));
        }
        _ => {
            let diag = CheckError::configuration("", message);
            eprintln!("{}", render_violation(&diag, use_colors(output)));
        }
    }
}

/// Print validation results in the requested format.
pub fn print_outcome(res: &ValidationOutcome, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_outcome_json(res))),
        _ => {
            let color = use_colors(output);
            for v in &res.violations {
                eprintln!("{}", render_violation(v, color));
            }
            for i in &res.infos {
                eprintln!("{}", render_info(i, color));
            }
            let verdict = if res.passed { "passed" } else { "failed" };
            let summary = format!(
                "— Summary — {} violations={} config_errors={} infos={} entries={}",
                verdict,
                res.summary.structure,
                res.summary.configuration,
                res.summary.infos,
                res.summary.entries
            );
            if !color {
                eprintln!("{}", summary);
            } else if res.passed {
                eprintln!("{}", summary.green().bold());
            } else {
                eprintln!("{}", summary.red().bold());
            }
        }
    }
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Compose the JSON document (pure) for testing/snapshot purposes.
pub fn compose_outcome_json(res: &ValidationOutcome) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

#[derive(Serialize)]
struct RulesDocument<'a> {
    rules: &'a RuleTable,
}

/// Render a rule table as a `treeguard.toml` document.
pub fn compose_rules_toml(table: &RuleTable) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&RulesDocument { rules: table })
}
