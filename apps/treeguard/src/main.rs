//! treeguard CLI binary entry point.
//! Resolves configuration, runs the validator, and prints results.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treeguard::cli::{Cli, Commands};
use treeguard::validate::Validator;
use treeguard::{config, output};

fn main() {
    let cli = Cli::parse();
    let requested_output = cli.output.clone().unwrap_or_else(|| "human".to_string());
    let eff = match config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.config.as_deref(),
        cli.output.as_deref(),
        cli.skip_optional,
    ) {
        Ok(eff) => eff,
        Err(e) => {
            let root = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
            let attempted = cli
                .config
                .clone()
                .map(PathBuf::from)
                .or_else(|| config::find_config(&root))
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| "config file".to_string());
            output::print_banner(&root, &attempted, &requested_output);
            output::print_setup_error(&e.to_string(), &requested_output);
            exit(1);
        }
    };

    match cli.cmd {
        Some(Commands::Rules) => match output::compose_rules_toml(&eff.rules) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                output::print_setup_error(&format!("cannot render rules: {}", e), "human");
                exit(1);
            }
        },
        None => {
            if !eff.repo_root.is_dir() {
                output::print_setup_error(
                    &format!(
                        "repository root is not a directory: {}",
                        eff.repo_root.to_string_lossy()
                    ),
                    &eff.output,
                );
                exit(1);
            }
            output::print_banner(&eff.repo_root, &eff.rules_source_label(), &eff.output);
            let outcome = Validator::new(&eff.repo_root, &eff.rules)
                .check_optional(eff.check_optional)
                .validate();
            output::print_outcome(&outcome, &eff.output);
            if !outcome.passed {
                exit(1);
            }
        }
    }
}
