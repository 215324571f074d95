//! branch-check: pre-commit guard for branch naming conventions.
//!
//! Resolves the current branch name (CI environment first, then local git
//! state, with detached-HEAD recovery) and checks it against configured
//! allow/deny patterns. Prints one verdict line on stdout; exit code 0 lets
//! the hook runner proceed, 1 blocks it.

use std::process::ExitCode;

use clap::Parser;

use branch_check::cli::Cli;
use branch_check::config::Config;
use branch_check::logging;
use branch_check::policy::{self, PatternSet};
use branch_check::report;
use branch_check::resolve::{self, GitCli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load();
    config.apply_cli(&cli);

    // Patterns compile before any git interaction: a broken configuration
    // fails fast.
    let allow = match PatternSet::compile("allow", &config.allow) {
        Ok(set) => set,
        Err(e) => {
            println!("{}", report::error_message(&e));
            return ExitCode::FAILURE;
        }
    };
    let deny = match PatternSet::compile("deny", &config.deny) {
        Ok(set) => set,
        Err(e) => {
            println!("{}", report::error_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let git = GitCli::new();
    let branch = match resolve::from_environment(&git).resolve() {
        Ok(name) => name,
        Err(e) => {
            println!("{}", report::error_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let verdict = policy::evaluate(&branch, &allow, &deny);
    println!("{}", report::verdict_message(&branch, verdict, &allow, &deny));
    verdict.exit_code()
}
