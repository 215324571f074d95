//! branch-check: a pre-commit hook that validates git branch names.
//!
//! The current branch name must match at least one *allow* pattern and none
//! of the *deny* patterns; the verdict is printed on stdout and the exit code
//! tells the hook runner whether to let the commit through. Patterns are
//! regular expressions anchored at the start of the branch name.
//!
//! # Architecture
//!
//! - **[`cli`]** — Command-line surface: repeatable `--allow`/`--deny` pattern
//!   overrides and verbosity.
//! - **[`config`]** — Configuration loading: embedded conventional-branch
//!   defaults + user overlay merge.
//! - **[`resolve`]** — Branch-name resolution chain: CI environment variables,
//!   `git symbolic-ref`, `git name-rev` with ref-prefix stripping.
//! - **[`policy`]** — Pattern compilation and the allow/deny verdict.
//! - **[`report`]** — Verdict rendering and exit-code mapping.
//! - **[`logging`]** — Stderr logging setup.

/// Command-line argument surface.
pub mod cli;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Stderr logging setup.
pub mod logging;
/// Pattern sets, verdicts, and the allow/deny check.
pub mod policy;
/// Verdict and diagnostic rendering.
pub mod report;
/// Current-branch resolution across interactive and CI checkouts.
pub mod resolve;

use policy::{PatternSet, Verdict};

/// Check a branch name against the built-in default policy.
///
/// This is the main entry point for tests and simple usage. For CLI or
/// user-configured patterns, compile the [`PatternSet`]s directly.
pub fn check(branch: &str) -> Verdict {
    let config = config::Config::default_config();
    let allow =
        PatternSet::compile("allow", &config.allow).expect("default allow patterns must compile");
    let deny =
        PatternSet::compile("deny", &config.deny).expect("default deny patterns must compile");
    policy::evaluate(branch, &allow, &deny)
}
