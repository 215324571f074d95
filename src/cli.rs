use clap::{ArgAction, Parser};

/// Check the current git branch name against allow/deny patterns.
///
/// The branch name must match at least one allow pattern and none of the
/// deny patterns. Patterns are regular expressions anchored at the start
/// of the branch name.
#[derive(Debug, Parser)]
#[command(name = "branch-check", version)]
pub struct Cli {
    /// Regular expression the branch name should match; can be repeated.
    /// Giving at least one replaces the configured allow list entirely.
    #[arg(short, long, value_name = "REGEX")]
    pub allow: Vec<String>,

    /// Regular expression the branch name should not match; can be repeated.
    /// Giving at least one replaces the configured deny list entirely.
    #[arg(short, long, value_name = "REGEX")]
    pub deny: Vec<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
