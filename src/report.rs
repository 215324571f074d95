use std::fmt::Display;

use crate::policy::{PatternSet, Verdict};

/// Render the verdict line for the hook runner.
///
/// Failure messages carry the full pattern list of the check that failed,
/// in configured order, so the committer can see what would have passed.
pub fn verdict_message(
    branch: &str,
    verdict: Verdict,
    allow: &PatternSet,
    deny: &PatternSet,
) -> String {
    match verdict {
        Verdict::Valid => format!("Branch name {branch:?} is valid."),
        Verdict::NotAllowed => format!(
            "Branch name {branch:?} does not match any of the allowed patterns: {:?}",
            allow.sources()
        ),
        Verdict::Denied => format!(
            "Branch name {branch:?} matches a denied pattern: {:?}",
            deny.sources()
        ),
    }
}

/// Render a terminal error (resolution or configuration) as a single line.
pub fn error_message(err: &impl Display) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PatternSet;
    use crate::resolve::ResolveError;

    fn sets() -> (PatternSet, PatternSet) {
        let allow = PatternSet::compile("allow", &["^feature/".into(), "^main$".into()]).unwrap();
        let deny = PatternSet::compile("deny", &["^main$".into()]).unwrap();
        (allow, deny)
    }

    #[test]
    fn valid_message_names_the_branch() {
        let (allow, deny) = sets();
        assert_eq!(
            verdict_message("feature/x", Verdict::Valid, &allow, &deny),
            "Branch name \"feature/x\" is valid."
        );
    }

    #[test]
    fn not_allowed_message_lists_allow_patterns_in_order() {
        let (allow, deny) = sets();
        let msg = verdict_message("oops", Verdict::NotAllowed, &allow, &deny);
        assert!(msg.contains("\"oops\""));
        assert!(msg.contains(r#"["^feature/", "^main$"]"#));
    }

    #[test]
    fn denied_message_lists_deny_patterns() {
        let (allow, deny) = sets();
        let msg = verdict_message("main", Verdict::Denied, &allow, &deny);
        assert!(msg.contains("\"main\""));
        assert!(msg.contains(r#"["^main$"]"#));
    }

    #[test]
    fn resolver_errors_render_as_one_line() {
        assert_eq!(
            error_message(&ResolveError::GitUnavailable),
            "Error: git not installed or not found in PATH."
        );
        assert_eq!(
            error_message(&ResolveError::NotARepository),
            "Error: failed to get current branch name. Are you in a git repository?"
        );
    }
}
