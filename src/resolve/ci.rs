use super::{BranchSource, ResolveError};

/// CI variables carrying the source branch of the change under test, in
/// lookup order. Hosted CI checks out a detached merge commit, so the branch
/// that triggered the run is only visible through these.
pub const CI_BRANCH_VARS: &[&str] = &[
    // GitHub Actions: source branch of the pull request
    "GITHUB_HEAD_REF",
    // GitLab CI: source branch of the merge request
    "CI_MERGE_REQUEST_SOURCE_BRANCH_NAME",
    // Bitbucket Pipelines
    "BITBUCKET_BRANCH",
];

/// Branch source backed by a snapshot of CI environment variables.
#[derive(Debug)]
pub struct CiEnv {
    values: Vec<(&'static str, String)>,
}

impl CiEnv {
    /// Snapshot the relevant variables from the process environment.
    pub fn from_process() -> Self {
        let values = CI_BRANCH_VARS
            .iter()
            .filter_map(|&var| std::env::var(var).ok().map(|value| (var, value)))
            .collect();
        Self { values }
    }

    /// Build a source from explicit variable assignments (tests, embedding).
    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        let values = pairs
            .iter()
            .map(|&(var, value)| (var, value.to_string()))
            .collect();
        Self { values }
    }
}

impl BranchSource for CiEnv {
    fn name(&self) -> &'static str {
        "ci-env"
    }

    fn lookup(&self) -> Result<Option<String>, ResolveError> {
        for (var, value) in &self.values {
            // GitHub Actions exports GITHUB_HEAD_REF as "" on non-PR events.
            if !value.is_empty() {
                log::debug!("{var} is set, using the CI-provided branch name");
                return Ok(Some(value.clone()));
            }
        }
        Ok(None)
    }
}
