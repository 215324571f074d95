//! Branch-name resolution.
//!
//! Resolution walks an ordered chain of [`BranchSource`]s; the first source
//! that produces a non-empty name wins:
//!
//! 1. [`CiEnv`] — CI-provided branch variables (see [`ci::CI_BRANCH_VARS`]).
//! 2. [`SymbolicRef`] — `git symbolic-ref --quiet --short HEAD`, the attached
//!    branch of an interactive checkout.
//! 3. [`NameRev`] — `git name-rev --name-only HEAD`, recovering a usable name
//!    from a detached HEAD by stripping `remotes/<remote>/` or `refs/<type>/`
//!    prefixes.

pub mod ci;
pub mod git;

pub use ci::CiEnv;
pub use git::{GitCli, GitError, GitRunner};

use thiserror::Error;

/// Terminal resolution failures. Each maps to a one-line diagnostic and
/// exit code 1; nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("git not installed or not found in PATH.")]
    GitUnavailable,
    #[error("failed to get current branch name. Are you in a git repository?")]
    NotARepository,
    #[error("could not resolve HEAD to a branch name.")]
    Unclassified,
}

/// One strategy for determining the current branch name.
///
/// `Ok(None)` hands over to the next source in the chain; an error aborts
/// resolution.
pub trait BranchSource {
    /// Short identifier used in debug logs.
    fn name(&self) -> &'static str;

    fn lookup(&self) -> Result<Option<String>, ResolveError>;
}

/// Map git failures that no later source can recover from.
fn fatal_git_error(err: &GitError) -> Option<ResolveError> {
    match err {
        GitError::NotInstalled | GitError::Io(_) => Some(ResolveError::GitUnavailable),
        GitError::Exit { .. } if err.is_not_a_repository() => {
            Some(ResolveError::NotARepository)
        }
        GitError::Exit { .. } => None,
    }
}

/// The attached branch, if HEAD is a symbolic ref.
pub struct SymbolicRef<'a> {
    runner: &'a dyn GitRunner,
}

impl<'a> SymbolicRef<'a> {
    pub fn new(runner: &'a dyn GitRunner) -> Self {
        Self { runner }
    }
}

impl BranchSource for SymbolicRef<'_> {
    fn name(&self) -> &'static str {
        "symbolic-ref"
    }

    fn lookup(&self) -> Result<Option<String>, ResolveError> {
        match self.runner.run(&["symbolic-ref", "--quiet", "--short", "HEAD"]) {
            Ok(name) if !name.is_empty() => Ok(Some(name)),
            Ok(_) => Ok(None),
            Err(err) => match fatal_git_error(&err) {
                Some(fatal) => Err(fatal),
                // Non-zero exit from symbolic-ref without a repository-level
                // failure means detached HEAD.
                None => {
                    log::debug!("HEAD is not a symbolic ref (detached?)");
                    Ok(None)
                }
            },
        }
    }
}

/// Reverse-resolution of HEAD to a human-readable ref name (detached HEAD
/// recovery, typical of CI merge-commit checkouts).
pub struct NameRev<'a> {
    runner: &'a dyn GitRunner,
}

impl<'a> NameRev<'a> {
    pub fn new(runner: &'a dyn GitRunner) -> Self {
        Self { runner }
    }
}

impl BranchSource for NameRev<'_> {
    fn name(&self) -> &'static str {
        "name-rev"
    }

    fn lookup(&self) -> Result<Option<String>, ResolveError> {
        match self.runner.run(&["name-rev", "--name-only", "HEAD"]) {
            // name-rev prints the literal string "undefined" when it cannot
            // classify the commit.
            Ok(name) if name.is_empty() || name == "undefined" => Ok(None),
            Ok(name) => {
                let bare = strip_ref_prefix(&name);
                if bare.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(bare.to_string()))
                }
            }
            Err(err) => match fatal_git_error(&err) {
                Some(fatal) => Err(fatal),
                None => Ok(None),
            },
        }
    }
}

/// Reduce a ref name to the bare branch name by stripping exactly one
/// `remotes/<remote>/` or `refs/<type>/` prefix:
/// `refs/heads/feature/x` → `feature/x`,
/// `remotes/origin/hotfix/y` → `hotfix/y`.
pub fn strip_ref_prefix(name: &str) -> &str {
    let rest = if let Some(rest) = name.strip_prefix("remotes/") {
        rest
    } else if let Some(rest) = name.strip_prefix("refs/") {
        rest
    } else {
        return name;
    };
    // Drop the remote or ref-type segment as well.
    rest.split_once('/').map_or("", |(_, tail)| tail)
}

/// Ordered chain of branch sources.
pub struct Resolver<'a> {
    sources: Vec<Box<dyn BranchSource + 'a>>,
}

impl<'a> Resolver<'a> {
    pub fn new(sources: Vec<Box<dyn BranchSource + 'a>>) -> Self {
        Self { sources }
    }

    /// Walk the chain; the first non-empty name wins.
    pub fn resolve(&self) -> Result<String, ResolveError> {
        for source in &self.sources {
            match source.lookup()? {
                Some(name) if !name.is_empty() => {
                    log::info!("resolved branch name {name:?} via {}", source.name());
                    return Ok(name);
                }
                _ => log::debug!("source {} yielded no branch name", source.name()),
            }
        }
        Err(ResolveError::Unclassified)
    }
}

/// The standard chain: CI environment first, then local git state.
pub fn from_environment(runner: &dyn GitRunner) -> Resolver<'_> {
    Resolver::new(vec![
        Box::new(CiEnv::from_process()),
        Box::new(SymbolicRef::new(runner)),
        Box::new(NameRev::new(runner)),
    ])
}
