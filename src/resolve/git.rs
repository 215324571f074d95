use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// A failed git invocation.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("git not installed or not found in PATH")]
    NotInstalled,
    #[error("failed to invoke git: {0}")]
    Io(std::io::Error),
    #[error("git exited with status {status}: {stderr}")]
    Exit { status: i32, stderr: String },
}

impl GitError {
    /// True when git reported that the working directory is not inside a
    /// repository (`fatal: not a git repository ...`).
    pub fn is_not_a_repository(&self) -> bool {
        match self {
            GitError::Exit { stderr, .. } => {
                stderr.to_lowercase().contains("not a git repository")
            }
            _ => false,
        }
    }
}

/// Synchronous git invocation seam. The resolver only issues read-only
/// subcommands; tests substitute fakes.
pub trait GitRunner {
    /// Run `git <args>` and return trimmed stdout on success.
    fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

/// Production runner: spawns the `git` executable from the search path and
/// blocks until it exits.
#[derive(Debug, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the process working directory (hook-runner behavior).
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in a specific directory instead.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        log::debug!("running git {}", args.join(" "));
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::NotInstalled
            } else {
                GitError::Io(e)
            }
        })?;
        if !output.status.success() {
            return Err(GitError::Exit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
