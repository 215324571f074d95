use std::process::ExitCode;

/// Outcome of checking a branch name against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Matched an allow pattern and no deny pattern.
    Valid,
    /// Matched no allow pattern (deny list is not consulted).
    NotAllowed,
    /// Matched an allow pattern but also a deny pattern.
    Denied,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::NotAllowed => "NOT-ALLOWED",
            Verdict::Denied => "DENIED",
        }
    }

    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// Exit code consumed by the hook runner: 0 passes the hook, 1 blocks it.
    pub fn exit_code(self) -> ExitCode {
        if self.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
