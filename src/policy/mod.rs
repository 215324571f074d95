pub mod verdict;

pub use verdict::Verdict;

use regex::Regex;
use thiserror::Error;

/// A pattern list that could not be compiled. Configuration error class:
/// reported before any branch evaluation completes.
#[derive(Debug, Error)]
#[error("invalid {list} pattern {pattern:?}: {source}")]
pub struct PatternError {
    /// Which list the pattern came from ("allow" or "deny").
    pub list: &'static str,
    /// The offending pattern source string.
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// An ordered set of compiled patterns.
///
/// Matching is anchored at the start of the branch name only: a pattern
/// matches if the name *starts with* a match of it, not necessarily the
/// whole name. Rust's `regex` searches anywhere in the haystack by default,
/// so each pattern is compiled as `\A(?:pattern)`.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<(String, Regex)>,
}

impl PatternSet {
    /// Compile a list of pattern sources, preserving order.
    /// Fails on the first unparseable pattern.
    pub fn compile(list: &'static str, sources: &[String]) -> Result<Self, PatternError> {
        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            let regex = Regex::new(&format!(r"\A(?:{source})")).map_err(|e| PatternError {
                list,
                pattern: source.clone(),
                source: e,
            })?;
            patterns.push((source.clone(), regex));
        }
        Ok(Self { patterns })
    }

    /// True if any pattern matches at the start of `name`.
    pub fn is_match(&self, name: &str) -> bool {
        self.patterns.iter().any(|(_, regex)| regex.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The original pattern sources, in the order they were given.
    pub fn sources(&self) -> Vec<&str> {
        self.patterns.iter().map(|(s, _)| s.as_str()).collect()
    }
}

/// Check a branch name against the allow and deny sets.
///
/// The allow check runs first: a name outside the allow set is `NotAllowed`
/// regardless of the deny list. Only membership matters, not which pattern
/// matched.
pub fn evaluate(branch: &str, allow: &PatternSet, deny: &PatternSet) -> Verdict {
    if !allow.is_match(branch) {
        return Verdict::NotAllowed;
    }
    if deny.is_match(branch) {
        return Verdict::Denied;
    }
    Verdict::Valid
}
