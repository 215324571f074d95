use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Embedded default policy.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Allow/deny pattern lists, in evaluation order.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub deny: Vec<String>,
}

// ── Overlay (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    allow: Vec<String>,
    #[serde(default)]
    deny: Vec<String>,
    #[serde(default)]
    remove_allow: Vec<String>,
    #[serde(default)]
    remove_deny: Vec<String>,
}

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/branch-check/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend. Set `replace = true`
    /// to replace both lists entirely, or use `remove_allow` / `remove_deny`
    /// to subtract specific patterns from defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/branch-check/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/branch-check/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                // A broken overlay must not disable the guard; defaults still apply.
                log::warn!("ignoring unparseable user config: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        merge_list(
            &mut self.allow,
            overlay.allow,
            &overlay.remove_allow,
            overlay.replace,
        );
        merge_list(
            &mut self.deny,
            overlay.deny,
            &overlay.remove_deny,
            overlay.replace,
        );
    }

    /// Apply command-line pattern flags. A non-empty flag list replaces the
    /// corresponding configured list entirely.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if !cli.allow.is_empty() {
            self.allow = cli.allow.clone();
        }
        if !cli.deny.is_empty() {
            self.deny = cli.deny.clone();
        }
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.allow.len(), 2);
        assert!(config.deny.is_empty());
    }

    #[test]
    fn default_allow_covers_conventional_branches() {
        let config = Config::default_config();
        assert!(config.allow[0].contains("feature|bugfix|hotfix"));
        assert!(config.allow[1].contains("main|master|develop"));
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_extends_allow_list() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            allow = ["^experiment/"]
        "#,
        );
        assert_eq!(config.allow.len(), 3);
        assert_eq!(config.allow[2], "^experiment/");
    }

    #[test]
    fn overlay_removes_from_allow_list() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            remove_allow = ['^(main|master|develop)$']
        "#,
        );
        assert_eq!(config.allow.len(), 1);
        assert!(config.allow[0].contains("feature"));
    }

    #[test]
    fn overlay_replace_mode() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            replace = true
            allow = ["^team/"]
            deny = ["^wip/"]
        "#,
        );
        assert_eq!(config.allow, vec!["^team/"]);
        assert_eq!(config.deny, vec!["^wip/"]);
    }

    #[test]
    fn overlay_extends_deny_list() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            deny = ['^(main|master)$']
        "#,
        );
        assert_eq!(config.deny, vec!["^(main|master)$"]);
        // Allow list untouched
        assert_eq!(config.allow.len(), 2);
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            allow = ['^(main|master|develop)$']
        "#,
        );
        let count = config
            .allow
            .iter()
            .filter(|s| *s == "^(main|master|develop)$")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.allow, original.allow);
        assert_eq!(config.deny, original.deny);
    }

    // ── CLI precedence ──

    #[test]
    fn cli_allow_replaces_entire_list() {
        let mut config = Config::default_config();
        let cli = Cli::parse_from(["branch-check", "--allow", "^team/"]);
        config.apply_cli(&cli);
        assert_eq!(config.allow, vec!["^team/"]);
        // Deny untouched
        assert!(config.deny.is_empty());
    }

    #[test]
    fn cli_deny_replaces_entire_list() {
        let mut config = Config::default_config();
        config.deny = vec!["^old$".into()];
        let cli = Cli::parse_from(["branch-check", "-d", "^(main|master)$"]);
        config.apply_cli(&cli);
        assert_eq!(config.deny, vec!["^(main|master)$"]);
        assert_eq!(config.allow.len(), 2);
    }

    #[test]
    fn cli_without_flags_keeps_config() {
        let mut config = Config::default_config();
        let cli = Cli::parse_from(["branch-check"]);
        config.apply_cli(&cli);
        assert_eq!(config.allow.len(), 2);
        assert!(config.deny.is_empty());
    }

    #[test]
    fn cli_flags_preserve_given_order() {
        let mut config = Config::default_config();
        let cli = Cli::parse_from(["branch-check", "-a", "^b", "-a", "^a", "-a", "^c"]);
        config.apply_cli(&cli);
        assert_eq!(config.allow, vec!["^b", "^a", "^c"]);
    }
}
