//! Resolved rule configuration.
//!
//! A [`LintConfig`] is the explicit, ordered table of [`RuleDescriptor`]s for
//! one run. It is built from defaults, adjusted by the CLI before any file is
//! processed, and read-only from then on: the orchestrator and every rule
//! receive it by reference and never mutate it.
//!
//! Rule toggles come in two flavors, mirroring the option semantics of the
//! command line:
//!
//! - **allowance** rules (`comma-dangle`, `mixed-whitespace`, `tabs`): the
//!   option value states what the file is *permitted* to contain, so passing
//!   `true` silences the check and `false` activates it
//! - **check** rules (`indent`, `eol-last`, `spacing`, `whitespace`): the
//!   option value enables or disables the check directly, with an optional
//!   comma-separated parameter (`--indent true,2`)
//!
//! An unparseable value fails closed: the affected rule is disabled for the
//! run and an error is returned for the caller to log, but linting proceeds.

use super::rule::{RuleId, Severity};
use crate::error::{JsonlintError, Result};

/// How a rule's boolean option value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// `true` permits the construct, disabling the check.
    Allows,
    /// `true` activates the check.
    Enables,
}

/// Configuration of a single rule for one run.
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    /// Unique rule identifier.
    pub id: RuleId,
    /// Whether the rule's check runs at all. A disabled rule is never invoked.
    pub enabled: bool,
    /// Severity attached to the rule's diagnostics.
    pub severity: Severity,
    /// Rule-specific numeric parameter (indent width).
    pub width: Option<usize>,
    /// Short CLI option name.
    pub opt_short: char,
    /// Long CLI option name.
    pub opt_long: &'static str,
    /// How the option's boolean value is interpreted.
    pub toggle: Toggle,
    /// One-line description for listings.
    pub description: &'static str,
}

/// The resolved rule configuration for one linting run.
#[derive(Debug, Clone)]
pub struct LintConfig {
    rules: Vec<RuleDescriptor>,
    /// Set only by an explicit `tabs true` override; flips indentation to
    /// single-tab units when mixing is also disallowed.
    tabs_explicitly_allowed: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleDescriptor {
                    id: RuleId::new("comma-dangle"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 'c',
                    opt_long: "comma",
                    toggle: Toggle::Allows,
                    description: "When true, allows a dangling comma before a closing brace",
                },
                RuleDescriptor {
                    id: RuleId::new("indent"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: Some(4),
                    opt_short: 'i',
                    opt_long: "indent",
                    toggle: Toggle::Enables,
                    description: "Validates indentation; an optional second value sets the width",
                },
                RuleDescriptor {
                    id: RuleId::new("mixed-whitespace"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 'm',
                    opt_long: "mixed",
                    toggle: Toggle::Allows,
                    description: "When true, allows leading tabs and spaces on the same line",
                },
                RuleDescriptor {
                    id: RuleId::new("tabs"),
                    enabled: false,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 't',
                    opt_long: "tabs",
                    toggle: Toggle::Allows,
                    description: "When false, flags any line containing a tab character",
                },
                RuleDescriptor {
                    id: RuleId::new("eol-last"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 'e',
                    opt_long: "eol",
                    toggle: Toggle::Enables,
                    description: "Enforces a blank line at the end of the file",
                },
                RuleDescriptor {
                    id: RuleId::new("spacing"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 's',
                    opt_long: "space",
                    toggle: Toggle::Enables,
                    description: "Enforces a single space after a colon and none before",
                },
                RuleDescriptor {
                    id: RuleId::new("whitespace"),
                    enabled: true,
                    severity: Severity::Warning,
                    width: None,
                    opt_short: 'w',
                    opt_long: "whitespace",
                    toggle: Toggle::Enables,
                    description: "Warns about lines with trailing whitespace",
                },
            ],
            tabs_explicitly_allowed: false,
        }
    }
}

impl LintConfig {
    /// Iterate over the rule table in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.rules.iter()
    }

    /// Look up a rule's descriptor by id.
    pub fn descriptor(&self, id: &RuleId) -> Option<&RuleDescriptor> {
        self.rules.iter().find(|r| &r.id == id)
    }

    /// Whether the rule with the given id is enabled.
    pub fn is_enabled(&self, id: &RuleId) -> bool {
        self.descriptor(id).is_some_and(|r| r.enabled)
    }

    /// Severity for a rule, defaulting to Warning for unknown ids.
    pub fn severity(&self, id: &RuleId) -> Severity {
        self.descriptor(id)
            .map_or(Severity::Warning, |r| r.severity)
    }

    /// Override a rule's severity before a run starts.
    pub fn set_severity(&mut self, id: &RuleId, severity: Severity) {
        if let Some(rule) = self.rules.iter_mut().find(|r| &r.id == id) {
            rule.severity = severity;
        }
    }

    /// Configured indentation width.
    pub fn indent_width(&self) -> usize {
        self.descriptor(&RuleId::new("indent"))
            .and_then(|r| r.width)
            .unwrap_or(4)
    }

    /// Whether indentation is measured in single tabs instead of spaces.
    ///
    /// Active only when tabs were explicitly permitted and mixed leading
    /// whitespace is still disallowed (pure-tab indentation).
    pub fn tab_indent_mode(&self) -> bool {
        self.tabs_explicitly_allowed && self.is_enabled(&RuleId::new("mixed-whitespace"))
    }

    /// Apply one rule override, matched by short or long option name.
    ///
    /// `raw` is the option's value: `true`/`false` with an optional
    /// comma-separated numeric parameter, e.g. `true,2` for `indent`. An
    /// unrecognized option name or unparseable value disables the matched
    /// rule (fail closed) and reports [`JsonlintError::InvalidRuleParameter`];
    /// the configuration stays usable for every other rule.
    pub fn apply(&mut self, option: &str, raw: &str) -> Result<()> {
        let position = self
            .rules
            .iter()
            .position(|r| r.opt_long == option || r.opt_short.to_string() == option);
        let Some(position) = position else {
            return Err(JsonlintError::InvalidRuleParameter {
                rule: option.to_string(),
                value: raw.to_string(),
            });
        };

        let mut parts = raw.split(',');
        let flag = parts.next().unwrap_or("").trim();
        let value = parts.next().map(str::trim);

        let parsed = match flag.parse::<bool>() {
            Ok(parsed) => parsed,
            Err(_) => {
                self.rules[position].enabled = false;
                return Err(JsonlintError::InvalidRuleParameter {
                    rule: self.rules[position].id.to_string(),
                    value: raw.to_string(),
                });
            }
        };

        if let Some(value) = value {
            match value.parse::<usize>() {
                Ok(width) if width > 0 && self.rules[position].width.is_some() => {
                    self.rules[position].width = Some(width);
                }
                _ => {
                    self.rules[position].enabled = false;
                    return Err(JsonlintError::InvalidRuleParameter {
                        rule: self.rules[position].id.to_string(),
                        value: raw.to_string(),
                    });
                }
            }
        }

        let rule = &mut self.rules[position];
        rule.enabled = match rule.toggle {
            Toggle::Allows => !parsed,
            Toggle::Enables => parsed,
        };
        if rule.opt_long == "tabs" && parsed {
            self.tabs_explicitly_allowed = true;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lists_all_seven_rules() {
        let config = LintConfig::default();
        let ids: Vec<String> = config.rules().map(|r| r.id.to_string()).collect();

        assert_eq!(
            ids,
            vec![
                "comma-dangle",
                "indent",
                "mixed-whitespace",
                "tabs",
                "eol-last",
                "spacing",
                "whitespace"
            ]
        );
    }

    #[test]
    fn dangling_commas_are_flagged_by_default() {
        let config = LintConfig::default();
        assert!(config.is_enabled(&RuleId::new("comma-dangle")));
    }

    #[test]
    fn tabs_are_permitted_by_default() {
        let config = LintConfig::default();
        assert!(!config.is_enabled(&RuleId::new("tabs")));
    }

    #[test]
    fn allowing_dangling_commas_disables_the_check() {
        let mut config = LintConfig::default();
        config.apply("comma", "true").unwrap();
        assert!(!config.is_enabled(&RuleId::new("comma-dangle")));
    }

    #[test]
    fn disallowing_tabs_enables_the_check() {
        let mut config = LintConfig::default();
        config.apply("tabs", "false").unwrap();
        assert!(config.is_enabled(&RuleId::new("tabs")));
    }

    #[test]
    fn short_option_names_match() {
        let mut config = LintConfig::default();
        config.apply("w", "false").unwrap();
        assert!(!config.is_enabled(&RuleId::new("whitespace")));
    }

    #[test]
    fn indent_width_can_be_overridden() {
        let mut config = LintConfig::default();
        config.apply("indent", "true,2").unwrap();
        assert!(config.is_enabled(&RuleId::new("indent")));
        assert_eq!(config.indent_width(), 2);
    }

    #[test]
    fn unparseable_flag_fails_closed() {
        let mut config = LintConfig::default();
        let result = config.apply("indent", "maybe");

        assert!(result.is_err());
        assert!(!config.is_enabled(&RuleId::new("indent")));
    }

    #[test]
    fn zero_width_fails_closed() {
        let mut config = LintConfig::default();
        let result = config.apply("indent", "true,0");

        assert!(result.is_err());
        assert!(!config.is_enabled(&RuleId::new("indent")));
    }

    #[test]
    fn unknown_option_is_an_error_but_leaves_rules_alone() {
        let mut config = LintConfig::default();
        let result = config.apply("frobnicate", "true");

        assert!(result.is_err());
        assert!(config.is_enabled(&RuleId::new("indent")));
    }

    #[test]
    fn tab_indent_mode_requires_explicit_allowance() {
        let mut config = LintConfig::default();
        assert!(!config.tab_indent_mode());

        config.apply("tabs", "true").unwrap();
        assert!(config.tab_indent_mode());
    }

    #[test]
    fn tab_indent_mode_off_when_mixing_allowed() {
        let mut config = LintConfig::default();
        config.apply("tabs", "true").unwrap();
        config.apply("mixed", "true").unwrap();
        assert!(!config.tab_indent_mode());
    }

    #[test]
    fn severity_override_sticks() {
        let mut config = LintConfig::default();
        config.set_severity(&RuleId::new("whitespace"), Severity::Error);
        assert_eq!(config.severity(&RuleId::new("whitespace")), Severity::Error);
    }
}
