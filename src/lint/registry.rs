//! Rule registry for managing style rules.
//!
//! The [`RuleRegistry`] stores the available rules in registration order and
//! provides methods for registering, retrieving, and iterating over them.
//! Ordering only determines pre-sort insertion order of diagnostics; the
//! report is sorted before rendering, so rule order never affects output.

use super::config::LintConfig;
use super::rule::{RuleId, StyleRule};
use super::rules::{
    CommaDangleRule, EolLastRule, IndentRule, MixedWhitespaceRule, SpacingRule, TabsRule,
    WhitespaceRule,
};

/// Ordered registry of all available style rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn StyleRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in the order they are
    /// listed by [`LintConfig::default`](super::config::LintConfig).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CommaDangleRule));
        registry.register(Box::new(IndentRule));
        registry.register(Box::new(MixedWhitespaceRule));
        registry.register(Box::new(TabsRule));
        registry.register(Box::new(EolLastRule));
        registry.register(Box::new(SpacingRule));
        registry.register(Box::new(WhitespaceRule));
        registry
    }

    /// Register a style rule at the end of the order.
    pub fn register(&mut self, rule: Box<dyn StyleRule>) {
        self.rules.push(rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn StyleRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn StyleRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Iterate over the rules enabled by `config`, in registration order.
    ///
    /// Disabled rules are not yielded at all, so they are never invoked.
    pub fn enabled<'a>(&'a self, config: &'a LintConfig) -> impl Iterator<Item = &'a dyn StyleRule> {
        self.iter().filter(|rule| config.is_enabled(&rule.id()))
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::buffer::LineBuffer;
    use crate::lint::diagnostic::Diagnostic;

    struct MockRule {
        id: RuleId,
    }

    impl StyleRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(&self, _buffer: &LineBuffer, _config: &LintConfig) -> Vec<Diagnostic> {
            vec![]
        }
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("mock"),
        }));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(MockRule {
            id: RuleId::new("first"),
        }));
        registry.register(Box::new(MockRule {
            id: RuleId::new("second"),
        }));

        let ids: Vec<RuleId> = registry.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RuleId::new("first"), RuleId::new("second")]);
    }

    #[test]
    fn registry_with_builtins_has_all_rules() {
        let registry = RuleRegistry::with_builtins();

        assert_eq!(registry.len(), 7);
        assert!(registry.get(&RuleId::new("comma-dangle")).is_some());
        assert!(registry.get(&RuleId::new("indent")).is_some());
        assert!(registry.get(&RuleId::new("mixed-whitespace")).is_some());
        assert!(registry.get(&RuleId::new("tabs")).is_some());
        assert!(registry.get(&RuleId::new("eol-last")).is_some());
        assert!(registry.get(&RuleId::new("spacing")).is_some());
        assert!(registry.get(&RuleId::new("whitespace")).is_some());
    }

    #[test]
    fn enabled_iterator_skips_disabled_rules() {
        let registry = RuleRegistry::with_builtins();
        let mut config = LintConfig::default();
        config.apply("whitespace", "false").unwrap();

        let ids: Vec<RuleId> = registry.enabled(&config).map(|r| r.id()).collect();

        assert!(!ids.contains(&RuleId::new("whitespace")));
        // Tabs are permitted by default, so that check is off too.
        assert!(!ids.contains(&RuleId::new("tabs")));
        assert!(ids.contains(&RuleId::new("indent")));
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }
}
