//! Built-in style rules.
//!
//! This module contains all the built-in style checks that ship with
//! jsonlint. Each rule lives in its own file and is registered by
//! [`RuleRegistry::with_builtins`](crate::lint::RuleRegistry::with_builtins).

pub mod comma_dangle;
pub mod eol_last;
pub mod indent;
pub mod mixed_whitespace;
pub mod spacing;
pub mod tabs;
pub mod whitespace;

pub use comma_dangle::CommaDangleRule;
pub use eol_last::EolLastRule;
pub use indent::IndentRule;
pub use mixed_whitespace::MixedWhitespaceRule;
pub use spacing::SpacingRule;
pub use tabs::TabsRule;
pub use whitespace::WhitespaceRule;
