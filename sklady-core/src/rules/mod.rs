//! Rule compilation and application
//!
//! Rewrite rules normalize word text before it is split into letters.
//! Split rules divide the consonants between two vowels. Both are written
//! in the pattern language handled by [`pattern`].

pub mod pattern;
pub mod rewrite;
pub mod split;

pub use pattern::{Atom, Encoding, Pattern, PatternCompiler};
pub use rewrite::{RewriteRule, RewriteRuleSet};
pub use split::{BoundaryPolicy, SplitRule, SplitRuleSet};
