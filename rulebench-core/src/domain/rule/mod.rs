// rulebench-core/src/domain/rule/mod.rs

pub mod condition_type;
pub mod draft;
pub mod model;

// Re-exports
pub use condition_type::ConditionType;
pub use draft::RuleDraft;
pub use model::{NewRule, Rule, RuleId};
