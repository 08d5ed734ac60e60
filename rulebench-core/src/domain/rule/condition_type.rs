// rulebench-core/src/domain/rule/condition_type.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the remote evaluator interprets `Rule::condition`.
///
/// Closed on purpose: a new grammar must be handled at every match site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionType {
    #[default]
    Expression,
    Json,
}

impl ConditionType {
    pub const ALL: [ConditionType; 2] = [ConditionType::Expression, ConditionType::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConditionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expression" => Ok(Self::Expression),
            "json" => Ok(Self::Json),
            _ => Err(DomainError::UnknownConditionType(s.to_string())),
        }
    }
}
