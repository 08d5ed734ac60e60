// rulebench-core/src/domain/rule/model.rs

use super::condition_type::ConditionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the rules service. Never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RuleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A named validation unit as confirmed by the rules service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub condition_type: ConditionType,
    pub condition: String,
}

/// Body of a create request: a rule before the service assigned its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub condition_type: ConditionType,
    pub condition: String,
}

impl NewRule {
    pub fn with_id(self, id: RuleId) -> Rule {
        Rule {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            condition_type: self.condition_type,
            condition: self.condition,
        }
    }
}

impl Rule {
    /// Same rule without its identity, e.g. to compare a created rule with its request.
    pub fn definition(&self) -> NewRule {
        NewRule {
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            condition_type: self.condition_type,
            condition: self.condition.clone(),
        }
    }
}
