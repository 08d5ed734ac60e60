// rulebench-core/src/domain/execution/contract.rs

use super::payload::Payload;
use crate::domain::rule::RuleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub payload: Payload,
    pub rule_ids: Vec<RuleId>,
}

impl ExecutionRequest {
    /// Builds a request, dropping repeated ids while keeping first-seen order.
    pub fn new(payload: Payload, rule_ids: impl IntoIterator<Item = RuleId>) -> Self {
        let mut unique: Vec<RuleId> = Vec::new();
        for id in rule_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            payload,
            rule_ids: unique,
        }
    }
}

/// Outcome of one rule. `rule_name` is the name at execution time, not a live join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResultItem {
    pub rule_id: RuleId,
    pub rule_name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server order is kept as-is; ids the server could not resolve are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExecutionResponse {
    pub results: Vec<ExecutionResultItem>,
}

impl ExecutionResponse {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}
