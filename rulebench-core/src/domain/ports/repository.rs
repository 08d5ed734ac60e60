// rulebench-core/src/domain/ports/repository.rs

// What the application needs from the rules service, without knowing how it is reached.
// The HTTP adapter lives in infrastructure; tests plug in an in-process double.

use crate::domain::error::RepositoryError;
use crate::domain::execution::{ExecutionRequest, ExecutionResponse};
use crate::domain::rule::{NewRule, Rule, RuleId};
use async_trait::async_trait;

#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Full collection, in service order.
    async fn list_rules(&self) -> Result<Vec<Rule>, RepositoryError>;

    /// Returns the created rule carrying its assigned id.
    async fn create_rule(&self, rule: &NewRule) -> Result<Rule, RepositoryError>;

    async fn update_rule(&self, rule: &Rule) -> Result<Rule, RepositoryError>;

    async fn delete_rule(&self, id: &RuleId) -> Result<(), RepositoryError>;

    async fn execute_rules(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResponse, RepositoryError>;
}
