//! Test-only in-process rules service.
//!
//! Behaves like the remote API (assigns ids, keeps insertion order) and
//! records every call so tests can assert on what reached the "network".

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::domain::error::RepositoryError;
use crate::domain::execution::{ExecutionRequest, ExecutionResponse, ExecutionResultItem};
use crate::domain::ports::RuleRepository;
use crate::domain::rule::{ConditionType, NewRule, Rule, RuleId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewRule),
    Update(Rule),
    Delete(RuleId),
    Execute(ExecutionRequest),
}

#[derive(Default)]
pub struct MockRepository {
    calls: Mutex<Vec<Call>>,
    rules: Mutex<Vec<Rule>>,
    next_id: Mutex<u64>,
    failures: Mutex<HashMap<&'static str, RepositoryError>>,
    gates: Mutex<HashMap<&'static str, Arc<Notify>>>,
    execution: Mutex<ExecutionResponse>,
}

impl MockRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Arc<Self> {
        let repo = Self::default();
        *repo.rules.lock().unwrap() = rules;
        Arc::new(repo)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn server_rules(&self) -> Vec<Rule> {
        self.rules.lock().unwrap().clone()
    }

    /// Every later call to `op` fails with `err`.
    pub fn fail(&self, op: &'static str, err: RepositoryError) {
        self.failures.lock().unwrap().insert(op, err);
    }

    pub fn recover(&self, op: &'static str) {
        self.failures.lock().unwrap().remove(op);
    }

    /// Calls to `op` block until the returned handle is notified.
    pub fn hold(&self, op: &'static str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(op, gate.clone());
        gate
    }

    pub fn respond_to_execute(&self, response: ExecutionResponse) {
        *self.execution.lock().unwrap() = response;
    }

    async fn enter(&self, op: &'static str, call: Call) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        let gate = self.gates.lock().unwrap().get(op).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.failures.lock().unwrap().get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RuleRepository for MockRepository {
    async fn list_rules(&self) -> Result<Vec<Rule>, RepositoryError> {
        self.enter("list", Call::List).await?;
        Ok(self.server_rules())
    }

    async fn create_rule(&self, rule: &NewRule) -> Result<Rule, RepositoryError> {
        self.enter("create", Call::Create(rule.clone())).await?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            RuleId::new(format!("srv-{}", *next))
        };
        let created = rule.clone().with_id(id);
        self.rules.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_rule(&self, rule: &Rule) -> Result<Rule, RepositoryError> {
        self.enter("update", Call::Update(rule.clone())).await?;
        let mut rules = self.rules.lock().unwrap();
        match rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => {
                *existing = rule.clone();
                Ok(rule.clone())
            }
            None => Err(RepositoryError::rejected(404, "Rule not found")),
        }
    }

    async fn delete_rule(&self, id: &RuleId) -> Result<(), RepositoryError> {
        self.enter("delete", Call::Delete(id.clone())).await?;
        self.rules.lock().unwrap().retain(|r| &r.id != id);
        Ok(())
    }

    async fn execute_rules(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResponse, RepositoryError> {
        self.enter("execute", Call::Execute(request.clone())).await?;
        Ok(self.execution.lock().unwrap().clone())
    }
}

/// Deterministic rule with an expression condition.
pub fn rule(id: &str, name: &str, is_active: bool) -> Rule {
    Rule {
        id: RuleId::new(id),
        name: name.to_string(),
        description: None,
        is_active,
        condition_type: ConditionType::Expression,
        condition: format!("{} > 0", name.to_lowercase()),
    }
}

pub fn result_item(id: &str, name: &str, passed: bool) -> ExecutionResultItem {
    ExecutionResultItem {
        rule_id: RuleId::new(id),
        rule_name: name.to_string(),
        passed,
        message: (!passed).then(|| format!("{} failed", name)),
    }
}

/// Lets spawned local tasks run until `done` holds.
pub async fn settle(mut done: impl FnMut() -> bool) {
    for _ in 0..100 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("local tasks did not settle");
}
