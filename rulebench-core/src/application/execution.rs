// rulebench-core/src/application/execution.rs

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::application::scope::ViewScope;
use crate::application::store::{LoadOutcome, SharedStore, load_rules};
use crate::domain::error::ValidationError;
use crate::domain::execution::{
    DEFAULT_PAYLOAD_TEXT, ExecutionRequest, ExecutionResponse, ExecutionResultItem, Payload,
};
use crate::domain::ports::RuleRepository;
use crate::domain::rule::RuleId;

#[derive(Debug, Clone)]
pub struct ExecutionState {
    /// Active rules at the time of the last load, in store order.
    pub candidate_ids: Vec<RuleId>,
    pub selected_ids: Vec<RuleId>,
    pub payload_text: String,
    pub executing: bool,
    pub results: Option<Vec<ExecutionResultItem>>,
    pub error: Option<String>,
    scope: ViewScope,
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self {
            candidate_ids: Vec::new(),
            selected_ids: Vec::new(),
            payload_text: DEFAULT_PAYLOAD_TEXT.to_string(),
            executing: false,
            results: None,
            error: None,
            scope: ViewScope::new(),
        }
    }
}

impl ExecutionState {
    pub fn is_selected(&self, id: &RuleId) -> bool {
        self.selected_ids.contains(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Completed(ExecutionResponse),
    Invalid(ValidationError),
    Failed(String),
    Busy,
}

/// Execution page: pick active rules, provide a payload, run them remotely.
#[derive(Clone)]
pub struct ExecutionController {
    state: Rc<RefCell<ExecutionState>>,
    store: SharedStore,
    repository: Arc<dyn RuleRepository>,
}

impl ExecutionController {
    pub fn new(store: SharedStore, repository: Arc<dyn RuleRepository>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ExecutionState::default())),
            store,
            repository,
        }
    }

    pub fn state(&self) -> ExecutionState {
        self.state.borrow().clone()
    }

    pub fn selected_ids(&self) -> Vec<RuleId> {
        self.state.borrow().selected_ids.clone()
    }

    pub fn results(&self) -> Option<Vec<ExecutionResultItem>> {
        self.state.borrow().results.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_executing(&self) -> bool {
        self.state.borrow().executing
    }

    /// Binds the controller to a view and loads its candidates.
    pub async fn mount(&self, scope: ViewScope) -> LoadOutcome {
        self.state.borrow_mut().scope = scope;
        self.refresh_candidates().await
    }

    /// Reloads the store, then snapshots its active rules and selects them all.
    #[instrument(skip(self))]
    pub async fn refresh_candidates(&self) -> LoadOutcome {
        let scope = {
            let mut state = self.state.borrow_mut();
            state.error = None;
            state.scope.clone()
        };
        let outcome = load_rules(&self.store, self.repository.as_ref(), &scope).await;

        let mut state = self.state.borrow_mut();
        match &outcome {
            LoadOutcome::Loaded(_) => {
                let candidates: Vec<RuleId> = self
                    .store
                    .borrow()
                    .active_rules()
                    .map(|r| r.id.clone())
                    .collect();
                state.selected_ids = candidates.clone();
                state.candidate_ids = candidates;
                state.error = None;
            }
            LoadOutcome::Failed(message) => state.error = Some(message.clone()),
            LoadOutcome::Discarded => {}
        }
        outcome
    }

    /// Membership flip: a second toggle of the same id restores the set.
    pub fn toggle_selection(&self, id: &RuleId) {
        let mut state = self.state.borrow_mut();
        if state.is_selected(id) {
            state.selected_ids.retain(|selected| selected != id);
        } else {
            state.selected_ids.push(id.clone());
        }
    }

    pub fn select_all(&self) {
        let mut state = self.state.borrow_mut();
        state.selected_ids = state.candidate_ids.clone();
    }

    pub fn clear_selection(&self) {
        self.state.borrow_mut().selected_ids.clear();
    }

    pub fn set_payload_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().payload_text = text.into();
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ExecuteOutcome {
        let request = match self.prepare() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let start = Instant::now();
        let response = self.repository.execute_rules(&request).await;

        let mut state = self.state.borrow_mut();
        state.executing = false;
        match response {
            Ok(response) => {
                info!(
                    "🚀 Executed {} rules in {:.2?} ({} results)",
                    request.rule_ids.len(),
                    start.elapsed(),
                    response.results.len()
                );
                state.results = Some(response.results.clone());
                ExecuteOutcome::Completed(response)
            }
            Err(e) => {
                let message = e.to_string();
                error!("❌ Execution failed: {}", message);
                state.error = Some(message.clone());
                ExecuteOutcome::Failed(message)
            }
        }
    }

    /// Local checks in order: payload, then selection. Marks the state as
    /// executing when the request may go out.
    fn prepare(&self) -> Result<ExecutionRequest, ExecuteOutcome> {
        let mut state = self.state.borrow_mut();
        if state.executing {
            warn!("Execute ignored: an execution is already in flight");
            return Err(ExecuteOutcome::Busy);
        }
        state.error = None;
        state.results = None;

        let invalid = |state: &mut ExecutionState, e: ValidationError| {
            state.error = Some(e.to_string());
            ExecuteOutcome::Invalid(e)
        };

        let payload = match Payload::parse(&state.payload_text) {
            Ok(payload) => payload,
            Err(e) => return Err(invalid(&mut *state, e)),
        };

        // Rules deleted since the last load are no longer sent
        let store = self.store.borrow();
        let (known, stale): (Vec<RuleId>, Vec<RuleId>) = state
            .selected_ids
            .iter()
            .cloned()
            .partition(|id| store.contains(id));
        for id in &stale {
            warn!(rule.id = %id, "Selected rule is no longer known, skipping it");
        }
        if known.is_empty() {
            return Err(invalid(&mut *state, ValidationError::EmptySelection));
        }

        state.executing = true;
        Ok(ExecutionRequest::new(payload, known))
    }
}
