// rulebench-core/src/application/editor.rs

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::application::store::SharedStore;
use crate::domain::error::ValidationError;
use crate::domain::ports::RuleRepository;
use crate::domain::rule::{ConditionType, NewRule, Rule, RuleDraft, RuleId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit { rule_id: RuleId },
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub mode: EditorMode,
    pub draft: RuleDraft,
    pub submitting: bool,
    /// Local validation failure or the message of a rejected submit.
    pub validation_error: Option<String>,
    /// Bumped on every reset; a submit only writes back if it still matches.
    epoch: u64,
}

impl EditorState {
    pub fn selected_rule_id(&self) -> Option<&RuleId> {
        match &self.mode {
            EditorMode::Create => None,
            EditorMode::Edit { rule_id } => Some(rule_id),
        }
    }

    fn reset(&mut self, mode: EditorMode, draft: RuleDraft) {
        self.mode = mode;
        self.draft = draft;
        self.submitting = false;
        self.validation_error = None;
        self.epoch += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Rule),
    Updated(Rule),
    Invalid(ValidationError),
    Failed(String),
    /// A submit was already in flight.
    Busy,
}

enum Pending {
    Create(NewRule),
    Update(Rule),
}

/// Create/edit form of the rule-list page.
///
/// Cheap to clone: clones share the same editor state, store and repository.
#[derive(Clone)]
pub struct RuleEditorController {
    state: Rc<RefCell<EditorState>>,
    store: SharedStore,
    repository: Arc<dyn RuleRepository>,
}

impl RuleEditorController {
    pub fn new(store: SharedStore, repository: Arc<dyn RuleRepository>) -> Self {
        Self {
            state: Rc::new(RefCell::new(EditorState::default())),
            store,
            repository,
        }
    }

    /// Copy of the current editor state.
    pub fn state(&self) -> EditorState {
        self.state.borrow().clone()
    }

    pub fn mode(&self) -> EditorMode {
        self.state.borrow().mode.clone()
    }

    pub fn selected_rule_id(&self) -> Option<RuleId> {
        self.state.borrow().selected_rule_id().cloned()
    }

    pub fn draft(&self) -> RuleDraft {
        self.state.borrow().draft.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn validation_error(&self) -> Option<String> {
        self.state.borrow().validation_error.clone()
    }

    pub fn start_create(&self) {
        self.state
            .borrow_mut()
            .reset(EditorMode::Create, RuleDraft::default());
    }

    pub fn start_edit(&self, rule: &Rule) {
        debug!(rule.id = %rule.id, "Editing rule");
        self.state.borrow_mut().reset(
            EditorMode::Edit {
                rule_id: rule.id.clone(),
            },
            RuleDraft::from(rule),
        );
    }

    // --- DRAFT SETTERS ---

    pub fn set_name(&self, name: impl Into<String>) {
        self.state.borrow_mut().draft.name = name.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.state.borrow_mut().draft.description = description.into();
    }

    pub fn set_active(&self, is_active: bool) {
        self.state.borrow_mut().draft.is_active = is_active;
    }

    pub fn set_condition_type(&self, condition_type: ConditionType) {
        self.state.borrow_mut().draft.condition_type = condition_type;
    }

    pub fn set_condition(&self, condition: impl Into<String>) {
        self.state.borrow_mut().draft.condition = condition.into();
    }

    /// Drops the selection if the deleted rule is the one being edited,
    /// even while its submit is still in flight.
    pub fn on_rule_deleted(&self, id: &RuleId) {
        let mut state = self.state.borrow_mut();
        if state.selected_rule_id() == Some(id) {
            info!(rule.id = %id, "Selected rule was deleted, editor reset");
            state.reset(EditorMode::Create, RuleDraft::default());
        }
    }

    /// Validates the draft and sends it to the service.
    ///
    /// The store only ever receives the rule confirmed by the server.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let (pending, epoch) = {
            let mut state = self.state.borrow_mut();
            if state.submitting {
                warn!("Submit ignored: a submit is already in flight");
                return SubmitOutcome::Busy;
            }

            let built = match &state.mode {
                EditorMode::Create => state.draft.to_new_rule().map(Pending::Create),
                EditorMode::Edit { rule_id } => state.draft.to_rule(rule_id).map(Pending::Update),
            };
            let pending = match built {
                Ok(pending) => pending,
                Err(e) => {
                    state.validation_error = Some(e.to_string());
                    return SubmitOutcome::Invalid(e);
                }
            };

            state.submitting = true;
            state.validation_error = None;
            (pending, state.epoch)
        };

        let response = match &pending {
            Pending::Create(new_rule) => self.repository.create_rule(new_rule).await,
            Pending::Update(rule) => self.repository.update_rule(rule).await,
        };

        match response {
            Ok(confirmed) => self.confirm(&pending, confirmed, epoch),
            Err(e) => {
                let message = e.to_string();
                error!("❌ Saving rule failed: {}", message);
                let mut state = self.state.borrow_mut();
                if state.epoch == epoch {
                    state.submitting = false;
                    state.validation_error = Some(message.clone());
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn confirm(&self, pending: &Pending, confirmed: Rule, epoch: u64) -> SubmitOutcome {
        let created = matches!(pending, Pending::Create(_));
        let applied = {
            let mut store = self.store.borrow_mut();
            if created {
                store.apply_created(confirmed.clone())
            } else {
                store.apply_updated(confirmed.clone())
            }
        };
        if let Err(e) = applied {
            warn!("⚠️ {}", e);
        }

        let mut state = self.state.borrow_mut();
        if state.epoch != epoch {
            debug!(rule.id = %confirmed.id, "Editor was reset during submit, leaving it untouched");
        } else if created {
            state.reset(EditorMode::Create, RuleDraft::default());
        } else {
            state.submitting = false;
            state.validation_error = None;
            state.draft = RuleDraft::from(&confirmed);
        }

        if created {
            info!(rule.id = %confirmed.id, "✅ Rule '{}' created", confirmed.name);
            SubmitOutcome::Created(confirmed)
        } else {
            info!(rule.id = %confirmed.id, "✅ Rule '{}' updated", confirmed.name);
            SubmitOutcome::Updated(confirmed)
        }
    }
}
