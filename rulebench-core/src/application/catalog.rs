// rulebench-core/src/application/catalog.rs

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::application::editor::RuleEditorController;
use crate::application::scope::ViewScope;
use crate::application::store::{LoadOutcome, RuleCollectionStore, SharedStore, load_rules};
use crate::domain::error::DomainError;
use crate::domain::ports::RuleRepository;
use crate::domain::rule::{Rule, RuleId};
use crate::error::RulebenchError;

/// Rule-list page: the collection, its editor and the delete action.
#[derive(Clone)]
pub struct RuleCatalog {
    store: SharedStore,
    editor: RuleEditorController,
    repository: Arc<dyn RuleRepository>,
    scope: ViewScope,
    error: Rc<RefCell<Option<String>>>,
}

impl RuleCatalog {
    pub fn new(repository: Arc<dyn RuleRepository>) -> Self {
        Self::with_store(RuleCollectionStore::shared(), repository)
    }

    /// Page sharing an existing store with other controllers.
    pub fn with_store(store: SharedStore, repository: Arc<dyn RuleRepository>) -> Self {
        Self {
            editor: RuleEditorController::new(store.clone(), repository.clone()),
            store,
            repository,
            scope: ViewScope::new(),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn editor(&self) -> &RuleEditorController {
        &self.editor
    }

    pub fn rules(&self) -> Vec<Rule> {
        self.store.borrow().rules().to_vec()
    }

    /// Page-level failure: the last load or delete error.
    pub fn error(&self) -> Option<String> {
        if let Some(message) = self.error.borrow().as_ref() {
            return Some(message.clone());
        }
        self.store.borrow().error().map(str::to_string)
    }

    pub async fn mount(&self) -> LoadOutcome {
        *self.error.borrow_mut() = None;
        load_rules(&self.store, self.repository.as_ref(), &self.scope).await
    }

    /// Responses arriving after this point are dropped.
    pub fn teardown(&self) {
        self.scope.teardown();
    }

    pub fn start_create(&self) {
        self.editor.start_create();
    }

    pub fn start_edit(&self, id: &RuleId) -> Result<(), RulebenchError> {
        let rule = self.store.borrow().get(id).cloned();
        match rule {
            Some(rule) => {
                self.editor.start_edit(&rule);
                Ok(())
            }
            None => {
                let err = DomainError::InvariantViolation(format!(
                    "cannot edit rule '{}': not in the collection",
                    id
                ));
                warn!("⚠️ {}", err);
                Err(err.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &RuleId) -> Result<(), RulebenchError> {
        *self.error.borrow_mut() = None;

        match self.repository.delete_rule(id).await {
            Ok(()) => {
                self.store.borrow_mut().apply_deleted(id);
                self.editor.on_rule_deleted(id);
                info!(rule.id = %id, "🗑️ Rule deleted");
                Ok(())
            }
            Err(e) => {
                error!(rule.id = %id, "❌ Deleting rule failed: {}", e);
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::editor::{EditorMode, SubmitOutcome};
    use crate::domain::error::RepositoryError;
    use crate::domain::rule::{ConditionType, NewRule};
    use crate::test_support::{MockRepository, rule, settle};
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_mount_loads_rules() {
        let repo = MockRepository::with_rules(vec![rule("1", "A", true), rule("2", "B", false)]);
        let catalog = RuleCatalog::new(repo.clone());

        assert_eq!(catalog.mount().await, LoadOutcome::Loaded(2));
        assert_eq!(catalog.rules().len(), 2);
        assert_eq!(catalog.error(), None);
    }

    #[tokio::test]
    async fn test_failed_mount_surfaces_error() {
        let repo = MockRepository::new();
        repo.fail("list", RepositoryError::rejected(503, "Service unavailable"));
        let catalog = RuleCatalog::new(repo.clone());

        catalog.mount().await;

        assert_eq!(catalog.error().as_deref(), Some("Service unavailable"));
        assert!(!catalog.store().borrow().is_loading());
    }

    #[tokio::test]
    async fn test_start_edit_unknown_id() {
        let catalog = RuleCatalog::new(MockRepository::new());
        catalog.mount().await;

        let result = catalog.start_edit(&RuleId::new("ghost"));

        assert!(matches!(
            result,
            Err(RulebenchError::Domain(DomainError::InvariantViolation(_)))
        ));
        assert_eq!(catalog.editor().mode(), EditorMode::Create);
    }

    #[tokio::test]
    async fn test_delete_selected_rule_resets_editor() {
        let repo = MockRepository::with_rules(vec![rule("1", "A", true), rule("2", "B", true)]);
        let catalog = RuleCatalog::new(repo.clone());
        catalog.mount().await;
        catalog.start_edit(&RuleId::new("1")).unwrap();

        catalog.delete(&RuleId::new("1")).await.unwrap();

        let ids: Vec<_> = catalog.rules().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RuleId::new("2")]);
        assert_eq!(catalog.editor().selected_rule_id(), None);
        assert_eq!(catalog.editor().mode(), EditorMode::Create);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_collection() {
        let repo = MockRepository::with_rules(vec![rule("1", "A", true)]);
        let catalog = RuleCatalog::new(repo.clone());
        catalog.mount().await;
        catalog.start_edit(&RuleId::new("1")).unwrap();
        repo.fail("delete", RepositoryError::rejected(409, "Rule is in use"));

        let err = catalog.delete(&RuleId::new("1")).await.unwrap_err();

        assert_eq!(err.to_string(), "Rule is in use");
        assert!(matches!(
            err,
            RulebenchError::Repository(RepositoryError::Rejected { status: 409, .. })
        ));
        assert_eq!(catalog.error().as_deref(), Some("Rule is in use"));
        assert_eq!(catalog.rules().len(), 1);
        assert_eq!(catalog.editor().selected_rule_id(), Some(RuleId::new("1")));

        repo.recover("delete");
        catalog.delete(&RuleId::new("1")).await.unwrap();
        assert_eq!(catalog.error(), None);
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded_after_teardown() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let repo = MockRepository::with_rules(vec![rule("1", "A", true)]);
                let gate = repo.hold("list");
                let catalog = RuleCatalog::new(repo.clone());

                let load = {
                    let catalog = catalog.clone();
                    tokio::task::spawn_local(async move { catalog.mount().await })
                };
                settle(|| catalog.store().borrow().is_loading()).await;

                catalog.teardown();
                gate.notify_one();

                assert_eq!(load.await.unwrap(), LoadOutcome::Discarded);
                assert!(catalog.rules().is_empty());
                assert_eq!(catalog.error(), None);
            })
            .await;
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let repo = MockRepository::new();
        let catalog = RuleCatalog::new(repo.clone());
        catalog.mount().await;

        let editor = catalog.editor();
        editor.start_create();
        editor.set_name("Positive amount");
        editor.set_description("Rejects refunds");
        editor.set_condition("amount > 0");
        let SubmitOutcome::Created(created) = editor.submit().await else {
            panic!("create did not succeed");
        };

        // A fresh page sees the same rule coming back from the service
        let fresh = RuleCatalog::new(repo.clone());
        fresh.mount().await;
        let listed = fresh.rules();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(
            listed[0].definition(),
            NewRule {
                name: "Positive amount".into(),
                description: Some("Rejects refunds".into()),
                is_active: true,
                condition_type: ConditionType::Expression,
                condition: "amount > 0".into(),
            }
        );
        assert_eq!(catalog.rules(), listed);
    }
}
