// rulebench-core/src/application/store.rs

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::application::scope::ViewScope;
use crate::domain::error::{DomainError, RepositoryError};
use crate::domain::ports::RuleRepository;
use crate::domain::rule::{Rule, RuleId};

/// Handle shared by the controllers of one page.
///
/// `Rc` keeps it `!Send`: the store can only be mutated on the thread that
/// runs the event loop.
pub type SharedStore = Rc<RefCell<RuleCollectionStore>>;

/// Single source of truth for the rules known to the client.
///
/// Only ever mutated with server-confirmed data.
#[derive(Debug, Default)]
pub struct RuleCollectionStore {
    rules: Vec<Rule>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

/// Issued by `begin_load`; only the most recent ticket may complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Collection replaced; carries the number of rules.
    Loaded(usize),
    Failed(String),
    /// Response arrived for a torn-down view or a superseded load.
    Discarded,
}

impl RuleCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    // --- READ ---

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RuleId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.is_active)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Failure message of the last load, `None` after a successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- LOAD ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Full refresh on success; failures keep the previous collection.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Rule>, RepositoryError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded rule list response"
            );
            return LoadOutcome::Discarded;
        }

        self.loading = false;
        match outcome {
            Ok(rules) => {
                self.rules = rules;
                self.error = None;
                LoadOutcome::Loaded(self.rules.len())
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    // --- CONFIRMED MUTATIONS ---

    pub fn apply_created(&mut self, rule: Rule) -> Result<(), DomainError> {
        if self.contains(&rule.id) {
            return Err(DomainError::InvariantViolation(format!(
                "created rule '{}' is already in the collection",
                rule.id
            )));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Replaces in place. Updates must target a known id.
    pub fn apply_updated(&mut self, rule: Rule) -> Result<(), DomainError> {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(slot) => {
                *slot = rule;
                Ok(())
            }
            None => Err(DomainError::InvariantViolation(format!(
                "updated rule '{}' is not in the collection",
                rule.id
            ))),
        }
    }

    /// Idempotent: deleting an unknown id is not an error.
    pub fn apply_deleted(&mut self, id: &RuleId) {
        self.rules.retain(|r| &r.id != id);
    }
}

/// Loads the full rule list into `store` on behalf of the view owning `scope`.
///
/// No borrow of the store is held while the request is in flight.
#[instrument(skip_all)]
pub async fn load_rules(
    store: &SharedStore,
    repository: &dyn RuleRepository,
    scope: &ViewScope,
) -> LoadOutcome {
    let start = Instant::now();
    let ticket = store.borrow_mut().begin_load();

    let response = repository.list_rules().await;

    if !scope.is_active() {
        warn!("Discarding rule list response: view was torn down");
        return LoadOutcome::Discarded;
    }

    let outcome = store.borrow_mut().finish_load(ticket, response);
    match &outcome {
        LoadOutcome::Loaded(count) => info!("📚 Loaded {} rules in {:.2?}", count, start.elapsed()),
        LoadOutcome::Failed(message) => error!("❌ Loading rules failed: {}", message),
        LoadOutcome::Discarded => {}
    }
    outcome
}
