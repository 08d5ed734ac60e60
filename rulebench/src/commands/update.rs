// rulebench/src/commands/update.rs
//
// USE CASE: Edit an existing rule. Flags left unset keep the stored value.

use std::sync::Arc;

use anyhow::bail;
use rulebench_core::application::{LoadOutcome, RuleCatalog};
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::{ConditionType, RuleId};

use super::confirmed_rule;
use crate::output;

pub struct UpdateArgs {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub condition_type: Option<ConditionType>,
    pub condition: Option<String>,
}

pub async fn execute(repository: Arc<dyn RuleRepository>, args: UpdateArgs) -> anyhow::Result<()> {
    let catalog = RuleCatalog::new(repository);
    if let LoadOutcome::Failed(message) = catalog.mount().await {
        bail!("{}", message);
    }

    let id = RuleId::new(args.id);
    if catalog.start_edit(&id).is_err() {
        bail!("Rule '{}' not found", id);
    }

    let editor = catalog.editor();
    if let Some(name) = args.name {
        editor.set_name(name);
    }
    if let Some(description) = args.description {
        editor.set_description(description);
    }
    if let Some(active) = args.active {
        editor.set_active(active);
    }
    if let Some(condition_type) = args.condition_type {
        editor.set_condition_type(condition_type);
    }
    if let Some(condition) = args.condition {
        editor.set_condition(condition);
    }

    let rule = confirmed_rule(editor.submit().await)?;
    println!("✨ Updated {}", output::rule_summary(&rule));
    Ok(())
}
