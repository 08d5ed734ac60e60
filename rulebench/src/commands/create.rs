// rulebench/src/commands/create.rs
//
// USE CASE: Author a new rule through the editor.

use std::sync::Arc;

use rulebench_core::application::RuleCatalog;
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::ConditionType;

use super::confirmed_rule;
use crate::output;

pub struct CreateArgs {
    pub name: String,
    pub description: Option<String>,
    pub inactive: bool,
    pub condition_type: ConditionType,
    pub condition: String,
}

pub async fn execute(repository: Arc<dyn RuleRepository>, args: CreateArgs) -> anyhow::Result<()> {
    // No initial load: the editor only appends the confirmed rule
    let catalog = RuleCatalog::new(repository);
    let editor = catalog.editor();

    editor.start_create();
    editor.set_name(args.name);
    editor.set_description(args.description.unwrap_or_default());
    editor.set_active(!args.inactive);
    editor.set_condition_type(args.condition_type);
    editor.set_condition(args.condition);

    let rule = confirmed_rule(editor.submit().await)?;
    println!("✨ Created {}", output::rule_summary(&rule));
    Ok(())
}
