// rulebench/src/commands/list.rs
//
// USE CASE: Show the rule collection.

use std::sync::Arc;

use anyhow::bail;
use rulebench_core::application::{LoadOutcome, RuleCatalog};
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::Rule;

use crate::cli::OutputFormat;
use crate::output;

pub async fn execute(
    repository: Arc<dyn RuleRepository>,
    active_only: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = RuleCatalog::new(repository);
    if let LoadOutcome::Failed(message) = catalog.mount().await {
        bail!("{}", message);
    }

    let rules: Vec<Rule> = catalog
        .rules()
        .into_iter()
        .filter(|r| !active_only || r.is_active)
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Table => {
            println!("{}", output::rules_table(&rules));
            println!("📚 {} rule(s)", rules.len());
        }
    }
    Ok(())
}
