// rulebench/src/commands/delete.rs
//
// USE CASE: Remove a rule from the service.

use std::sync::Arc;

use anyhow::bail;
use rulebench_core::application::{LoadOutcome, RuleCatalog};
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::RuleId;

pub async fn execute(repository: Arc<dyn RuleRepository>, id: String) -> anyhow::Result<()> {
    let catalog = RuleCatalog::new(repository);
    if let LoadOutcome::Failed(message) = catalog.mount().await {
        bail!("{}", message);
    }

    let id = RuleId::new(id);
    catalog.delete(&id).await?;

    println!("🗑️  Deleted rule {} ({} remaining)", id, catalog.rules().len());
    Ok(())
}
