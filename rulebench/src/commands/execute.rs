// rulebench/src/commands/execute.rs
//
// USE CASE: Dry-run active rules against a JSON payload.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use rulebench_core::application::{
    ExecuteOutcome, ExecutionController, LoadOutcome, RuleCollectionStore, ViewScope,
};
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::RuleId;

use crate::cli::OutputFormat;
use crate::output;

pub struct ExecuteArgs {
    pub payload: Option<String>,
    pub payload_file: Option<PathBuf>,
    pub rules: Vec<String>,
    pub format: OutputFormat,
    pub check: bool,
}

pub async fn execute(repository: Arc<dyn RuleRepository>, args: ExecuteArgs) -> anyhow::Result<()> {
    let payload_text = match (args.payload, &args.payload_file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_payload(path)?,
        (None, None) => bail!("Provide --payload or --payload-file"),
    };

    let controller = ExecutionController::new(RuleCollectionStore::shared(), repository);
    if let LoadOutcome::Failed(message) = controller.mount(ViewScope::new()).await {
        bail!("{}", message);
    }

    // Every active rule starts selected; --rule narrows it down
    if !args.rules.is_empty() {
        let candidates = controller.state().candidate_ids;
        let wanted: Vec<RuleId> = args.rules.into_iter().map(RuleId::new).collect();
        if let Some(unknown) = wanted.iter().find(|id| !candidates.contains(id)) {
            bail!("Rule '{}' is not an active rule", unknown);
        }
        controller.clear_selection();
        for id in &wanted {
            if !controller.state().is_selected(id) {
                controller.toggle_selection(id);
            }
        }
    }

    controller.set_payload_text(payload_text);

    let response = match controller.execute().await {
        ExecuteOutcome::Completed(response) => response,
        ExecuteOutcome::Invalid(e) => bail!("{}", e),
        ExecuteOutcome::Failed(message) => bail!("{}", message),
        ExecuteOutcome::Busy => bail!("An execution is already in progress"),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Table => {
            println!("{}", output::results_table(&response.results));
            let failed = response.results.iter().filter(|r| !r.passed).count();
            if failed == 0 {
                println!("✅ {} rule(s) passed", response.results.len());
            } else {
                println!("❌ {} of {} rule(s) failed", failed, response.results.len());
            }
        }
    }

    if args.check && !response.all_passed() {
        eprintln!("💥 --check mode: failing because at least one rule did not pass.");
        std::process::exit(1);
    }

    Ok(())
}

fn read_payload(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read payload from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read payload file {:?}", path))
}
