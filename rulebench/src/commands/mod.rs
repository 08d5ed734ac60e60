// rulebench/src/commands/mod.rs

pub mod create;
pub mod delete;
pub mod execute;
pub mod list;
pub mod update;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use rulebench_core::application::SubmitOutcome;
use rulebench_core::domain::ports::RuleRepository;
use rulebench_core::domain::rule::Rule;
use rulebench_core::infrastructure::adapters::HttpRuleRepository;
use rulebench_core::infrastructure::config::load_client_config;

/// Config file, then env, then `--base-url`.
pub fn connect(
    config_dir: &Path,
    base_url: Option<String>,
) -> anyhow::Result<Arc<dyn RuleRepository>> {
    let mut config = load_client_config(config_dir).with_context(|| {
        format!(
            "Failed to load client configuration from {:?}",
            config_dir
        )
    })?;
    if let Some(url) = base_url {
        config.api.base_url = url;
    }

    let repository = HttpRuleRepository::new(&config.api)
        .with_context(|| format!("Failed to initialize client for {}", config.api.base_url))?;
    tracing::debug!(base_url = %repository.base_url(), "Rules service client ready");
    Ok(Arc::new(repository))
}

/// Turns an editor outcome into the confirmed rule or the operator-facing message.
pub(crate) fn confirmed_rule(outcome: SubmitOutcome) -> anyhow::Result<Rule> {
    match outcome {
        SubmitOutcome::Created(rule) | SubmitOutcome::Updated(rule) => Ok(rule),
        SubmitOutcome::Invalid(e) => bail!("{}", e),
        SubmitOutcome::Failed(message) => bail!("{}", message),
        SubmitOutcome::Busy => bail!("A submit is already in progress"),
    }
}
