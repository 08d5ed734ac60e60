// rulebench/src/output.rs
//
// Rendering of rules and execution results for the terminal.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use rulebench_core::domain::execution::ExecutionResultItem;
use rulebench_core::domain::rule::Rule;

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn rules_table(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "No rules defined yet.".to_string();
    }

    let mut table = table(vec!["ID", "Name", "Active", "Type", "Condition", "Description"]);
    for rule in rules {
        table.add_row(vec![
            rule.id.to_string(),
            rule.name.clone(),
            yes_no(rule.is_active).to_string(),
            rule.condition_type.to_string(),
            rule.condition.clone(),
            rule.description.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

/// Results in the order the service returned them.
pub fn results_table(results: &[ExecutionResultItem]) -> String {
    if results.is_empty() {
        return "No results returned.".to_string();
    }

    let mut table = table(vec!["Rule", "Passed", "Message"]);
    for item in results {
        table.add_row(vec![
            item.rule_name.clone(),
            yes_no(item.passed).to_string(),
            item.message.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

pub fn rule_summary(rule: &Rule) -> String {
    format!(
        "{} [{}] {} ({}, {})",
        rule.name,
        rule.id,
        rule.condition,
        rule.condition_type,
        if rule.is_active { "active" } else { "inactive" }
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
