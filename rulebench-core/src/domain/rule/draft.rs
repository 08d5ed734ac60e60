// rulebench-core/src/domain/rule/draft.rs

use super::condition_type::ConditionType;
use super::model::{NewRule, Rule, RuleId};
use crate::domain::error::ValidationError;
use validator::Validate;

/// In-progress field values of the rule editor.
///
/// Kept verbatim while the operator types; trimming only happens when the
/// draft is turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RuleDraft {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub condition_type: ConditionType,
    #[validate(custom(function = "not_blank"))]
    pub condition: String,
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
            condition_type: ConditionType::Expression,
            condition: String::new(),
        }
    }
}

impl From<&Rule> for RuleDraft {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name.clone(),
            description: rule.description.clone().unwrap_or_default(),
            is_active: rule.is_active,
            condition_type: rule.condition_type,
            condition: rule.condition.clone(),
        }
    }
}

impl RuleDraft {
    /// Blank-field check, name first then condition.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        if fields.contains_key("name") {
            Err(ValidationError::NameRequired)
        } else {
            Err(ValidationError::ConditionRequired)
        }
    }

    /// Body of a create request.
    pub fn to_new_rule(&self) -> Result<NewRule, ValidationError> {
        self.check()?;
        let description = self.description.trim();
        Ok(NewRule {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            is_active: self.is_active,
            condition_type: self.condition_type,
            condition: self.condition.clone(),
        })
    }

    /// Body of an update request: the draft merged over the original identity.
    pub fn to_rule(&self, id: &RuleId) -> Result<Rule, ValidationError> {
        Ok(self.to_new_rule()?.with_id(id.clone()))
    }
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
