// rulebench-core/src/domain/execution/payload.rs

use crate::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Raw text shown in a fresh payload editor: an empty JSON object.
pub const DEFAULT_PAYLOAD_TEXT: &str = "{\n  \n}";

/// A JSON document that has already been parsed.
///
/// Only obtainable through [`Payload::parse`] (or deserialization), so holding
/// one proves the text was valid JSON. Its shape is opaque to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        serde_json::from_str::<Value>(text)
            .map(Self)
            .map_err(|_| ValidationError::PayloadNotJson)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl FromStr for Payload {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
