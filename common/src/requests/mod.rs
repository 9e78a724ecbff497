use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path of the calculation endpoint on the serving origin.
pub const CALCULATE_PATH: &str = "/calculate";

/// Raw field values keyed by field id. Values are sent exactly as typed; the
/// calculation service owns parsing and unit handling.
pub type InputValues = BTreeMap<String, String>;

/// Request payload for the calculation endpoint.
///
/// Serializes as `{"formula": "<id>", "inputs": {"<fieldId>": "<value>", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub formula: String,
    pub inputs: InputValues,
}

impl CalculationRequest {
    pub fn new(formula: impl Into<String>, inputs: InputValues) -> Self {
        Self {
            formula: formula.into(),
            inputs,
        }
    }
}
