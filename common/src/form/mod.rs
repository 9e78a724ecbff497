//! Form controller: the schema-driven render state and the submit flow.
//!
//! Responsibilities
//! - Rebuild the field set from the registry whenever a formula is selected.
//! - Track the live value of every rendered field.
//! - Validate and package a `CalculationRequest` on submit.
//! - Apply the settled exchange to the result panel.
//!
//! The controller is DOM-free. The frontend mirrors `fields()` and `result()`
//! into the page and calls `prepare_submission` / `apply_response` around its
//! own network call, since component state cannot be held across the await.
//! `submit` runs the same linear flow in one call.

mod panel;

use crate::client::CalculationClient;
use crate::error::CalculatorError;
use crate::model::field::FieldDescriptor;
use crate::model::formula::FormulaSchema;
use crate::registry::FormulaRegistry;
use crate::requests::{CalculationRequest, InputValues};
use crate::responses::CalculationResponse;

pub use panel::ResultPanel;

/// An input currently on the page, bound to its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub descriptor: &'static FieldDescriptor,
    pub value: String,
}

impl RenderedField {
    fn empty(descriptor: &'static FieldDescriptor) -> Self {
        Self {
            descriptor,
            value: String::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    registry: &'static FormulaRegistry,
    selected: Option<&'static FormulaSchema>,
    fields: Vec<RenderedField>,
    /// Bumped on every selection so views can key the field set and rebuild
    /// it from scratch instead of diffing.
    generation: u64,
    result: ResultPanel,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormulaRegistry::builtin())
    }
}

impl FormController {
    pub fn new(registry: &'static FormulaRegistry) -> Self {
        Self {
            registry,
            selected: None,
            fields: Vec::new(),
            generation: 0,
            result: ResultPanel::Hidden,
        }
    }

    pub fn registry(&self) -> &'static FormulaRegistry {
        self.registry
    }

    /// Discards every rendered field and value, renders the schema of
    /// `formula_id` in order, and hides the result panel.
    ///
    /// An empty or unknown id leaves no formula selected and no fields.
    pub fn select(&mut self, formula_id: &str) {
        self.selected = self.registry.lookup(formula_id);
        self.fields = self
            .selected
            .map(|schema| schema.fields.iter().map(RenderedField::empty).collect())
            .unwrap_or_default();
        self.generation = self.generation.wrapping_add(1);
        self.result = ResultPanel::Hidden;
    }

    pub fn selected(&self) -> Option<&'static FormulaSchema> {
        self.selected
    }

    pub fn fields(&self) -> &[RenderedField] {
        &self.fields
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &ResultPanel {
        &self.result
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id() == field_id)
            .map(|field| field.value.as_str())
    }

    /// Records what the user typed. Returns `false` if no rendered field has
    /// that id (e.g. an input event from a field set that was just replaced).
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.id() == field_id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Validates the live values and packages the request.
    ///
    /// Fails without side effects when no formula is selected or any field is
    /// empty. Values are copied as raw strings.
    pub fn prepare_submission(&self) -> Result<CalculationRequest, CalculatorError> {
        let schema = self.selected.ok_or(CalculatorError::NoFormulaSelected)?;

        let mut inputs = InputValues::new();
        let mut missing = Vec::new();
        for descriptor in schema.fields {
            let value = self.value(descriptor.id).unwrap_or_default();
            if value.is_empty() {
                missing.push(descriptor.id.to_string());
            }
            inputs.insert(descriptor.id.to_string(), value.to_string());
        }

        if !missing.is_empty() {
            return Err(CalculatorError::IncompleteInputs { missing });
        }
        Ok(CalculationRequest::new(schema.id, inputs))
    }

    /// Applies a settled exchange.
    ///
    /// Only a `Success` body touches the result panel. Transport failures and
    /// `error` payloads are returned for the caller to show and leave the panel
    /// as it was.
    pub fn apply_response(
        &mut self,
        outcome: Result<CalculationResponse, CalculatorError>,
    ) -> Result<(), CalculatorError> {
        match outcome? {
            CalculationResponse::Success { result, unit } => {
                self.result = ResultPanel::Visible {
                    value: result.to_string(),
                    unit,
                };
                Ok(())
            }
            CalculationResponse::Failure { error } => Err(CalculatorError::Domain(error)),
        }
    }

    /// Runs one full submit: validate, exchange once, apply.
    pub async fn submit<C>(&mut self, client: &C) -> Result<(), CalculatorError>
    where
        C: CalculationClient,
    {
        let request = self.prepare_submission()?;
        let outcome = client.calculate(&request).await;
        self.apply_response(outcome)
    }
}
