//! Elements the controller needs on the host page.
//!
//! The host page provides a single mount point, `#calculator-root`; without it
//! the application is not started at all. The controls inside it are checked
//! once after the first render. A missing element is a configuration error:
//! it is logged and nothing is wired.

use crate::error::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredElement {
    FormulaSelect,
    InputsContainer,
    ResultArea,
    ResultDisplay,
    UnitDisplay,
    SubmitButton,
}

impl RequiredElement {
    pub const ALL: [RequiredElement; 6] = [
        RequiredElement::FormulaSelect,
        RequiredElement::InputsContainer,
        RequiredElement::ResultArea,
        RequiredElement::ResultDisplay,
        RequiredElement::UnitDisplay,
        RequiredElement::SubmitButton,
    ];

    /// DOM id of the element.
    pub fn id(self) -> &'static str {
        match self {
            RequiredElement::FormulaSelect => "formula-select",
            RequiredElement::InputsContainer => "inputs-container",
            RequiredElement::ResultArea => "result-area",
            RequiredElement::ResultDisplay => "result-display",
            RequiredElement::UnitDisplay => "unit-display",
            RequiredElement::SubmitButton => "calculate-button",
        }
    }
}

/// Id of the host-page element the calculator mounts into.
pub const HOST_ROOT: &str = "calculator-root";

/// Resolves the mount point through `find`.
pub fn host_root<T>(find: impl FnOnce(&str) -> Option<T>) -> Result<T, CalculatorError> {
    find(HOST_ROOT).ok_or(CalculatorError::MissingElement(HOST_ROOT))
}

/// Returns the first element for which `is_present` is false.
pub fn verify(is_present: impl Fn(&str) -> bool) -> Result<(), CalculatorError> {
    match RequiredElement::ALL
        .iter()
        .find(|element| !is_present(element.id()))
    {
        Some(element) => Err(CalculatorError::MissingElement(element.id())),
        None => Ok(()),
    }
}
