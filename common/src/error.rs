use thiserror::Error;

/// Broad class of a failure, deciding where it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The host page lacks a required element. Fatal, operator console only.
    Configuration,
    /// Recoverable locally; no request was sent.
    UserInput,
    /// The exchange with the calculation service did not complete.
    Transport,
    /// The service answered with an `error` payload.
    Domain,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("required page element `#{0}` is missing")]
    MissingElement(&'static str),

    #[error("no formula selected")]
    NoFormulaSelected,

    #[error("missing values for: {}", .missing.join(", "))]
    IncompleteInputs { missing: Vec<String> },

    #[error("transport failure: {0}")]
    Transport(String),

    /// A body arrived but was neither a result nor an `error` payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("{0}")]
    Domain(String),
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::MissingElement(_) => ErrorKind::Configuration,
            CalculatorError::NoFormulaSelected | CalculatorError::IncompleteInputs { .. } => {
                ErrorKind::UserInput
            }
            CalculatorError::Transport(_) | CalculatorError::UnexpectedResponse(_) => {
                ErrorKind::Transport
            }
            CalculatorError::Domain(_) => ErrorKind::Domain,
        }
    }

    /// Message shown to the user. Domain errors carry the service's text
    /// verbatim.
    pub fn notice(&self) -> String {
        match self {
            CalculatorError::MissingElement(id) => {
                format!("The page is missing the `{}` element.", id)
            }
            CalculatorError::NoFormulaSelected => "Please select a formula.".to_string(),
            CalculatorError::IncompleteInputs { .. } => "Please fill in all fields.".to_string(),
            CalculatorError::Transport(_) => {
                "Could not reach the calculation service. Check your connection and try again."
                    .to_string()
            }
            CalculatorError::UnexpectedResponse(_) => {
                "The calculation service sent an unexpected response.".to_string()
            }
            CalculatorError::Domain(message) => format!("Error: {}", message),
        }
    }
}
