//! Shared model and browser-independent logic for the agronomic formula
//! calculator.
//!
//! The `frontend` crate renders what lives here; nothing in this crate touches
//! the DOM or the network directly, so every behavior can be exercised from
//! plain unit tests.

pub mod client;
pub mod error;
pub mod form;
pub mod model;
pub mod page;
pub mod registry;
pub mod requests;
pub mod responses;

pub use client::CalculationClient;
pub use error::{CalculatorError, ErrorKind};
pub use form::{FormController, RenderedField, ResultPanel};
pub use model::field::FieldDescriptor;
pub use model::formula::{FormulaCategory, FormulaSchema};
pub use registry::FormulaRegistry;
pub use requests::{CalculationRequest, InputValues, CALCULATE_PATH};
pub use responses::{CalculationResponse, ResultValue};
