use common::{CalculationResponse, CalculatorError};

pub enum Msg {
    SelectFormula(String),
    UpdateField { id: String, value: String },
    Submit,
    Settled(Result<CalculationResponse, CalculatorError>),
}
