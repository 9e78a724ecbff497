//! Defines the properties for the `CalculatorComponent`.

use common::CALCULATE_PATH;
use yew::prelude::*;

/// Properties for the `CalculatorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CalculatorProps {
    /// URL the calculation request is posted to. Defaults to `/calculate` on
    /// the serving origin.
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
}

fn default_endpoint() -> AttrValue {
    AttrValue::from(CALCULATE_PATH)
}
