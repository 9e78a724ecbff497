//! Response payloads returned by the calculation endpoint.
//!
//! The service signals failures in the body, not through the HTTP status, so
//! decoding branches on the presence of an `error` key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a settled calculation exchange.
///
/// Exactly one shape is expected. An object carrying an `error` key decodes
/// as `Failure` even if `result` is also present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Failure { error: String },
    Success { result: ResultValue, unit: String },
}

impl CalculationResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Computed value. The service normally returns a number, but a string is
/// accepted and shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(n) => f.write_str(&format_number(*n)),
            ResultValue::Text(s) => f.write_str(s),
        }
    }
}

/// Formats `n` the way a browser's `Number.prototype.toString` does: plain
/// decimal for magnitudes in `[1e-6, 1e21)`, exponent form (`1e-7`, `1e+21`)
/// outside that range.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if (1e-6..1e21).contains(&n.abs()) {
        return n.to_string();
    }
    let exponent_form = format!("{:e}", n);
    match exponent_form.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent_form,
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Number(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success() {
        let response = CalculationResponse::from_json(r#"{"result":0.5,"unit":""}"#).unwrap();
        assert_eq!(
            response,
            CalculationResponse::Success {
                result: ResultValue::Number(0.5),
                unit: String::new(),
            }
        );
    }

    #[test]
    fn decodes_text_result() {
        let response =
            CalculationResponse::from_json(r#"{"result":"n/a","unit":"Index"}"#).unwrap();
        match response {
            CalculationResponse::Success { result, unit } => {
                assert_eq!(result.to_string(), "n/a");
                assert_eq!(unit, "Index");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decodes_error() {
        let response = CalculationResponse::from_json(r#"{"error":"invalid range"}"#).unwrap();
        assert_eq!(
            response,
            CalculationResponse::Failure {
                error: "invalid range".to_string()
            }
        );
    }

    #[test]
    fn error_key_wins_over_result() {
        let response =
            CalculationResponse::from_json(r#"{"result":1,"unit":"x","error":"boom"}"#).unwrap();
        assert!(matches!(response, CalculationResponse::Failure { .. }));
    }

    #[test]
    fn rejects_unrelated_body() {
        assert!(CalculationResponse::from_json(r#"{"status":"ok"}"#).is_err());
        assert!(CalculationResponse::from_json("<html>").is_err());
    }

    #[test]
    fn number_display_matches_browser_text() {
        assert_eq!(ResultValue::Number(0.5).to_string(), "0.5");
        assert_eq!(ResultValue::Number(12.0).to_string(), "12");
        assert_eq!(ResultValue::Number(-1.5).to_string(), "-1.5");
        assert_eq!(ResultValue::Number(-0.0).to_string(), "0");
        assert_eq!(ResultValue::Number(0.000001).to_string(), "0.000001");
        assert_eq!(ResultValue::Number(123456789.125).to_string(), "123456789.125");
    }

    #[test]
    fn tiny_and_huge_numbers_use_exponent_form() {
        assert_eq!(ResultValue::Number(1e-7).to_string(), "1e-7");
        assert_eq!(ResultValue::Number(1.5e-9).to_string(), "1.5e-9");
        assert_eq!(ResultValue::Number(1e21).to_string(), "1e+21");
        assert_eq!(ResultValue::Number(-2.5e25).to_string(), "-2.5e+25");
    }

    #[test]
    fn decoded_exponent_results_keep_exponent_form() {
        for (body, shown) in [
            (r#"{"result":1e-7,"unit":""}"#, "1e-7"),
            (r#"{"result":1e21,"unit":""}"#, "1e+21"),
        ] {
            match CalculationResponse::from_json(body).unwrap() {
                CalculationResponse::Success { result, .. } => assert_eq!(result.to_string(), shown),
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}
