//! Submit-flow scenarios driven through a recording client.

use std::cell::RefCell;

use agrocalc_common::{
    CalculationClient, CalculationRequest, CalculationResponse, CalculatorError, ErrorKind,
    FormController, FormulaRegistry, ResultPanel,
};
use futures::executor::block_on;
use serde_json::json;

/// Answers every request with the same canned outcome and remembers what it
/// was asked.
struct RecordingClient {
    outcome: Result<CalculationResponse, CalculatorError>,
    requests: RefCell<Vec<CalculationRequest>>,
}

impl RecordingClient {
    fn answering(outcome: Result<CalculationResponse, CalculatorError>) -> Self {
        Self {
            outcome,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn with_body(body: &str) -> Self {
        Self::answering(settled(body))
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl CalculationClient for RecordingClient {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResponse, CalculatorError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

fn settled(body: &str) -> Result<CalculationResponse, CalculatorError> {
    Ok(CalculationResponse::from_json(body).unwrap())
}

fn filled_ndvi() -> FormController {
    let mut controller = FormController::default();
    controller.select("ndvi");
    controller.set_value("NIR", "0.6");
    controller.set_value("Red", "0.2");
    controller
}

#[test]
fn ndvi_success_shows_result() {
    let client = RecordingClient::with_body(r#"{"result":0.5,"unit":""}"#);
    let mut controller = filled_ndvi();

    block_on(controller.submit(&client)).unwrap();

    let sent = client.requests.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap(),
        json!({"formula": "ndvi", "inputs": {"NIR": "0.6", "Red": "0.2"}})
    );
    assert_eq!(
        controller.result(),
        &ResultPanel::Visible {
            value: "0.5".to_string(),
            unit: String::new(),
        }
    );
}

#[test]
fn ndvi_error_payload_keeps_panel_hidden() {
    let client = RecordingClient::with_body(r#"{"error":"invalid range"}"#);
    let mut controller = filled_ndvi();

    let err = block_on(controller.submit(&client)).unwrap_err();

    assert_eq!(client.calls(), 1);
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(err.notice().contains("invalid range"));
    assert!(controller.result().is_hidden());
}

#[test]
fn transport_failure_is_reported_and_panel_untouched() {
    let client = RecordingClient::answering(Err(CalculatorError::Transport(
        "network unreachable".to_string(),
    )));
    let mut controller = filled_ndvi();

    let err = block_on(controller.submit(&client)).unwrap_err();

    assert_eq!(client.calls(), 1);
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(controller.result().is_hidden());
}

#[test]
fn empty_field_never_calls_service() {
    let client = RecordingClient::with_body(r#"{"result":1,"unit":"Index"}"#);
    for schema in FormulaRegistry::builtin().schemas() {
        for blank in schema.field_ids() {
            let mut controller = FormController::default();
            controller.select(schema.id);
            for id in schema.field_ids().filter(|id| *id != blank) {
                controller.set_value(id, "1");
            }

            let err = block_on(controller.submit(&client)).unwrap_err();
            assert_eq!(
                err,
                CalculatorError::IncompleteInputs {
                    missing: vec![blank.to_string()],
                }
            );
        }
    }
    assert_eq!(client.calls(), 0);
}

#[test]
fn no_selection_never_calls_service() {
    let client = RecordingClient::with_body(r#"{"result":1,"unit":"Index"}"#);
    let mut controller = FormController::default();

    let err = block_on(controller.submit(&client)).unwrap_err();
    assert_eq!(err, CalculatorError::NoFormulaSelected);

    controller.select("unknown_formula");
    let err = block_on(controller.submit(&client)).unwrap_err();
    assert_eq!(err, CalculatorError::NoFormulaSelected);
    assert_eq!(client.calls(), 0);

    let incomplete = CalculatorError::IncompleteInputs {
        missing: vec!["NIR".to_string()],
    };
    assert_ne!(err.notice(), incomplete.notice());
}

#[test]
fn request_inputs_match_schema_exactly() {
    let client = RecordingClient::with_body(r#"{"result":3.2,"unit":"mm/day"}"#);
    for schema in FormulaRegistry::builtin().schemas() {
        let mut controller = FormController::default();
        controller.select(schema.id);
        for (n, id) in schema.field_ids().enumerate() {
            controller.set_value(id, format!("{n}.5"));
        }
        block_on(controller.submit(&client)).unwrap();
    }

    let sent = client.requests.borrow();
    assert_eq!(sent.len(), FormulaRegistry::builtin().len());
    for (request, schema) in sent.iter().zip(FormulaRegistry::builtin().schemas()) {
        assert_eq!(request.formula, schema.id);
        let mut expected: Vec<_> = schema
            .field_ids()
            .enumerate()
            .map(|(n, id)| (id.to_string(), format!("{n}.5")))
            .collect();
        expected.sort();
        let actual: Vec<_> = request
            .inputs
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn success_then_reselect_hides_result() {
    let client = RecordingClient::with_body(r#"{"result":12,"unit":"°C-days"}"#);
    let mut controller = FormController::default();
    controller.select("gdd_arnold");
    controller.set_value("TM", "30");
    controller.set_value("Tm", "18");
    controller.set_value("Tb", "12");

    block_on(controller.submit(&client)).unwrap();
    assert_eq!(controller.result().value(), Some("12"));
    assert_eq!(controller.result().unit(), Some("°C-days"));

    controller.select("gdd_arnold");
    assert!(controller.result().is_hidden());
    assert_eq!(controller.value("TM"), Some(""));
}

#[test]
fn overlapping_responses_render_in_completion_order() {
    let mut controller = FormController::default();
    controller.select("ndvi");
    controller.set_value("NIR", "0.6");
    controller.set_value("Red", "0.2");
    let first = controller.prepare_submission().unwrap();

    controller.set_value("Red", "0.3");
    let second = controller.prepare_submission().unwrap();
    assert_ne!(first, second);

    // The second exchange settles first.
    controller
        .apply_response(settled(r#"{"result":0.3333,"unit":"Index"}"#))
        .unwrap();
    controller
        .apply_response(settled(r#"{"result":0.5,"unit":"Index"}"#))
        .unwrap();

    assert_eq!(controller.result().value(), Some("0.5"));
}

#[test]
fn late_response_after_reselect_still_renders() {
    let mut controller = filled_ndvi();
    let _in_flight = controller.prepare_submission().unwrap();

    controller.select("savi");
    controller
        .apply_response(settled(r#"{"result":0.5,"unit":"Index"}"#))
        .unwrap();

    assert_eq!(controller.result().value(), Some("0.5"));
    assert_eq!(controller.selected().map(|s| s.id), Some("savi"));
}

#[test]
fn failures_after_success_keep_earlier_result() {
    let mut controller = filled_ndvi();
    block_on(controller.submit(&RecordingClient::with_body(
        r#"{"result":0.5,"unit":"Index"}"#,
    )))
    .unwrap();
    let shown = ResultPanel::Visible {
        value: "0.5".to_string(),
        unit: "Index".to_string(),
    };
    assert_eq!(controller.result(), &shown);

    let failures = [
        RecordingClient::with_body(r#"{"error":"invalid range"}"#),
        RecordingClient::answering(Err(CalculatorError::Transport(
            "network unreachable".to_string(),
        ))),
        RecordingClient::answering(Err(CalculatorError::UnexpectedResponse(
            "expected value at line 1 column 1".to_string(),
        ))),
    ];
    for client in &failures {
        assert!(block_on(controller.submit(client)).is_err());
        assert_eq!(client.calls(), 1);
        assert_eq!(controller.result(), &shown);
        assert_eq!(controller.value("NIR"), Some("0.6"));
    }
}
