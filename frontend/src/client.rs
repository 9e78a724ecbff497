//! HTTP transport for the calculation service.

use common::{CalculationClient, CalculationRequest, CalculationResponse, CalculatorError};
use gloo_net::http::Request;

/// Posts a `CalculationRequest` as JSON and decodes the body.
///
/// The body is decoded whatever the HTTP status is, because the service
/// reports failures as `{"error": ...}`. A request that cannot be sent is a
/// transport failure; a body that is not a calculation response (an HTML
/// error page, a `NaN` token) is an unexpected response.
pub struct HttpCalculationClient {
    endpoint: String,
}

impl HttpCalculationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl CalculationClient for HttpCalculationClient {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResponse, CalculatorError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        response
            .json::<CalculationResponse>()
            .await
            .map_err(|err| match err {
                gloo_net::Error::SerdeError(err) => {
                    CalculatorError::UnexpectedResponse(err.to_string())
                }
                other => transport(other),
            })
    }
}

fn transport(err: gloo_net::Error) -> CalculatorError {
    CalculatorError::Transport(err.to_string())
}
