use crate::error::CalculatorError;
use crate::requests::CalculationRequest;
use crate::responses::CalculationResponse;

/// One request/response exchange with the calculation service.
///
/// Implementations return `Err(CalculatorError::Transport)` only when no
/// decodable body could be obtained; an `error` payload is a successful
/// exchange and comes back as `CalculationResponse::Failure`. No retries, no
/// client-side timeout.
///
/// The returned future need not be `Send`: the controller runs on a single
/// event loop.
#[allow(async_fn_in_trait)]
pub trait CalculationClient {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResponse, CalculatorError>;
}
