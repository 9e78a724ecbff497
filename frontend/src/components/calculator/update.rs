//! Update function for the calculator component.
//!
//! Elm-style: receives the current `CalculatorComponent` state, the `Context`,
//! and a `Msg`, mutates the state, and returns whether the view should
//! re-render.
//!
//! A submit is split at the network call. `Msg::Submit` validates and sends;
//! the spawned task reports back with `Msg::Settled`, which is applied
//! whenever it arrives. Overlapping submits are independent and settle in
//! completion order.

use common::{CalculationClient, CalculatorError, ErrorKind};
use yew::prelude::*;

use crate::client::HttpCalculationClient;

use super::helpers::notify;
use super::messages::Msg;
use super::state::CalculatorComponent;

pub fn update(
    component: &mut CalculatorComponent,
    ctx: &Context<CalculatorComponent>,
    msg: Msg,
) -> bool {
    if !component.wired {
        return false;
    }

    match msg {
        Msg::SelectFormula(formula_id) => {
            component.form.select(&formula_id);
            true
        }
        Msg::UpdateField { id, value } => {
            // The input already shows what was typed; only the model changes.
            component.form.set_value(&id, value);
            false
        }
        Msg::Submit => {
            let request = match component.form.prepare_submission() {
                Ok(request) => request,
                Err(err) => {
                    notify(&err.notice());
                    return false;
                }
            };

            gloo_console::debug!(format!("calculating {}", request.formula));
            let client = HttpCalculationClient::new(ctx.props().endpoint.to_string());
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.calculate(&request).await;
                link.send_message(Msg::Settled(outcome));
            });
            false
        }
        Msg::Settled(outcome) => match component.form.apply_response(outcome) {
            Ok(()) => true,
            Err(err) => {
                report(&err);
                false
            }
        },
    }
}

fn report(err: &CalculatorError) {
    if err.kind() == ErrorKind::Transport {
        gloo_console::debug!(err.to_string());
    }
    notify(&err.notice());
}
