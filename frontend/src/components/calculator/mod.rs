//! Formula calculator: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `CalculatorProps`, `CalculatorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, verify the page exposes every element the controller
//!   drives. If one is missing the error goes to the console and no handler is
//!   wired. `main` has already checked the host mount point; this check keeps
//!   `view` and `common::page::RequiredElement` from drifting apart.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CalculatorProps;
pub use state::CalculatorComponent;

impl Component for CalculatorComponent {
    type Message = Msg;
    type Properties = CalculatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CalculatorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            match helpers::verify_page() {
                Ok(()) => self.wired = true,
                Err(err) => {
                    gloo_console::error!(format!("calculator disabled: {}", err));
                    self.wired = false;
                }
            }
        }
    }
}
