use crate::components::calculator::CalculatorComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main class="container">
                <h1>{"Agronomic Formula Calculator"}</h1>
                <CalculatorComponent />
            </main>
        }
    }
}
