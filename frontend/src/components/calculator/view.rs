//! View rendering for the calculator component.
//!
//! The element ids rendered here are the ones `common::page::RequiredElement`
//! checks on first render. The field container is rebuilt from scratch on
//! every selection: each field is keyed by the controller's render generation,
//! so a new selection (or re-selecting the same formula) replaces every input
//! instead of patching it.

use common::{FormulaCategory, RenderedField, ResultPanel};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CalculatorComponent;

pub fn view(component: &CalculatorComponent, ctx: &Context<CalculatorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="calculator">
            { build_formula_select(component, link) }
            { build_inputs(component, link) }
            <button
                id="calculate-button"
                class="calculate-btn"
                onclick={link.callback(|_: MouseEvent| Msg::Submit)}
            >
                {"Calculate"}
            </button>
            { build_result_area(component.form.result()) }
        </div>
    }
}

/// Selection control with one option group per formula family.
fn build_formula_select(
    component: &CalculatorComponent,
    link: &Scope<CalculatorComponent>,
) -> Html {
    let registry = component.form.registry();
    let selected = component.form.selected().map(|schema| schema.id);

    let groups = FormulaCategory::ALL
        .iter()
        .map(|category| {
            let options = registry
                .by_category(*category)
                .map(|schema| {
                    html! {
                        <option value={schema.id} selected={selected == Some(schema.id)}>
                            { schema.name }
                        </option>
                    }
                })
                .collect::<Html>();
            html! { <optgroup label={category.title()}>{ options }</optgroup> }
        })
        .collect::<Html>();

    html! {
        <div class="input-group">
            <label for="formula-select">{"Select Formula"}</label>
            <select
                id="formula-select"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SelectFormula(select.value())
                })}
            >
                <option value="" selected={selected.is_none()}>{"-- Choose a formula --"}</option>
                { groups }
            </select>
        </div>
    }
}

fn build_inputs(component: &CalculatorComponent, link: &Scope<CalculatorComponent>) -> Html {
    let generation = component.form.generation();
    let fields = component
        .form
        .fields()
        .iter()
        .map(|field| build_field(field, generation, link))
        .collect::<Html>();

    html! {
        <div id="inputs-container">{ fields }</div>
    }
}

/// One labeled numeric input bound to `field.id()`.
fn build_field(field: &RenderedField, generation: u64, link: &Scope<CalculatorComponent>) -> Html {
    let id = field.id();
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField {
            id: id.to_string(),
            value: input.value(),
        }
    });

    html! {
        <div class="input-group" key={format!("{}-{}", generation, id)}>
            <label for={id}>{ field.descriptor.label }</label>
            <input
                type="number"
                step="any"
                id={id}
                placeholder={field.descriptor.placeholder}
                {oninput}
            />
        </div>
    }
}

fn build_result_area(panel: &ResultPanel) -> Html {
    html! {
        <div id="result-area" class={classes!("result-area", panel.is_hidden().then_some("hidden"))}>
            <h3>{"Result"}</h3>
            <p>
                <span id="result-display">{ panel.value().unwrap_or_default().to_string() }</span>
                {" "}
                <span id="unit-display">{ panel.unit().unwrap_or_default().to_string() }</span>
            </p>
        </div>
    }
}
