use crate::app::App;
use common::page;

mod app;
mod client;
mod components;

fn main() {
    let document = web_sys::window().and_then(|w| w.document());
    match page::host_root(|id| document.and_then(|doc| doc.get_element_by_id(id))) {
        Ok(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(err) => gloo_console::error!(format!("calculator not started: {}", err)),
    }
}
