//! Browser admin screen for the StockDesk inventory.

mod api;
mod components;
mod config;
mod i18n;
mod pages;
mod router;
mod session;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
