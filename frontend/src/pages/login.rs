use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::login as t, router::Route};

/// Landing spot for sessions the inventory screen turns away. Signing in
/// itself happens outside this app.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <main class={classes!("container", "py-16", "max-w-lg", "text-center", "space-y-4")}>
            <h2 class="text-2xl font-semibold">{ t::TITLE }</h2>
            <p class="text-[var(--muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Inventory} classes={classes!("btn-fluent-primary", "inline-block")}>
                { t::RETRY }
            </Link<Route>>
        </main>
    }
}
