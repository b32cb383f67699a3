use stockdesk_shared::{
    workflow::{self, Saved},
    AdminError, AuthContext, Draft, InventoryItem, ItemForm,
};
use web_sys::{File, Url};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::GlooInventoryApi,
    components::{
        inventory_table::InventoryTable,
        item_form_modal::ItemFormModal,
        loading_spinner::LoadingSpinner,
        toast::{Notice, Toast},
    },
    config,
    i18n::{current::admin_inventory as t, fill_one},
    router::Route,
    session::LocalStorageSession,
};

type Auth = AuthContext<LocalStorageSession>;

fn revoke_previews(urls: &[String]) {
    for url in urls {
        if let Err(e) = Url::revoke_object_url(url) {
            web_sys::console::error_1(
                &format!("Failed to release preview {}: {:?}", url, e).into(),
            );
        }
    }
}

fn preview_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            web_sys::console::error_1(
                &format!("Failed to preview {}: {:?}", file.name(), e).into(),
            );
            None
        },
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(t::CONFIRM_DELETE).ok())
        .unwrap_or(false)
}

/// Shows `err` and leaves the page when the session is no longer usable.
fn report(
    err: &AdminError,
    notice: &UseStateHandle<Option<Notice>>,
    navigator: &Option<Navigator>,
) {
    notice.set(Some(Notice::error(err.notice())));
    if err.redirects_to_login() {
        if let Some(nav) = navigator {
            nav.push(&Route::Login);
        }
    }
}

/// Applies the re-fetch that follows a successful write. Only an auth
/// failure is surfaced; otherwise the current list stays.
fn apply_refetch(
    saved: Saved,
    items: &UseStateHandle<Vec<InventoryItem>>,
    notice: &UseStateHandle<Option<Notice>>,
    navigator: &Option<Navigator>,
) {
    notice.set(Some(Notice::success(saved.notice)));
    match saved.items {
        Ok(list) => items.set(list),
        Err(err) if err.redirects_to_login() => report(&err, notice, navigator),
        Err(err) => {
            web_sys::console::error_1(&format!("Inventory refresh failed: {}", err).into());
        },
    }
}

#[function_component(AdminInventoryPage)]
pub fn admin_inventory_page() -> Html {
    let auth = use_state(|| None::<Auth>);
    let items = use_state(Vec::<InventoryItem>::new);
    let loading = use_state(|| true);
    let busy = use_state(|| false);
    let form = use_state(ItemForm::<File>::default);
    let notice = use_state(|| None::<Notice>);
    let navigator = use_navigator();

    {
        let auth = auth.clone();
        let items = items.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            match AuthContext::establish(LocalStorageSession) {
                Ok(ctx) => {
                    auth.set(Some(ctx.clone()));
                    wasm_bindgen_futures::spawn_local(async move {
                        match workflow::fetch_inventory(&GlooInventoryApi, &ctx).await {
                            Ok(list) => items.set(list),
                            Err(err) => report(&err, &notice, &navigator),
                        }
                        loading.set(false);
                    });
                },
                Err(err) => {
                    loading.set(false);
                    report(&err, &notice, &navigator);
                },
            }
            || ()
        });
    }

    // Previews are object URLs; release a set once it is replaced or the
    // page goes away.
    {
        let previews = form.previews().to_vec();
        use_effect_with(previews, |previews| {
            let previews = previews.clone();
            move || revoke_previews(&previews)
        });
    }

    let on_add = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.start_create();
            form.set(next);
        })
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |item: InventoryItem| {
            let mut next = (*form).clone();
            next.start_edit(&item);
            form.set(next);
        })
    };

    let on_draft = {
        let form = form.clone();
        Callback::from(move |draft: Draft| {
            if form.is_submitting() {
                return;
            }
            let mut next = (*form).clone();
            *next.draft_mut() = draft;
            form.set(next);
        })
    };

    let on_files = {
        let form = form.clone();
        Callback::from(move |files: Vec<File>| {
            if form.is_submitting() {
                return;
            }
            let selected = files
                .into_iter()
                .filter_map(|file| preview_url(&file).map(|url| (file, url)))
                .collect();
            let mut next = (*form).clone();
            next.select_images(selected);
            form.set(next);
        })
    };

    let on_close = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.close();
            form.set(next);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let form = form.clone();
        let items = items.clone();
        let notice = notice.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(ctx) = (*auth).clone() else {
                return;
            };
            let mut next = (*form).clone();
            let payload = match next.begin_submit() {
                Ok(payload) => payload,
                Err(AdminError::SubmitInFlight) => return,
                Err(err) => {
                    notice.set(Some(Notice::error(err.notice())));
                    return;
                },
            };
            form.set(next.clone());

            let form = form.clone();
            let items = items.clone();
            let notice = notice.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mode = next.mode().clone();
                match workflow::save_item(&GlooInventoryApi, &ctx, &mode, &payload).await {
                    Ok(saved) => {
                        next.finish_submit(true);
                        form.set(next);
                        apply_refetch(saved, &items, &notice, &navigator);
                    },
                    Err(err) => {
                        next.finish_submit(false);
                        form.set(next);
                        report(&err, &notice, &navigator);
                    },
                }
            });
        })
    };

    let on_delete = {
        let auth = auth.clone();
        let items = items.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            let Some(ctx) = (*auth).clone() else {
                return;
            };
            let items = items.clone();
            let busy = busy.clone();
            let notice = notice.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                match workflow::delete_item(&GlooInventoryApi, &ctx, &id, confirm_delete).await {
                    Ok(Some(saved)) => apply_refetch(saved, &items, &notice, &navigator),
                    Ok(None) => {},
                    Err(err) => report(&err, &notice, &navigator),
                }
                busy.set(false);
            });
        })
    };

    let on_notice_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let Some(ctx) = (*auth).as_ref() else {
        return html! {
            <main class={classes!("container", "py-10")}>
                if *loading {
                    <LoadingSpinner />
                }
                if let Some(current) = (*notice).clone() {
                    <Toast notice={current} on_close={on_notice_close} />
                }
            </main>
        };
    };

    let assets_host = AttrValue::from(config::assets_host());

    html! {
        <main class={classes!("container", "py-10", "space-y-6")}>
            <header class={classes!("flex", "flex-wrap", "items-end", "justify-between", "gap-4")}>
                <div>
                    <h1 class="text-3xl font-bold">{ t::TITLE }</h1>
                    <p class="text-sm text-[var(--muted)]">
                        { fill_one(t::SUBTITLE_TEMPLATE, items.len()) }
                        {" · "}
                        { fill_one(t::SIGNED_IN_AS_TEMPLATE, ctx.user().display_name()) }
                    </p>
                </div>
                <button type="button" class="btn-fluent-primary" onclick={on_add}>
                    { t::ADD_NEW }
                </button>
            </header>

            if *loading {
                <LoadingSpinner />
            } else {
                <InventoryTable
                    items={(*items).clone()}
                    assets_host={assets_host.clone()}
                    on_edit={on_edit}
                    on_delete={on_delete}
                    busy={*busy}
                />
            }

            <ItemFormModal
                form={(*form).clone()}
                assets_host={assets_host}
                on_draft={on_draft}
                on_files={on_files}
                on_submit={on_submit}
                on_close={on_close}
            />

            if let Some(current) = (*notice).clone() {
                <Toast notice={current} on_close={on_notice_close} />
            }
        </main>
    }
}
