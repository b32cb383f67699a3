use stockdesk_shared::{
    resolve_image_url, Category, Draft, FormMode, ItemForm, ItemStatus, Prescription,
};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::current::item_form as t,
};

#[derive(Properties, PartialEq)]
pub struct ItemFormModalProps {
    pub form: ItemForm<File>,
    pub assets_host: AttrValue,
    /// Emits the whole draft after every field edit.
    pub on_draft: Callback<Draft>,
    pub on_files: Callback<Vec<File>>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

type Apply = fn(&mut Draft, String);

fn on_text(draft: &Draft, on_draft: &Callback<Draft>, apply: Apply) -> Callback<InputEvent> {
    let draft = draft.clone();
    let on_draft = on_draft.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = draft.clone();
            apply(&mut next, target.value());
            on_draft.emit(next);
        }
    })
}

fn on_select(draft: &Draft, on_draft: &Callback<Draft>, apply: Apply) -> Callback<Event> {
    let draft = draft.clone();
    let on_draft = on_draft.clone();
    Callback::from(move |event: Event| {
        if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
            let mut next = draft.clone();
            apply(&mut next, target.value());
            on_draft.emit(next);
        }
    })
}

fn field(label: &'static str, required: bool, control: Html) -> Html {
    html! {
        <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
            <span class="font-medium">
                { label }
                if required {
                    <span class="text-red-500">{" *"}</span>
                }
            </span>
            { control }
        </label>
    }
}

#[function_component(ItemFormModal)]
pub fn item_form_modal(props: &ItemFormModalProps) -> Html {
    if !props.form.is_open() {
        return Html::default();
    }

    let draft = props.form.draft();
    let is_create = props.form.mode().is_create();
    let submitting = props.form.is_submitting();
    let input_class = classes!(
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2"
    );

    let on_description = {
        let draft = draft.clone();
        let on_draft = props.on_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = draft.clone();
                next.description = target.value();
                on_draft.emit(next);
            }
        })
    };

    let on_files = {
        let on_files = props.on_files.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let files = (0..list.length()).filter_map(|index| list.get(index)).collect();
            on_files.emit(files);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let categories = Category::ALL;
    let selected_category = draft.category.as_ref().map(Category::code).unwrap_or_default();
    // A code this client does not know stays selectable so an edit keeps it.
    let unknown_category = match &draft.category {
        Some(Category::Unknown(code)) => Some(code.clone()),
        _ => None,
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-40",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/40",
                "p-4"
            )}
            role="dialog"
            aria-modal="true"
        >
            <form
                class={classes!(
                    "w-full",
                    "max-w-2xl",
                    "max-h-[90vh]",
                    "overflow-y-auto",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-2xl",
                    "space-y-4"
                )}
                onsubmit={on_submit}
            >
                <h2 class="text-xl font-semibold">
                    { if is_create { t::TITLE_CREATE } else { t::TITLE_EDIT } }
                </h2>

                // Inputs stay locked until the pending save settles.
                <fieldset disabled={submitting} class={classes!("space-y-4", "disabled:opacity-70")}>

                    <div class={classes!("grid", "grid-cols-1", "gap-4", "md:grid-cols-2")}>
                        { field(t::NAME, true, html! {
                            <input
                                class={input_class.clone()}
                                value={draft.name.clone()}
                                oninput={on_text(draft, &props.on_draft, |d, v| d.name = v)}
                            />
                        }) }
                        { field(t::BRAND, true, html! {
                            <input
                                class={input_class.clone()}
                                value={draft.brand.clone()}
                                oninput={on_text(draft, &props.on_draft, |d, v| d.brand = v)}
                            />
                        }) }
                        { field(t::CATEGORY, true, html! {
                            <select
                                class={input_class.clone()}
                                onchange={on_select(draft, &props.on_draft, |d, v| {
                                    d.category =
                                        Some(v).filter(|code| !code.is_empty()).map(Category::from);
                                })}
                            >
                                <option value="" selected={selected_category.is_empty()}>
                                    { t::CATEGORY_PLACEHOLDER }
                                </option>
                                if let Some(code) = unknown_category {
                                    <option value={code.clone()} selected=true>{ code }</option>
                                }
                                { for categories.iter().map(|category| html! {
                                    <option
                                        value={category.code().to_string()}
                                        selected={category.code() == selected_category}
                                    >
                                        { category.label().to_string() }
                                    </option>
                                }) }
                            </select>
                        }) }
                        { field(t::PACK_SIZE, false, html! {
                            <input
                                class={input_class.clone()}
                                value={draft.pack_size.clone()}
                                oninput={on_text(draft, &props.on_draft, |d, v| d.pack_size = v)}
                            />
                        }) }
                        { field(t::PRICE, true, html! {
                            <input
                                type="number"
                                step="0.01"
                                class={input_class.clone()}
                                value={draft.price.clone()}
                                oninput={on_text(draft, &props.on_draft, |d, v| d.price = v)}
                            />
                        }) }
                        { field(t::STOCK, true, html! {
                            <input
                                type="number"
                                step="1"
                                class={input_class.clone()}
                                value={draft.stock.clone()}
                                oninput={on_text(draft, &props.on_draft, |d, v| d.stock = v)}
                            />
                        }) }
                        { field(t::STATUS, false, html! {
                            <select
                                class={input_class.clone()}
                                onchange={on_select(draft, &props.on_draft, |d, v| {
                                    d.status = ItemStatus::from_code(&v).unwrap_or_default();
                                })}
                            >
                                { for [ItemStatus::Active, ItemStatus::Inactive].iter().map(|status| html! {
                                    <option value={status.code()} selected={*status == draft.status}>
                                        { status.code() }
                                    </option>
                                }) }
                            </select>
                        }) }
                        { field(t::PRESCRIPTION, false, html! {
                            <select
                                class={input_class.clone()}
                                onchange={on_select(draft, &props.on_draft, |d, v| {
                                    d.prescription = Prescription::from_code(&v).unwrap_or_default();
                                })}
                            >
                                { for [Prescription::NotRequired, Prescription::Required].iter().map(|rx| html! {
                                    <option value={rx.code()} selected={*rx == draft.prescription}>
                                        { rx.code() }
                                    </option>
                                }) }
                            </select>
                        }) }
                    </div>

                    { field(t::DESCRIPTION, true, html! {
                        <textarea
                            rows="3"
                            class={input_class.clone()}
                            value={draft.description.clone()}
                            oninput={on_description}
                        />
                    }) }

                    { field(t::IMAGES, is_create, html! {
                        <input type="file" accept="image/*" multiple=true onchange={on_files} />
                    }) }
                    if !is_create && props.form.pending().is_empty() {
                        <p class="text-xs text-[var(--muted)]">{ t::IMAGES_HINT_EDIT }</p>
                        <div class={classes!("flex", "flex-wrap", "gap-2")}>
                            { for draft.images.iter().map(|reference| html! {
                                <img
                                    key={reference.clone()}
                                    src={resolve_image_url(&props.assets_host, Some(reference.as_str()))}
                                    class={classes!("h-20", "w-20", "rounded-lg", "object-cover", "opacity-80")}
                                />
                            }) }
                        </div>
                    }
                    if !props.form.previews().is_empty() {
                        <div class={classes!("flex", "flex-wrap", "gap-2")}>
                            { for props.form.previews().iter().map(|src| html! {
                                <img
                                    key={src.clone()}
                                    src={src.clone()}
                                    class={classes!("h-20", "w-20", "rounded-lg", "object-cover")}
                                />
                            }) }
                        </div>
                    }

                </fieldset>

                <div class={classes!("flex", "justify-end", "gap-3", "pt-2")}>
                    <button
                        type="button"
                        class="btn-fluent-secondary"
                        disabled={submitting}
                        onclick={on_close}
                    >
                        { t::CANCEL }
                    </button>
                    <button type="submit" class="btn-fluent-primary" disabled={submitting}>
                        if submitting {
                            <LoadingSpinner size={SpinnerSize::Small} label={AttrValue::from(t::SUBMITTING)} />
                        } else if matches!(props.form.mode(), FormMode::Create) {
                            { t::SUBMIT_CREATE }
                        } else {
                            { t::SUBMIT_EDIT }
                        }
                    </button>
                </div>
            </form>
        </div>
    }
}
