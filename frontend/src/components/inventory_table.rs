use stockdesk_shared::{resolve_image_url, InventoryItem, ItemStatus, Prescription};
use yew::prelude::*;

use crate::i18n::current::inventory_table as t;

#[derive(Properties, PartialEq)]
pub struct InventoryTableProps {
    pub items: Vec<InventoryItem>,
    pub assets_host: AttrValue,
    pub on_edit: Callback<InventoryItem>,
    pub on_delete: Callback<String>,
    /// Disables the row actions while a write is pending.
    #[prop_or(false)]
    pub busy: bool,
}

fn status_label(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Active => t::STATUS_ACTIVE,
        ItemStatus::Inactive => t::STATUS_INACTIVE,
    }
}

fn prescription_label(prescription: Prescription) -> &'static str {
    match prescription {
        Prescription::Required => t::RX_REQUIRED,
        Prescription::NotRequired => t::RX_NOT_REQUIRED,
    }
}

#[function_component(InventoryTable)]
pub fn inventory_table(props: &InventoryTableProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <p class={classes!("py-12", "text-center", "text-[var(--muted)]")}>{ t::EMPTY }</p>
        };
    }

    let header = [
        t::COL_IMAGE,
        t::COL_NAME,
        t::COL_CATEGORY,
        t::COL_BRAND,
        t::COL_PRICE,
        t::COL_STOCK,
        t::COL_STATUS,
        t::COL_PRESCRIPTION,
        t::COL_ACTIONS,
    ];

    let rows = props.items.iter().map(|item| {
        let image_src = resolve_image_url(&props.assets_host, item.primary_image().as_deref());
        let on_edit = {
            let cb = props.on_edit.clone();
            let item = item.clone();
            Callback::from(move |_| cb.emit(item.clone()))
        };
        let on_delete = {
            let cb = props.on_delete.clone();
            let id = item.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let status_classes = match item.status {
            ItemStatus::Active => classes!("text-emerald-600"),
            ItemStatus::Inactive => classes!("text-[var(--muted)]"),
        };

        html! {
            <tr key={item.id.clone()} class={classes!("border-b", "border-[var(--border)]")}>
                <td class="px-3 py-2">
                    <img
                        src={image_src}
                        alt={item.name.clone()}
                        loading="lazy"
                        class={classes!("h-12", "w-12", "rounded-lg", "object-cover")}
                    />
                </td>
                <td class="px-3 py-2 font-medium">{ item.name.clone() }</td>
                <td class="px-3 py-2">{ item.category.label().to_string() }</td>
                <td class="px-3 py-2">{ item.brand.clone() }</td>
                <td class="px-3 py-2 text-right">{ format!("{:.2}", item.price) }</td>
                <td class="px-3 py-2 text-right">{ item.stock }</td>
                <td class={classes!("px-3", "py-2", status_classes)}>{ status_label(item.status) }</td>
                <td class="px-3 py-2">{ prescription_label(item.prescription) }</td>
                <td class="px-3 py-2 whitespace-nowrap">
                    <button
                        type="button"
                        class="btn-fluent-secondary mr-2"
                        disabled={props.busy}
                        onclick={on_edit}
                    >
                        { t::EDIT }
                    </button>
                    <button
                        type="button"
                        class="btn-fluent-danger"
                        disabled={props.busy}
                        onclick={on_delete}
                    >
                        { t::DELETE }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class={classes!("overflow-x-auto", "rounded-2xl", "border", "border-[var(--border)]")}>
            <table class={classes!("w-full", "text-sm")}>
                <thead class={classes!("bg-[var(--surface-alt)]", "text-left")}>
                    <tr>
                        { for header.iter().map(|col| html! { <th class="px-3 py-2 font-semibold">{ *col }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </div>
    }
}
