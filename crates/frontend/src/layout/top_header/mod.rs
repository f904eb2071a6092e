//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{ITEM_TAB, STOCK_TAB, WAREHOUSE_TAB};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let nav_item = move |key: &'static str, icon_name: &'static str| {
        let is_active = move || ctx.active.get().as_deref() == Some(key);
        view! {
            <button
                class="top-header__nav-btn"
                class:top-header__nav-btn--active=is_active
                on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
            >
                {icon(icon_name)}
                <span>{tab_label_for_key(key)}</span>
            </button>
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("inventory")}
                <span class="top-header__title">"Склад"</span>
            </div>
            <nav class="top-header__nav">
                {nav_item(STOCK_TAB, "inventory")}
                {nav_item(ITEM_TAB, "items")}
                {nav_item(WAREHOUSE_TAB, "warehouse")}
            </nav>
        </div>
    }
}
