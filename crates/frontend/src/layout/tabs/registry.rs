//! Tab content registry - маппинг tab.key → View.

use super::tab_labels::{ITEM_TAB, STOCK_TAB, WAREHOUSE_TAB};
use crate::domain::a001_item::ui::list::ItemList;
use crate::domain::a002_warehouse::ui::list::WarehouseList;
use crate::domain::a003_stock::ui::page::StockPage;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Неизвестные ключи (например, из `?active=`) получают placeholder с
/// кнопкой закрытия, а не панику.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        ITEM_TAB => view! { <ItemList /> }.into_any(),
        WAREHOUSE_TAB => view! { <WarehouseList /> }.into_any(),
        STOCK_TAB => view! { <StockPage /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", key);
            let key_for_close = key.to_string();
            view! {
                <div class="placeholder">
                    <p>{format!("Раздел `{}` не найден", key)}</p>
                    <button class="button button--secondary" on:click=move |_| tabs_store.close_tab(&key_for_close)>
                        "Закрыть"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
