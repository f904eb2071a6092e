pub mod state;

use self::state::{balance_totals, sort_balances, stock_toolbar};
use crate::domain::a002_warehouse::api::fetch_warehouses;
use crate::domain::a003_stock::api::fetch_balances;
use crate::domain::workflows::reference::warehouse_options;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ActionDispatcher, ActionToolbar};
use crate::shared::smart_select::{SelectOption, Selection, SmartSelect};
use contracts::domain::a002_warehouse::aggregate::WarehouseId;
use contracts::domain::a003_stock::aggregate::StockBalance;
use leptos::prelude::*;
use thaw::Spinner;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Остатки по складам
#[component]
pub fn StockPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let dispatcher = leptos::context::use_context::<ActionDispatcher>()
        .expect("ActionDispatcher context not found");

    let balances = RwSignal::new(Vec::<StockBalance>::new());
    let warehouses = RwSignal::new(Vec::<SelectOption<WarehouseId>>::new());
    let filter = RwSignal::new(Selection::<WarehouseId>::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Справочник складов для фильтра (включая неактивные: по ним тоже бывают остатки)
    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_warehouses().await {
                Ok(list) => warehouses.set(warehouse_options(&list, true)),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    // Ответы на устаревшие запросы (фильтр успел смениться) отбрасываются
    let request_seq = StoredValue::new(0u32);
    Effect::new(move |_| {
        ctx.data_version.track();
        let selected: Vec<WarehouseId> = filter.with(|f| f.values().to_vec());
        request_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let seq = request_seq.get_value();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_balances(&selected).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(mut rows) => {
                    sort_balances(&mut rows);
                    balances.set(rows);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let totals = Memo::new(move |_| balances.with(|rows| balance_totals(rows)));

    view! {
        <div class="page stock-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Остатки"</h1>
                </div>
                <div class="header__actions">
                    <ActionToolbar dispatcher=dispatcher actions=Signal::derive(stock_toolbar) />
                </div>
            </div>

            <div class="filter-panel">
                <SmartSelect
                    label="Склады"
                    placeholder="Все склады"
                    options=warehouses
                    selected=filter
                    on_change=Callback::new(move |sel| filter.set(sel))
                />
                <div class="filter-panel__summary">
                    {move || {
                        let t = totals.get();
                        format!("Позиций: {} · с минусом: {}", t.positions, t.negative)
                    }}
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || loading.get().then(|| view! { <Spinner /> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Склад"</th>
                            <th class="table__header-cell">"Код"</th>
                            <th class="table__header-cell">"Позиция"</th>
                            <th class="table__header-cell">"Остаток"</th>
                            <th class="table__header-cell">"Ед."</th>
                            <th class="table__header-cell">"Изменён"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || balances.get().into_iter().map(|row| {
                            let negative = row.quantity < 0.0;
                            view! {
                                <tr class="table__row" class:table__row--negative=negative>
                                    <td class="table__cell">{row.warehouse_description}</td>
                                    <td class="table__cell">{row.item_code}</td>
                                    <td class="table__cell">{row.item_description}</td>
                                    <td class="table__cell table__cell--number">{row.quantity.to_string()}</td>
                                    <td class="table__cell">{row.unit}</td>
                                    <td class="table__cell">{format_timestamp(row.updated_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
