use crate::domain::a002_warehouse::api::fetch_warehouses;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::STOCK_TAB;
use crate::shared::action_dispatcher::{ActionDescriptor, ActionDispatcher, ActionToolbar, ModalKey};
use crate::shared::icons::icon;
use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::common::AggregateId;
use contracts::shared::actions::ActionDescriptorDto;
use leptos::ev;
use leptos::prelude::*;

fn warehouse_toolbar() -> Vec<ActionDescriptorDto> {
    vec![
        ActionDescriptorDto::modal("Новый склад", ModalKey::CreateWarehouse.code()).with_action("create"),
        ActionDescriptorDto::modal("Изменить", ModalKey::EditWarehouse.code()).with_action("edit"),
        ActionDescriptorDto::modal("Удалить", ModalKey::RemoveWarehouse.code()),
        ActionDescriptorDto::navigate("Остатки", STOCK_TAB),
    ]
}

#[component]
pub fn WarehouseList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let dispatcher = leptos::context::use_context::<ActionDispatcher>()
        .expect("ActionDispatcher context not found");

    let warehouses = RwSignal::new(Vec::<Warehouse>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_warehouses().await {
                Ok(list) => {
                    warehouses.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let edit = move |id: String| {
        dispatcher
            .dispatch(&ActionDescriptor::modal("Изменить", ModalKey::EditWarehouse).with_action(id));
    };
    let remove = move |id: String| {
        dispatcher
            .dispatch(&ActionDescriptor::modal("Удалить", ModalKey::RemoveWarehouse).with_action(id));
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Склады"</h1>
                </div>
                <div class="header__actions">
                    <ActionToolbar dispatcher=dispatcher actions=Signal::derive(warehouse_toolbar) />
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Код"</th>
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"Адрес"</th>
                            <th class="table__header-cell">"Активен"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || warehouses.get().into_iter().map(|w| {
                            let id_for_edit = w.id.as_string();
                            let id_for_remove = id_for_edit.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--inactive=!w.is_active
                                    on:click=move |_| edit(id_for_edit.clone())
                                >
                                    <td class="table__cell">{w.code}</td>
                                    <td class="table__cell">{w.description}</td>
                                    <td class="table__cell">{w.address.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{if w.is_active { "Да" } else { "Нет" }}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |ev: ev::MouseEvent| {
                                                ev.stop_propagation();
                                                remove(id_for_remove.clone());
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
