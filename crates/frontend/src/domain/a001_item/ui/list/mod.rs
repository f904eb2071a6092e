use crate::domain::a001_item::api::fetch_items;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ActionDescriptor, ActionDispatcher, ActionToolbar, ModalKey};
use crate::shared::icons::icon;
use contracts::domain::a001_item::aggregate::Item;
use contracts::domain::common::AggregateId;
use contracts::shared::actions::{parse_toolbar, ActionDescriptorDto};
use leptos::ev;
use leptos::prelude::*;

const TOOLBAR_JSON: &str = include_str!("toolbar.json");

/// Панель списка из JSON-описания; при ошибке разбора панель пустая
fn item_toolbar() -> Vec<ActionDescriptorDto> {
    parse_toolbar(TOOLBAR_JSON).unwrap_or_else(|e| {
        log::error!("item toolbar: {}", e);
        Vec::new()
    })
}

#[derive(Clone, Debug)]
pub struct ItemRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub comment: String,
    pub updated_at: String,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.as_string(),
            code: item.code,
            description: item.description,
            unit: item.unit,
            comment: item.comment.unwrap_or_else(|| "-".to_string()),
            updated_at: item.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let dispatcher = leptos::context::use_context::<ActionDispatcher>()
        .expect("ActionDispatcher context not found");

    let items = RwSignal::new(Vec::<ItemRow>::new());
    let error = RwSignal::new(None::<String>);
    let toolbar = StoredValue::new(item_toolbar());

    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_items().await {
                Ok(list) => {
                    items.set(list.into_iter().map(ItemRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let edit = move |id: String| {
        dispatcher.dispatch(&ActionDescriptor::modal("Изменить", ModalKey::EditItem).with_action(id));
    };
    let remove = move |id: String| {
        dispatcher
            .dispatch(&ActionDescriptor::modal("Удалить", ModalKey::RemoveItem).with_action(id));
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Номенклатура"</h1>
                </div>
                <div class="header__actions">
                    <ActionToolbar
                        dispatcher=dispatcher
                        actions=Signal::derive(move || toolbar.get_value())
                    />
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
                            <th class="table__header-cell">"Ед."</th>
                            <th class="table__header-cell">"Комментарий"</th>
                            <th class="table__header-cell">"Изменено"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_remove = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| edit(id_for_edit.clone())>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.unit}</td>
                                    <td class="table__cell">{row.comment}</td>
                                    <td class="table__cell">{row.updated_at}</td>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::action_dispatcher::Action;

    #[test]
    fn test_toolbar_json_is_valid() {
        let toolbar = item_toolbar();
        assert_eq!(toolbar.len(), 4);
        for dto in &toolbar {
            assert!(
                ActionDescriptor::try_from(dto).is_ok(),
                "toolbar entry `{}` must dispatch",
                dto.label
            );
        }
        let create = ActionDescriptor::try_from(&toolbar[0]).unwrap();
        assert_eq!(
            create.action,
            Action::Modal {
                key: ModalKey::CreateItem,
                action: Some("create".to_string()),
            }
        );
    }
}
