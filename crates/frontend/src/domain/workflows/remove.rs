//! Подтверждение удаления позиций / складов.

use super::form_error::FormError;
use super::reference::ReferenceData;
use crate::domain::a001_item::api::delete_item;
use crate::domain::a002_warehouse::api::delete_warehouse;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ModalKey, WorkflowProps};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::smart_select::{SelectOption, Selection, SmartSelect};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTarget {
    Items,
    Warehouses,
}

impl RemoveTarget {
    pub fn picker_label(&self) -> &'static str {
        match self {
            RemoveTarget::Items => "Позиции",
            RemoveTarget::Warehouses => "Склады",
        }
    }
}

pub fn confirm_message(target: RemoveTarget, count: usize) -> String {
    let what = match target {
        RemoveTarget::Items => "позиций",
        RemoveTarget::Warehouses => "складов",
    };
    format!("Будет удалено {}: {}. Действие необратимо.", what, count)
}

/// Строковые id выбранных записей в порядке выбора
pub fn removal_ids(selection: &Selection<String>) -> Result<Vec<String>, FormError> {
    if selection.is_empty() {
        return Err(FormError::NothingSelected);
    }
    Ok(selection.values().to_vec())
}

#[component]
pub fn RemoveWorkflow(
    modal_key: ModalKey,
    target: RemoveTarget,
    props: WorkflowProps,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let refs = ReferenceData::load();
    let on_close = props.on_close;

    // id из строки списка выбираются сразу; режим с панели ("edit" и т.п.) игнорируется
    let initial: Vec<String> = props
        .action
        .iter()
        .filter(|a| uuid::Uuid::parse_str(a).is_ok())
        .cloned()
        .collect();
    let selected = RwSignal::new(Selection::Multiple(initial));
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);

    let options = Signal::derive(move || -> Vec<SelectOption<String>> {
        match target {
            RemoveTarget::Items => refs.items.with(|items| {
                items
                    .iter()
                    .map(|i| SelectOption::new(i.id.as_string(), format!("{} · {}", i.code, i.description)))
                    .collect()
            }),
            RemoveTarget::Warehouses => refs.warehouses.with(|list| {
                list.iter()
                    .map(|w| SelectOption::new(w.id.as_string(), w.description.clone()))
                    .collect()
            }),
        }
    });

    let confirm = move |_: leptos::ev::MouseEvent| {
        let ids = match selected.with_untracked(removal_ids) {
            Ok(ids) => ids,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        deleting.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let mut failed = Vec::new();
            for id in &ids {
                let result = match target {
                    RemoveTarget::Items => delete_item(id).await,
                    RemoveTarget::Warehouses => delete_warehouse(id).await,
                };
                if let Err(e) = result {
                    failed.push(e);
                }
            }
            deleting.set(false);
            ctx.notify_data_changed();
            if failed.is_empty() {
                log::info!("removed {} record(s)", ids.len());
                on_close.run(());
            } else {
                error.set(Some(failed.join("; ")));
            }
        });
    };

    view! {
        <ModalFrame title=modal_key.display_name() show=props.show on_close=on_close modal_class="workflow-modal">
            <div class="details-form remove-confirm">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                <SmartSelect
                    label=target.picker_label()
                    options=options
                    selected=selected
                    on_change=Callback::new(move |sel| selected.set(sel))
                />
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">
                        {move || confirm_message(target, selected.with(|s| s.values().len()))}
                    </span>
                </div>
            </div>
            <div class="details-actions">
                {move || deleting.get().then(|| view! { <Spinner /> })}
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || deleting.get() || selected.with(|s| s.is_empty()))
                    on_click=confirm
                >
                    {icon("trash")}
                    "Удалить"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Отмена"
                </Button>
            </div>
        </ModalFrame>
    }
}
