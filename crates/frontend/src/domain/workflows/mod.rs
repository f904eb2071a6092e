//! Модальные сценарии: единственное место, где `ModalKey` превращается в View.

pub mod form_error;
pub mod reference;
pub mod remove;

use crate::domain::a001_item::ui::details::ItemWorkflow;
use crate::domain::a002_warehouse::ui::details::WarehouseWorkflow;
use crate::domain::a003_stock::ui::count::StockCountWorkflow;
use crate::domain::a003_stock::ui::movement::StockMovementWorkflow;
use crate::shared::action_dispatcher::{ModalKey, WorkflowProps};
use contracts::domain::a003_stock::aggregate::StockMovementKind;
use leptos::prelude::*;
use remove::{RemoveTarget, RemoveWorkflow};

pub use form_error::FormError;

/// Какой сценарий открывается по ключу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Movement(StockMovementKind),
    Count,
    Item,
    Warehouse,
    Remove(RemoveTarget),
}

/// `match` исчерпывающий: новый ключ без сценария не скомпилируется.
pub fn workflow_for(modal_key: ModalKey) -> Workflow {
    match modal_key {
        ModalKey::AddStock => Workflow::Movement(StockMovementKind::Add),
        ModalKey::IssueStock => Workflow::Movement(StockMovementKind::Issue),
        ModalKey::TransferStock => Workflow::Movement(StockMovementKind::Transfer),
        ModalKey::AdjustStock => Workflow::Movement(StockMovementKind::Adjust),
        ModalKey::StockCount => Workflow::Count,
        ModalKey::CreateItem | ModalKey::EditItem => Workflow::Item,
        ModalKey::CreateWarehouse | ModalKey::EditWarehouse => Workflow::Warehouse,
        ModalKey::RemoveItem => Workflow::Remove(RemoveTarget::Items),
        ModalKey::RemoveWarehouse => Workflow::Remove(RemoveTarget::Warehouses),
    }
}

/// Рендер сценария по ключу
pub fn render_workflow(modal_key: ModalKey, props: WorkflowProps) -> AnyView {
    match workflow_for(modal_key) {
        Workflow::Movement(kind) => {
            view! { <StockMovementWorkflow modal_key=modal_key kind=kind props=props /> }.into_any()
        }
        Workflow::Count => view! { <StockCountWorkflow props=props /> }.into_any(),
        Workflow::Item => view! { <ItemWorkflow modal_key=modal_key props=props /> }.into_any(),
        Workflow::Warehouse => {
            view! { <WarehouseWorkflow modal_key=modal_key props=props /> }.into_any()
        }
        Workflow::Remove(target) => {
            view! { <RemoveWorkflow modal_key=modal_key target=target props=props /> }.into_any()
        }
    }
}

/// Подпись + поле ввода
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {children()}
            {hint.map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_keys_open_matching_movement() {
        assert_eq!(
            workflow_for(ModalKey::TransferStock),
            Workflow::Movement(StockMovementKind::Transfer)
        );
        assert_eq!(
            workflow_for(ModalKey::AdjustStock),
            Workflow::Movement(StockMovementKind::Adjust)
        );
        assert_eq!(workflow_for(ModalKey::StockCount), Workflow::Count);
    }

    #[test]
    fn test_remove_keys_carry_their_target() {
        assert_eq!(
            workflow_for(ModalKey::RemoveItem),
            Workflow::Remove(RemoveTarget::Items)
        );
        assert_eq!(
            workflow_for(ModalKey::RemoveWarehouse),
            Workflow::Remove(RemoveTarget::Warehouses)
        );
    }

    #[test]
    fn test_each_movement_kind_has_exactly_one_key() {
        let kinds: Vec<StockMovementKind> = ModalKey::all()
            .into_iter()
            .filter_map(|key| match workflow_for(key) {
                Workflow::Movement(kind) => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                StockMovementKind::Add,
                StockMovementKind::Issue,
                StockMovementKind::Transfer,
                StockMovementKind::Adjust,
            ]
        );
    }
}
