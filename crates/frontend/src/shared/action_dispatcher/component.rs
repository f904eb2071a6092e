use super::dispatcher::ActionDispatcher;
use super::state::{ModalKey, WorkflowMode};
use contracts::shared::actions::ActionDescriptorDto;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Свойства, которые получает любой модальный сценарий
#[derive(Clone)]
pub struct WorkflowProps {
    pub show: Signal<bool>,
    pub on_close: Callback<()>,
    /// Режим открытия из описания действия ("create", "edit", ...)
    pub action: Option<String>,
    pub mode: WorkflowMode,
}

fn indexed_actions(actions: Vec<ActionDescriptorDto>) -> Vec<(usize, ActionDescriptorDto)> {
    actions.into_iter().enumerate().collect()
}

/// Панель кнопок, каждая кнопка — одно декларативное действие.
#[component]
pub fn ActionToolbar(
    dispatcher: ActionDispatcher,
    #[prop(into)] actions: Signal<Vec<ActionDescriptorDto>>,
) -> impl IntoView {
    view! {
        <div class="action-toolbar">
            <For
                each=move || indexed_actions(actions.get())
                key=|(idx, action)| (*idx, action.label.clone())
                children=move |(_, action)| {
                    let label = action.label.clone();
                    let appearance = if action.kind == "navigate" {
                        ButtonAppearance::Subtle
                    } else {
                        ButtonAppearance::Secondary
                    };
                    view! {
                        <Button appearance=appearance on_click=move |_| dispatcher.dispatch_raw(&action)>
                            {label}
                        </Button>
                    }
                }
            />
        </div>
    }
}

/// Монтирует ровно один сценарий для активного ключа (или ничего).
///
/// `render` — исчерпывающий `match` по `ModalKey`, см. `domain::workflows`.
#[component]
pub fn ActionHost(
    dispatcher: ActionDispatcher,
    render: fn(ModalKey, WorkflowProps) -> AnyView,
) -> impl IntoView {
    let active = Memo::new(move |_| dispatcher.active());

    move || {
        active.get().map(|modal| {
            let key = modal.key;
            let props = WorkflowProps {
                show: Signal::derive(move || dispatcher.active_key() == Some(key)),
                on_close: Callback::new(move |_: ()| dispatcher.close_deferred()),
                action: modal.action.clone(),
                mode: modal.mode,
            };
            log::debug!("mount workflow `{}`", key.code());
            render(key, props)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_actions_keeps_duplicate_labels_apart() {
        let actions = vec![
            ActionDescriptorDto::modal("Создать", "createItem"),
            ActionDescriptorDto::modal("Создать", "createWarehouse"),
        ];
        let indexed = indexed_actions(actions);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].0, 0);
        assert_eq!(indexed[1].0, 1);
        assert_eq!(indexed[1].1.modal_key.as_deref(), Some("createWarehouse"));
    }
}
