use super::state::{
    display_label, filter_options, OptionsView, SelectEvent, SelectOption, Selection,
    SelectionMode, SmartSelectState,
};
use crate::shared::icons::icon;
use leptos::html::Div;
use leptos::prelude::*;

/// Combobox с поиском.
///
/// Компонент не хранит выбор: он приходит в `selected` и возвращается
/// через `on_change`. Локально живут только открытость, строка поиска
/// и смещение прокрутки списка.
///
/// ```rust,ignore
/// <SmartSelect
///     options=warehouse_options
///     selected=Signal::derive(move || vm.warehouses.get())
///     on_change=Callback::new(move |sel| vm.warehouses.set(sel))
///     placeholder="Все склады"
/// />
/// ```
#[component]
pub fn SmartSelect<V>(
    #[prop(into)] options: Signal<Vec<SelectOption<V>>>,
    #[prop(into)] selected: Signal<Selection<V>>,
    on_change: Callback<Selection<V>>,
    /// Режим выбора, по умолчанию `Multiple`
    #[prop(optional)]
    mode: Option<SelectionMode>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] label: MaybeProp<String>,
) -> impl IntoView
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    let mode = mode.unwrap_or_default();
    let placeholder = if placeholder.is_empty() {
        "Не выбрано".to_string()
    } else {
        placeholder
    };

    let state = RwSignal::new(SmartSelectState::new(mode));
    let is_open = Memo::new(move |_| state.with(|s| s.is_open));
    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let list_ref = NodeRef::<Div>::new();

    let send = move |event: SelectEvent<V>| {
        let current = selected.get_untracked();
        let change = state.try_update(|s| s.apply(event, &current)).flatten();
        if let Some(next) = change {
            on_change.run(next);
        }
    };

    let current_scroll = move || {
        list_ref
            .get_untracked()
            .map(|list| f64::from(list.scroll_top()))
            .unwrap_or(0.0)
    };

    let on_toggle = move |value: V| {
        send(SelectEvent::Toggle {
            value,
            scroll_offset: current_scroll(),
        });
    };

    // Restore the list offset after the selection-driven re-render
    // (and after re-opening the popover).
    Effect::new(move |_| {
        selected.track();
        if !is_open.get() {
            return;
        }
        request_animation_frame(move || {
            let Some(list) = list_ref.get_untracked() else {
                return;
            };
            let max_scroll = f64::from((list.scroll_height() - list.client_height()).max(0));
            let restore = state
                .try_update_untracked(|s| s.scroll.take_restore(max_scroll))
                .flatten();
            if let Some(offset) = restore {
                list.set_scroll_top(offset.round() as i32);
            }
        });
    });

    let trigger_text =
        move || selected.with(|sel| options.with(|opts| display_label(opts, sel, &placeholder)));

    let rows = move || {
        let query = query.get();
        let current = selected.get();
        options.with(|opts| match filter_options(opts, &query) {
            OptionsView::NoResults => view! {
                <div class="smart-select__empty">"Нет совпадений"</div>
            }
            .into_any(),
            OptionsView::Options(visible) => visible
                .into_iter()
                .map(|opt| {
                    let value = opt.value.clone();
                    let is_selected = current.contains(&opt.value);
                    view! {
                        <div
                            class="smart-select__option"
                            class:smart-select__option--selected=is_selected
                            on:click=move |_| on_toggle(value.clone())
                        >
                            {(mode == SelectionMode::Multiple).then(|| view! {
                                <span class="smart-select__check">
                                    {if is_selected { icon("check") } else { view! { <></> }.into_any() }}
                                </span>
                            })}
                            <span class="smart-select__label">{opt.label.clone()}</span>
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="smart-select form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <button
                type="button"
                class="smart-select__trigger"
                class:smart-select__trigger--placeholder=move || selected.with(|s| s.is_empty())
                on:click=move |_| send(SelectEvent::TriggerActivated)
            >
                <span class="smart-select__value">{trigger_text}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div
                    class="smart-select__backdrop"
                    on:click=move |_| send(SelectEvent::OutsideInteraction)
                ></div>
                <div class="smart-select__popover">
                    <input
                        type="text"
                        class="smart-select__search"
                        placeholder="Поиск..."
                        prop:value=move || query.get()
                        on:input=move |ev| send(SelectEvent::QueryChanged(event_target_value(&ev)))
                    />
                    <div
                        class="smart-select__list"
                        node_ref=list_ref
                        on:scroll=move |_| send(SelectEvent::Scrolled(current_scroll()))
                    >
                        {rows}
                    </div>
                </div>
            </Show>
        </div>
    }
}
