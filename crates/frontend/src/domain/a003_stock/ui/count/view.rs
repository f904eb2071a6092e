use super::view_model::StockCountViewModel;
use crate::domain::workflows::reference::ReferenceData;
use crate::domain::workflows::FormField;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ModalKey, WorkflowProps};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::smart_select::{SelectionMode, SmartSelect};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

fn format_difference(diff: Option<f64>) -> String {
    match diff {
        Some(d) if d > 0.0 => format!("+{}", d),
        Some(d) => d.to_string(),
        None => String::new(),
    }
}

#[component]
pub fn StockCountWorkflow(props: WorkflowProps) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let vm = StockCountViewModel::new();
    let refs = ReferenceData::load();
    let on_close = props.on_close;
    let on_saved = Callback::new(move |_: ()| {
        ctx.notify_data_changed();
        on_close.run(());
    });

    let rows = move || {
        vm.form.with(|f| {
            f.lines
                .iter()
                .enumerate()
                .map(|(index, line)| {
                    let diff = format_difference(line.difference());
                    view! {
                        <tr class="table__row">
                            <td class="table__cell">{line.item_code.clone()}</td>
                            <td class="table__cell">{line.item_description.clone()}</td>
                            <td class="table__cell table__cell--number">
                                {format!("{} {}", line.expected, line.unit)}
                            </td>
                            <td class="table__cell">
                                <input
                                    type="text"
                                    class="form__input form__input--compact"
                                    inputmode="decimal"
                                    prop:value=line.counted.clone()
                                    on:change=move |ev| vm.set_counted(index, event_target_value(&ev))
                                />
                            </td>
                            <td class="table__cell table__cell--number">{diff}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <ModalFrame title=ModalKey::StockCount.display_name() show=props.show on_close=on_close modal_class="workflow-modal workflow-modal--wide">
            <div class="details-form stock-count">
                {move || refs.error.get().map(|e| view! { <div class="error">{e}</div> })}
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <SmartSelect
                    label="Склад"
                    mode=SelectionMode::Single
                    options=refs.warehouse_options(false)
                    selected=Signal::derive(move || vm.form.with(|f| f.warehouse.clone()))
                    on_change=Callback::new(move |sel| vm.select_warehouse(sel))
                />

                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <Spinner /> }
                >
                    <Show
                        when=move || vm.form.with(|f| !f.lines.is_empty())
                        fallback=|| view! { <div class="placeholder">"Выберите склад с остатками"</div> }
                    >
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Код"</th>
                                    <th class="table__header-cell">"Позиция"</th>
                                    <th class="table__header-cell">"Учёт"</th>
                                    <th class="table__header-cell">"Факт"</th>
                                    <th class="table__header-cell">"Разница"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </Show>
                </Show>

                <FormField label="Комментарий">
                    <textarea
                        class="form__input"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.comment.clone())
                        on:input=move |ev| vm.form.update(|f| f.comment = event_target_value(&ev))
                    />
                </FormField>
            </div>

            <div class="details-actions">
                {move || vm.saving.get().then(|| view! { <Spinner /> })}
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    "Провести"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Отмена"
                </Button>
            </div>
        </ModalFrame>
    }
}
