use super::view_model::{MovementStep, StockMovementViewModel};
use crate::domain::workflows::reference::ReferenceData;
use crate::domain::workflows::FormField;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ModalKey, WorkflowMode, WorkflowProps};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::smart_select::{SelectionMode, SmartSelect};
use contracts::domain::a003_stock::aggregate::StockMovementKind;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

/// Поступление / выдача / перемещение / корректировка.
///
/// В режиме мастера форма разбита на два шага.
#[component]
pub fn StockMovementWorkflow(
    modal_key: ModalKey,
    kind: StockMovementKind,
    props: WorkflowProps,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let wizard = props.mode == WorkflowMode::Wizard;
    let vm = StockMovementViewModel::new(kind, wizard);
    let refs = ReferenceData::load();
    let on_close = props.on_close;

    let on_saved = Callback::new(move |_: ()| {
        ctx.notify_data_changed();
        on_close.run(());
    });

    let show_pick = move || !wizard || vm.step.get() == MovementStep::Pick;
    let show_quantities = move || !wizard || vm.step.get() == MovementStep::Quantities;
    let needs_target = vm.form.with_untracked(|f| f.needs_target());

    let quantity_hint = if kind.allows_negative() {
        "Со знаком: плюс увеличивает остаток, минус уменьшает"
    } else {
        "Больше нуля"
    };

    let step_caption = move || match vm.step.get() {
        MovementStep::Pick => "Шаг 1 из 2: позиция и склад",
        MovementStep::Quantities => "Шаг 2 из 2: количество",
    };

    view! {
        <ModalFrame title=modal_key.display_name() show=props.show on_close=on_close modal_class="workflow-modal">
            <div class="details-form stock-movement">
                {wizard.then(|| view! { <div class="wizard__caption">{step_caption}</div> })}

                {move || refs.error.get().map(|e| view! { <div class="error">{e}</div> })}
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <Show when=show_pick>
                    <SmartSelect
                        label="Позиция"
                        mode=SelectionMode::Single
                        options=refs.item_options()
                        selected=Signal::derive(move || vm.form.with(|f| f.item.clone()))
                        on_change=Callback::new(move |sel| vm.form.update(|f| f.item = sel))
                    />
                    <SmartSelect
                        label={if needs_target { "Склад-отправитель" } else { "Склад" }}
                        mode=SelectionMode::Single
                        options=refs.warehouse_options(false)
                        selected=Signal::derive(move || vm.form.with(|f| f.warehouse.clone()))
                        on_change=Callback::new(move |sel| vm.form.update(|f| f.warehouse = sel))
                    />
                    {needs_target.then(|| view! {
                        <SmartSelect
                            label="Склад-получатель"
                            mode=SelectionMode::Single
                            options=refs.warehouse_options(false)
                            selected=Signal::derive(move || vm.form.with(|f| f.target_warehouse.clone()))
                            on_change=Callback::new(move |sel| vm.form.update(|f| f.target_warehouse = sel))
                        />
                    })}
                </Show>

                <Show when=show_quantities>
                    <FormField label="Количество" hint=quantity_hint>
                        <input
                            type="text"
                            class="form__input"
                            inputmode="decimal"
                            prop:value=move || vm.form.with(|f| f.quantity.clone())
                            on:input=move |ev| vm.form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label="Комментарий">
                        <textarea
                            class="form__input"
                            rows="2"
                            prop:value=move || vm.form.with(|f| f.comment.clone())
                            on:input=move |ev| vm.form.update(|f| f.comment = event_target_value(&ev))
                        />
                    </FormField>
                </Show>
            </div>

            <div class="details-actions">
                {move || vm.saving.get().then(|| view! { <Spinner /> })}
                {move || {
                    if wizard && vm.step.get() == MovementStep::Pick {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.go_next()>
                                "Далее"
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            {wizard.then(|| view! {
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.go_back()>
                                    "Назад"
                                </Button>
                            })}
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || vm.saving.get())
                                on_click=move |_| vm.save_command(on_saved)
                            >
                                {kind.display_name()}
                            </Button>
                        }
                        .into_any()
                    }
                }}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Отмена"
                </Button>
            </div>
        </ModalFrame>
    }
}
