use super::view_model::WarehouseDetailsViewModel;
use crate::domain::workflows::reference::ReferenceData;
use crate::domain::workflows::FormField;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ModalKey, WorkflowProps};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::smart_select::{SelectionMode, SmartSelect};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn WarehouseWorkflow(modal_key: ModalKey, props: WorkflowProps) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_edit = modal_key == ModalKey::EditWarehouse;
    let vm = WarehouseDetailsViewModel::new();
    if is_edit {
        vm.preselect(props.action.as_deref());
    }
    let refs = ReferenceData::load();
    let on_close = props.on_close;
    let on_saved = Callback::new(move |_: ()| {
        ctx.notify_data_changed();
        on_close.run(());
    });

    let show_fields = move || !is_edit || vm.picked.with(|p| !p.is_empty());

    view! {
        <ModalFrame title=modal_key.display_name() show=props.show on_close=on_close modal_class="workflow-modal">
            <div class="details-form warehouse-details">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                {is_edit.then(|| view! {
                    <SmartSelect
                        label="Склад"
                        mode=SelectionMode::Single
                        placeholder="Выберите склад"
                        options=refs.warehouse_options(true)
                        selected=vm.picked
                        on_change=Callback::new(move |sel| vm.pick(sel))
                    />
                })}

                <Show when=show_fields>
                    <FormField label="Код">
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label="Наименование">
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || vm.form.with(|f| f.description.clone())
                            on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label="Адрес">
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || vm.form.with(|f| f.address.clone())
                            on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                        />
                    </FormField>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.is_active)
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        "Активен"
                    </label>
                </Show>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get() || !show_fields())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {if is_edit { "Сохранить" } else { "Создать" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Отмена"
                </Button>
            </div>
        </ModalFrame>
    }
}
