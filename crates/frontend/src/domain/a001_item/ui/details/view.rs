use super::view_model::{ItemDetailsViewModel, ItemForm};
use crate::domain::workflows::reference::ReferenceData;
use crate::domain::workflows::FormField;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::action_dispatcher::{ModalKey, WorkflowProps};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::smart_select::{SelectionMode, SmartSelect};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Создание (`CreateItem`) и редактирование (`EditItem`) позиции
#[component]
pub fn ItemWorkflow(modal_key: ModalKey, props: WorkflowProps) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_edit = modal_key == ModalKey::EditItem;
    let vm = ItemDetailsViewModel::new();
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

    let text_field = move |label: &'static str,
                           get: fn(&ItemForm) -> String,
                           set: fn(&mut ItemForm, String)| {
        view! {
            <FormField label=label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                />
            </FormField>
        }
    };

    view! {
        <ModalFrame title=modal_key.display_name() show=props.show on_close=on_close modal_class="workflow-modal">
            <div class="details-form item-details">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                {is_edit.then(|| view! {
                    <SmartSelect
                        label="Позиция"
                        mode=SelectionMode::Single
                        placeholder="Выберите позицию"
                        options=refs.item_options()
                        selected=vm.picked
                        on_change=Callback::new(move |sel| vm.pick(sel))
                    />
                })}

                <Show when=show_fields>
                    {text_field("Код", |f| f.code.clone(), |f, v| f.code = v)}
                    {text_field("Наименование", |f| f.description.clone(), |f, v| f.description = v)}
                    {text_field("Единица измерения", |f| f.unit.clone(), |f, v| f.unit = v)}
                    <FormField label="Комментарий">
                        <textarea
                            class="form__input"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.comment.clone())
                            on:input=move |ev| vm.form.update(|f| f.comment = event_target_value(&ev))
                        />
                    </FormField>
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
