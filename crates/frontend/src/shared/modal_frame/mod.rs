use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Modal frame for workflows (overlay + surface with a compact header).
///
/// The frame never decides on its own whether the workflow is open:
/// `show` comes from the dispatcher, closing always goes through `on_close`.
#[component]
pub fn ModalFrame(
    /// Заголовок окна
    #[prop(into)]
    title: String,
    #[prop(into)] show: Signal<bool>,
    /// Called when the modal should close (overlay, Escape, close button).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && show.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the form and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    let modal_class = move || match modal_class.get() {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <Show when=move || show.get()>
            <div
                class="modal-overlay"
                on:mousedown=handle_overlay_mouse_down
                on:click=handle_overlay_click
            >
                <div class=modal_class.clone() on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.clone()}</h2>
                        <button
                            class="button button--icon modal__close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
