use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::STOCK_TAB;
use crate::layout::Shell;
use crate::shared::action_dispatcher::ActionDispatcher;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // One dispatcher for the whole app: tab navigation goes through the tab store.
    let dispatcher = ActionDispatcher::new(ctx);
    provide_context(dispatcher);

    ctx.init_router_integration();
    if ctx.opened.with_untracked(|tabs| tabs.is_empty()) {
        ctx.open_tab(STOCK_TAB, tab_label_for_key(STOCK_TAB));
    }

    view! {
        <Shell />
    }
}
