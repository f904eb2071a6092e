pub mod global_context;
pub mod tabs;
pub mod top_header;

use crate::domain::workflows::render_workflow;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::action_dispatcher::{ActionDispatcher, ActionHost};
use leptos::prelude::*;
use tabs::{TabPage, TabStrip};
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (navigation)                  |
/// +------------------------------------------+
/// |  TabStrip                                |
/// |  TabPage (active tab content)            |
/// +------------------------------------------+
/// ```
///
/// The single `ActionHost` lives here, so a workflow opened from any tab
/// is mounted above the whole layout.
#[component]
pub fn Shell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let dispatcher = leptos::context::use_context::<ActionDispatcher>()
        .expect("ActionDispatcher context not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">
                <TabStrip />
                <div data-zone="center" class="app-tabs">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    />
                </div>
            </div>
            <ActionHost dispatcher=dispatcher render=render_workflow />
        </div>
    }
}
