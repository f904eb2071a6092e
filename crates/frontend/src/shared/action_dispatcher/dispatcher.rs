use super::navigator::Navigator;
use super::state::{ActionDescriptor, ActiveModal, DispatcherState, ModalKey};
use contracts::shared::actions::ActionDescriptorDto;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Реактивная обёртка над `DispatcherState`.
///
/// Один экземпляр на приложение (через context), поэтому открыт не более
/// одного сценария. Сам диспетчер не выполняет сетевых вызовов и ничего
/// не знает о содержимом сценариев.
#[derive(Clone, Copy)]
pub struct ActionDispatcher {
    state: RwSignal<DispatcherState>,
    navigate: Callback<String>,
}

impl ActionDispatcher {
    pub fn new<N>(navigator: N) -> Self
    where
        N: Navigator + Send + Sync + 'static,
    {
        Self {
            state: RwSignal::new(DispatcherState::default()),
            navigate: Callback::new(move |route: String| navigator.navigate_to(&route)),
        }
    }

    pub fn active(&self) -> Option<ActiveModal> {
        self.state.with(|s| s.active.clone())
    }

    pub fn active_key(&self) -> Option<ModalKey> {
        self.state.with(|s| s.active_modal_key())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| !s.is_idle())
    }

    pub fn dispatch(&self, descriptor: &ActionDescriptor) {
        log::debug!(
            "dispatch `{}` ({})",
            descriptor.label,
            descriptor.action.kind().code()
        );
        let mut next = self.state.get_untracked();
        next.dispatch(&descriptor.action, &self.navigate);
        self.commit(next);
    }

    /// Dispatch a descriptor that has not been validated yet.
    ///
    /// Configuration errors are reported as warnings; the dispatcher keeps
    /// its current state and stays usable.
    pub fn dispatch_raw(&self, dto: &ActionDescriptorDto) {
        let mut next = self.state.get_untracked();
        match next.dispatch_descriptor(dto, &self.navigate) {
            Ok(()) => self.commit(next),
            Err(e) => log::warn!("action `{}` ignored: {}", dto.label, e),
        }
    }

    pub fn close(&self) {
        if self.state.with_untracked(|s| s.is_idle()) {
            return;
        }
        self.state.update(|s| s.close());
    }

    /// Close on the next tick.
    ///
    /// The workflow usually requests closing from its own click handler;
    /// removing it synchronously would drop the handler mid-dispatch.
    /// Only the opening that was active at request time is closed, a
    /// re-dispatch of the same workflow in between is left alone.
    pub fn close_deferred(&self) {
        let this = *self;
        let Some(generation) = self.state.with_untracked(|s| s.open_generation()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            let current = this.state.with_untracked(|s| s.open_generation() == Some(generation));
            if current {
                this.state.update(|s| {
                    s.close_if_current(generation);
                });
            }
        });
    }

    fn commit(&self, next: DispatcherState) {
        if self.state.with_untracked(|s| *s != next) {
            self.state.set(next);
        }
    }
}
