//! Action dispatcher
//!
//! Maps a declarative action descriptor either to a navigation request or to
//! exactly one modal workflow out of the closed `ModalKey` set.
//!
//! - `state.rs`: framework-agnostic state + pure transitions
//! - `navigator.rs`: navigation collaborator contract
//! - `dispatcher.rs`: reactive service (`RwSignal`) shared through context
//! - `component.rs`: `ActionToolbar` and `ActionHost`

pub mod component;
pub mod dispatcher;
pub mod navigator;
pub mod state;

pub use component::{ActionHost, ActionToolbar, WorkflowProps};
pub use dispatcher::ActionDispatcher;
pub use navigator::Navigator;
pub use state::{
    Action, ActionDescriptor, ActionError, ActionKind, ActiveModal, DispatcherState, ModalKey,
    WorkflowMode,
};
