//! SmartSelect — combobox с поиском для одиночного и множественного выбора.
//!
//! - `state.rs`: чистые функции (toggle, фильтрация, подпись, прокрутка)
//! - `component.rs`: Leptos-компонент

pub mod component;
pub mod state;

pub use component::SmartSelect;
pub use state::{SelectOption, Selection, SelectionMode};
