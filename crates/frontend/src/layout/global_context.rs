use crate::layout::tabs::tab_label_for_key;
use crate::shared::action_dispatcher::Navigator;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    /// Увеличивается после каждой успешной записи; списки перечитывают данные
    pub data_version: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            data_version: RwSignal::new(0),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = parse_active_param(&search) {
            self.open_tab(&active_key, tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let new_url = active_query(&current_search, &active_key);

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn notify_data_changed(&self) {
        self.data_version.update(|v| *v = v.wrapping_add(1));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Переход по маршруту = открыть (или активировать) таб с этим ключом
impl Navigator for AppGlobalContext {
    fn navigate_to(&self, route: &str) {
        self.open_tab(route, tab_label_for_key(route));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

fn parse_active_param(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Строка запроса с новым `active`; остальные параметры (`api`, `log`) сохраняются
fn active_query(current_search: &str, active_key: &str) -> String {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(current_search.trim_start_matches('?')).unwrap_or_default();
    params.insert("active".to_string(), active_key.to_string());
    let query_string = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_active_param() {
        assert_eq!(
            parse_active_param("?active=a001_item"),
            Some("a001_item".to_string())
        );
        assert_eq!(
            parse_active_param("active=a003_stock&log=debug"),
            Some("a003_stock".to_string())
        );
        assert_eq!(parse_active_param(""), None);
        assert_eq!(parse_active_param("?active="), None);
    }

    #[test]
    fn test_active_query_round_trip() {
        let query = active_query("", "a003_stock");
        assert_eq!(query, "?active=a003_stock");
        assert_eq!(parse_active_param(&query), Some("a003_stock".to_string()));
    }

    #[test]
    fn test_active_query_keeps_other_params() {
        let query = active_query("?active=a003_stock&log=warn", "a001_item");
        assert_eq!(query, "?active=a001_item&log=warn");
    }
}
