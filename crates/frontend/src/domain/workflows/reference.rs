//! Справочники для выпадающих списков сценариев (позиции, склады).

use crate::domain::a001_item::api::fetch_items;
use crate::domain::a002_warehouse::api::fetch_warehouses;
use crate::shared::smart_select::SelectOption;
use contracts::domain::a001_item::aggregate::{Item, ItemId};
use contracts::domain::a002_warehouse::aggregate::{Warehouse, WarehouseId};
use leptos::prelude::*;

pub fn item_options(items: &[Item]) -> Vec<SelectOption<ItemId>> {
    items
        .iter()
        .map(|item| SelectOption::new(item.id, format!("{} · {}", item.code, item.description)))
        .collect()
}

/// Неактивные склады в новые операции не попадают
pub fn warehouse_options(
    warehouses: &[Warehouse],
    include_inactive: bool,
) -> Vec<SelectOption<WarehouseId>> {
    warehouses
        .iter()
        .filter(|w| include_inactive || w.is_active)
        .map(|w| SelectOption::new(w.id, w.description.clone()))
        .collect()
}

#[derive(Clone, Copy)]
pub struct ReferenceData {
    pub items: RwSignal<Vec<Item>>,
    pub warehouses: RwSignal<Vec<Warehouse>>,
    pub error: RwSignal<Option<String>>,
}

impl ReferenceData {
    /// Создать и сразу запустить загрузку
    pub fn load() -> Self {
        let data = Self {
            items: RwSignal::new(Vec::new()),
            warehouses: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        };
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_items().await {
                Ok(items) => data.items.set(items),
                Err(e) => data.error.set(Some(e)),
            }
            match fetch_warehouses().await {
                Ok(warehouses) => data.warehouses.set(warehouses),
                Err(e) => data.error.set(Some(e)),
            }
        });
        data
    }

    pub fn item_options(&self) -> Signal<Vec<SelectOption<ItemId>>> {
        let items = self.items;
        Signal::derive(move || items.with(|list| item_options(list)))
    }

    pub fn warehouse_options(&self, include_inactive: bool) -> Signal<Vec<SelectOption<WarehouseId>>> {
        let warehouses = self.warehouses;
        Signal::derive(move || warehouses.with(|list| warehouse_options(list, include_inactive)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn warehouse(description: &str, is_active: bool) -> Warehouse {
        Warehouse {
            id: WarehouseId::new_v4(),
            code: description.to_lowercase(),
            description: description.to_string(),
            address: None,
            is_active,
        }
    }

    #[test]
    fn test_item_option_label() {
        let now = Utc::now();
        let item = Item {
            id: ItemId::new_v4(),
            code: "A-100".to_string(),
            description: "Болт М8".to_string(),
            unit: "шт".to_string(),
            comment: None,
            created_at: now,
            updated_at: now,
        };
        let options = item_options(std::slice::from_ref(&item));
        assert_eq!(options[0].value, item.id);
        assert_eq!(options[0].label, "A-100 · Болт М8");
    }

    #[test]
    fn test_inactive_warehouses_are_filtered() {
        let list = vec![
            warehouse("Основной", true),
            warehouse("Архив", false),
            warehouse("Резерв", true),
        ];
        let labels = |opts: Vec<SelectOption<WarehouseId>>| {
            opts.into_iter().map(|o| o.label).collect::<Vec<_>>()
        };
        assert_eq!(labels(warehouse_options(&list, false)), vec!["Основной", "Резерв"]);
        assert_eq!(
            labels(warehouse_options(&list, true)),
            vec!["Основной", "Архив", "Резерв"]
        );
    }
}
