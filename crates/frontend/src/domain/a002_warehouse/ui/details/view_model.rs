use crate::domain::a002_warehouse::api::{fetch_by_id, save_warehouse};
use crate::domain::workflows::form_error::{optional_text, required_text, FormError};
use crate::shared::smart_select::Selection;
use contracts::domain::a002_warehouse::aggregate::{Warehouse, WarehouseDto, WarehouseId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseForm {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub address: String,
    pub is_active: bool,
}

impl Default for WarehouseForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: String::new(),
            address: String::new(),
            is_active: true,
        }
    }
}

impl WarehouseForm {
    pub fn from_warehouse(warehouse: &Warehouse) -> Self {
        Self {
            id: Some(warehouse.id.as_string()),
            code: warehouse.code.clone(),
            description: warehouse.description.clone(),
            address: warehouse.address.clone().unwrap_or_default(),
            is_active: warehouse.is_active,
        }
    }

    pub fn to_dto(&self) -> Result<WarehouseDto, FormError> {
        Ok(WarehouseDto {
            id: self.id.clone(),
            code: required_text(&self.code, "Код")?,
            description: required_text(&self.description, "Наименование")?,
            address: optional_text(&self.address),
            is_active: self.is_active,
        })
    }
}

#[derive(Clone, Copy)]
pub struct WarehouseDetailsViewModel {
    pub form: RwSignal<WarehouseForm>,
    pub picked: RwSignal<Selection<WarehouseId>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl WarehouseDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(WarehouseForm::default()),
            picked: RwSignal::new(Selection::Single(None)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn preselect(&self, action: Option<&str>) {
        if let Some(id) = action.and_then(|a| WarehouseId::from_string(a).ok()) {
            self.pick(Selection::Single(Some(id)));
        }
    }

    pub fn pick(&self, selection: Selection<WarehouseId>) {
        let id = selection.single().copied();
        self.picked.set(selection);
        let Some(id) = id else {
            self.form.set(WarehouseForm::default());
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_by_id(&id.as_string()).await;
            let picked = this.picked.get_untracked();
            match result {
                Ok(warehouse) => match form_for_loaded(&picked, &warehouse) {
                    Some(form) => this.form.set(form),
                    None => log::debug!("warehouse `{}` is no longer picked, response dropped", id.as_string()),
                },
                Err(e) if picked.single() == Some(&id) => {
                    this.error.set(Some(format!("Ошибка загрузки: {}", e)))
                }
                Err(_) => {}
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(WarehouseForm::to_dto) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = save_warehouse(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("warehouse `{}` saved", dto.code);
                    on_saved.run(());
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

/// Форма для загруженной записи, если она всё ещё выбрана в пикере
pub fn form_for_loaded(picked: &Selection<WarehouseId>, warehouse: &Warehouse) -> Option<WarehouseForm> {
    (picked.single() == Some(&warehouse.id)).then(|| WarehouseForm::from_warehouse(warehouse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_warehouse_is_active() {
        let dto = WarehouseForm {
            code: "MAIN".to_string(),
            description: "Основной".to_string(),
            ..WarehouseForm::default()
        }
        .to_dto()
        .unwrap();
        assert!(dto.is_active);
        assert_eq!(dto.address, None);
        assert_eq!(dto.id, None);
    }

    #[test]
    fn test_required_fields() {
        let form = WarehouseForm {
            description: "Основной".to_string(),
            ..WarehouseForm::default()
        };
        assert_eq!(form.to_dto(), Err(FormError::Required("Код")));
    }

    #[test]
    fn test_round_trip_from_warehouse() {
        let warehouse = Warehouse {
            id: WarehouseId::new_v4(),
            code: "RES".to_string(),
            description: "Резерв".to_string(),
            address: Some("ул. Складская, 1".to_string()),
            is_active: false,
        };
        let dto = WarehouseForm::from_warehouse(&warehouse).to_dto().unwrap();
        assert_eq!(dto, WarehouseDto::from(&warehouse));
    }

    #[test]
    fn test_late_response_for_previous_pick_is_ignored() {
        let warehouse = |code: &str| Warehouse {
            id: WarehouseId::new_v4(),
            code: code.to_string(),
            description: "Склад".to_string(),
            address: None,
            is_active: true,
        };
        let first = warehouse("MAIN");
        let second = warehouse("RES");
        let picked = Selection::Single(Some(second.id));

        assert_eq!(form_for_loaded(&picked, &first), None);
        assert_eq!(
            form_for_loaded(&picked, &second).map(|f| f.code),
            Some("RES".to_string())
        );
    }
}
