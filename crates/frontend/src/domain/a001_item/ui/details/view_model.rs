use crate::domain::a001_item::api::{fetch_by_id, save_item};
use crate::domain::workflows::form_error::{optional_text, required_text, FormError};
use crate::shared::smart_select::Selection;
use contracts::domain::a001_item::aggregate::{Item, ItemDto, ItemId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const DEFAULT_UNIT: &str = "шт";

/// Поля формы позиции в том виде, в каком их редактирует пользователь
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub comment: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            comment: String::new(),
        }
    }
}

impl ItemForm {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: Some(item.id.as_string()),
            code: item.code.clone(),
            description: item.description.clone(),
            unit: item.unit.clone(),
            comment: item.comment.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn to_dto(&self) -> Result<ItemDto, FormError> {
        Ok(ItemDto {
            id: self.id.clone(),
            code: required_text(&self.code, "Код")?,
            description: required_text(&self.description, "Наименование")?,
            unit: required_text(&self.unit, "Единица измерения")?,
            comment: optional_text(&self.comment),
        })
    }
}

/// ViewModel for the item form (create and edit)
#[derive(Clone, Copy)]
pub struct ItemDetailsViewModel {
    pub form: RwSignal<ItemForm>,
    /// Редактируемая позиция (режим редактирования)
    pub picked: RwSignal<Selection<ItemId>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ItemDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ItemForm::default()),
            picked: RwSignal::new(Selection::Single(None)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Предвыбор позиции по параметру действия.
    ///
    /// Строка списка передаёт id; кнопка панели передаёт режим ("edit"),
    /// тогда позиция выбирается в форме.
    pub fn preselect(&self, action: Option<&str>) {
        if let Some(id) = action.and_then(|a| ItemId::from_string(a).ok()) {
            self.pick(Selection::Single(Some(id)));
        }
    }

    pub fn pick(&self, selection: Selection<ItemId>) {
        let id = selection.single().copied();
        self.picked.set(selection);
        let Some(id) = id else {
            self.form.set(ItemForm::default());
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_by_id(&id.as_string()).await;
            let picked = this.picked.get_untracked();
            match result {
                Ok(item) => match form_for_loaded(&picked, &item) {
                    Some(form) => this.form.set(form),
                    None => log::debug!("item `{}` is no longer picked, response dropped", id.as_string()),
                },
                Err(e) if picked.single() == Some(&id) => {
                    this.error.set(Some(format!("Ошибка загрузки: {}", e)))
                }
                Err(_) => {}
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(ItemForm::to_dto) {
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
            let result = save_item(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("item `{}` saved", dto.code);
                    on_saved.run(());
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

/// Форма для загруженной записи, если она всё ещё выбрана в пикере
pub fn form_for_loaded(picked: &Selection<ItemId>, item: &Item) -> Option<ItemForm> {
    (picked.single() == Some(&item.id)).then(|| ItemForm::from_item(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_new_form_defaults() {
        let form = ItemForm::default();
        assert!(!form.is_edit());
        assert_eq!(form.unit, DEFAULT_UNIT);
    }

    #[test]
    fn test_to_dto_trims_and_validates() {
        let form = ItemForm {
            code: " A-100 ".to_string(),
            description: "Болт М8".to_string(),
            comment: "   ".to_string(),
            ..ItemForm::default()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.code, "A-100");
        assert_eq!(dto.unit, "шт");
        assert_eq!(dto.comment, None);

        let missing = ItemForm {
            code: "A-100".to_string(),
            ..ItemForm::default()
        };
        assert_eq!(missing.to_dto(), Err(FormError::Required("Наименование")));

        let no_unit = ItemForm {
            code: "A-100".to_string(),
            description: "Болт".to_string(),
            unit: " ".to_string(),
            ..ItemForm::default()
        };
        assert_eq!(no_unit.to_dto(), Err(FormError::Required("Единица измерения")));
    }

    #[test]
    fn test_from_item_keeps_id() {
        let now = Utc::now();
        let item = Item {
            id: ItemId::new_v4(),
            code: "K-1".to_string(),
            description: "Кабель".to_string(),
            unit: "м".to_string(),
            comment: Some("бухта".to_string()),
            created_at: now,
            updated_at: now,
        };
        let form = ItemForm::from_item(&item);
        assert!(form.is_edit());
        let dto = form.to_dto().unwrap();
        assert_eq!(dto, ItemDto::from(&item));
    }

    #[test]
    fn test_late_response_for_previous_pick_is_ignored() {
        let now = Utc::now();
        let item = |code: &str| Item {
            id: ItemId::new_v4(),
            code: code.to_string(),
            description: "Кабель".to_string(),
            unit: "м".to_string(),
            comment: None,
            created_at: now,
            updated_at: now,
        };
        let first = item("K-1");
        let second = item("K-2");
        let picked = Selection::Single(Some(second.id));

        assert_eq!(form_for_loaded(&picked, &first), None);
        let form = form_for_loaded(&picked, &second).unwrap();
        assert_eq!(form.id, Some(second.id.as_string()));
        assert_eq!(form_for_loaded(&Selection::Single(None), &second), None);
    }
}
