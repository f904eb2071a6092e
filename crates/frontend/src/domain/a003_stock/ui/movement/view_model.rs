use crate::domain::a003_stock::api::post_movement;
use crate::domain::workflows::form_error::{optional_text, parse_quantity, FormError};
use crate::shared::smart_select::Selection;
use chrono::{DateTime, Utc};
use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a002_warehouse::aggregate::WarehouseId;
use contracts::domain::a003_stock::aggregate::{StockMovementDto, StockMovementKind};
use leptos::prelude::*;

/// Шаг мастера; в обычном режиме форма сразу на шаге `Quantities`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementStep {
    /// Выбор позиции и складов
    Pick,
    /// Количество и комментарий
    Quantities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockMovementForm {
    pub kind: StockMovementKind,
    pub item: Selection<ItemId>,
    pub warehouse: Selection<WarehouseId>,
    pub target_warehouse: Selection<WarehouseId>,
    pub quantity: String,
    pub comment: String,
}

/// Результат первого шага
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTarget {
    pub item_id: ItemId,
    pub warehouse_id: WarehouseId,
    pub target_warehouse_id: Option<WarehouseId>,
}

impl StockMovementForm {
    pub fn new(kind: StockMovementKind) -> Self {
        Self {
            kind,
            item: Selection::Single(None),
            warehouse: Selection::Single(None),
            target_warehouse: Selection::Single(None),
            quantity: String::new(),
            comment: String::new(),
        }
    }

    pub fn needs_target(&self) -> bool {
        self.kind == StockMovementKind::Transfer
    }

    pub fn validate_pick(&self) -> Result<MovementTarget, FormError> {
        let item_id = *self.item.single().ok_or(FormError::MissingItem)?;
        let warehouse_id = *self.warehouse.single().ok_or(FormError::MissingWarehouse)?;
        let target_warehouse_id = if self.needs_target() {
            let target = *self
                .target_warehouse
                .single()
                .ok_or(FormError::MissingTargetWarehouse)?;
            if target == warehouse_id {
                return Err(FormError::SameWarehouse);
            }
            Some(target)
        } else {
            None
        };
        Ok(MovementTarget {
            item_id,
            warehouse_id,
            target_warehouse_id,
        })
    }

    pub fn validate_quantity(&self) -> Result<f64, FormError> {
        let quantity = parse_quantity(&self.quantity)?;
        if self.kind.allows_negative() {
            if quantity == 0.0 {
                return Err(FormError::ZeroAdjustment);
            }
        } else if quantity <= 0.0 {
            return Err(FormError::NonPositiveQuantity);
        }
        Ok(quantity)
    }

    pub fn to_dto(&self, performed_at: DateTime<Utc>) -> Result<StockMovementDto, FormError> {
        let target = self.validate_pick()?;
        let quantity = self.validate_quantity()?;
        Ok(StockMovementDto {
            kind: self.kind,
            item_id: target.item_id,
            warehouse_id: target.warehouse_id,
            target_warehouse_id: target.target_warehouse_id,
            quantity,
            comment: optional_text(&self.comment),
            performed_at,
        })
    }
}

/// Переход мастера вперёд: со шага выбора только при корректном выборе
pub fn next_step(step: MovementStep, form: &StockMovementForm) -> Result<MovementStep, FormError> {
    match step {
        MovementStep::Pick => form.validate_pick().map(|_| MovementStep::Quantities),
        MovementStep::Quantities => Ok(MovementStep::Quantities),
    }
}

/// ViewModel формы движения
#[derive(Clone, Copy)]
pub struct StockMovementViewModel {
    pub form: RwSignal<StockMovementForm>,
    pub step: RwSignal<MovementStep>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StockMovementViewModel {
    pub fn new(kind: StockMovementKind, wizard: bool) -> Self {
        let step = if wizard {
            MovementStep::Pick
        } else {
            MovementStep::Quantities
        };
        Self {
            form: RwSignal::new(StockMovementForm::new(kind)),
            step: RwSignal::new(step),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn go_next(&self) {
        let current = self.step.get_untracked();
        match self.form.with_untracked(|f| next_step(current, f)) {
            Ok(next) => {
                self.error.set(None);
                self.step.set(next);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn go_back(&self) {
        self.error.set(None);
        self.step.set(MovementStep::Pick);
    }

    /// Validate, post, then notify the caller
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(|f| f.to_dto(Utc::now())) {
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
            let result = post_movement(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!(
                        "stock movement `{}` posted: {} units",
                        dto.kind.code(),
                        dto.quantity
                    );
                    on_saved.run(());
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn picked(kind: StockMovementKind) -> (StockMovementForm, ItemId, WarehouseId, WarehouseId) {
        let item = ItemId::new_v4();
        let source = WarehouseId::new_v4();
        let target = WarehouseId::new_v4();
        let mut form = StockMovementForm::new(kind);
        form.item = Selection::Single(Some(item));
        form.warehouse = Selection::Single(Some(source));
        if kind == StockMovementKind::Transfer {
            form.target_warehouse = Selection::Single(Some(target));
        }
        (form, item, source, target)
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_issue_to_dto() {
        let (mut form, item, source, _) = picked(StockMovementKind::Issue);
        form.quantity = "2,5".to_string();
        form.comment = "  на участок  ".to_string();

        let dto = form.to_dto(at()).unwrap();
        assert_eq!(dto.kind, StockMovementKind::Issue);
        assert_eq!(dto.item_id, item);
        assert_eq!(dto.warehouse_id, source);
        assert_eq!(dto.target_warehouse_id, None);
        assert_eq!(dto.quantity, 2.5);
        assert_eq!(dto.comment.as_deref(), Some("на участок"));
        assert_eq!(dto.performed_at, at());
    }

    #[test]
    fn test_missing_selection() {
        let mut form = StockMovementForm::new(StockMovementKind::Add);
        form.quantity = "1".to_string();
        assert_eq!(form.to_dto(at()), Err(FormError::MissingItem));

        form.item = Selection::Single(Some(ItemId::new_v4()));
        assert_eq!(form.to_dto(at()), Err(FormError::MissingWarehouse));
    }

    #[test]
    fn test_transfer_requires_distinct_target() {
        let (mut form, _, source, target) = picked(StockMovementKind::Transfer);
        form.quantity = "1".to_string();
        assert_eq!(form.to_dto(at()).unwrap().target_warehouse_id, Some(target));

        form.target_warehouse = Selection::Single(None);
        assert_eq!(form.to_dto(at()), Err(FormError::MissingTargetWarehouse));

        form.target_warehouse = Selection::Single(Some(source));
        assert_eq!(form.to_dto(at()), Err(FormError::SameWarehouse));
    }

    #[test]
    fn test_quantity_rules_per_kind() {
        let (mut add, _, _, _) = picked(StockMovementKind::Add);
        add.quantity = "0".to_string();
        assert_eq!(add.to_dto(at()), Err(FormError::NonPositiveQuantity));
        add.quantity = "-1".to_string();
        assert_eq!(add.to_dto(at()), Err(FormError::NonPositiveQuantity));

        let (mut adjust, _, _, _) = picked(StockMovementKind::Adjust);
        adjust.quantity = "0".to_string();
        assert_eq!(adjust.to_dto(at()), Err(FormError::ZeroAdjustment));
        adjust.quantity = "-4".to_string();
        assert_eq!(adjust.to_dto(at()).unwrap().quantity, -4.0);
    }

    #[test]
    fn test_wizard_step_gating() {
        let empty = StockMovementForm::new(StockMovementKind::Transfer);
        assert_eq!(
            next_step(MovementStep::Pick, &empty),
            Err(FormError::MissingItem)
        );

        // Количество на первом шаге не проверяется
        let (form, _, _, _) = picked(StockMovementKind::Transfer);
        assert_eq!(
            next_step(MovementStep::Pick, &form),
            Ok(MovementStep::Quantities)
        );
        assert_eq!(
            next_step(MovementStep::Quantities, &form),
            Ok(MovementStep::Quantities)
        );
    }
}
