use crate::domain::a003_stock::api::{fetch_balances, post_count};
use crate::domain::workflows::form_error::{optional_text, parse_quantity, FormError};
use crate::shared::smart_select::Selection;
use chrono::{DateTime, Utc};
use contracts::domain::a001_item::aggregate::ItemId;
use contracts::domain::a002_warehouse::aggregate::WarehouseId;
use contracts::domain::a003_stock::aggregate::{StockBalance, StockCountDto, StockCountLine};
use leptos::prelude::*;

/// Строка инвентаризации: учётный остаток + введённый факт
#[derive(Debug, Clone, PartialEq)]
pub struct CountLineDraft {
    pub item_id: ItemId,
    pub item_code: String,
    pub item_description: String,
    pub unit: String,
    pub expected: f64,
    pub counted: String,
}

impl CountLineDraft {
    pub fn from_balance(balance: &StockBalance) -> Self {
        Self {
            item_id: balance.item_id,
            item_code: balance.item_code.clone(),
            item_description: balance.item_description.clone(),
            unit: balance.unit.clone(),
            expected: balance.quantity,
            counted: String::new(),
        }
    }

    /// Факт минус учёт; None, если факт не введён или не разбирается
    pub fn difference(&self) -> Option<f64> {
        if self.counted.trim().is_empty() {
            return None;
        }
        parse_quantity(&self.counted)
            .ok()
            .map(|counted| counted - self.expected)
    }
}

/// Строки для выбранного склада, по коду позиции
pub fn lines_for_warehouse(balances: &[StockBalance], warehouse: WarehouseId) -> Vec<CountLineDraft> {
    let mut lines: Vec<CountLineDraft> = balances
        .iter()
        .filter(|b| b.warehouse_id == warehouse)
        .map(CountLineDraft::from_balance)
        .collect();
    lines.sort_by(|a, b| a.item_code.cmp(&b.item_code));
    lines
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockCountForm {
    pub warehouse: Selection<WarehouseId>,
    pub lines: Vec<CountLineDraft>,
    pub comment: String,
}

impl Default for StockCountForm {
    fn default() -> Self {
        Self {
            warehouse: Selection::Single(None),
            lines: Vec::new(),
            comment: String::new(),
        }
    }
}

impl StockCountForm {
    /// Строки без введённого факта в документ не попадают
    pub fn to_dto(&self, counted_at: DateTime<Utc>) -> Result<StockCountDto, FormError> {
        let warehouse_id = *self.warehouse.single().ok_or(FormError::MissingWarehouse)?;

        let mut lines = Vec::new();
        for line in self.lines.iter().filter(|l| !l.counted.trim().is_empty()) {
            let counted_quantity = parse_quantity(&line.counted)?;
            if counted_quantity < 0.0 {
                return Err(FormError::InvalidQuantity(line.counted.trim().to_string()));
            }
            lines.push(StockCountLine {
                item_id: line.item_id,
                counted_quantity,
            });
        }
        if lines.is_empty() {
            return Err(FormError::EmptyCount);
        }

        Ok(StockCountDto {
            warehouse_id,
            lines,
            comment: optional_text(&self.comment),
            counted_at,
        })
    }
}

#[derive(Clone, Copy)]
pub struct StockCountViewModel {
    pub form: RwSignal<StockCountForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl StockCountViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StockCountForm::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Смена склада сбрасывает введённые строки и загружает учётные остатки
    pub fn select_warehouse(&self, selection: Selection<WarehouseId>) {
        let warehouse = selection.single().copied();
        self.form.update(|f| {
            f.warehouse = selection;
            f.lines.clear();
        });
        let Some(warehouse) = warehouse else {
            return;
        };

        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_balances(&[warehouse]).await;
            this.loading.set(false);
            match result {
                Ok(balances) => {
                    // за время запроса могли выбрать другой склад
                    let still_selected = this
                        .form
                        .with_untracked(|f| f.warehouse.single().copied() == Some(warehouse));
                    if still_selected {
                        this.form
                            .update(|f| f.lines = lines_for_warehouse(&balances, warehouse));
                    }
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn set_counted(&self, index: usize, value: String) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(index) {
                line.counted = value;
            }
        });
    }

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
            let result = post_count(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("stock count posted: {} lines", dto.lines.len());
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

    fn balance(warehouse: WarehouseId, code: &str, quantity: f64) -> StockBalance {
        StockBalance {
            item_id: ItemId::new_v4(),
            item_code: code.to_string(),
            item_description: format!("Позиция {}", code),
            unit: "шт".to_string(),
            warehouse_id: warehouse,
            warehouse_description: "Склад".to_string(),
            quantity,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_lines_for_warehouse_filters_and_sorts() {
        let main = WarehouseId::new_v4();
        let other = WarehouseId::new_v4();
        let balances = vec![
            balance(main, "B-2", 5.0),
            balance(other, "A-0", 1.0),
            balance(main, "A-1", 3.0),
        ];
        let lines = lines_for_warehouse(&balances, main);
        let codes: Vec<&str> = lines.iter().map(|l| l.item_code.as_str()).collect();
        assert_eq!(codes, vec!["A-1", "B-2"]);
        assert!(lines.iter().all(|l| l.counted.is_empty()));
    }

    #[test]
    fn test_difference() {
        let mut line = CountLineDraft::from_balance(&balance(WarehouseId::new_v4(), "A", 10.0));
        assert_eq!(line.difference(), None);
        line.counted = "7,5".to_string();
        assert_eq!(line.difference(), Some(-2.5));
        line.counted = "x".to_string();
        assert_eq!(line.difference(), None);
    }

    #[test]
    fn test_to_dto_skips_untouched_lines() {
        let warehouse = WarehouseId::new_v4();
        let balances = vec![balance(warehouse, "A", 4.0), balance(warehouse, "B", 2.0)];
        let mut form = StockCountForm {
            warehouse: Selection::Single(Some(warehouse)),
            lines: lines_for_warehouse(&balances, warehouse),
            comment: String::new(),
        };
        form.lines[1].counted = "0".to_string();

        let dto = form.to_dto(Utc::now()).unwrap();
        assert_eq!(dto.warehouse_id, warehouse);
        assert_eq!(dto.lines.len(), 1);
        assert_eq!(dto.lines[0].item_id, form.lines[1].item_id);
        assert_eq!(dto.lines[0].counted_quantity, 0.0);
        assert_eq!(dto.comment, None);
    }

    #[test]
    fn test_to_dto_errors() {
        let mut form = StockCountForm::default();
        assert_eq!(form.to_dto(Utc::now()), Err(FormError::MissingWarehouse));

        let warehouse = WarehouseId::new_v4();
        form.warehouse = Selection::Single(Some(warehouse));
        form.lines = lines_for_warehouse(&[balance(warehouse, "A", 1.0)], warehouse);
        assert_eq!(form.to_dto(Utc::now()), Err(FormError::EmptyCount));

        form.lines[0].counted = "-1".to_string();
        assert_eq!(
            form.to_dto(Utc::now()),
            Err(FormError::InvalidQuantity("-1".to_string()))
        );
    }
}
