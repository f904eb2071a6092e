use crate::layout::tabs::tab_labels::ITEM_TAB;
use crate::shared::action_dispatcher::{ActionDescriptor, ModalKey};
use contracts::domain::a003_stock::aggregate::StockBalance;
use contracts::shared::actions::ActionDescriptorDto;

/// Панель инструментов страницы остатков
pub fn stock_toolbar() -> Vec<ActionDescriptorDto> {
    [
        ActionDescriptor::modal("Поступление", ModalKey::AddStock),
        ActionDescriptor::modal("Выдача", ModalKey::IssueStock),
        ActionDescriptor::wizard("Перемещение", ModalKey::TransferStock),
        ActionDescriptor::modal("Корректировка", ModalKey::AdjustStock),
        ActionDescriptor::modal("Инвентаризация", ModalKey::StockCount),
        ActionDescriptor::navigate("Номенклатура", ITEM_TAB),
    ]
    .iter()
    .map(ActionDescriptor::to_dto)
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceTotals {
    /// Строк с ненулевым остатком
    pub positions: usize,
    pub negative: usize,
}

pub fn balance_totals(balances: &[StockBalance]) -> BalanceTotals {
    balances
        .iter()
        .fold(BalanceTotals::default(), |mut acc, balance| {
            if balance.quantity != 0.0 {
                acc.positions += 1;
            }
            if balance.quantity < 0.0 {
                acc.negative += 1;
            }
            acc
        })
}

/// Сортировка для таблицы: склад, затем код позиции
pub fn sort_balances(balances: &mut [StockBalance]) {
    balances.sort_by(|a, b| {
        a.warehouse_description
            .cmp(&b.warehouse_description)
            .then_with(|| a.item_code.cmp(&b.item_code))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::action_dispatcher::{Action, ActionKind};
    use chrono::Utc;
    use contracts::domain::a001_item::aggregate::ItemId;
    use contracts::domain::a002_warehouse::aggregate::WarehouseId;

    fn balance(warehouse: &str, code: &str, quantity: f64) -> StockBalance {
        StockBalance {
            item_id: ItemId::new_v4(),
            item_code: code.to_string(),
            item_description: code.to_string(),
            unit: "шт".to_string(),
            warehouse_id: WarehouseId::new_v4(),
            warehouse_description: warehouse.to_string(),
            quantity,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_toolbar_descriptors_are_valid() {
        let toolbar = stock_toolbar();
        assert_eq!(toolbar.len(), 6);
        let parsed: Vec<ActionDescriptor> = toolbar
            .iter()
            .map(|dto| ActionDescriptor::try_from(dto).unwrap())
            .collect();
        assert_eq!(parsed[2].action.kind(), ActionKind::Wizard);
        assert_eq!(
            parsed[5].action,
            Action::Navigate {
                target: ITEM_TAB.to_string()
            }
        );
    }

    #[test]
    fn test_balance_totals() {
        let balances = vec![
            balance("Основной", "A", 3.0),
            balance("Основной", "B", 0.0),
            balance("Резерв", "C", -2.0),
        ];
        assert_eq!(
            balance_totals(&balances),
            BalanceTotals {
                positions: 2,
                negative: 1
            }
        );
    }

    #[test]
    fn test_sort_balances() {
        let mut balances = vec![
            balance("Резерв", "A", 1.0),
            balance("Основной", "B", 1.0),
            balance("Основной", "A", 1.0),
        ];
        sort_balances(&mut balances);
        let keys: Vec<(String, String)> = balances
            .into_iter()
            .map(|b| (b.warehouse_description, b.item_code))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Основной".to_string(), "A".to_string()),
                ("Основной".to_string(), "B".to_string()),
                ("Резерв".to_string(), "A".to_string()),
            ]
        );
    }
}
