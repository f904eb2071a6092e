use crate::domain::a001_item::aggregate::ItemId;
use crate::domain::a002_warehouse::aggregate::WarehouseId;
use serde::{Deserialize, Serialize};

/// Вид складского движения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockMovementKind {
    /// Поступление на склад
    Add,
    /// Списание/выдача со склада
    Issue,
    /// Перемещение между складами
    Transfer,
    /// Корректировка остатка (знаковое количество)
    Adjust,
}

impl StockMovementKind {
    pub fn code(&self) -> &'static str {
        match self {
            StockMovementKind::Add => "add",
            StockMovementKind::Issue => "issue",
            StockMovementKind::Transfer => "transfer",
            StockMovementKind::Adjust => "adjust",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockMovementKind::Add => "Поступление",
            StockMovementKind::Issue => "Выдача",
            StockMovementKind::Transfer => "Перемещение",
            StockMovementKind::Adjust => "Корректировка",
        }
    }

    /// Допускается ли отрицательное количество
    pub fn allows_negative(&self) -> bool {
        matches!(self, StockMovementKind::Adjust)
    }
}

/// Остаток позиции на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockBalance {
    pub item_id: ItemId,
    pub item_code: String,
    pub item_description: String,
    pub unit: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_description: String,
    pub quantity: f64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Запрос на проведение движения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovementDto {
    pub kind: StockMovementKind,
    pub item_id: ItemId,
    pub warehouse_id: WarehouseId,
    /// Склад-получатель, только для `Transfer`
    pub target_warehouse_id: Option<WarehouseId>,
    pub quantity: f64,
    pub comment: Option<String>,
    pub performed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCountLine {
    pub item_id: ItemId,
    pub counted_quantity: f64,
}

/// Результат инвентаризации склада
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCountDto {
    pub warehouse_id: WarehouseId,
    pub lines: Vec<StockCountLine>,
    pub comment: Option<String>,
    pub counted_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    #[test]
    fn test_movement_serializes_camel_case() {
        let dto = StockMovementDto {
            kind: StockMovementKind::Transfer,
            item_id: ItemId::from_string("6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b").unwrap(),
            warehouse_id: WarehouseId::from_string("0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f").unwrap(),
            target_warehouse_id: None,
            quantity: 2.0,
            comment: None,
            performed_at: chrono::DateTime::parse_from_rfc3339("2026-03-01T09:30:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["kind"], "transfer");
        assert_eq!(json["itemId"], "6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b");
        assert!(json["targetWarehouseId"].is_null());
        assert_eq!(json["performedAt"], "2026-03-01T09:30:00Z");
    }

    #[test]
    fn test_only_adjust_allows_negative() {
        assert!(StockMovementKind::Adjust.allows_negative());
        assert!(!StockMovementKind::Issue.allows_negative());
        assert_eq!(StockMovementKind::Issue.code(), "issue");
    }
}
