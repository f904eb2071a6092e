use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a002_warehouse::aggregate::WarehouseId;
use contracts::domain::a003_stock::aggregate::{StockBalance, StockCountDto, StockMovementDto};
use contracts::domain::common::AggregateId;

/// Остатки; пустой фильтр = все склады
pub async fn fetch_balances(warehouses: &[WarehouseId]) -> Result<Vec<StockBalance>, String> {
    get_json(&balances_path(warehouses), "load stock balances").await
}

pub async fn post_movement(dto: &StockMovementDto) -> Result<(), String> {
    post_json("/api/a003-stock/movement", dto, "post stock movement").await
}

pub async fn post_count(dto: &StockCountDto) -> Result<(), String> {
    post_json("/api/a003-stock/count", dto, "post stock count").await
}

fn balances_path(warehouses: &[WarehouseId]) -> String {
    if warehouses.is_empty() {
        return "/api/a003-stock".to_string();
    }
    let ids = warehouses
        .iter()
        .map(|id| id.as_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("/api/a003-stock?warehouse={}", urlencoding::encode(&ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balances_path_without_filter() {
        assert_eq!(balances_path(&[]), "/api/a003-stock");
    }

    #[test]
    fn test_balances_path_joins_warehouses() {
        let a = WarehouseId::from_string("6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b").unwrap();
        let b = WarehouseId::from_string("0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f").unwrap();
        assert_eq!(
            balances_path(&[a, b]),
            "/api/a003-stock?warehouse=6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b%2C0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f"
        );
    }
}
