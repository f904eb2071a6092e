use crate::shared::api_utils::{delete, get_json, post_json};
use contracts::domain::a002_warehouse::aggregate::{Warehouse, WarehouseDto};

pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    get_json("/api/a002-warehouse", "load warehouses").await
}

pub async fn fetch_by_id(id: &str) -> Result<Warehouse, String> {
    get_json(&format!("/api/a002-warehouse/{}", id), "load warehouse").await
}

/// Create (dto.id = None) or update
pub async fn save_warehouse(dto: &WarehouseDto) -> Result<(), String> {
    post_json("/api/a002-warehouse", dto, "save warehouse").await
}

pub async fn delete_warehouse(id: &str) -> Result<(), String> {
    delete(&format!("/api/a002-warehouse/{}", id), "delete warehouse").await
}
