use crate::uuid_aggregate_id;
use serde::{Deserialize, Serialize};

uuid_aggregate_id!(
    /// Уникальный идентификатор склада
    WarehouseId
);

/// Склад (место хранения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub code: String,
    pub description: String,
    pub address: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub address: Option<String>,
    pub is_active: bool,
}

impl Default for WarehouseDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: String::new(),
            address: None,
            is_active: true,
        }
    }
}

impl From<&Warehouse> for WarehouseDto {
    fn from(warehouse: &Warehouse) -> Self {
        use crate::domain::common::AggregateId;
        Self {
            id: Some(warehouse.id.as_string()),
            code: warehouse.code.clone(),
            description: warehouse.description.clone(),
            address: warehouse.address.clone(),
            is_active: warehouse.is_active,
        }
    }
}
