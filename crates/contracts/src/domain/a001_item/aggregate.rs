use crate::uuid_aggregate_id;
use serde::{Deserialize, Serialize};

uuid_aggregate_id!(
    /// Уникальный идентификатор складской позиции
    ItemId
);

/// Складская позиция (товар/материал)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub code: String,
    pub description: String,
    /// Единица измерения ("шт", "кг", "м")
    pub unit: String,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO создания/редактирования позиции.
///
/// `id = None` означает создание новой записи.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub comment: Option<String>,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        use crate::domain::common::AggregateId;
        Self {
            id: Some(item.id.as_string()),
            code: item.code.clone(),
            description: item.description.clone(),
            unit: item.unit.clone(),
            comment: item.comment.clone(),
        }
    }
}
