use crate::shared::api_utils::{delete, get_json, post_json};
use contracts::domain::a001_item::aggregate::{Item, ItemDto};

pub async fn fetch_items() -> Result<Vec<Item>, String> {
    get_json("/api/a001-item", "load items").await
}

pub async fn fetch_by_id(id: &str) -> Result<Item, String> {
    get_json(&format!("/api/a001-item/{}", id), "load item").await
}

/// Create (dto.id = None) or update
pub async fn save_item(dto: &ItemDto) -> Result<(), String> {
    post_json("/api/a001-item", dto, "save item").await
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    delete(&format!("/api/a001-item/{}", id), "delete item").await
}
