use serde::{Deserialize, Serialize};

/// Декларативное описание действия кнопки панели инструментов.
///
/// Строковая форма приходит из JSON-описаний панелей (или с сервера),
/// поэтому `kind` и `modal_key` не типизированы: разбор и проверка
/// выполняются на стороне фронтенда при диспетчеризации.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptorDto {
    /// "navigate" | "modal" | "wizard"
    pub kind: String,
    /// Маршрут (ключ таба), только для `navigate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Ключ модального сценария, для `modal` и `wizard`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal_key: Option<String>,
    /// Режим открытия, передаётся сценарию как есть
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub label: String,
}

impl ActionDescriptorDto {
    pub fn navigate(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: "navigate".to_string(),
            target: Some(target.into()),
            modal_key: None,
            action: None,
            label: label.into(),
        }
    }

    pub fn modal(label: impl Into<String>, modal_key: impl Into<String>) -> Self {
        Self {
            kind: "modal".to_string(),
            target: None,
            modal_key: Some(modal_key.into()),
            action: None,
            label: label.into(),
        }
    }

    pub fn wizard(label: impl Into<String>, modal_key: impl Into<String>) -> Self {
        Self {
            kind: "wizard".to_string(),
            ..Self::modal(label, modal_key)
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Разбор JSON-описания панели инструментов
pub fn parse_toolbar(json: &str) -> Result<Vec<ActionDescriptorDto>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid toolbar JSON: {}", e))
}
