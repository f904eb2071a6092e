use thiserror::Error;

/// Ошибка проверки формы сценария (до отправки на сервер)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Поле «{0}» обязательно для заполнения")]
    Required(&'static str),
    #[error("Не выбрана позиция")]
    MissingItem,
    #[error("Не выбран склад")]
    MissingWarehouse,
    #[error("Не выбран склад-получатель")]
    MissingTargetWarehouse,
    #[error("Склад-получатель совпадает со складом-отправителем")]
    SameWarehouse,
    #[error("Некорректное количество: `{0}`")]
    InvalidQuantity(String),
    #[error("Количество должно быть больше нуля")]
    NonPositiveQuantity,
    #[error("Корректировка на ноль не имеет смысла")]
    ZeroAdjustment,
    #[error("Не введено ни одного фактического количества")]
    EmptyCount,
    #[error("Ничего не выбрано")]
    NothingSelected,
}

/// Разбор количества из поля ввода; принимается и десятичная запятая
pub fn parse_quantity(raw: &str) -> Result<f64, FormError> {
    let normalized = raw.trim().replace(' ', "").replace(',', ".");
    if normalized.is_empty() {
        return Err(FormError::Required("Количество"));
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite())
        .ok_or_else(|| FormError::InvalidQuantity(raw.trim().to_string()))
}

/// Пустая строка → None
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Обязательное текстовое поле
pub fn required_text(raw: &str, field: &'static str) -> Result<String, FormError> {
    optional_text(raw).ok_or(FormError::Required(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_accepts_comma() {
        assert_eq!(parse_quantity("1,5"), Ok(1.5));
        assert_eq!(parse_quantity(" 12 "), Ok(12.0));
        assert_eq!(parse_quantity("1 000"), Ok(1000.0));
        assert_eq!(parse_quantity("-3"), Ok(-3.0));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert_eq!(parse_quantity("  "), Err(FormError::Required("Количество")));
        assert_eq!(
            parse_quantity("abc"),
            Err(FormError::InvalidQuantity("abc".to_string()))
        );
        assert_eq!(
            parse_quantity("inf"),
            Err(FormError::InvalidQuantity("inf".to_string()))
        );
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" склад "), Some("склад".to_string()));
        assert_eq!(required_text("", "Код"), Err(FormError::Required("Код")));
        assert_eq!(
            FormError::Required("Код").to_string(),
            "Поле «Код» обязательно для заполнения"
        );
    }
}
