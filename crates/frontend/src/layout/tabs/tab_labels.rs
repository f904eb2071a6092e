//! Tab labels - единственный источник правды для заголовков табов.

pub const STOCK_TAB: &str = "a003_stock";
pub const ITEM_TAB: &str = "a001_item";
pub const WAREHOUSE_TAB: &str = "a002_warehouse";

/// Возвращает читаемый заголовок таба для данного ключа.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        ITEM_TAB => "Номенклатура",
        WAREHOUSE_TAB => "Склады",
        STOCK_TAB => "Остатки",
        _ => "Неизвестный раздел",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(tab_label_for_key(STOCK_TAB), "Остатки");
        assert_eq!(tab_label_for_key(ITEM_TAB), "Номенклатура");
        assert_eq!(tab_label_for_key(WAREHOUSE_TAB), "Склады");
    }

    #[test]
    fn test_unknown_label_fallback() {
        assert_eq!(tab_label_for_key("a999_missing"), "Неизвестный раздел");
    }
}
