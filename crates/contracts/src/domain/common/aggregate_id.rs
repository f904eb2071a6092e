use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов склада
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (для URL и ключей табов)
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;

    /// Разобрать список строковых ID, остановившись на первой ошибке
    fn parse_all<'a, I>(values: I) -> Result<Vec<Self>, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values.into_iter().map(Self::from_string).collect()
    }
}

/// Newtype-идентификатор поверх `Uuid`.
///
/// Генерирует `new`, `new_v4`, `value` и реализацию `AggregateId`.
#[macro_export]
macro_rules! uuid_aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s.trim())
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::uuid_aggregate_id!(SampleId);

    #[test]
    fn test_from_string_trims_and_round_trips() {
        let id = SampleId::from_string(" 6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b ").unwrap();
        assert_eq!(id.as_string(), "6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b");
        assert!(SampleId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_parse_all_stops_on_error() {
        let ok = SampleId::parse_all(["6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b"]).unwrap();
        assert_eq!(ok.len(), 1);
        assert!(SampleId::parse_all(["6f1c2b1e-0d7a-4f2c-9a51-0c1d2e3f4a5b", "x"]).is_err());
    }
}
