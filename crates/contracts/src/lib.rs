//! Общие DTO между фронтендом и REST-бэкендом складского администрирования.

pub mod domain;
pub mod shared;
