pub mod a001_item;
pub mod a002_warehouse;
pub mod a003_stock;
pub mod workflows;
