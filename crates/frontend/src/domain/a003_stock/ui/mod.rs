pub mod count;
pub mod movement;
pub mod page;
