pub mod keyboard;
pub mod page;
