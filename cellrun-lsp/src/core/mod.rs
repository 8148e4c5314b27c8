pub mod cells;
pub mod document;
pub mod session;
