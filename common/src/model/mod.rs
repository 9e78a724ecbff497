pub mod field;
pub mod formula;
