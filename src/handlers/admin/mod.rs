pub mod employee;
pub mod category;
