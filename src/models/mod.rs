pub mod employee;
pub mod category;

pub use employee::{Employee, EmployeeMapper};
pub use category::{Category, CategoryMapper};
