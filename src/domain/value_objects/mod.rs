//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod department;
mod employee_id;
mod rating;

pub use department::{Department, ParseDepartmentError};
pub use employee_id::EmployeeId;
pub use rating::{InvalidRating, Rating};
