pub mod actions;
pub mod analytics;
pub mod departments;
pub mod employees;
pub mod fetch;
pub mod profile;
