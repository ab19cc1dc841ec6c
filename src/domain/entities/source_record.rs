//! Source record entity
//!
//! A person record as delivered by the external data source, before
//! enrichment. Adapters decode their wire format into this shape.

use crate::domain::value_objects::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub street: String,
    pub city: String,
    pub phone: String,
}
