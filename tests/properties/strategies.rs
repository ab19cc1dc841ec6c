//! Shared generators.

use proptest::prelude::*;

use staffdeck::{Department, Employee, EmployeeId, Rating};

pub fn department() -> impl Strategy<Value = Department> {
    prop::sample::select(Department::ALL.to_vec())
}

pub fn rating() -> impl Strategy<Value = Rating> {
    prop::sample::select(Rating::ALL.to_vec())
}

/// Employees with ids `0..len`, so ids are unique.
pub fn employees(max: usize) -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        ("[A-Za-z]{1,8}", "[A-Za-z]{1,8}", department(), rating()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (first, last, department, performance))| Employee {
                id: EmployeeId::new(i as u32),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                first_name: first,
                last_name: last,
                age: 30,
                department,
                performance,
                address: "1 Main St, Springfield".to_string(),
                phone: "555".to_string(),
                bio: "bio".to_string(),
            })
            .collect()
    })
}
