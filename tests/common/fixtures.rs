//! Reusable store files and API payloads.

/// Five employees across four departments, employee 3 bookmarked.
///
/// Engineering: 5 and 4 (avg 4.5); HR: 3; Marketing: 4; Sales: 2.
pub const STORE_FIVE: &str = r#"{
  "version": 1,
  "savedAt": "2026-01-05T10:00:00Z",
  "state": {
    "employees": [
      {"id": 1, "firstName": "Emily", "lastName": "Johnson", "email": "emily.johnson@x.dummyjson.com", "age": 28, "department": "Engineering", "performance": 5, "address": "626 Main Street, Phoenix", "phone": "+81 965-431-3024", "bio": "Lorem ipsum"},
      {"id": 2, "firstName": "Michael", "lastName": "Williams", "email": "michael.williams@x.dummyjson.com", "age": 35, "department": "HR", "performance": 3, "address": "385 Fifth Street, Houston", "phone": "+49 258-627-6644", "bio": "Lorem ipsum"},
      {"id": 3, "firstName": "Sophia", "lastName": "Brown", "email": "sophia.brown@x.dummyjson.com", "age": 42, "department": "Engineering", "performance": 4, "address": "1642 Ninth Street, Washington", "phone": "+81 210-652-2785", "bio": "Lorem ipsum"},
      {"id": 4, "firstName": "James", "lastName": "Davis", "email": "james.davis@x.dummyjson.com", "age": 45, "department": "Sales", "performance": 2, "address": "238 Jefferson Street, Seattle", "phone": "+49 614-958-9364", "bio": "Lorem ipsum"},
      {"id": 5, "firstName": "Emma", "lastName": "Miller", "email": "emma.miller@x.dummyjson.com", "age": 30, "department": "Marketing", "performance": 4, "address": "607 Fourth Street, Jacksonville", "phone": "+91 759-776-1614", "bio": "Lorem ipsum"}
    ],
    "bookmarkedEmployees": [3]
  }
}"#;

/// Users page in the upstream API shape. Id 2 appears twice.
pub const USERS_PAGE: &str = r#"{
  "users": [
    {"id": 1, "firstName": "Emily", "lastName": "Johnson", "maidenName": "Smith", "age": 28, "email": "emily.johnson@x.dummyjson.com", "phone": "+81 965-431-3024", "address": {"address": "626 Main Street", "city": "Phoenix", "state": "Mississippi"}},
    {"id": 2, "firstName": "Michael", "lastName": "Williams", "age": 35, "email": "michael.williams@x.dummyjson.com", "phone": "+49 258-627-6644", "address": {"address": "385 Fifth Street", "city": "Houston"}},
    {"id": 2, "firstName": "Michael", "lastName": "Williams", "age": 35, "email": "michael.williams@x.dummyjson.com", "phone": "+49 258-627-6644", "address": {"address": "385 Fifth Street", "city": "Houston"}}
  ],
  "total": 208,
  "skip": 0,
  "limit": 3
}"#;
