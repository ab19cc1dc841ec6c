//! Search and filter over the employee list
//!
//! Matching rules:
//! - text matches when it is a case-insensitive substring of the first name,
//!   last name, or email (any of the three)
//! - an empty text matches everyone
//! - the department filter, when set, must equal the employee's department
//! - both conditions must hold; result order follows the input order

use crate::domain::entities::Employee;
use crate::domain::value_objects::{Department, EmployeeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub text: String,
    pub department: Option<Department>,
}

impl EmployeeQuery {
    pub fn new(text: impl Into<String>, department: Option<Department>) -> Self {
        Self {
            text: text.into(),
            department,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.department.is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_text(&self.text.to_lowercase(), employee) && self.matches_department(employee)
    }

    fn matches_text(&self, needle: &str, employee: &Employee) -> bool {
        needle.is_empty()
            || [&employee.first_name, &employee.last_name, &employee.email]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    fn matches_department(&self, employee: &Employee) -> bool {
        self.department.map_or(true, |d| d == employee.department)
    }
}

pub fn filter_employees<'a>(employees: &'a [Employee], query: &EmployeeQuery) -> Vec<&'a Employee> {
    let needle = query.text.to_lowercase();
    employees
        .iter()
        .filter(|e| query.matches_text(&needle, e) && query.matches_department(e))
        .collect()
}

pub fn find_employee(employees: &[Employee], id: EmployeeId) -> Option<&Employee> {
    employees.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::test_support::employee;

    fn names(found: &[&Employee]) -> Vec<String> {
        found.iter().map(|e| e.full_name()).collect()
    }

    #[test]
    fn matches_last_name_and_email_substring() {
        let list = vec![
            employee(1, "John", "Smith", "j@x.com", Department::Sales, 3),
            employee(2, "Jane", "Doe", "jane@smith.org", Department::Hr, 4),
            employee(3, "Ann", "Lee", "ann@lee.io", Department::Hr, 2),
        ];

        let found = filter_employees(&list, &EmployeeQuery::new("smith", None));
        assert_eq!(names(&found), vec!["John Smith", "Jane Doe"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let list = vec![employee(1, "John", "Smith", "j@x.com", Department::Sales, 3)];
        assert_eq!(filter_employees(&list, &EmployeeQuery::new("SMI", None)).len(), 1);
        assert_eq!(filter_employees(&list, &EmployeeQuery::new("jOhN", None)).len(), 1);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let list = vec![
            employee(5, "B", "B", "b@x", Department::Sales, 1),
            employee(2, "A", "A", "a@x", Department::Finance, 1),
        ];
        let found = filter_employees(&list, &EmployeeQuery::default());
        assert_eq!(found.iter().map(|e| e.id.get()).collect::<Vec<_>>(), vec![5, 2]);
    }

    #[test]
    fn department_filter_is_anded_with_text() {
        let list = vec![
            employee(1, "John", "Smith", "j@x.com", Department::Sales, 3),
            employee(2, "Jane", "Doe", "jane@smith.org", Department::Hr, 4),
        ];

        let query = EmployeeQuery::new("smith", Some(Department::Hr));
        assert_eq!(names(&filter_employees(&list, &query)), vec!["Jane Doe"]);

        let query = EmployeeQuery::new("", Some(Department::Engineering));
        assert!(filter_employees(&list, &query).is_empty());
    }

    #[test]
    fn substring_not_prefix() {
        let list = vec![employee(1, "Marianne", "Ortega", "m@x.com", Department::Sales, 3)];
        assert_eq!(filter_employees(&list, &EmployeeQuery::new("anne", None)).len(), 1);
        assert!(filter_employees(&list, &EmployeeQuery::new("mrn", None)).is_empty());
    }

    #[test]
    fn matches_agrees_with_filter() {
        let e = employee(1, "John", "Smith", "j@x.com", Department::Sales, 3);
        assert!(EmployeeQuery::new("smith", Some(Department::Sales)).matches(&e));
        assert!(!EmployeeQuery::new("smith", Some(Department::Hr)).matches(&e));
    }

    #[test]
    fn find_misses_return_none() {
        let list = vec![employee(1, "John", "Smith", "j@x.com", Department::Sales, 3)];
        assert!(find_employee(&list, EmployeeId::new(1)).is_some());
        assert!(find_employee(&list, EmployeeId::new(404)).is_none());
    }
}
