//! Property tests for search and filtering.

use proptest::prelude::*;

use staffdeck::domain::services::{filter_employees, EmployeeQuery};

use crate::strategies::{department, employees};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an empty query returns the full list in order.
    #[test]
    fn property_empty_query_is_identity(list in employees(30)) {
        let result = filter_employees(&list, &EmployeeQuery::default());
        let ids: Vec<_> = result.iter().map(|e| e.id).collect();
        let expected: Vec<_> = list.iter().map(|e| e.id).collect();
        prop_assert_eq!(ids, expected);
    }

    /// PROPERTY: results are a subsequence of the input and every result matches.
    #[test]
    fn property_results_match_and_keep_order(
        list in employees(30),
        text in "[a-zA-Z]{0,3}",
        dept in prop::option::of(department()),
    ) {
        let query = EmployeeQuery::new(text.clone(), dept);
        let result = filter_employees(&list, &query);

        let needle = text.to_lowercase();
        for e in &result {
            prop_assert!(query.matches(e));
            if let Some(d) = dept {
                prop_assert_eq!(e.department, d);
            }
            prop_assert!(
                e.first_name.to_lowercase().contains(&needle)
                    || e.last_name.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            );
        }

        let positions: Vec<usize> = result
            .iter()
            .map(|r| list.iter().position(|e| e.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let expected = list.iter().filter(|e| query.matches(e)).count();
        prop_assert_eq!(result.len(), expected);
    }

    /// PROPERTY: matching ignores case.
    #[test]
    fn property_query_is_case_insensitive(list in employees(20), text in "[a-z]{1,3}") {
        let lower = filter_employees(&list, &EmployeeQuery::new(text.clone(), None)).len();
        let upper = filter_employees(&list, &EmployeeQuery::new(text.to_uppercase(), None)).len();
        prop_assert_eq!(lower, upper);
    }
}
