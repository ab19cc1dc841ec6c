//! Property tests for department statistics and the bookmark ratio.

use proptest::prelude::*;

use staffdeck::domain::entities::BookmarkSet;
use staffdeck::domain::services::{bookmark_ratio, department_stats};
use staffdeck::EmployeeId;

use crate::strategies::employees;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: department counts add up to the list length and averages stay in 1..=5.
    #[test]
    fn property_department_counts_partition_the_list(list in employees(40)) {
        let stats = department_stats(&list);

        let total: usize = stats.iter().map(|(_, s)| s.count).sum();
        prop_assert_eq!(total, list.len());

        for (name, stat) in stats.iter() {
            prop_assert!(stat.count > 0);
            let avg = stat.average_rating();
            prop_assert!((1.0..=5.0).contains(&avg), "{} avg {}", name, avg);
        }
    }

    /// PROPERTY: the ratio always sums to the number of loaded employees.
    #[test]
    fn property_bookmark_ratio_sums_to_total(
        list in employees(30),
        marked in prop::collection::vec(0u32..60, 0..30),
    ) {
        let bookmarks: BookmarkSet = marked.into_iter().map(EmployeeId::new).collect();
        let ratio = bookmark_ratio(&list, &bookmarks);

        prop_assert_eq!(ratio.bookmarked + ratio.not_bookmarked, list.len());
        let expected = list.iter().filter(|e| bookmarks.contains(e.id)).count();
        prop_assert_eq!(ratio.bookmarked, expected);
    }
}
