mod common;

use common::*;

#[test]
fn fetch_replaces_employees_and_assigns_departments() {
    let env = TestEnv::new();
    let url = serve_json(USERS_PAGE, 1);

    let result = env.run(&["fetch", "--url", &url, "--seed", "7"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("[OK] Employees Loaded"));
    assert!(result.stdout.contains("3 employees"));
    assert!(result.stdout.contains("Seed:   7"));
    assert!(result.stdout.contains("Duplicate ids from source: 2"));

    let stored = env.read_store();
    let employees = stored["state"]["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0]["firstName"], "Emily");
    assert_eq!(employees[0]["address"], "626 Main Street, Phoenix");
    assert_eq!(
        employees[0]["bio"],
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit."
    );
    for employee in employees {
        let department = employee["department"].as_str().unwrap();
        assert!(["Engineering", "Marketing", "Sales", "HR", "Finance"].contains(&department));
        let rating = employee["performance"].as_u64().unwrap();
        assert!((1..=5).contains(&rating));
    }
}

#[test]
fn same_seed_gives_same_enrichment() {
    let first = TestEnv::new();
    let second = TestEnv::new();
    let url = serve_json(USERS_PAGE, 2);

    assert!(first.run(&["fetch", "--url", &url, "--seed", "99"]).success);
    assert!(second.run(&["fetch", "--url", &url, "--seed", "99"]).success);

    assert_eq!(
        first.read_store()["state"]["employees"],
        second.read_store()["state"]["employees"]
    );
}

#[test]
fn fetch_keeps_existing_bookmarks() {
    let env = TestEnv::with_store(STORE_FIVE);
    let url = serve_json(USERS_PAGE, 1);

    assert!(env.run(&["fetch", "--url", &url, "--seed", "1"]).success);

    let stored = env.read_store();
    assert_eq!(stored["state"]["employees"].as_array().unwrap().len(), 3);
    assert_eq!(stored["state"]["bookmarkedEmployees"], serde_json::json!([3]));
}

#[test]
fn fetch_failure_leaves_store_untouched() {
    let env = TestEnv::with_store(STORE_FIVE);
    let url = serve(500, "{}", 1);

    let result = env.run(&["fetch", "--url", &url]);
    assert!(!result.success);
    assert!(result.stderr.contains("Fetch failed"), "{}", result.stderr);

    assert_eq!(std::fs::read_to_string(env.store_path()).unwrap(), STORE_FIVE);
}

#[test]
fn malformed_payload_is_an_error() {
    let env = TestEnv::new();
    let url = serve_json(r#"{"users": "nope"}"#, 1);

    let result = env.run(&["fetch", "--url", &url]);
    assert!(!result.success);
    assert!(!env.store_path().exists());
}

#[test]
fn user_without_address_leaves_stored_list_unchanged() {
    let env = TestEnv::with_store(STORE_FIVE);
    let url = serve_json(
        r#"{"users":[{"id":1,"firstName":"A","lastName":"B","email":"a@b","age":3}]}"#,
        1,
    );

    let result = env.run(&["fetch", "--url", &url, "--seed", "1"]);
    assert!(!result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Fetch failed"), "{}", result.stderr);
    assert_eq!(std::fs::read_to_string(env.store_path()).unwrap(), STORE_FIVE);
}

#[test]
fn source_url_can_come_from_environment() {
    let env = TestEnv::new();
    let url = serve_json(USERS_PAGE, 1);

    let result = env.run_with_env(&["fetch", "--seed", "3"], &[("STAFFDECK_SOURCE_URL", &url)]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains(&format!("Source: {}", url)));
}
