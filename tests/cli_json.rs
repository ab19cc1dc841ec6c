mod common;

use common::*;

#[test]
fn list_json_includes_bookmark_flags() {
    let env = TestEnv::with_store(STORE_FIVE);
    let result = env.run(&["--json", "list", "-d", "Engineering"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event["event"], "data");
    assert_eq!(event["command"], "list");
    assert_eq!(event["total"], 5);
    assert_eq!(event["count"], 2);
    assert_eq!(event["employees"][0]["firstName"], "Emily");
    assert_eq!(event["employees"][0]["bookmarked"], false);
    assert_eq!(event["employees"][1]["bookmarked"], true);
}

#[test]
fn analytics_json() {
    let env = TestEnv::with_store(STORE_FIVE);
    let events = env.run(&["analytics", "--json"]).json_events();

    let event = &events[0];
    assert_eq!(event["departments"]["Engineering"]["count"], 2);
    assert_eq!(event["departments"]["Engineering"]["average_rating"], 4.5);
    assert_eq!(event["departments"]["Sales"]["average_rating"], 2.0);
    assert_eq!(event["bookmarks"]["bookmarked"], 1);
    assert_eq!(event["bookmarks"]["not_bookmarked"], 4);
}

#[test]
fn show_json_contains_profile() {
    let env = TestEnv::with_store(STORE_FIVE);
    let events = env.run(&["--json", "show", "1"]).json_events();

    let event = &events[0];
    assert_eq!(event["employee"]["id"], 1);
    assert_eq!(event["tier"], "Outstanding");
    assert_eq!(event["profile"]["history"].as_array().unwrap().len(), 6);
    assert_eq!(event["profile"]["projects"].as_array().unwrap().len(), 3);
}

#[test]
fn bookmark_json() {
    let env = TestEnv::with_store(STORE_FIVE);
    let events = env.run(&["--json", "bookmark", "2"]).json_events();

    assert_eq!(events[0]["bookmarked"], true);
    assert_eq!(events[0]["persisted"], true);
    assert_eq!(events[0]["bookmark_count"], 2);
}

#[test]
fn json_mode_never_prompts() {
    let env = TestEnv::with_store(STORE_FIVE);
    let events = env.run(&["--json", "promote", "1"]).json_events();

    assert_eq!(events[0]["outcome"], "cancelled");
    assert!(events[0]["message"].is_null());
}

#[test]
fn errors_are_json_events() {
    let env = TestEnv::with_store(STORE_FIVE);
    let result = env.run(&["--json", "show", "404"]);

    assert!(!result.success);
    let events = result.json_events();
    assert_eq!(events[0]["event"], "error");
    assert!(events[0]["message"].as_str().unwrap().contains("employee 404 not found"));
}

#[test]
fn departments_json() {
    let env = TestEnv::new();
    let events = env.run(&["departments", "--json"]).json_events();

    assert_eq!(
        events[0]["departments"],
        serde_json::json!(["Engineering", "Marketing", "Sales", "HR", "Finance"])
    );
}
