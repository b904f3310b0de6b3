//! Tests for `keyfob check`.

use crate::support::{
    assert_failure, assert_stderr_contains, assert_stdout_contains, assert_success, stdout, Test,
};

#[test]
fn check_passes_on_complete_project() {
    let t = Test::ready();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "manifest ok");
    assert_stdout_contains(&output, "signing properties ok");
    assert_stdout_contains(&output, "sha256");
}

#[test]
fn check_json_report_has_no_passwords() {
    let t = Test::ready();

    let output = t.check_json();
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["application_id"], "com.vendor.app");
    assert_eq!(report["key_alias"], "upload");
    assert_eq!(report["version_code"], 19);
    assert!(report["keystore_sha256"].as_str().unwrap().contains(':'));

    // Credentials must never appear in the report
    let raw = stdout(&output);
    assert!(!raw.contains("pw1"));
    assert!(!raw.contains("pw2"));
    assert!(report.get("key_password").is_none());
    assert!(report.get("store_password").is_none());
}

#[test]
fn check_fails_without_manifest() {
    let t = Test::new();
    t.write_key_properties(crate::support::COMPLETE_PROPERTIES);
    t.write_keystore();

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn check_fails_when_keystore_missing() {
    let t = Test::new();
    t.write_manifest(crate::support::MANIFEST);
    t.write_key_properties(crate::support::COMPLETE_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "keystore not found");
}

#[test]
fn check_fails_on_invalid_metadata() {
    let t = Test::ready();
    // target above compile violates the SDK ordering
    t.write_manifest(
        "[app]\n\
         id = \"com.vendor.app\"\n\
         version_code = 19\n\
         version_name = \"1.0.0\"\n\
         \n\
         [sdk]\n\
         min = 21\n\
         target = 36\n\
         compile = 35\n",
    );

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "sdk.compile");
}
