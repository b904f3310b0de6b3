//! Tests for error reporting across commands.

use crate::support::{assert_failure, assert_stderr_contains, stderr, Test};

#[test]
fn missing_properties_file_reports_absolute_path() {
    let t = Test::new();
    t.write_manifest(crate::support::MANIFEST);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "signing properties not found");

    // The message carries the absolute path that was tried
    let expected = t.android_dir().join("key.properties");
    assert_stderr_contains(&output, &expected.display().to_string());
}

#[test]
fn missing_fields_are_named() {
    let cases = [
        (crate::support::MISSING_KEY_PASSWORD, "keyPassword"),
        (crate::support::EMPTY_STORE_PASSWORD, "storePassword"),
    ];

    for (contents, field) in cases {
        let t = Test::new();
        t.write_manifest(crate::support::MANIFEST);
        t.write_key_properties(contents);
        t.write_keystore();

        let output = t.check();
        assert_failure(&output);
        assert_stderr_contains(&output, "missing or empty");
        assert_stderr_contains(&output, field);
    }
}

#[test]
fn malformed_properties_reports_line() {
    let t = Test::new();
    t.write_manifest(crate::support::MANIFEST);
    t.write_key_properties(crate::support::MALFORMED_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to load");
    assert_stderr_contains(&output, "line 2");
}

#[test]
fn uninitialized_project_gets_hint() {
    let t = Test::new();

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");

    // The hint goes to stdout
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("keyfob init"), "missing hint, got: {}", out);
}

#[test]
fn secrets_never_reach_stderr() {
    let t = Test::new();
    t.write_manifest(crate::support::MANIFEST);
    // Complete credentials, but no keystore on disk: check fails after
    // the credentials were loaded.
    t.write_key_properties(crate::support::COMPLETE_PROPERTIES);

    let output = t.check();
    assert_failure(&output);

    let err = stderr(&output);
    assert!(!err.contains("pw1"), "key password leaked: {}", err);
    assert!(!err.contains("pw2"), "store password leaked: {}", err);
}
