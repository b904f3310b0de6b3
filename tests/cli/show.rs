//! Tests for `keyfob show`.

use crate::support::{assert_stdout_contains, assert_success, stdout, Test};

#[test]
fn show_redacts_passwords_by_default() {
    let t = Test::ready();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "upload");
    assert_stdout_contains(&output, "release.keystore");

    let out = stdout(&output);
    assert!(!out.contains("pw1"), "key password leaked: {}", out);
    assert!(!out.contains("pw2"), "store password leaked: {}", out);
}

#[test]
fn show_reveal_prints_passwords() {
    let t = Test::ready();

    let output = t.show_reveal();
    assert_success(&output);
    assert_stdout_contains(&output, "pw1");
    assert_stdout_contains(&output, "pw2");
}

#[test]
fn show_includes_metadata_sections() {
    let t = Test::ready();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "Application");
    assert_stdout_contains(&output, "SDK");
    assert_stdout_contains(&output, "Release");
    assert_stdout_contains(&output, "Signing");
    assert_stdout_contains(&output, "com.vendor.app");
}

#[test]
fn show_json_omits_passwords_without_reveal() {
    let t = Test::ready();

    let output = t.show_json();
    assert_success(&output);

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["app"]["id"], "com.vendor.app");
    assert_eq!(doc["sdk"]["min"], 21);
    assert_eq!(doc["signing"]["key_alias"], "upload");
    assert!(doc["signing"].get("key_password").is_none());
    assert!(doc["signing"].get("store_password").is_none());
}

#[test]
fn show_json_reveal_includes_passwords() {
    let t = Test::ready();

    let output = t
        .cmd()
        .args(["show", "--json", "--reveal"])
        .output()
        .expect("failed to run keyfob show --json --reveal");
    assert_success(&output);

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(doc["signing"]["key_password"], "pw1");
    assert_eq!(doc["signing"]["store_password"], "pw2");
}
