//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keyfob command rooted at the test project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keyfob").expect("failed to find keyfob binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `keyfob init --app-id <id>` (non-interactive).
    pub fn init_cmd(&self, app_id: &str) -> Output {
        self.cmd()
            .args(["init", "--app-id", app_id])
            .output()
            .expect("failed to run keyfob init")
    }

    /// Shortcut for `keyfob init --force`.
    pub fn init_force(&self, app_id: &str) -> Output {
        self.cmd()
            .args(["init", "--app-id", app_id, "--force"])
            .output()
            .expect("failed to run keyfob init --force")
    }

    /// Shortcut for `keyfob check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run keyfob check")
    }

    /// Shortcut for `keyfob check --json`.
    pub fn check_json(&self) -> Output {
        self.cmd()
            .args(["check", "--json"])
            .output()
            .expect("failed to run keyfob check --json")
    }

    /// Shortcut for `keyfob show`.
    pub fn show(&self) -> Output {
        self.cmd()
            .arg("show")
            .output()
            .expect("failed to run keyfob show")
    }

    /// Shortcut for `keyfob show --reveal`.
    pub fn show_reveal(&self) -> Output {
        self.cmd()
            .args(["show", "--reveal"])
            .output()
            .expect("failed to run keyfob show --reveal")
    }

    /// Shortcut for `keyfob show --json`.
    pub fn show_json(&self) -> Output {
        self.cmd()
            .args(["show", "--json"])
            .output()
            .expect("failed to run keyfob show --json")
    }

    /// Shortcut for `keyfob doctor`.
    pub fn doctor(&self) -> Output {
        self.cmd()
            .arg("doctor")
            .output()
            .expect("failed to run keyfob doctor")
    }
}
