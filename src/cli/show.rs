//! Show command - print the resolved configuration.
//!
//! Passwords are redacted unless `--reveal` is passed explicitly.

use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::core::project::Project;
use crate::error::Result;

const REDACTED: &str = "••••••••";

/// Print manifest and signing configuration for `project_dir`.
pub fn execute(project_dir: &Path, json: bool, reveal: bool) -> Result<()> {
    let project = Project::open(project_dir)?;
    let signing = project.signing()?;
    let manifest = project.manifest();

    if json {
        let mut doc = json!({
            "app": {
                "id": manifest.app.id,
                "version_code": manifest.app.version_code,
                "version_name": manifest.app.version_name,
            },
            "sdk": {
                "min": manifest.sdk.min,
                "target": manifest.sdk.target,
                "compile": manifest.sdk.compile,
                "ndk": manifest.sdk.ndk,
            },
            "release": {
                "minify": manifest.release.minify,
                "shrink_resources": manifest.release.shrink_resources,
                "proguard_files": manifest.release.proguard_files,
            },
            "signing": {
                "store_file": signing.store_file.display().to_string(),
                "key_alias": signing.key_alias,
            },
        });

        if reveal {
            doc["signing"]["key_password"] = signing.key_password.expose().into();
            doc["signing"]["store_password"] = signing.store_password.expose().into();
        }

        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    output::section("Application");
    output::kv("id", &manifest.app.id);
    output::kv(
        "version",
        format!(
            "{} (build {})",
            manifest.app.version_name, manifest.app.version_code
        ),
    );

    output::section("SDK");
    output::kv("min", manifest.sdk.min);
    output::kv("target", manifest.sdk.target);
    output::kv("compile", manifest.sdk.compile);
    if let Some(ndk) = &manifest.sdk.ndk {
        output::kv("ndk", ndk);
    }

    output::section("Release");
    output::kv("minify", manifest.release.minify);
    output::kv("shrink resources", manifest.release.shrink_resources);
    output::kv("proguard files", manifest.release.proguard_files.join(", "));

    output::section("Signing");
    output::kv("store file", signing.store_file.display());
    output::kv("key alias", &signing.key_alias);
    if reveal {
        output::kv("key password", signing.key_password.expose());
        output::kv("store password", signing.store_password.expose());
    } else {
        output::kv("key password", REDACTED);
        output::kv("store password", REDACTED);
        println!();
        output::dimmed("pass --reveal to print passwords");
    }

    Ok(())
}
