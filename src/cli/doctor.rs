//! Doctor command - diagnose the signing environment.
//!
//! Missing SDK tooling is a warning (CI images often sign without
//! keytool installed); a broken signing configuration is an error.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::cli::output;
use crate::core::manifest::Manifest;
use crate::core::project::Project;
use crate::error::{ManifestError, Result};

/// SDK tools a signing setup usually relies on.
const TOOLS: &[&str] = &["keytool", "apksigner"];

/// Run environment and project diagnostics for `project_dir`.
pub fn execute(project_dir: &Path) -> Result<()> {
    output::section("Environment");
    for tool in TOOLS {
        match which::which(tool) {
            Ok(path) => output::success(&format!(
                "{} ({})",
                tool,
                output::path(&path.display().to_string())
            )),
            Err(_) => output::warn(&format!("{} not found on PATH", tool)),
        }
    }

    output::section("Project");
    if !Manifest::exists(project_dir) {
        return Err(ManifestError::NotInitialized.into());
    }

    let project = Project::open(project_dir)?;
    output::success("keyfob.toml ok");

    let signing = project.signing()?;
    output::success("key.properties ok");

    signing.require_keystore()?;

    let metadata = std::fs::metadata(&signing.store_file)?;
    let modified: DateTime<Local> = metadata.modified()?.into();
    output::success(&format!(
        "keystore {}",
        output::path(&signing.store_file.display().to_string())
    ));
    output::kv("size", format!("{} bytes", metadata.len()));
    output::kv("modified", modified.format("%Y-%m-%d %H:%M"));

    Ok(())
}
