//! Check command - validate the signing configuration end to end.
//!
//! Exit code 1 on any failure; the packaging step should only run after a
//! clean check.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::output;
use crate::core::fingerprint;
use crate::core::project::Project;
use crate::error::Result;

/// Machine-readable check summary. Credentials are deliberately absent.
#[derive(Serialize)]
struct CheckReport {
    application_id: String,
    version_code: u32,
    version_name: String,
    store_file: String,
    key_alias: String,
    keystore_sha256: String,
}

/// Validate manifest, signing properties, and keystore presence.
pub fn execute(project_dir: &Path, json: bool) -> Result<()> {
    let project = Project::open(project_dir)?;
    let signing = project.signing()?;
    signing.require_keystore()?;

    let digest = fingerprint::sha256_file(&signing.store_file)?;
    let manifest = project.manifest();

    info!(app = %manifest.app.id, "check passed");

    if json {
        let report = CheckReport {
            application_id: manifest.app.id.clone(),
            version_code: manifest.app.version_code,
            version_name: manifest.app.version_name.clone(),
            store_file: signing.store_file.display().to_string(),
            key_alias: signing.key_alias.clone(),
            keystore_sha256: digest,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::success(&format!(
        "manifest ok ({} {} build {})",
        manifest.app.id, manifest.app.version_name, manifest.app.version_code
    ));
    output::success(&format!(
        "signing properties ok (alias {})",
        output::key(&signing.key_alias)
    ));
    output::success(&format!(
        "keystore {}",
        output::path(&signing.store_file.display().to_string())
    ));
    output::kv("sha256", digest);

    Ok(())
}
