//! Init command - scaffold the signing configuration.
//!
//! Writes `keyfob.toml` and a `key.properties` template, prompting for
//! the alias and passwords with hidden input when run interactively.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::{Input, Password};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants;
use crate::core::manifest::{self, Manifest};
use crate::error::{ManifestError, Result};

/// Scaffold keyfob.toml and android/key.properties in `project_dir`.
pub fn execute(
    project_dir: &Path,
    app_id: Option<String>,
    store_file: &str,
    key_alias: Option<String>,
    force: bool,
) -> Result<()> {
    if Manifest::exists(project_dir) && !force {
        return Err(ManifestError::AlreadyInitialized.into());
    }

    let interactive = io::stdin().is_terminal();

    let app_id = match app_id {
        Some(id) => id,
        None if interactive => Input::new()
            .with_prompt("Application id")
            .default("com.example.app".to_string())
            .interact_text()?,
        None => "com.example.app".to_string(),
    };

    let key_alias = match key_alias {
        Some(alias) => alias,
        None if interactive => Input::new()
            .with_prompt("Key alias")
            .default("upload".to_string())
            .interact_text()?,
        None => "upload".to_string(),
    };

    info!("initializing project: {}", app_id);

    let manifest = Manifest::scaffold(&app_id);
    manifest.validate()?;
    manifest.save(project_dir)?;

    let android_dir = project_dir.join(constants::ANDROID_DIR);
    std::fs::create_dir_all(&android_dir)?;

    let props_path = android_dir.join(constants::KEY_PROPERTIES_FILE);
    let mut empty_passwords = false;
    let wrote_properties = if props_path.exists() && !force {
        output::warn(&format!(
            "{} already exists, leaving it untouched",
            props_path.display()
        ));
        false
    } else {
        // Passwords are never accepted as CLI arguments; prompt with
        // hidden input, or leave the template blank for the user to
        // fill in.
        let (key_password, store_password) = if interactive {
            let key_pw = Zeroizing::new(
                Password::new()
                    .with_prompt("Key password")
                    .allow_empty_password(true)
                    .interact()?,
            );
            let store_pw = Zeroizing::new(
                Password::new()
                    .with_prompt("Keystore password")
                    .allow_empty_password(true)
                    .interact()?,
            );
            (key_pw, store_pw)
        } else {
            (Zeroizing::new(String::new()), Zeroizing::new(String::new()))
        };
        empty_passwords = key_password.is_empty() || store_password.is_empty();

        let contents = Zeroizing::new(format!(
            "{}={}\n{}={}\n{}={}\n{}={}\n",
            constants::PROP_STORE_FILE,
            store_file,
            constants::PROP_KEY_ALIAS,
            key_alias,
            constants::PROP_KEY_PASSWORD,
            key_password.as_str(),
            constants::PROP_STORE_PASSWORD,
            store_password.as_str(),
        ));
        std::fs::write(&props_path, contents.as_bytes())?;
        restrict_permissions(&props_path)?;
        true
    };

    manifest::ensure_gitignore(project_dir)?;

    output::success(&format!("initialized {}", constants::MANIFEST_FILE));
    if wrote_properties {
        output::success(&format!(
            "wrote {}",
            output::path(&props_path.display().to_string())
        ));
    }

    if wrote_properties && empty_passwords {
        output::warn("key.properties has empty passwords");
        output::hint("edit android/key.properties, then run: keyfob check");
    } else {
        output::hint("run: keyfob check");
    }

    info!("initialized successfully");
    Ok(())
}

/// Credentials are owner-read-only on Unix.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
