//! Build script for the spotctl playback remote.
//!
//! This build script handles setup tasks that need to occur during the
//! compilation process, primarily copying the configuration template to the
//! user's local data directory. This ensures that users have access to a
//! configuration example in the expected location after installation.

use std::{env, fs, path::PathBuf};

/// Copies the `.env.example` template into the local data directory.
///
/// ## Destination Location
/// The template is copied to the platform-specific local data directory:
/// - Linux: `~/.local/share/spotctl/.env.example`
/// - macOS: `~/Library/Application Support/spotctl/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotctl/.env.example`
///
/// # Error Handling Strategy
///
/// - **Missing template**: issues a warning but continues the build
/// - **Directory creation / copy failures**: returned as errors
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotctl");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
