//! Build script for the now-playing widget server.
//!
//! Copies `.env.example` into the local data directory
//! (`<data_local_dir>/nowplaying/.env.example`) so users find a ready-made
//! configuration template next to where `config::load_env` looks for `.env`.

use std::{env, fs, path::PathBuf};

/// Copies the configuration template. A missing template only warns;
/// directory or write failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("nowplaying");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
