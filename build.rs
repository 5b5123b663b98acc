//! Build script for the mood playlist CLI.
//!
//! Copies the configuration templates to the user's local data directory so
//! that the templates sit next to the files the application reads:
//! - Linux: `~/.local/share/moodlist/`
//! - macOS: `~/Library/Application Support/moodlist/`
//! - Windows: `%LOCALAPPDATA%/moodlist/`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

const TEMPLATES: [&str; 3] = [
    "client.env.example",
    "spotify.env.example",
    "gateway.env.example",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for template in TEMPLATES {
        println!("cargo:rerun-if-changed=config/{}", template);
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("moodlist");
    fs::create_dir_all(&out_dir)?;

    for template in TEMPLATES {
        let source = manifest_dir.join("config").join(template);
        if source.is_file() {
            let contents = fs::read_to_string(&source)?;
            fs::write(out_dir.join(template), contents)?;
        } else {
            println!("cargo:warning={} not found at {}", template, source.display());
        }
    }

    Ok(())
}
