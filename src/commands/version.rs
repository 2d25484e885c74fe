//! Version command implementation

use crate::config::{Settings, default_config_path};
use crate::error::Result;

/// Run version command
pub fn run(settings: &Settings) -> Result<()> {
    println!("toolkit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Platform: {}", std::env::consts::OS);
    println!();
    println!("Sources:");
    println!("  Manifest URL: {}", settings.manifest_url);
    println!("  Local manifest: {}", settings.local_manifest.display());
    println!("  Static dir: {}", settings.static_dir.display());
    if let Some(path) = default_config_path() {
        println!("  Config file: {}", path.display());
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
