use std::env;
use std::fs;
use std::path::Path;

/// Written when no bundle has been generated yet, so the app still builds
/// and shows an empty chart.
const EMPTY_BUNDLE: &str = r#"{"source":"","units":"inches","dataRange":"","seasons":[]}"#;

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(std::io::Error::other)?;
    let target = Path::new(&out_dir).join("snowfall_seasons.json");

    // Copy the bundle produced by `csf-cli aggregate` to OUT_DIR for include_str
    let bundle_src = Path::new("../fixtures/snowfall_seasons.json");
    if bundle_src.exists() {
        fs::copy(bundle_src, &target)?;
    } else {
        fs::write(&target, EMPTY_BUNDLE)?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/snowfall_seasons.json");
    Ok(())
}
