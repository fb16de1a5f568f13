//! The `icons` section of a browser extension's `manifest.json`
//!
//! Written as a standalone `icons.json` next to the generated PNGs so it can be pasted
//! (or merged by a build script) into the extension manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

/// File name of the manifest fragment inside the output directory.
pub const MANIFEST_FILENAME: &str = "icons.json";

/// Root structure of the fragment
///
/// Sizes serialize as string keys (`"16"`, `"48"`, ...) in ascending numeric order,
/// the way extension manifests list them.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    /// Icon size in pixels mapped to the icon's path relative to the extension root
    pub icons: BTreeMap<u32, String>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `filename`, which lives in `out_dir`, as the icon for `size`.
    ///
    /// The manifest path keeps only the last component of `out_dir`, so icons written to
    /// `./build/icons` are referenced as `icons/<filename>`.
    pub fn add_icon(&mut self, size: u32, out_dir: &Path, filename: &str) {
        let path = match out_dir.file_name() {
            Some(dir) => format!("{}/{}", dir.to_string_lossy(), filename),
            None => filename.to_string(),
        };
        self.icons.insert(size, path);
    }
}

/// Serialize `manifest` as pretty JSON into `dir/icons.json`.
pub fn write_manifest(dir: &Path, manifest: &IconManifest) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize icon manifest")?;
    std::fs::write(dir.join(MANIFEST_FILENAME), json)
        .with_context(|| format!("Failed to write {MANIFEST_FILENAME}"))
}
