use crate::manifest::{write_manifest, IconManifest, MANIFEST_FILENAME};
use crate::{png, synth};
use anyhow::{Context, Result};
use std::{
    collections::BTreeSet,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes produced when none are requested: the toolbar, management page and store icons.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            manifest: false,
        }
    }
}

/// File name of the icon for `size`, e.g. `icon16.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Synthesize and encode one icon, returning the PNG bytes.
pub fn generate_icon(size: u32) -> Result<Vec<u8>> {
    let pixels = synth::synthesize(size)?;
    let bytes = png::encode(size, size, &pixels)?;
    Ok(bytes)
}

pub fn generate_icons(args: Args) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    // Each size is written once, smallest first
    let sizes: BTreeSet<u32> = args.sizes.iter().copied().collect();
    let mut manifest = IconManifest::new();

    for size in sizes {
        let filename = icon_filename(size);
        let path = args.output.join(&filename);

        let bytes = generate_icon(size)
            .with_context(|| format!("Failed to generate {size}x{size} icon"))?;
        write_file(&path, &bytes)?;
        println!("✓ Generated {}", path.display());

        manifest.add_icon(size, &args.output, &filename);
    }

    if args.manifest {
        write_manifest(&args.output, &manifest)?;
        println!(
            "✓ Generated {}",
            args.output.join(MANIFEST_FILENAME).display()
        );
    }

    println!("Done!");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()?;
    Ok(())
}
