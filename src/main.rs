use anyhow::Result;
use clap::Parser;
use layer_icons::icon_gen::{self, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "layer-icons",
    about = "Generate the layered gradient icon as PNG files"
)]
struct Args {
    /// Output directory, created if missing.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Icon sizes in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Also write icons.json, the `icons` section of an extension manifest.
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.sizes,
        manifest: args.manifest,
    })
}
