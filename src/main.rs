use clap::Parser;
use std::path::PathBuf;

use palettegen::PaletteConfig;

#[derive(Parser)]
#[command(name = "palettegen")]
#[command(about = "Generate a master palette texture for 3D pixel-art texturing")]
struct Cli {
    /// Output image path
    #[arg(short, long, value_name = "PATH", default_value = "master_palette.png")]
    output: PathBuf,

    /// Canvas size in pixels (square, must be divisible by 32)
    #[arg(long, value_name = "PX", default_value_t = 1024)]
    size: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = PaletteConfig::new()
        .with_output(args.output)
        .with_image_size(args.size)
        .with_verbose(args.verbose);

    if args.verbose {
        println!(
            "Generating {}x{} palette (grid: {}x{})...",
            config.image_size, config.image_size, config.grid_cols, config.grid_rows
        );
    }

    let canvas = palettegen::generate(&config)?;
    canvas.save(&config.output)?;

    println!("Palette saved to {:?}", config.output);
    println!("Usage: set it as the material's base color texture and switch interpolation to 'Closest'");

    Ok(())
}
