use std::path::PathBuf;
use std::process;

use clap::Parser;

use thumbnail_watermark_removal::{default_output_path, process_file, ProcessOptions};

#[derive(Parser)]
#[command(
    name = "thumbnail-watermark",
    about = "Replace watermarked image zones with pixels from a clean thumbnail",
    version,
    after_help = "The mask paints watermarked zones in the mark color (black by default).\n\
                  The thumbnail and mask may be any resolution; both are resized to the\n\
                  watermarked image's resolution before compositing."
)]
struct Cli {
    /// A (high resolution) image including the watermark
    watermarked: PathBuf,

    /// A low resolution thumbnail of the image, with no watermark
    clean_thumbnail: PathBuf,

    /// An image where the watermark zones are painted in the mark color
    mark_mask: PathBuf,

    /// Output file (default: {name}_no_watermark.png)
    output: Option<PathBuf>,

    /// Mask value identifying watermarked pixels
    #[arg(long, default_value_t = 0)]
    mark_color: u8,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.watermarked));

    if !cli.quiet {
        println!("Writing to '{}'", output.display());
    }

    let opts = ProcessOptions {
        mark_color: cli.mark_color,
    };

    if let Err(e) = process_file(
        &cli.watermarked,
        &cli.clean_thumbnail,
        &cli.mark_mask,
        &output,
        &opts,
    ) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if !cli.quiet {
        println!("Successfully written '{}'", output.display());
    }
}
