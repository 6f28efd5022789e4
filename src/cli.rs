use crate::constants::{DEFAULT_QUALITY, DEFAULT_RESIZE_RATIO, MAX_QUALITY, MIN_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-shrink",
    about = "A small CLI for shrinking images by resizing and re-encoding them",
    long_about = "img-shrink reduces the storage footprint of raster images. It reads an image, \
                  optionally scales its dimensions, re-encodes it at a target quality level \
                  (optionally forcing JPEG output), writes the result next to the source and \
                  reports size-before/size-after statistics. Batch mode applies the same \
                  operation to every file in a source directory.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-shrink -i photo.png -q 85\n  \
    img-shrink -i photo.png -j -r 0.5\n  \
    img-shrink -i photo.png -w 1280 -H 720 --destination-dir ./out\n  \
    img-shrink -b --source-dir ./images --destination-dir ./compressed"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        required_unless_present = "batch",
        help = "Target image to compress and/or resize"
    )]
    pub image: Option<PathBuf>,

    #[arg(
        short = 'j',
        long = "to-jpg",
        help = "Convert the output to the JPEG format",
        long_help = "Force JPEG output regardless of the input format. The derived output \
                     filename gets a .jpg extension and incompatible color modes are converted \
                     to RGB on save."
    )]
    pub to_jpg: bool,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(MIN_QUALITY as i64..=MAX_QUALITY as i64),
        help = "Quality from 0 (worst) to 95 (best), default 90"
    )]
    pub quality: u8,

    #[arg(
        short = 'r',
        long = "resize-ratio",
        default_value_t = DEFAULT_RESIZE_RATIO,
        help = "Resizing ratio, default 1.0 (no resize)",
        long_help = "Multiplicative factor applied to both image dimensions. Setting 0.5 \
                     multiplies width and height by 0.5. Ratios below 1.0 take precedence \
                     over explicit --width/--height."
    )]
    pub resize_ratio: f64,

    #[arg(
        short = 'w',
        long,
        requires = "height",
        help = "New width for the image, set together with --height"
    )]
    pub width: Option<u32>,

    #[arg(
        short = 'H',
        long,
        alias = "hh",
        requires = "width",
        help = "New height for the image, set together with --width"
    )]
    pub height: Option<u32>,

    #[arg(
        short = 'b',
        long,
        help = "Batch compress images from a source folder into a destination folder"
    )]
    pub batch: bool,

    #[arg(
        long = "source-dir",
        visible_alias = "sdir",
        help = "Path to the directory holding the images to compress (batch mode)"
    )]
    pub source_dir: Option<PathBuf>,

    #[arg(
        long = "destination-dir",
        visible_alias = "ddir",
        help = "Path to the directory compressed images are moved into",
        long_help = "Directory the compressed output is moved into. Required for batch mode; \
                     in single mode it relocates the result after saving."
    )]
    pub destination_dir: Option<PathBuf>,

    #[arg(long, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(long, help = "Print extra diagnostics")]
    pub verbose: bool,
}
