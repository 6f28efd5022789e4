use clap::Parser;
use img_shrink::batch::batch_compress;
use img_shrink::cli::Args;
use img_shrink::error::Result;
use img_shrink::logger;
use img_shrink::processing::{compress_image, ShrinkOptions};
use img_shrink::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    print_run_summary(&args);

    let options = ShrinkOptions::new(
        args.resize_ratio,
        args.quality,
        args.width,
        args.height,
        args.to_jpg,
    )?;

    if args.batch {
        batch_compress(
            args.source_dir.as_deref(),
            args.destination_dir.as_deref(),
            &options,
        )?;
    } else if let Some(image) = &args.image {
        compress_image(image, &options, args.destination_dir.as_deref())?;
    } else {
        // clap enforces --image unless --batch; keep a readable message anyway
        error!("no input image provided");
    }

    Ok(())
}

fn print_run_summary(args: &Args) {
    info!("==================================================");
    if let Some(image) = &args.image {
        info!("📁 Image: {}", image.display());
    }
    info!("🎭 To JPEG: {}", args.to_jpg);
    info!("🎯 Quality: {}", args.quality);
    info!("📐 Resizing ratio: {}", args.resize_ratio);
    if let (Some(width), Some(height)) = (args.width, args.height) {
        info!("📏 Target size: {}x{}", width, height);
    }
    info!("🚚 Batch compress: {}", args.batch);
    info!("==================================================");
}
